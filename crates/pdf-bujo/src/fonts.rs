//! Font loading
//!
//! The journal is set in exactly one typeface. A missing font file is a
//! fatal error; there is no fallback face.

use crate::options::JournalOptions;
use crate::types::*;
use std::io::ErrorKind;
use std::path::Path;

/// Raw bytes of the regular and italic faces
#[derive(Clone)]
pub struct FontSet {
    pub regular: Vec<u8>,
    pub italic: Vec<u8>,
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet")
            .field("regular", &format_args!("{} bytes", self.regular.len()))
            .field("italic", &format_args!("{} bytes", self.italic.len()))
            .finish()
    }
}

impl FontSet {
    /// Read both faces named in `options`
    pub async fn load(options: &JournalOptions) -> Result<Self> {
        let regular = read_font(&options.regular_font).await?;
        let italic = read_font(&options.italic_font).await?;
        Ok(Self { regular, italic })
    }
}

async fn read_font(path: &Path) -> Result<Vec<u8>> {
    match tokio::fs::read(path).await {
        Ok(bytes) if bytes.is_empty() => Err(JournalError::Font(format!(
            "{} is empty",
            path.display()
        ))),
        Ok(bytes) => {
            log::debug!("Loaded font {} ({} bytes)", path.display(), bytes.len());
            Ok(bytes)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(JournalError::FontMissing {
            path: path.to_owned(),
        }),
        Err(e) => Err(e.into()),
    }
}

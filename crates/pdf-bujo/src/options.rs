use crate::types::*;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default directory holding the EB Garamond font files
pub const DEFAULT_FONT_DIR: &str = "fonts";
pub const REGULAR_FONT_FILE: &str = "EBGaramond-Regular.ttf";
pub const ITALIC_FONT_FILE: &str = "EBGaramond-Italic.ttf";
pub const DEFAULT_OUTPUT: &str = "output/BulletJournal_rPPM.pdf";

/// Generation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JournalOptions {
    // Fonts
    pub regular_font: PathBuf,
    pub italic_font: PathBuf,

    // Output
    pub output: PathBuf,
    pub title: String,

    /// Check the rendered document's page count and size before saving
    pub verify_output: bool,

    /// PDF whose page count and sizes the output is compared against.
    /// Must be readable before anything is rendered.
    pub reference: Option<PathBuf>,
}

impl Default for JournalOptions {
    fn default() -> Self {
        Self::with_font_dir(DEFAULT_FONT_DIR)
    }
}

impl JournalOptions {
    /// Defaults, with both faces looked up in `dir`
    pub fn with_font_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            regular_font: dir.join(REGULAR_FONT_FILE),
            italic_font: dir.join(ITALIC_FONT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: "Bullet Journal".to_string(),
            verify_output: false,
            reference: None,
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| JournalError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| JournalError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.regular_font.as_os_str().is_empty() || self.italic_font.as_os_str().is_empty() {
            return Err(JournalError::Config("Font path is empty".to_string()));
        }

        if self.regular_font == self.italic_font {
            return Err(JournalError::Config(
                "Regular and italic fonts must be different files".to_string(),
            ));
        }

        if self.output.as_os_str().is_empty() || self.output.file_name().is_none() {
            return Err(JournalError::Config(format!(
                "Output path {} does not name a file",
                self.output.display()
            )));
        }

        Ok(())
    }
}

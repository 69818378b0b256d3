//! Reading and writing finished journal documents

use crate::constants::{PAGE_HEIGHT, PAGE_WIDTH, TOTAL_PAGES};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::path::{Path, PathBuf};

/// Allowed difference between an expected and a measured page dimension
const SIZE_TOLERANCE: f32 = 0.5;

/// Maximum depth followed when looking up inherited page attributes
const MAX_INHERITANCE_DEPTH: usize = 32;

/// Write `bytes` to `path`.
///
/// The data lands in a hidden sibling file first and is renamed over the
/// destination once complete, so a failed write never leaves a truncated
/// document behind and never touches an existing file at `path`. Missing
/// parent directories are created.
pub async fn persist(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let partial = partial_path(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    if let Err(e) = tokio::fs::write(&partial, bytes).await {
        discard(&partial).await;
        return Err(e.into());
    }

    if let Err(e) = tokio::fs::rename(&partial, path).await {
        discard(&partial).await;
        return Err(e.into());
    }

    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn partial_path(path: &Path) -> Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        JournalError::Config(format!("Output path {} does not name a file", path.display()))
    })?;
    let mut partial = std::ffi::OsString::from(".");
    partial.push(name);
    partial.push(".partial");
    Ok(path.with_file_name(partial))
}

async fn discard(partial: &Path) {
    if let Ok(meta) = tokio::fs::symlink_metadata(partial).await {
        if meta.is_file() {
            let _ = tokio::fs::remove_file(partial).await;
        }
    }
}

/// Page count and page sizes of a PDF
#[derive(Debug, Clone, PartialEq)]
pub struct PdfSummary {
    pub page_count: usize,
    /// (width, height) in points, in page order
    pub page_sizes: Vec<(f32, f32)>,
}

impl PdfSummary {
    /// Pages whose size differs from `expected` (1-based page numbers)
    pub fn mismatched_pages(&self, expected: (f32, f32)) -> Vec<usize> {
        self.page_sizes
            .iter()
            .enumerate()
            .filter(|(_, size)| !same_size(**size, expected))
            .map(|(i, _)| i + 1)
            .collect()
    }
}

fn same_size(a: (f32, f32), b: (f32, f32)) -> bool {
    (a.0 - b.0).abs() <= SIZE_TOLERANCE && (a.1 - b.1).abs() <= SIZE_TOLERANCE
}

/// Summarize a PDF held in memory
pub fn inspect_pdf(bytes: &[u8]) -> Result<PdfSummary> {
    let doc = Document::load_mem(bytes)?;
    summarize(&doc)
}

/// Summarize an already loaded document
pub fn summarize(doc: &Document) -> Result<PdfSummary> {
    let pages = doc.get_pages();
    let mut page_sizes = Vec::with_capacity(pages.len());

    for (&number, &page_id) in &pages {
        let media_box = media_box(doc, page_id).ok_or_else(|| {
            JournalError::Verification(format!("Page {} has no MediaBox", number))
        })?;
        page_sizes.push((media_box[2] - media_box[0], media_box[3] - media_box[1]));
    }

    Ok(PdfSummary {
        page_count: pages.len(),
        page_sizes,
    })
}

/// Read a PDF from disk and summarize it
pub async fn load_summary(path: impl AsRef<Path>) -> Result<PdfSummary> {
    let bytes = tokio::fs::read(path).await?;
    tokio::task::spawn_blocking(move || inspect_pdf(&bytes)).await?
}

/// Find the MediaBox of a page, following `/Parent` for inherited values
fn media_box(doc: &Document, page_id: ObjectId) -> Option<[f32; 4]> {
    let mut dict = doc.get_object(page_id).ok()?.as_dict().ok()?;

    for _ in 0..MAX_INHERITANCE_DEPTH {
        if let Ok(value) = dict.get(b"MediaBox") {
            return rect(doc, value);
        }
        dict = parent(doc, dict)?;
    }

    None
}

fn parent<'a>(doc: &'a Document, dict: &Dictionary) -> Option<&'a Dictionary> {
    let id = dict.get(b"Parent").ok()?.as_reference().ok()?;
    doc.get_object(id).ok()?.as_dict().ok()
}

fn rect(doc: &Document, value: &Object) -> Option<[f32; 4]> {
    let value = match value.as_reference() {
        Ok(id) => doc.get_object(id).ok()?,
        Err(_) => value,
    };
    let array = value.as_array().ok()?;
    if array.len() != 4 {
        return None;
    }

    let mut out = [0.0; 4];
    for (slot, item) in out.iter_mut().zip(array) {
        *slot = item.as_float().ok()?;
    }
    Some(out)
}

/// Check that rendered bytes have the journal's page count and page size
pub fn verify_document(bytes: &[u8]) -> Result<PdfSummary> {
    let summary = inspect_pdf(bytes)?;

    if summary.page_count != TOTAL_PAGES {
        return Err(JournalError::Verification(format!(
            "expected {} pages, found {}",
            TOTAL_PAGES, summary.page_count
        )));
    }

    let mismatched = summary.mismatched_pages((PAGE_WIDTH, PAGE_HEIGHT));
    if let Some(&first) = mismatched.first() {
        let (w, h) = summary.page_sizes[first - 1];
        return Err(JournalError::Verification(format!(
            "{} pages are not {}x{} (page {} is {:.1}x{:.1})",
            mismatched.len(),
            PAGE_WIDTH,
            PAGE_HEIGHT,
            first,
            w,
            h
        )));
    }

    Ok(summary)
}

/// Comparison of a generated document against a reference PDF
#[derive(Debug, Clone, PartialEq)]
pub struct ParityReport {
    pub generated_pages: usize,
    pub reference_pages: usize,
    /// Pages present in both documents whose sizes differ
    pub size_mismatches: Vec<usize>,
}

impl ParityReport {
    pub fn compare(generated: &PdfSummary, reference: &PdfSummary) -> Self {
        let size_mismatches = generated
            .page_sizes
            .iter()
            .zip(&reference.page_sizes)
            .enumerate()
            .filter(|(_, (a, b))| !same_size(**a, **b))
            .map(|(i, _)| i + 1)
            .collect();

        Self {
            generated_pages: generated.page_count,
            reference_pages: reference.page_count,
            size_mismatches,
        }
    }

    pub fn matches(&self) -> bool {
        self.generated_pages == self.reference_pages && self.size_mismatches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_path_is_hidden_sibling() {
        let partial = partial_path(Path::new("output/journal.pdf")).unwrap();
        assert_eq!(partial, PathBuf::from("output/.journal.pdf.partial"));
    }

    #[test]
    fn test_partial_path_requires_file_name() {
        assert!(partial_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_parity_counts_size_mismatches() {
        let generated = PdfSummary {
            page_count: 3,
            page_sizes: vec![(954.0, 1696.0); 3],
        };
        let reference = PdfSummary {
            page_count: 2,
            page_sizes: vec![(954.2, 1696.0), (612.0, 792.0)],
        };

        let report = ParityReport::compare(&generated, &reference);
        assert_eq!(report.size_mismatches, vec![2]);
        assert!(!report.matches());
    }
}

//! End-to-end journal generation
//!
//! 1. Validate options, read the reference PDF if any, load both faces
//! 2. Lay out every page and render the PDF on a blocking thread
//! 3. Optionally verify the rendered document and compare it with the
//!    reference
//! 4. Persist atomically to the output path
//!
//! Nothing is written to disk until every earlier step has succeeded.

use crate::fonts::FontSet;
use crate::io::{ParityReport, PdfSummary, inspect_pdf, load_summary, persist, verify_document};
use crate::journal::assemble;
use crate::options::JournalOptions;
use crate::render::render_journal;
use crate::types::*;
use std::path::PathBuf;

/// What a generation run produced
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub pages: usize,
    pub primitives: usize,
    pub links: usize,
    pub bytes: usize,
    /// Comparison with the reference PDF, when one was given
    pub parity: Option<ParityReport>,
}

/// Generate the journal described by `options` and write it to disk
pub async fn generate(options: &JournalOptions) -> Result<GenerationReport> {
    options.validate()?;

    let reference = match &options.reference {
        Some(path) => {
            let summary = load_summary(path).await?;
            log::info!(
                "Loaded reference {} ({} pages)",
                path.display(),
                summary.page_count
            );
            Some(summary)
        }
        None => None,
    };

    let fonts = FontSet::load(options).await?;
    log::info!("Loaded fonts {:?}", fonts);

    let title = options.title.clone();
    let (journal, bytes) = tokio::task::spawn_blocking(move || {
        let journal = assemble();
        let bytes = render_journal(&journal, &fonts, &title)?;
        Ok::<_, JournalError>((journal, bytes))
    })
    .await??;
    log::info!(
        "Rendered {} pages ({} bytes)",
        journal.page_count(),
        bytes.len()
    );

    if options.verify_output {
        let checked = bytes.clone();
        let summary = tokio::task::spawn_blocking(move || verify_document(&checked)).await??;
        log::info!("Verified {} pages", summary.page_count);
    }

    let parity = match reference {
        Some(reference) => {
            let checked = bytes.clone();
            let generated = tokio::task::spawn_blocking(move || inspect_pdf(&checked)).await??;
            Some(compare_with_reference(&generated, &reference))
        }
        None => None,
    };

    persist(&bytes, &options.output).await?;
    log::info!("Saved journal to {}", options.output.display());

    Ok(GenerationReport {
        output: options.output.clone(),
        pages: journal.page_count(),
        primitives: journal.primitive_count(),
        links: journal.link_count(),
        bytes: bytes.len(),
        parity,
    })
}

/// Parity is informational: differences are logged, never fatal
fn compare_with_reference(generated: &PdfSummary, reference: &PdfSummary) -> ParityReport {
    let report = ParityReport::compare(generated, reference);
    if report.matches() {
        log::info!("Output matches reference");
    } else {
        log::warn!(
            "Output differs from reference: {} vs {} pages, {} size mismatches",
            report.generated_pages,
            report.reference_pages,
            report.size_mismatches.len()
        );
    }
    report
}

pub mod calendar;
mod canvas;
pub mod constants;
mod fonts;
mod generate;
mod io;
mod journal;
mod metrics;
mod options;
mod pages;
pub mod plan;
mod primitive;
pub mod render;
mod types;

pub use canvas::Canvas;
pub use fonts::FontSet;
pub use generate::{GenerationReport, generate};
pub use io::{
    ParityReport, PdfSummary, inspect_pdf, load_summary, persist, summarize, verify_document,
};
pub use journal::{Journal, assemble};
pub use metrics::text_width;
pub use options::*;
pub use pages::{Footer, build_page};
pub use plan::{PageSpec, PageTemplate, journal_plan};
pub use primitive::{Link, PageLayout, Primitive};
pub use render::render_journal;
pub use types::*;

//! PDF rendering for laid-out journals
//!
//! Rendering happens in two passes:
//! - Converting each page's primitives into `printpdf` operations
//! - Attaching link annotations with `lopdf` once every page exists

mod links;
mod page;

pub use links::add_link_annotations;
pub use page::render_pages;

use crate::fonts::FontSet;
use crate::journal::Journal;
use crate::types::Result;
use lopdf::Document;

/// Render a journal into finished PDF bytes, links included
pub fn render_journal(journal: &Journal, fonts: &FontSet, title: &str) -> Result<Vec<u8>> {
    let drawn = render_pages(journal.pages(), fonts, title)?;

    let mut doc = Document::load_mem(&drawn)?;
    let added = add_link_annotations(&mut doc, journal.pages())?;
    log::debug!("Attached {} link annotations", added);

    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

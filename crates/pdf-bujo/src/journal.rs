//! Journal assembly
//!
//! Walks the fixed page plan and lays out every page in order.

use crate::pages::build_page;
use crate::plan::journal_plan;
use crate::primitive::PageLayout;

/// The complete set of laid-out pages, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct Journal {
    pages: Vec<PageLayout>,
}

impl Journal {
    pub fn pages(&self) -> &[PageLayout] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Layout of the page with 1-based `number`
    pub fn page(&self, number: usize) -> Option<&PageLayout> {
        number.checked_sub(1).and_then(|i| self.pages.get(i))
    }

    pub fn primitive_count(&self) -> usize {
        self.pages.iter().map(|p| p.primitives.len()).sum()
    }

    pub fn link_count(&self) -> usize {
        self.pages.iter().map(|p| p.links.len()).sum()
    }
}

/// Lay out every page of the journal
pub fn assemble() -> Journal {
    let plan = journal_plan();
    let mut pages = Vec::with_capacity(plan.len());

    for spec in &plan {
        log::trace!("Laying out page {} ({})", spec.number, spec.template.name());
        pages.push(build_page(spec));
    }

    let journal = Journal { pages };
    log::debug!(
        "Laid out {} pages with {} primitives and {} links",
        journal.page_count(),
        journal.primitive_count(),
        journal.link_count()
    );
    journal
}

//! The fixed page plan
//!
//! Every page of the journal is described by a [`PageSpec`]: its 1-based
//! page number and the template that lays it out. The plan is a hardcoded
//! ordered table, built once and consumed by [`crate::assemble`].

use crate::calendar::Month;
use crate::constants::*;

/// Which of the two collection indexes a page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionIndex {
    C,
    D,
}

impl CollectionIndex {
    pub fn letter(self) -> char {
        match self {
            CollectionIndex::C => 'C',
            CollectionIndex::D => 'D',
        }
    }

    /// Page number of this index page
    pub fn page(self) -> usize {
        match self {
            CollectionIndex::C => PAGE_COLLECTION_INDEX_C,
            CollectionIndex::D => PAGE_COLLECTION_INDEX_D,
        }
    }

    /// Zero-based number of the first collection listed on this index
    pub fn first_collection(self) -> usize {
        match self {
            CollectionIndex::C => 0,
            CollectionIndex::D => NUM_COLLECTIONS_PER_INDEX,
        }
    }

    /// The index page a collection links back to
    pub fn for_collection(collection: usize) -> Self {
        if collection < NUM_COLLECTIONS_PER_INDEX {
            CollectionIndex::C
        } else {
            CollectionIndex::D
        }
    }
}

/// The six guide pages, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidePage {
    System,
    SetUpLogs,
    Practice,
    HowToReflect,
    Intention,
    Goals,
}

impl GuidePage {
    pub const ALL: [GuidePage; NUM_GUIDE_PAGES] = [
        GuidePage::System,
        GuidePage::SetUpLogs,
        GuidePage::Practice,
        GuidePage::HowToReflect,
        GuidePage::Intention,
        GuidePage::Goals,
    ];

    pub fn title(self) -> &'static str {
        match self {
            GuidePage::System => "The Bullet Journal Guide: System",
            GuidePage::SetUpLogs => "Set up your logs",
            GuidePage::Practice => "The Practice",
            GuidePage::HowToReflect => "How to reflect",
            GuidePage::Intention => "Intention",
            GuidePage::Goals => "Goals",
        }
    }

    /// Label used for this page on the main index
    pub fn index_label(self) -> &'static str {
        match self {
            GuidePage::System => "Bullet Journal Guide",
            GuidePage::SetUpLogs => "Set up logs",
            GuidePage::Practice => "The Practice Overview",
            GuidePage::HowToReflect => "How to reflect",
            GuidePage::Intention => "Intention",
            GuidePage::Goals => "Goals",
        }
    }

    pub fn page(self) -> usize {
        PAGE_GUIDE_START + self as usize
    }
}

/// Layout template of a page, with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTemplate {
    Cover,
    /// Index A: guide links plus monthly and weekly link grid
    MainIndex,
    /// Index B: every day of the year
    YearIndex,
    CollectionIndex(CollectionIndex),
    Guide(GuidePage),
    /// Quarter 1..=4, three months per page
    FutureLog { quarter: u8 },
    MonthlyTimeline { month: Month },
    MonthlyActionPlan { month: Month },
    WeeklyActionPlan { week: u8 },
    WeeklyReflection { week: u8 },
    DailyLog { month: Month, day: u8 },
    /// Zero-based collection number
    Collection { index: usize },
}

impl PageTemplate {
    /// Short human-readable name, used for logging
    pub fn name(&self) -> String {
        match self {
            PageTemplate::Cover => "Cover".to_string(),
            PageTemplate::MainIndex => "Index A".to_string(),
            PageTemplate::YearIndex => "Index B".to_string(),
            PageTemplate::CollectionIndex(index) => format!("Index {}", index.letter()),
            PageTemplate::Guide(guide) => guide.title().to_string(),
            PageTemplate::FutureLog { quarter } => format!("Future Log Q{quarter}"),
            PageTemplate::MonthlyTimeline { month } => format!("{} Timeline", month.name()),
            PageTemplate::MonthlyActionPlan { month } => format!("{} Action Plan", month.name()),
            PageTemplate::WeeklyActionPlan { week } => format!("Week {week} Action Plan"),
            PageTemplate::WeeklyReflection { week } => format!("Week {week} Reflection"),
            PageTemplate::DailyLog { month, day } => format!("{} {day}", month.abbrev()),
            PageTemplate::Collection { index } => format!("Collection {}", index + 1),
        }
    }
}

/// One entry of the page plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    /// 1-based page number in the finished document
    pub number: usize,
    pub template: PageTemplate,
}

/// Build the ordered page plan for the whole journal
pub fn journal_plan() -> Vec<PageSpec> {
    let mut templates = Vec::with_capacity(TOTAL_PAGES);

    templates.push(PageTemplate::Cover);
    templates.push(PageTemplate::MainIndex);
    templates.push(PageTemplate::YearIndex);
    templates.push(PageTemplate::CollectionIndex(CollectionIndex::C));
    templates.push(PageTemplate::CollectionIndex(CollectionIndex::D));

    templates.extend(GuidePage::ALL.into_iter().map(PageTemplate::Guide));

    templates.extend(
        (1..=NUM_FUTURE_LOG_PAGES as u8).map(|quarter| PageTemplate::FutureLog { quarter }),
    );

    for month in Month::all() {
        templates.push(PageTemplate::MonthlyTimeline { month });
        templates.push(PageTemplate::MonthlyActionPlan { month });
    }

    for week in 1..=NUM_WEEKS as u8 {
        templates.push(PageTemplate::WeeklyActionPlan { week });
        templates.push(PageTemplate::WeeklyReflection { week });
    }

    for month in Month::all() {
        templates.extend((1..=month.days()).map(|day| PageTemplate::DailyLog { month, day }));
    }

    let total_collections = NUM_COLLECTIONS_PER_INDEX * NUM_COLLECTION_INDEXES;
    templates.extend((0..total_collections).map(|index| PageTemplate::Collection { index }));

    templates
        .into_iter()
        .enumerate()
        .map(|(i, template)| PageSpec {
            number: i + 1,
            template,
        })
        .collect()
}

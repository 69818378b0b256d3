//! Page builders
//!
//! One function per template. [`build_page`] dispatches on the closed
//! [`PageTemplate`] enum and returns the finished layout.

mod copy;
mod cover;
mod guide;
mod index;
mod logs;

pub use copy::Footer;

use crate::canvas::Canvas;
use crate::plan::{PageSpec, PageTemplate};
use crate::primitive::PageLayout;

/// Lay out a single page
pub fn build_page(spec: &PageSpec) -> PageLayout {
    let mut canvas = Canvas::new(*spec);

    match spec.template {
        PageTemplate::Cover => cover::draw(&mut canvas),
        PageTemplate::MainIndex => index::draw_main(&mut canvas),
        PageTemplate::YearIndex => index::draw_year(&mut canvas),
        PageTemplate::CollectionIndex(which) => index::draw_collection_index(&mut canvas, which),
        PageTemplate::Guide(guide) => guide::draw(&mut canvas, guide),
        PageTemplate::FutureLog { quarter } => logs::draw_future_log(&mut canvas, quarter),
        PageTemplate::MonthlyTimeline { month } => logs::draw_monthly_timeline(&mut canvas, month),
        PageTemplate::MonthlyActionPlan { month } => logs::draw_monthly_action(&mut canvas, month),
        PageTemplate::WeeklyActionPlan { .. } => logs::draw_weekly_action(&mut canvas),
        PageTemplate::WeeklyReflection { .. } => logs::draw_weekly_reflection(&mut canvas),
        PageTemplate::DailyLog { month, day } => logs::draw_daily_log(&mut canvas, month, day),
        PageTemplate::Collection { index } => logs::draw_collection(&mut canvas, index),
    }

    let layout = canvas.finish();
    debug_assert!(
        layout.violations().is_empty(),
        "invalid layout: {:?}",
        layout.violations()
    );
    layout
}

//! Log pages: future log, monthly, weekly, daily and collections

use super::copy::Footer;
use crate::calendar::Month;
use crate::canvas::Canvas;
use crate::constants::*;
use crate::metrics::text_width;
use crate::plan::CollectionIndex;
use crate::types::Bounds;

/// Top of the dot grid below a page title
const GRID_TOP: f32 = CONTENT_TOP + 115.0;
/// Bottom of the dot grid above a footer block
const GRID_BOTTOM: f32 = CONTENT_BOTTOM - 130.0;
/// Height shared out between rows on the future log and timeline
const ROWS_HEIGHT: f32 = CONTENT_HEIGHT - 265.0;

/// Index back-link, page title and dot grid common to most log pages
fn draw_log_header(canvas: &mut Canvas, title: &str) {
    canvas.index_link(PAGE_MAIN_INDEX);
    canvas.text(title, CONTENT_LEFT, CONTENT_TOP + 50.0, FONT_SIZE_TITLE_PAGE);
    canvas.dot_grid(GRID_TOP, GRID_BOTTOM);
}

/// One quarter (three months) per page
pub fn draw_future_log(canvas: &mut Canvas, quarter: u8) {
    draw_log_header(canvas, "Future Log");

    let first = (quarter as usize - 1) * 3;
    let month_height = (ROWS_HEIGHT / 3.0).floor();

    for (i, month) in (first..first + 3).map(Month::new).enumerate() {
        let y = GRID_TOP + i as f32 * month_height;
        canvas.text(month.name(), CONTENT_LEFT, y, FONT_SIZE_BODY);
        canvas.rule(y + 45.0, COLOR_BLACK);
    }

    canvas.footer(Footer::FutureLog.text());
}

/// One row per day, each linking to that day's log
pub fn draw_monthly_timeline(canvas: &mut Canvas, month: Month) {
    draw_log_header(canvas, month.name());

    let day_height = ROWS_HEIGHT / month.days() as f32;
    for day in 1..=month.days() {
        let y = GRID_TOP + (day - 1) as f32 * day_height + FONT_SIZE_DAY_NUMBER / 2.0;
        canvas.text(&day.to_string(), CONTENT_LEFT, y, FONT_SIZE_DAY_NUMBER);
        canvas.link(
            Bounds::new(
                CONTENT_LEFT - 5.0,
                y - 5.0,
                CONTENT_LEFT + 35.0,
                y + FONT_SIZE_DAY_NUMBER + 5.0,
            ),
            month.daily_page(day),
        );
    }

    canvas.footer(Footer::MonthlyTimeline.text());
    canvas.bottom_nav(&[("Year", PAGE_YEAR_INDEX)]);
}

pub fn draw_monthly_action(canvas: &mut Canvas, month: Month) {
    draw_log_header(canvas, month.name());
    canvas.footer(Footer::MonthlyAction.text());
}

pub fn draw_weekly_action(canvas: &mut Canvas) {
    draw_log_header(canvas, "Weekly Action plan");
    canvas.date_range_input(CONTENT_RIGHT - 220.0, CONTENT_TOP + 55.0, 22.0);
    canvas.footer(Footer::WeeklyAction.text());
}

pub fn draw_weekly_reflection(canvas: &mut Canvas) {
    draw_log_header(canvas, "Weekly Reflection");
    canvas.date_range_input(CONTENT_RIGHT - 220.0, CONTENT_TOP + 55.0, 22.0);
    canvas.footer(Footer::WeeklyReflection.text());
}

/// Daily log: back-links to Index B and to the month, date heading,
/// dot grid and footer
pub fn draw_daily_log(canvas: &mut Canvas, month: Month, day: u8) {
    let nav_y = CONTENT_TOP + 5.0;
    canvas.index_link(PAGE_YEAR_INDEX);

    let month_x = CONTENT_RIGHT - text_width(month.name(), FONT_SIZE_NAV) - 40.0;
    canvas.nav_link(
        month.name(),
        month.timeline_page(),
        month_x,
        nav_y,
        FONT_SIZE_NAV,
        true,
    );

    let label = format!("{} {}", month.abbrev(), day);
    canvas.text(&label, CONTENT_LEFT, CONTENT_TOP + 70.0, FONT_SIZE_TITLE_PAGE);

    canvas.dot_grid(CONTENT_TOP + 145.0, GRID_BOTTOM);
    canvas.footer(Footer::DailyLog.text());
}

/// Blank dot-grid page linking back to its collection index
pub fn draw_collection(canvas: &mut Canvas, index: usize) {
    canvas.index_link(CollectionIndex::for_collection(index).page());
    canvas.dot_grid(CONTENT_TOP + 50.0, CONTENT_BOTTOM - 30.0);
}

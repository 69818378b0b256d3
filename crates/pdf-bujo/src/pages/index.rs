//! Index pages: A (guides, months, weeks), B (days) and the collection
//! indexes C and D

use super::copy::Footer;
use crate::calendar::{Month, weekly_page};
use crate::canvas::Canvas;
use crate::constants::*;
use crate::metrics::text_width;
use crate::plan::{CollectionIndex, GuidePage};
use crate::types::{Bounds, Point};

/// Index A: links to every guide page, the future log, each month and
/// each week
pub fn draw_main(canvas: &mut Canvas) {
    canvas.text("Index A", CONTENT_LEFT, CONTENT_TOP + 10.0, FONT_SIZE_TITLE_PAGE);

    let mut y = CONTENT_TOP + 80.0;
    let row_height = 52.0;

    let guide_links = GuidePage::ALL
        .iter()
        .map(|guide| (guide.index_label(), guide.page()))
        .chain(std::iter::once(("Future log", PAGE_FUTURE_LOG_START)));

    for (label, target) in guide_links {
        canvas.nav_link(label, target, CONTENT_LEFT, y, FONT_SIZE_BODY, false);

        let arrow_x = CONTENT_RIGHT - 25.0;
        canvas.arrow_right(arrow_x, y + FONT_SIZE_BODY * 0.65, ARROW_SIZE_LARGE);
        canvas.link(
            Bounds::new(arrow_x - 10.0, y - 5.0, CONTENT_RIGHT, y + FONT_SIZE_BODY + 5.0),
            target,
        );
        canvas.rule(y + 40.0, COLOR_LINE);
        y += row_height;
    }

    y += 35.0;

    let month_col_width = 180.0;
    let week_col_start = CONTENT_LEFT + month_col_width + 50.0;
    let week_num_width = 95.0;

    canvas.text("Monthly logs", CONTENT_LEFT, y, FONT_SIZE_BODY);
    canvas.text("Weekly logs", week_col_start, y, FONT_SIZE_BODY);
    y += 55.0;

    let month_row_height = ((CONTENT_BOTTOM - y - 20.0) / NUM_MONTHS as f32).floor();

    for month in Month::all() {
        let text_y = y + (month_row_height - FONT_SIZE_SMALL) / 2.0 - 10.0;
        let arrow_y = text_y + FONT_SIZE_SMALL * 0.65;

        canvas.text(month.name(), CONTENT_LEFT, text_y, FONT_SIZE_SMALL);
        canvas.arrow_right(CONTENT_LEFT + 120.0, arrow_y, ARROW_SIZE_SMALL);
        canvas.link(
            Bounds::new(
                CONTENT_LEFT - 5.0,
                text_y - 5.0,
                month_col_width,
                text_y + FONT_SIZE_SMALL + 5.0,
            ),
            month.timeline_page(),
        );

        let separator_x = week_col_start - 25.0;
        let row_bottom = y + month_row_height - 12.0;
        canvas.line(
            Point::new(separator_x, y),
            Point::new(separator_x, row_bottom),
            RULE_WIDTH,
            COLOR_LINE,
        );

        for (i, week) in month.weeks().enumerate() {
            let week_x = week_col_start + i as f32 * week_num_width;
            canvas.text(&week.to_string(), week_x, text_y, FONT_SIZE_SMALL);
            canvas.arrow_right(week_x + 30.0, arrow_y, ARROW_SIZE_SMALL);
            canvas.link(
                Bounds::new(
                    week_x - 5.0,
                    text_y - 5.0,
                    week_x + week_num_width - 5.0,
                    text_y + FONT_SIZE_SMALL + 5.0,
                ),
                weekly_page(week),
            );
        }

        canvas.rule(row_bottom, COLOR_LINE);
        y += month_row_height;
    }
}

/// Index B: every day of the year, two rows per month
/// (days 1-16, then 17 onward)
pub fn draw_year(canvas: &mut Canvas) {
    const DAYS_PER_ROW: u8 = 16;

    canvas.text("Index B", CONTENT_LEFT, CONTENT_TOP + 10.0, FONT_SIZE_TITLE_PAGE);
    canvas.text("Daily logs", CONTENT_LEFT, CONTENT_TOP + 75.0, FONT_SIZE_BODY);

    let mut y = CONTENT_TOP + 130.0;
    let block_height = ((CONTENT_BOTTOM - y - 60.0) / NUM_MONTHS as f32).floor();

    let day_col_start = CONTENT_LEFT + 115.0;
    let day_spacing = (CONTENT_RIGHT - day_col_start - 20.0) / DAYS_PER_ROW as f32;

    for month in Month::all() {
        let row1_y = y + 8.0;
        let row2_y = y + block_height / 2.0 + 2.0;

        canvas.text(month.name(), CONTENT_LEFT, row1_y, FONT_SIZE_SMALL);

        // Click areas of the two rows must not overlap
        let row_gap = row2_y - row1_y - FONT_SIZE_TINY;
        let v_padding = (row_gap / 2.0 - 1.0).min(8.0);

        for day in 1..=month.days() {
            let (column, row_y) = if day <= DAYS_PER_ROW {
                (day - 1, row1_y)
            } else {
                (day - DAYS_PER_ROW - 1, row2_y)
            };

            let label = day.to_string();
            let link_left = day_col_start + column as f32 * day_spacing;
            let text_x = link_left + (day_spacing - text_width(&label, FONT_SIZE_TINY)) / 2.0;
            canvas.text(&label, text_x, row_y, FONT_SIZE_TINY);
            canvas.link(
                Bounds::new(
                    link_left,
                    row_y - v_padding,
                    link_left + day_spacing,
                    row_y + FONT_SIZE_TINY + v_padding,
                ),
                month.daily_page(day),
            );
        }

        canvas.rule(y + block_height - 8.0, COLOR_LINE);
        y += block_height;
    }

    canvas.bottom_nav(&[("Index", PAGE_MAIN_INDEX)]);
}

/// Index C or D: ruled rows, each with an arrow to its collection page
pub fn draw_collection_index(canvas: &mut Canvas, which: CollectionIndex) {
    let line_spacing = 60.0;

    canvas.index_link(PAGE_MAIN_INDEX);
    canvas.text(
        &format!("Index {}", which.letter()),
        CONTENT_LEFT,
        CONTENT_TOP + 50.0,
        FONT_SIZE_TITLE_PAGE,
    );

    let top = CONTENT_TOP + 130.0;
    for row in 0..NUM_COLLECTIONS_PER_INDEX {
        let line_y = top + row as f32 * line_spacing;
        canvas.rule(line_y, COLOR_LINE);

        let arrow_x = CONTENT_RIGHT - 22.0;
        let arrow_y = line_y + line_spacing / 2.0;
        canvas.arrow_right(arrow_x, arrow_y, ARROW_SIZE_LARGE);

        let collection = which.first_collection() + row;
        canvas.link(
            Bounds::new(arrow_x - 15.0, arrow_y - 15.0, CONTENT_RIGHT, arrow_y + 15.0),
            PAGE_COLLECTION_START + collection,
        );
    }
    canvas.rule(top + NUM_COLLECTIONS_PER_INDEX as f32 * line_spacing, COLOR_LINE);

    canvas.footer(Footer::CollectionIndex.text());
}

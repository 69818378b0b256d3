//! The six guide pages

use super::copy::*;
use crate::canvas::Canvas;
use crate::constants::*;
use crate::metrics::text_width;
use crate::plan::GuidePage;
use crate::types::{Bounds, FontStyle, Point};

/// Left edge of bullet symbols in legends
const SYMBOL_X: f32 = CONTENT_LEFT + 12.0;
/// Left edge of the text next to a bullet symbol
const SYMBOL_TEXT_X: f32 = CONTENT_LEFT + 45.0;
/// Radius of the filled action dot
const DOT_RADIUS: f32 = 4.0;

pub fn draw(canvas: &mut Canvas, guide: GuidePage) {
    canvas.index_link(PAGE_MAIN_INDEX);
    canvas.text(guide.title(), CONTENT_LEFT, CONTENT_TOP + 50.0, FONT_SIZE_HEADER);

    match guide {
        GuidePage::System => draw_system(canvas),
        GuidePage::SetUpLogs => draw_set_up_logs(canvas),
        GuidePage::Practice => draw_practice(canvas),
        GuidePage::HowToReflect => draw_how_to_reflect(canvas),
        GuidePage::Intention => draw_writing_page(canvas, INTENTION_FOOTER),
        GuidePage::Goals => draw_writing_page(canvas, GOALS_FOOTER),
    }
}

/// Bullet symbols drawn in the rapid logging legend
#[derive(Clone, Copy)]
enum Symbol {
    Dash,
    Dot,
    DoubleDash,
    Ring,
    Cross,
    Chevron,
}

fn draw_symbol(canvas: &mut Canvas, symbol: Symbol, center_y: f32) {
    let x = SYMBOL_X;
    match symbol {
        Symbol::Dash => canvas.line(
            Point::new(x - 2.0, center_y),
            Point::new(x + 12.0, center_y),
            2.0,
            COLOR_BLACK,
        ),
        Symbol::Dot => {
            canvas.filled_circle(Point::new(x + DOT_RADIUS, center_y), DOT_RADIUS, COLOR_BLACK)
        }
        Symbol::DoubleDash => {
            for offset in [-4.0, 4.0] {
                canvas.line(
                    Point::new(x - 2.0, center_y + offset),
                    Point::new(x + 12.0, center_y + offset),
                    1.8,
                    COLOR_BLACK,
                );
            }
        }
        Symbol::Ring => {
            canvas.stroked_circle(Point::new(x + 5.0, center_y), 5.0, 1.8, COLOR_BLACK)
        }
        Symbol::Cross => {
            let half = 4.0;
            canvas.line(
                Point::new(x, center_y - half),
                Point::new(x + 2.0 * half, center_y + half),
                2.0,
                COLOR_BLACK,
            );
            canvas.line(
                Point::new(x, center_y + half),
                Point::new(x + 2.0 * half, center_y - half),
                2.0,
                COLOR_BLACK,
            );
        }
        Symbol::Chevron => {
            let half = 4.0;
            let tip = Point::new(x + 2.0 * half, center_y);
            canvas.line(Point::new(x, center_y - half), tip, 2.0, COLOR_BLACK);
            canvas.line(Point::new(x, center_y + half), tip, 2.0, COLOR_BLACK);
        }
    }
}

/// Legend rows: symbol, then label. Returns the y below the last row.
fn draw_legend(
    canvas: &mut Canvas,
    rows: &[(Symbol, &str)],
    mut y: f32,
    size: f32,
    line_height: f32,
) -> f32 {
    for &(symbol, label) in rows {
        draw_symbol(canvas, symbol, y + size * 0.65);
        canvas.text(label, SYMBOL_TEXT_X, y, size);
        y += size * line_height;
    }
    y
}

fn draw_system(canvas: &mut Canvas) {
    let size = 26.0;
    let line_height = 1.5;
    let width = CONTENT_WIDTH - 40.0;
    let mut y = CONTENT_TOP + 100.0;

    canvas.text("Description", CONTENT_LEFT, y, FONT_SIZE_SUBHEADER);
    y += SUBHEADER_SPACING;
    y += canvas.rich_text(SYSTEM_DESCRIPTION, CONTENT_LEFT, y, size, width, line_height) + 20.0;

    canvas.text("Rapid logging", CONTENT_LEFT, y, FONT_SIZE_SUBHEADER);
    y += SUBHEADER_SPACING;
    y += canvas.rich_text(SYSTEM_RAPID_LOGGING, CONTENT_LEFT, y, size, width, line_height) + 15.0;

    y = draw_legend(
        canvas,
        &[
            (Symbol::Dash, "Notes (things to remember)"),
            (Symbol::Dot, "Actions (things to do)"),
            (Symbol::DoubleDash, "Moods (things felt, emotionally or physically)"),
            (Symbol::Ring, "Events (things we experience)"),
        ],
        y,
        size,
        line_height,
    );
    y += 15.0;

    y += canvas.rich_text(SYSTEM_ACTION_STATES, CONTENT_LEFT, y, size, width, line_height) + 15.0;

    y = draw_legend(
        canvas,
        &[
            (Symbol::Dot, "Incomplete"),
            (Symbol::Cross, "Complete"),
            (Symbol::Chevron, "Migrated (moved)"),
            (Symbol::Dot, "Irrelevant"),
        ],
        y,
        size,
        line_height,
    );

    // Strike through the last row, from the dot to the end of the label
    let strike_y = y - size * line_height + size * 0.65;
    canvas.line(
        Point::new(SYMBOL_X, strike_y),
        Point::new(SYMBOL_TEXT_X + text_width("Irrelevant", size), strike_y),
        1.0,
        COLOR_BLACK,
    );
}

/// Section heading with a right-aligned "Get started" link
fn draw_get_started_heading(canvas: &mut Canvas, title: &str, y: f32, target: usize) {
    let size = 19.0;
    let x = CONTENT_RIGHT - 110.0;

    canvas.text(title, CONTENT_LEFT, y, FONT_SIZE_SUBHEADER);
    canvas.text("Get started", x, y, size);
    canvas.arrow_right(CONTENT_RIGHT - 15.0, y + size / 2.0, ARROW_SIZE_SMALL);
    canvas.link(Bounds::new(x - 5.0, y - 5.0, CONTENT_RIGHT, y + size + 5.0), target);
}

/// Two text columns with italic headings. Returns the height used.
fn draw_columns(
    canvas: &mut Canvas,
    y: f32,
    size: f32,
    line_height: f32,
    left: (&str, &str),
    right: (&str, &str),
) -> f32 {
    let col_width = ((CONTENT_WIDTH - 40.0) / 2.0).floor();
    let col2_x = CONTENT_LEFT + col_width + 25.0;

    canvas.styled_text(left.0, CONTENT_LEFT, y, size, COLOR_BLACK, FontStyle::Italic);
    canvas.styled_text(right.0, col2_x, y, size, COLOR_BLACK, FontStyle::Italic);
    let body_y = y + size * 1.3;

    let h1 = canvas.rich_text(left.1, CONTENT_LEFT, body_y, size, col_width - 10.0, line_height);
    let h2 = canvas.rich_text(right.1, col2_x, body_y, size, col_width - 10.0, line_height);
    size * 1.3 + h1.max(h2)
}

fn draw_set_up_logs(canvas: &mut Canvas) {
    let size = 22.0;
    let line_height = 1.35;
    let width = CONTENT_WIDTH - 30.0;
    let mut y = CONTENT_TOP + 95.0;

    draw_get_started_heading(canvas, "Future log", y, PAGE_FUTURE_LOG_START);
    y += SUBHEADER_SPACING;
    y += canvas.rich_text(LOGS_FUTURE, CONTENT_LEFT, y, size, width, line_height) + 10.0;
    canvas.rule(y, COLOR_BLACK);
    y += 15.0;

    draw_get_started_heading(canvas, "Monthly log", y, PAGE_MONTHLY_START);
    y += SUBHEADER_SPACING;
    y += canvas.rich_text(LOGS_MONTHLY_INTRO, CONTENT_LEFT, y, size, width, line_height) + 10.0;
    y += draw_columns(
        canvas,
        y,
        size,
        line_height,
        ("Timeline", LOGS_TIMELINE),
        ("Action Plan", LOGS_MONTHLY_ACTION),
    ) + 10.0;
    canvas.rule(y, COLOR_BLACK);
    y += 15.0;

    draw_get_started_heading(canvas, "Weekly log", y, PAGE_WEEKLY_START);
    y += SUBHEADER_SPACING;
    y += draw_columns(
        canvas,
        y,
        size,
        line_height,
        ("Reflection", LOGS_WEEKLY_REFLECTION),
        ("Action plan", LOGS_WEEKLY_ACTION),
    ) + 10.0;
    canvas.rule(y, COLOR_BLACK);
    y += 15.0;

    draw_get_started_heading(canvas, "Daily log", y, PAGE_DAILY_START);
    y += SUBHEADER_SPACING;
    canvas.rich_text(LOGS_DAILY, CONTENT_LEFT, y, size, width, line_height);
}

fn draw_practice(canvas: &mut Canvas) {
    let size = 24.0;
    let line_height = 1.5;
    let width = CONTENT_WIDTH - 40.0;
    let mut y = CONTENT_TOP + 100.0;

    y += canvas.rich_text(PRACTICE_INTRO, CONTENT_LEFT, y, size, width, line_height) + 20.0;
    y += canvas.rich_text(PRACTICE_NAME, CONTENT_LEFT, y, size, width, line_height) + 25.0;
    y += canvas.rich_text(PRACTICE_TAME_INTRO, CONTENT_LEFT, y, size, width, line_height) + 25.0;

    for (title, description) in PRACTICE_TAME_STEPS {
        canvas.text(title, CONTENT_LEFT + 20.0, y, size);
        let title_width = text_width(title, size);
        let height = canvas.rich_text(
            description,
            CONTENT_LEFT + 25.0 + title_width,
            y,
            size,
            CONTENT_WIDTH - 65.0 - title_width,
            line_height,
        );
        y += height.max(size * line_height) + 15.0;
    }
}

fn draw_how_to_reflect(canvas: &mut Canvas) {
    let size = 24.0;
    let line_height = 1.5;
    let mut y = CONTENT_TOP + 100.0;

    for (title, body) in REFLECT_SECTIONS {
        canvas.text(title, CONTENT_LEFT, y, FONT_SIZE_SUBHEADER);
        y += SUBHEADER_SPACING;
        y += canvas.rich_text(body, CONTENT_LEFT, y, size, CONTENT_WIDTH - 40.0, line_height);
        y += 25.0;
    }
}

/// Intention and Goals: dot grid writing area above a lightning footer
fn draw_writing_page(canvas: &mut Canvas, footer: &str) {
    canvas.dot_grid(CONTENT_TOP + 100.0, CONTENT_BOTTOM - 160.0);

    let footer_y = CONTENT_BOTTOM - 140.0;
    canvas.rule(footer_y, COLOR_BLACK);
    canvas.footer_body(footer, footer_y + 15.0);
}

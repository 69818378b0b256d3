use crate::canvas::Canvas;
use crate::constants::*;
use crate::types::{Bounds, FontStyle};

const TITLE_SIZE: f32 = 90.0;
const YEAR_SIZE: f32 = 140.0;
const LIGHTNING_COVER_SCALE: f32 = 8.0;

/// Black panel below the toolbar with a large white lightning bolt and
/// the "Bullet Journal" title
pub fn draw(canvas: &mut Canvas) {
    canvas.fill_rect(
        Bounds::new(0.0, TOOLBAR_HEIGHT, PAGE_WIDTH, PAGE_HEIGHT),
        COLOR_BLACK,
    );

    let left = 50.0;
    let title_y = PAGE_HEIGHT * 0.15;
    canvas.lightning(left, title_y + 20.0, LIGHTNING_COVER_SCALE, COLOR_WHITE);

    let text_x = left + 130.0;
    let journal_y = title_y + 95.0;
    let year_y = journal_y + 130.0;
    for (text, y, size) in [
        ("Bullet", title_y, TITLE_SIZE),
        ("Journal", journal_y, TITLE_SIZE),
        (COVER_YEAR, year_y, YEAR_SIZE),
    ] {
        canvas.styled_text(text, text_x, y, size, COLOR_WHITE, FontStyle::Regular);
    }
}

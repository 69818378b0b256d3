//! Drawing surface for a single page
//!
//! A [`Canvas`] collects primitives and link areas in top-left canvas
//! coordinates. Page builders draw onto it through the helpers below and
//! then turn it into a [`PageLayout`] with [`Canvas::finish`].

use crate::constants::*;
use crate::metrics::text_width;
use crate::primitive::{Link, PageLayout, Primitive, page_size};
use crate::plan::PageSpec;
use crate::types::{Bounds, FontStyle, Point, Rgb};

/// Lightning bolt outline in unscaled icon units
const LIGHTNING_POINTS: [(f32, f32); 8] = [
    (8.0, 0.0),
    (15.0, 0.0),
    (9.0, 10.0),
    (16.0, 10.0),
    (0.0, 26.0),
    (5.0, 13.0),
    (0.0, 13.0),
    (8.0, 0.0),
];

pub struct Canvas {
    spec: PageSpec,
    primitives: Vec<Primitive>,
    links: Vec<Link>,
}

impl Canvas {
    pub fn new(spec: PageSpec) -> Self {
        Self {
            spec,
            primitives: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Consume the canvas into a finished page layout
    pub fn finish(self) -> PageLayout {
        let (width, height) = page_size();
        PageLayout {
            spec: self.spec,
            width,
            height,
            primitives: self.primitives,
            links: self.links,
        }
    }

    // =========================================================================
    // Basic primitives
    // =========================================================================

    /// Black regular text with its em box top at `y`
    pub fn text(&mut self, text: &str, x: f32, y: f32, size: f32) {
        self.styled_text(text, x, y, size, COLOR_BLACK, FontStyle::Regular);
    }

    pub fn styled_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
        style: FontStyle,
    ) {
        self.primitives.push(Primitive::Text {
            text: text.to_string(),
            left: x,
            top: y,
            size,
            color,
            style,
        });
    }

    pub fn line(&mut self, from: Point, to: Point, width: f32, color: Rgb) {
        self.primitives.push(Primitive::Line {
            from,
            to,
            width,
            color,
        });
    }

    /// Full content-width horizontal rule at `y`
    pub fn rule(&mut self, y: f32, color: Rgb) {
        self.line(
            Point::new(CONTENT_LEFT, y),
            Point::new(CONTENT_RIGHT, y),
            RULE_WIDTH,
            color,
        );
    }

    pub fn fill_rect(&mut self, bounds: Bounds, fill: Rgb) {
        self.primitives.push(Primitive::Rect { bounds, fill });
    }

    pub fn polygon(&mut self, points: Vec<Point>, fill: Rgb) {
        self.primitives.push(Primitive::Polygon { points, fill });
    }

    pub fn filled_circle(&mut self, center: Point, radius: f32, color: Rgb) {
        self.primitives.push(Primitive::Circle {
            center,
            radius,
            color,
            fill: true,
            stroke_width: 0.0,
        });
    }

    pub fn stroked_circle(&mut self, center: Point, radius: f32, width: f32, color: Rgb) {
        self.primitives.push(Primitive::Circle {
            center,
            radius,
            color,
            fill: false,
            stroke_width: width,
        });
    }

    /// Register a clickable area jumping to page `target` (1-based)
    pub fn link(&mut self, area: Bounds, target: usize) {
        self.links.push(Link { area, target });
    }

    // =========================================================================
    // Text layout
    // =========================================================================

    /// Draw word-wrapped text where `|` toggles italic.
    ///
    /// Returns the height consumed, including the trailing line gap.
    pub fn rich_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        max_width: f32,
        line_height: f32,
    ) -> f32 {
        let space = text_width(" ", size);
        let mut cursor_x = x;
        let mut cursor_y = y;

        for (word, italic) in styled_words(text) {
            let width = text_width(word, size);
            if cursor_x > x && cursor_x + width > x + max_width {
                cursor_x = x;
                cursor_y += size * line_height;
            }

            let style = if italic {
                FontStyle::Italic
            } else {
                FontStyle::Regular
            };
            self.styled_text(word, cursor_x, cursor_y, size, COLOR_BLACK, style);
            cursor_x += width + space;
        }

        cursor_y - y + size * line_height
    }

    // =========================================================================
    // Decorations
    // =========================================================================

    /// Square dots every [`DOT_SPACING`] across the content width,
    /// for rows in `start_y..end_y`
    pub fn dot_grid(&mut self, start_y: f32, end_y: f32) {
        let mut y = start_y;
        while y < end_y {
            let mut x = CONTENT_LEFT;
            while x < CONTENT_RIGHT {
                self.fill_rect(Bounds::new(x, y, x + DOT_SIZE, y + DOT_SIZE), COLOR_BLACK);
                x += DOT_SPACING;
            }
            y += DOT_SPACING;
        }
    }

    pub fn lightning(&mut self, x: f32, y: f32, scale: f32, color: Rgb) {
        let points = LIGHTNING_POINTS
            .iter()
            .map(|&(px, py)| Point::new(x + px * scale, y + py * scale))
            .collect();
        self.polygon(points, color);
    }

    /// Right-pointing arrow: shaft starting at `x`, tip to the right,
    /// vertically centred on `y`
    pub fn arrow_right(&mut self, x: f32, y: f32, size: f32) {
        let (shaft, head, stroke) = arrow_dimensions(size);
        let tip = Point::new(x + shaft, y);

        self.line(Point::new(x, y), Point::new(tip.x - head * 0.3, y), stroke, COLOR_BLACK);
        self.line(tip, Point::new(tip.x - head, y - head * 0.7), stroke, COLOR_BLACK);
        self.line(tip, Point::new(tip.x - head, y + head * 0.7), stroke, COLOR_BLACK);
    }

    /// Left-pointing arrow with its tip at `x`
    pub fn arrow_left(&mut self, x: f32, y: f32, size: f32) {
        let (shaft, head, stroke) = arrow_dimensions(size);
        let tip = Point::new(x, y);

        self.line(Point::new(x + shaft, y), Point::new(x + head * 0.3, y), stroke, COLOR_BLACK);
        self.line(tip, Point::new(x + head, y - head * 0.7), stroke, COLOR_BLACK);
        self.line(tip, Point::new(x + head, y + head * 0.7), stroke, COLOR_BLACK);
    }

    /// Separator, lightning icon and explanatory text at the page foot
    pub fn footer(&mut self, text: &str) {
        let y = CONTENT_BOTTOM - 125.0;
        self.rule(y - 15.0, COLOR_BLACK);
        self.footer_body(text, y);
    }

    /// Lightning icon plus wrapped text starting at `y`
    pub fn footer_body(&mut self, text: &str, y: f32) {
        self.lightning(CONTENT_LEFT, y + 5.0, LIGHTNING_SCALE, COLOR_BLACK);
        self.rich_text(
            text,
            CONTENT_LEFT + 45.0,
            y,
            FONT_SIZE_FOOTER,
            CONTENT_WIDTH - 75.0,
            LINE_HEIGHT,
        );
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Text link to `target`, optionally preceded by a left arrow.
    /// Returns the right edge of the drawn text.
    pub fn nav_link(
        &mut self,
        text: &str,
        target: usize,
        x: f32,
        y: f32,
        size: f32,
        with_arrow: bool,
    ) -> f32 {
        let mut text_x = x;
        if with_arrow {
            let arrow_size = size * 0.5;
            self.arrow_left(x, y + size * 0.65, arrow_size);
            text_x = x + arrow_size * 1.5 + 8.0;
        }

        self.text(text, text_x, y, size);

        let right = text_x + text_width(text, size);
        self.link(Bounds::new(x - 5.0, y - 2.0, right + 10.0, y + size + 6.0), target);
        right
    }

    /// "Index" back-link in the top-left corner of the content area
    pub fn index_link(&mut self, target: usize) {
        self.nav_link("Index", target, CONTENT_LEFT, CONTENT_TOP + 5.0, FONT_SIZE_NAV, true);
    }

    /// Right-aligned row of text links near the bottom edge
    pub fn bottom_nav(&mut self, links: &[(&str, usize)]) {
        let y = PAGE_HEIGHT - 50.0;
        let mut x = CONTENT_RIGHT - 10.0;

        for &(text, target) in links.iter().rev() {
            x -= text_width(text, FONT_SIZE_NAV) + 30.0;
            self.nav_link(text, target, x, y, FONT_SIZE_NAV, false);
        }
    }

    /// Date range input field: `__/__ to __/__`
    pub fn date_range_input(&mut self, x: f32, y: f32, size: f32) {
        const BLANK_WIDTH: f32 = 25.0;
        const SLASH_SPACING: f32 = 8.0;

        let line_y = y + size - 2.0;
        let mut cursor = x;

        for half in 0..2 {
            if half == 1 {
                self.styled_text("to", cursor, y, size, COLOR_BLACK, FontStyle::Italic);
                cursor += 30.0;
            }
            self.blank(cursor, line_y, BLANK_WIDTH);
            cursor += BLANK_WIDTH + SLASH_SPACING;
            self.text("/", cursor, y, size);
            cursor += 12.0;
            self.blank(cursor, line_y, BLANK_WIDTH);
            cursor += BLANK_WIDTH + 20.0;
        }
    }

    fn blank(&mut self, x: f32, y: f32, width: f32) {
        self.line(Point::new(x, y), Point::new(x + width, y), 0.8, COLOR_GRAY);
    }
}

/// Shaft length, head size and stroke width for an arrow of `size`
fn arrow_dimensions(size: f32) -> (f32, f32, f32) {
    (size * 1.2, size * 0.6, size * 0.12)
}

/// Split text into words, flagging those inside `|...|` as italic
fn styled_words(text: &str) -> impl Iterator<Item = (&str, bool)> {
    text.split('|')
        .enumerate()
        .flat_map(|(i, part)| part.split_whitespace().map(move |word| (word, i % 2 == 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PageTemplate;

    fn canvas() -> Canvas {
        Canvas::new(PageSpec {
            number: 1,
            template: PageTemplate::Cover,
        })
    }

    #[test]
    fn test_styled_words() {
        let words: Vec<_> = styled_words("Use the |Daily Log,| daily").collect();
        assert_eq!(
            words,
            vec![
                ("Use", false),
                ("the", false),
                ("Daily", true),
                ("Log,", true),
                ("daily", false),
            ]
        );
    }

    #[test]
    fn test_rich_text_wraps_within_width() {
        let mut canvas = canvas();
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let height = canvas.rich_text(text, 100.0, 200.0, 20.0, 150.0, 1.5);
        let layout = canvas.finish();

        let lines: std::collections::BTreeSet<u32> = layout
            .primitives
            .iter()
            .map(|p| p.bounds().top as u32)
            .collect();
        assert!(lines.len() > 1);
        assert_eq!(height, lines.len() as f32 * 30.0);

        for p in &layout.primitives {
            let b = p.bounds();
            assert!(b.left >= 100.0);
            assert!(b.right <= 250.0 + 0.01, "word overflows: {b:?}");
        }
    }

    #[test]
    fn test_rich_text_long_word_stays_on_first_line() {
        let mut canvas = canvas();
        let height = canvas.rich_text("Extraordinarily", 0.0, 200.0, 20.0, 10.0, 1.0);
        let layout = canvas.finish();
        assert_eq!(layout.primitives.len(), 1);
        assert_eq!(height, 20.0);
    }

    #[test]
    fn test_nav_link_area_covers_arrow_and_text() {
        let mut canvas = canvas();
        let right = canvas.nav_link("Index", 2, 25.0, 135.0, 24.0, true);
        let layout = canvas.finish();

        // Three arrow strokes plus the label
        assert_eq!(layout.primitives.len(), 4);
        assert_eq!(layout.links.len(), 1);
        let link = layout.links[0];
        assert_eq!(link.target, 2);
        assert_eq!(link.area.left, 20.0);
        assert_eq!(link.area.right, right + 10.0);
    }

    #[test]
    fn test_dot_grid_spacing() {
        let mut canvas = canvas();
        canvas.dot_grid(200.0, 300.0);
        let layout = canvas.finish();

        // Rows at 200 and 250; columns from 25 up to 925
        let cols = ((CONTENT_RIGHT - CONTENT_LEFT) / DOT_SPACING).ceil() as usize;
        assert_eq!(layout.primitives.len(), 2 * cols);
    }

    #[test]
    fn test_bottom_nav_is_right_aligned() {
        let mut canvas = canvas();
        canvas.bottom_nav(&[("Year", 3)]);
        let layout = canvas.finish();
        let link = layout.links[0];
        assert!((link.area.right - (CONTENT_RIGHT - 30.0)).abs() < 0.01);
    }
}

//! Drawing primitives and finished page layouts

use crate::constants::{PAGE_HEIGHT, PAGE_WIDTH, TOOLBAR_HEIGHT, TOTAL_PAGES};
use crate::metrics::text_width;
use crate::plan::PageSpec;
use crate::types::{Bounds, FontStyle, Point, Rgb};

/// Tolerance for float comparisons against page edges
const EDGE_EPSILON: f32 = 0.01;

/// An atomic drawable element
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Stroked straight line
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Rgb,
    },
    /// Filled rectangle
    Rect { bounds: Bounds, fill: Rgb },
    /// Filled closed polygon
    Polygon { points: Vec<Point>, fill: Rgb },
    /// Circle, filled or stroked
    Circle {
        center: Point,
        radius: f32,
        color: Rgb,
        fill: bool,
        stroke_width: f32,
    },
    /// Single-line text run. `top` is the top of the em box;
    /// the baseline sits at `top + size`.
    Text {
        text: String,
        left: f32,
        top: f32,
        size: f32,
        color: Rgb,
        style: FontStyle,
    },
}

impl Primitive {
    /// Area covered by the primitive, including stroke width
    pub fn bounds(&self) -> Bounds {
        match self {
            Primitive::Line {
                from, to, width, ..
            } => {
                let b = Bounds::enclosing(&[*from, *to]);
                let half = width / 2.0;
                Bounds::new(b.left - half, b.top - half, b.right + half, b.bottom + half)
            }
            Primitive::Rect { bounds, .. } => *bounds,
            Primitive::Polygon { points, .. } => Bounds::enclosing(points),
            Primitive::Circle {
                center,
                radius,
                stroke_width,
                ..
            } => {
                let r = radius + stroke_width / 2.0;
                Bounds::new(center.x - r, center.y - r, center.x + r, center.y + r)
            }
            Primitive::Text {
                text,
                left,
                top,
                size,
                ..
            } => Bounds::new(
                *left,
                *top,
                left + text_width(text, *size),
                // Descenders hang below the baseline
                top + size * 1.25,
            ),
        }
    }
}

/// A clickable area that jumps to another page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub area: Bounds,
    /// 1-based target page number
    pub target: usize,
}

/// Everything drawn on one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub spec: PageSpec,
    pub width: f32,
    pub height: f32,
    pub primitives: Vec<Primitive>,
    pub links: Vec<Link>,
}

impl PageLayout {
    /// Region in which primitives and links may appear
    pub fn drawable_area(&self) -> Bounds {
        Bounds::new(0.0, TOOLBAR_HEIGHT, self.width, self.height)
    }

    /// Describe every primitive or link that leaves the drawable area or
    /// points at a page that does not exist. Empty for a valid layout.
    pub fn violations(&self) -> Vec<String> {
        let area = self.drawable_area();
        let allowed = Bounds::new(
            area.left - EDGE_EPSILON,
            area.top - EDGE_EPSILON,
            area.right + EDGE_EPSILON,
            area.bottom + EDGE_EPSILON,
        );
        let mut problems = Vec::new();

        for (i, primitive) in self.primitives.iter().enumerate() {
            let bounds = primitive.bounds();
            if !allowed.contains(&bounds) {
                problems.push(format!(
                    "page {}: primitive {i} at {bounds:?} leaves the drawable area",
                    self.spec.number
                ));
            }
        }

        for link in &self.links {
            if !allowed.contains(&link.area) {
                problems.push(format!(
                    "page {}: link to page {} at {:?} leaves the drawable area",
                    self.spec.number, link.target, link.area
                ));
            }
            if link.target == 0 || link.target > TOTAL_PAGES {
                problems.push(format!(
                    "page {}: link targets missing page {}",
                    self.spec.number, link.target
                ));
            }
        }

        problems
    }
}

/// Default page size for every layout
pub(crate) fn page_size() -> (f32, f32) {
    (PAGE_WIDTH, PAGE_HEIGHT)
}

//! Drawing operations for journal pages
//!
//! Canvas coordinates have their origin at the top-left corner with y
//! growing downward; PDF user space starts bottom-left. Every y value is
//! flipped against the page height on the way out.

use crate::fonts::FontSet;
use crate::primitive::{PageLayout, Primitive};
use crate::types::{self, FontStyle, JournalError, Result};
use printpdf::{
    Color, FontId, Line, LinePoint, Mm, Op, PaintMode, ParsedFont, PdfDocument, PdfPage,
    PdfSaveOptions, Point, Polygon, PolygonRing, Pt, Rgb, TextItem, TextMatrix, WindingOrder,
};

/// Segments used to approximate a circle
const CIRCLE_SEGMENTS: usize = 32;

/// Font handles registered with the output document
struct Faces {
    regular: FontId,
    italic: FontId,
}

impl Faces {
    fn get(&self, style: FontStyle) -> &FontId {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Italic => &self.italic,
        }
    }
}

/// Render all pages to PDF bytes without link annotations
pub fn render_pages(pages: &[PageLayout], fonts: &FontSet, title: &str) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new(title);

    let faces = Faces {
        regular: doc.add_font(&parse_font(&fonts.regular, "regular")?),
        italic: doc.add_font(&parse_font(&fonts.italic, "italic")?),
    };

    for layout in pages {
        let ops = PageOps::new(layout.height).build(layout, &faces);
        doc.pages.push(PdfPage::new(
            Mm::from(Pt(layout.width)),
            Mm::from(Pt(layout.height)),
            ops,
        ));
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::debug!("PDF writer reported {} warnings", warnings.len());
    }

    Ok(bytes)
}

fn parse_font(bytes: &[u8], face: &str) -> Result<ParsedFont> {
    let mut warnings = Vec::new();
    ParsedFont::from_bytes(bytes, 0, &mut warnings)
        .ok_or_else(|| JournalError::Font(format!("Failed to parse {face} font")))
}

/// Operation builder for one page. Tracks the current colours and line
/// width so repeated state changes are skipped.
struct PageOps {
    page_height: f32,
    ops: Vec<Op>,
    fill: Option<types::Rgb>,
    outline: Option<types::Rgb>,
    thickness: Option<f32>,
    /// Consecutive same-coloured rectangles (dot grids) waiting to be
    /// drawn as one multi-ring polygon
    pending_rects: Vec<PolygonRing>,
    pending_fill: Option<types::Rgb>,
}

impl PageOps {
    fn new(page_height: f32) -> Self {
        Self {
            page_height,
            ops: Vec::new(),
            fill: None,
            outline: None,
            thickness: None,
            pending_rects: Vec::new(),
            pending_fill: None,
        }
    }

    fn build(mut self, layout: &PageLayout, faces: &Faces) -> Vec<Op> {
        for primitive in &layout.primitives {
            self.primitive(primitive, faces);
        }
        self.flush_rects();
        self.ops
    }

    fn flush_rects(&mut self) {
        if self.pending_rects.is_empty() {
            return;
        }
        if let Some(fill) = self.pending_fill {
            self.set_fill(fill);
        }
        self.ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: std::mem::take(&mut self.pending_rects),
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            },
        });
    }

    fn primitive(&mut self, primitive: &Primitive, faces: &Faces) {
        if !matches!(primitive, Primitive::Rect { .. }) {
            self.flush_rects();
        }

        match primitive {
            Primitive::Line {
                from,
                to,
                width,
                color,
            } => {
                self.set_outline(*color, *width);
                self.ops.push(Op::DrawLine {
                    line: Line {
                        points: vec![self.point(*from), self.point(*to)],
                        is_closed: false,
                    },
                });
            }
            Primitive::Rect { bounds, fill } => {
                if self.pending_fill != Some(*fill) {
                    self.flush_rects();
                    self.pending_fill = Some(*fill);
                }
                let corners = [
                    types::Point::new(bounds.left, bounds.top),
                    types::Point::new(bounds.right, bounds.top),
                    types::Point::new(bounds.right, bounds.bottom),
                    types::Point::new(bounds.left, bounds.bottom),
                ];
                let ring = self.ring(&corners);
                self.pending_rects.push(ring);
            }
            Primitive::Polygon { points, fill } => self.fill_polygon(points, *fill),
            Primitive::Circle {
                center,
                radius,
                color,
                fill,
                stroke_width,
            } => {
                let outline = circle_points(*center, *radius);
                if *fill {
                    self.fill_polygon(&outline, *color);
                } else {
                    self.set_outline(*color, *stroke_width);
                    let ring = self.ring(&outline);
                    self.ops.push(Op::DrawLine {
                        line: Line {
                            points: ring.points,
                            is_closed: true,
                        },
                    });
                }
            }
            Primitive::Text {
                text,
                left,
                top,
                size,
                color,
                style,
            } => {
                let font = faces.get(*style);
                let baseline = self.page_height - (top + size);

                self.set_fill(*color);
                self.ops.push(Op::StartTextSection);
                self.ops.push(Op::SetFontSize {
                    font: font.clone(),
                    size: Pt(*size),
                });
                self.ops.push(Op::SetTextMatrix {
                    matrix: TextMatrix::Translate(Pt(*left), Pt(baseline)),
                });
                self.ops.push(Op::WriteText {
                    items: vec![TextItem::Text(text.clone())],
                    font: font.clone(),
                });
                self.ops.push(Op::EndTextSection);
            }
        }
    }

    fn fill_polygon(&mut self, points: &[types::Point], fill: types::Rgb) {
        self.set_fill(fill);
        let ring = self.ring(points);
        self.ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![ring],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            },
        });
    }

    fn set_fill(&mut self, color: types::Rgb) {
        if self.fill != Some(color) {
            self.ops.push(Op::SetFillColor { col: pdf_color(color) });
            self.fill = Some(color);
        }
    }

    fn set_outline(&mut self, color: types::Rgb, width: f32) {
        if self.outline != Some(color) {
            self.ops.push(Op::SetOutlineColor { col: pdf_color(color) });
            self.outline = Some(color);
        }
        if self.thickness != Some(width) {
            self.ops.push(Op::SetOutlineThickness { pt: Pt(width) });
            self.thickness = Some(width);
        }
    }

    fn point(&self, p: types::Point) -> LinePoint {
        LinePoint {
            p: Point {
                x: Pt(p.x),
                y: Pt(self.page_height - p.y),
            },
            bezier: false,
        }
    }

    fn ring(&self, points: &[types::Point]) -> PolygonRing {
        PolygonRing {
            points: points.iter().map(|&p| self.point(p)).collect(),
        }
    }
}

fn pdf_color(color: types::Rgb) -> Color {
    Color::Rgb(Rgb::new(color.r, color.g, color.b, None))
}

fn circle_points(center: types::Point, radius: f32) -> Vec<types::Point> {
    (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
            types::Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_flip_to_pdf_space() {
        let ops = PageOps::new(1696.0);
        let p = ops.point(types::Point::new(25.0, 130.0));
        assert_eq!(p.p.x, Pt(25.0));
        assert_eq!(p.p.y, Pt(1566.0));
        assert!(!p.bezier);
    }

    #[test]
    fn test_circle_points_stay_on_radius() {
        let center = types::Point::new(100.0, 200.0);
        let points = circle_points(center, 5.0);
        assert_eq!(points.len(), CIRCLE_SEGMENTS);
        for p in points {
            let d = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
            assert!((d - 5.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_dot_grids_batch_into_polygons() {
        use crate::canvas::Canvas;
        use crate::plan::{PageSpec, PageTemplate};

        let mut canvas = Canvas::new(PageSpec {
            number: 511,
            template: PageTemplate::Collection { index: 0 },
        });
        canvas.dot_grid(200.0, 400.0);
        canvas.rule(500.0, types::Rgb::gray(0.0));
        canvas.dot_grid(600.0, 700.0);
        let layout = canvas.finish();

        let faces = Faces {
            regular: FontId::new(),
            italic: FontId::new(),
        };
        let ops = PageOps::new(layout.height).build(&layout, &faces);

        let polygons = ops
            .iter()
            .filter(|op| matches!(op, Op::DrawPolygon { .. }))
            .count();
        let lines = ops
            .iter()
            .filter(|op| matches!(op, Op::DrawLine { .. }))
            .count();
        assert_eq!(polygons, 2);
        assert_eq!(lines, 1);
    }

    #[test]
    fn test_state_changes_are_deduplicated() {
        let mut ops = PageOps::new(1696.0);
        ops.set_outline(types::Rgb::gray(0.0), 0.5);
        ops.set_outline(types::Rgb::gray(0.0), 0.5);
        ops.set_fill(types::Rgb::gray(0.85));
        ops.set_fill(types::Rgb::gray(0.85));
        assert_eq!(ops.ops.len(), 3);
    }
}

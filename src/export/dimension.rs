//! Architectural dimension lines.

use super::scene::Element;
use super::style::{EXTENSION_DASH, FONT_MONO, SLATE_400, SLATE_800};

/// Length of the end ticks.
const TICK: f64 = 60.0;

/// Gap between a vertical dimension line and its label.
const TEXT_OFFSET: f64 = 70.0;

/// Gap between a horizontal dimension line and its label.
const TEXT_LIFT: f64 = 35.0;

/// Direction the dimension is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Measures along x; the line is displaced vertically by the offset.
    Horizontal,
    /// Measures along y; the line is displaced horizontally by the offset.
    Vertical,
}

/// A dimension between two points, drawn away from them by `offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    /// Measured start
    pub from: (f64, f64),
    /// Measured end
    pub to: (f64, f64),
    /// Label text
    pub label: String,
    /// Measuring direction
    pub orientation: Orientation,
    /// Displacement of the line from the measured points
    pub offset: f64,
    /// Line and label color
    pub color: &'static str,
}

impl Dimension {
    /// Horizontal dimension from `(x1, y)` to `(x2, y)`.
    #[must_use]
    pub fn horizontal(x1: f64, x2: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            from: (x1, y),
            to: (x2, y),
            label: label.into(),
            orientation: Orientation::Horizontal,
            offset: 0.0,
            color: SLATE_800,
        }
    }

    /// Vertical dimension from `(x, y1)` to `(x, y2)`.
    #[must_use]
    pub fn vertical(x: f64, y1: f64, y2: f64, label: impl Into<String>) -> Self {
        Self {
            from: (x, y1),
            to: (x, y2),
            label: label.into(),
            orientation: Orientation::Vertical,
            offset: 0.0,
            color: SLATE_800,
        }
    }

    /// Displaces the line away from the measured points.
    #[must_use]
    pub const fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Overrides the line color.
    #[must_use]
    pub const fn color(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }

    /// Renders the line, ticks, extension lines and label as one group.
    #[must_use]
    pub fn render(&self) -> Element {
        let (x1, y1) = self.from;
        let (x2, y2) = self.to;
        let mut parts = Vec::new();

        match self.orientation {
            Orientation::Vertical => {
                let line_x = x1 + self.offset;
                if self.offset.abs() > f64::EPSILON {
                    parts.push(extension(x1, y1, line_x, y1));
                    parts.push(extension(x2, y2, line_x, y2));
                }
                parts.push(self.stroke(Element::line(line_x, y1, line_x, y2)));
                parts.push(self.stroke(tick(line_x, y1)));
                parts.push(self.stroke(tick(line_x, y2)));

                let label_x = line_x + TEXT_OFFSET;
                let label_y = (y1 + y2) / 2.0;
                parts.push(
                    self.label_text(label_x, label_y)
                        .middle_baseline()
                        .rotate(-90.0, label_x, label_y),
                );
            }
            Orientation::Horizontal => {
                let line_y = y1 + self.offset;
                if self.offset.abs() > f64::EPSILON {
                    parts.push(extension(x1, y1, x1, line_y));
                    parts.push(extension(x2, y2, x2, line_y));
                }
                parts.push(self.stroke(Element::line(x1, line_y, x2, line_y)));
                parts.push(self.stroke(tick(x1, line_y)));
                parts.push(self.stroke(tick(x2, line_y)));
                parts.push(self.label_text((x1 + x2) / 2.0, line_y - TEXT_LIFT));
            }
        }

        Element::group(parts)
    }

    fn stroke(&self, element: Element) -> Element {
        element.stroke(self.color, 3.0)
    }

    fn label_text(&self, x: f64, y: f64) -> Element {
        Element::text(x, y, self.label.as_str())
            .fill(self.color)
            .font(FONT_MONO, 36.0, "500")
            .anchor("middle")
    }
}

/// 45° architectural tick centered on `(x, y)`.
fn tick(x: f64, y: f64) -> Element {
    let half = TICK / 2.0;
    Element::line(x - half, y + half, x + half, y - half)
}

fn extension(x1: f64, y1: f64, x2: f64, y2: f64) -> Element {
    Element::line(x1, y1, x2, y2)
        .stroke(SLATE_400, 2.0)
        .dash(EXTENSION_DASH)
}

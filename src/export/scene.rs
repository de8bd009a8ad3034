//! Minimal SVG scene graph.
//!
//! Renderers build a tree of [`Element`]s; [`Scene::to_svg`] serializes it
//! into a standalone SVG document that browsers and `resvg` both accept.

use std::fmt::Write;

use crate::services::interaction::ViewBox;

/// Geometry of one element.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Straight line
    Line {
        /// Start x
        x1: f64,
        /// Start y
        y1: f64,
        /// End x
        x2: f64,
        /// End y
        y2: f64,
    },
    /// Rectangle with optional rounded corners
    Rect {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// Corner radius
        rx: f64,
    },
    /// Circle
    Circle {
        /// Center x
        cx: f64,
        /// Center y
        cy: f64,
        /// Radius
        r: f64,
    },
    /// Free-form path
    Path {
        /// Path data
        d: String,
    },
    /// Single line of text
    Text {
        /// Anchor x
        x: f64,
        /// Anchor y
        y: f64,
        /// Text content (escaped on output)
        content: String,
    },
    /// Container for child elements
    Group {
        /// Children, painted in order
        children: Vec<Element>,
    },
}

/// A shape plus its presentation attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    shape: Shape,
    attrs: Vec<(&'static str, String)>,
}

impl Element {
    fn new(shape: Shape) -> Self {
        Self {
            shape,
            attrs: Vec::new(),
        }
    }

    /// Line from `(x1, y1)` to `(x2, y2)`.
    #[must_use]
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Shape::Line { x1, y1, x2, y2 })
    }

    /// Rectangle with square corners.
    #[must_use]
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Shape::Rect {
            x,
            y,
            width,
            height,
            rx: 0.0,
        })
    }

    /// Circle.
    #[must_use]
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::new(Shape::Circle { cx, cy, r })
    }

    /// Path from SVG path data.
    #[must_use]
    pub fn path(d: impl Into<String>) -> Self {
        Self::new(Shape::Path { d: d.into() })
    }

    /// Text anchored at `(x, y)`.
    #[must_use]
    pub fn text(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self::new(Shape::Text {
            x,
            y,
            content: content.into(),
        })
    }

    /// Group of elements.
    #[must_use]
    pub fn group(children: Vec<Element>) -> Self {
        Self::new(Shape::Group { children })
    }

    /// Geometry of this element.
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Value of a presentation attribute, if set.
    #[must_use]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an arbitrary attribute, replacing an earlier value.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Stroke color and width.
    #[must_use]
    pub fn stroke(self, color: &str, width: f64) -> Self {
        self.attr("stroke", color).attr("stroke-width", num(width))
    }

    /// Fill color.
    #[must_use]
    pub fn fill(self, color: &str) -> Self {
        self.attr("fill", color)
    }

    /// No fill.
    #[must_use]
    pub fn no_fill(self) -> Self {
        self.attr("fill", "none")
    }

    /// Stroke dash pattern.
    #[must_use]
    pub fn dash(self, pattern: &str) -> Self {
        self.attr("stroke-dasharray", pattern)
    }

    /// Element opacity.
    #[must_use]
    pub fn opacity(self, opacity: f64) -> Self {
        self.attr("opacity", num(opacity))
    }

    /// Fill opacity.
    #[must_use]
    pub fn fill_opacity(self, opacity: f64) -> Self {
        self.attr("fill-opacity", num(opacity))
    }

    /// Rounded corners; only meaningful on rectangles.
    #[must_use]
    pub fn rounded(mut self, radius: f64) -> Self {
        if let Shape::Rect { rx, .. } = &mut self.shape {
            *rx = radius;
        }
        self
    }

    /// Font family, size and weight.
    #[must_use]
    pub fn font(self, family: &str, size: f64, weight: &str) -> Self {
        self.attr("font-family", family)
            .attr("font-size", num(size))
            .attr("font-weight", weight)
    }

    /// Horizontal text anchor (`start`, `middle`, `end`).
    #[must_use]
    pub fn anchor(self, anchor: &str) -> Self {
        self.attr("text-anchor", anchor)
    }

    /// Centers text vertically on its anchor point.
    #[must_use]
    pub fn middle_baseline(self) -> Self {
        self.attr("dominant-baseline", "middle")
    }

    /// Translates the element.
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        self.attr("transform", format!("translate({} {})", num(dx), num(dy)))
    }

    /// Rotates the element around `(cx, cy)`.
    #[must_use]
    pub fn rotate(self, degrees: f64, cx: f64, cy: f64) -> Self {
        self.attr(
            "transform",
            format!("rotate({} {} {})", num(degrees), num(cx), num(cy)),
        )
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}");
        match &self.shape {
            Shape::Line { x1, y1, x2, y2 } => {
                let _ = write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    num(*x1),
                    num(*y1),
                    num(*x2),
                    num(*y2)
                );
                self.write_attrs(out);
                out.push_str("/>\n");
            }
            Shape::Rect {
                x,
                y,
                width,
                height,
                rx,
            } => {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    num(*x),
                    num(*y),
                    num(width.max(0.0)),
                    num(height.max(0.0))
                );
                if *rx > 0.0 {
                    let _ = write!(out, r#" rx="{}""#, num(*rx));
                }
                self.write_attrs(out);
                out.push_str("/>\n");
            }
            Shape::Circle { cx, cy, r } => {
                let _ = write!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}""#,
                    num(*cx),
                    num(*cy),
                    num(*r)
                );
                self.write_attrs(out);
                out.push_str("/>\n");
            }
            Shape::Path { d } => {
                let _ = write!(out, r#"<path d="{}""#, escape(d));
                self.write_attrs(out);
                out.push_str("/>\n");
            }
            Shape::Text { x, y, content } => {
                let _ = write!(out, r#"<text x="{}" y="{}""#, num(*x), num(*y));
                self.write_attrs(out);
                let _ = writeln!(out, ">{}</text>", escape(content));
            }
            Shape::Group { children } => {
                out.push_str("<g");
                self.write_attrs(out);
                out.push_str(">\n");
                for child in children {
                    child.write_to(out, depth + 1);
                }
                let _ = writeln!(out, "{indent}</g>");
            }
        }
    }

    fn write_attrs(&self, out: &mut String) {
        for (name, value) in &self.attrs {
            let _ = write!(out, r#" {name}="{}""#, escape(value));
        }
    }
}

/// A complete drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Drawing-space region the document shows
    pub view_box: ViewBox,
    /// Document title (accessible name)
    pub title: String,
    /// Longer description
    pub description: String,
    /// Background color painted under everything
    pub background: Option<&'static str>,
    /// Top-level elements, painted in order
    pub elements: Vec<Element>,
}

impl Scene {
    /// Empty scene over `view_box`.
    #[must_use]
    pub fn new(view_box: ViewBox, title: impl Into<String>) -> Self {
        Self {
            view_box,
            title: title.into(),
            description: String::new(),
            background: None,
            elements: Vec::new(),
        }
    }

    /// Appends an element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Appends several elements.
    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.elements.extend(elements);
    }

    /// Whether the scene has a drawable area.
    #[must_use]
    pub fn has_area(&self) -> bool {
        let vb = &self.view_box;
        [vb.x, vb.y, vb.width, vb.height]
            .iter()
            .all(|v| v.is_finite())
            && vb.width > 0.0
            && vb.height > 0.0
    }

    /// Serializes to a standalone SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let vb = &self.view_box;
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" standalone=\"no\"?>\n");
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}" role="img">"#,
            num(vb.x),
            num(vb.y),
            num(vb.width),
            num(vb.height),
            num(vb.width),
            num(vb.height)
        );
        let _ = writeln!(out, "  <title>{}</title>", escape(&self.title));
        if !self.description.is_empty() {
            let _ = writeln!(out, "  <desc>{}</desc>", escape(&self.description));
        }
        if let Some(color) = self.background {
            let _ = writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{color}"/>"#,
                num(vb.x),
                num(vb.y),
                num(vb.width),
                num(vb.height)
            );
        }
        for element in &self.elements {
            element.write_to(&mut out, 1);
        }
        out.push_str("</svg>\n");
        out
    }
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
#[must_use]
pub fn num(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

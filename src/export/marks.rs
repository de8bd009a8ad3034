//! Annotations shared by both drawings: floor line, eye-level guides and the
//! center-line crosshair.

use super::scene::Element;
use super::style::{BLUE_500, CENTER_LINE_DASH, FONT_MONO, FONT_SANS, RED_500, SLATE_800};
use crate::constants::{EYE_LEVEL_SEATED, EYE_LEVEL_STANDING};

/// Half-length of each crosshair arm.
const CROSSHAIR_ARM: f64 = 80.0;

/// Heavy floor line from `x1` to `x2`, labelled at `label_x`.
#[must_use]
pub fn floor_line(x1: f64, x2: f64, floor_y: f64, label_x: f64) -> Element {
    Element::group(vec![
        Element::line(x1, floor_y, x2, floor_y).stroke(SLATE_800, 12.0),
        Element::text(label_x, floor_y - 40.0, "FFL (Finished Floor Level)")
            .fill(SLATE_800)
            .font(FONT_SANS, 36.0, "bold"),
    ])
}

/// Seated and standing eye-level guides across `x1..x2`.
#[must_use]
pub fn eye_level_guides(x1: f64, x2: f64, floor_y: f64) -> Element {
    let guide = |height: f64, label: &str| {
        let y = floor_y - height;
        [
            Element::line(x1, y, x2, y)
                .stroke(BLUE_500, 2.0)
                .dash("10,10")
                .opacity(0.6),
            Element::text(x1 + 20.0, y - 10.0, label)
                .fill(BLUE_500)
                .font(FONT_SANS, 24.0, "normal"),
        ]
    };
    let mut parts = Vec::new();
    parts.extend(guide(EYE_LEVEL_SEATED, "Seated Eye Level (1200mm)"));
    parts.extend(guide(EYE_LEVEL_STANDING, "Standing Eye Level (1500mm)"));
    Element::group(parts)
}

/// Dash-dot crosshair with a "CL" tag marking a center point.
#[must_use]
pub fn center_mark(cx: f64, cy: f64) -> Element {
    let arm = |element: Element| element.stroke(RED_500, 3.0).dash(CENTER_LINE_DASH);
    Element::group(vec![
        arm(Element::line(cx - CROSSHAIR_ARM, cy, cx + CROSSHAIR_ARM, cy)),
        arm(Element::line(cx, cy - CROSSHAIR_ARM, cx, cy + CROSSHAIR_ARM)),
        Element::text(cx + 100.0, cy, "CL")
            .fill(RED_500)
            .font(FONT_MONO, 32.0, "bold")
            .middle_baseline(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::scene::{Scene, Shape};
    use crate::services::interaction::ViewBox;

    #[test]
    fn test_guides_sit_at_eye_levels() {
        let guides = eye_level_guides(0.0, 4000.0, 2800.0);
        let Shape::Group { children } = guides.shape() else {
            panic!("expected group");
        };
        assert_eq!(
            children[0].shape(),
            &Shape::Line {
                x1: 0.0,
                y1: 1600.0,
                x2: 4000.0,
                y2: 1600.0
            }
        );
        assert_eq!(
            children[2].shape(),
            &Shape::Line {
                x1: 0.0,
                y1: 1300.0,
                x2: 4000.0,
                y2: 1300.0
            }
        );
    }

    #[test]
    fn test_marks_serialize() {
        let mut scene = Scene::new(
            ViewBox {
                x: 0.0,
                y: 0.0,
                width: 4000.0,
                height: 2800.0,
            },
            "t",
        );
        scene.push(floor_line(0.0, 4000.0, 2800.0, 40.0));
        scene.push(center_mark(2000.0, 1450.0));
        let svg = scene.to_svg();
        assert!(svg.contains("FFL (Finished Floor Level)"));
        assert!(svg.contains(r#"stroke-dasharray="20,15,5,15""#));
        assert!(svg.contains(">CL</text>"));
    }
}

//! Elevation layout engine.
//!
//! Turns display dimensions, an installation spec and the room envelope into
//! the complete set of drawing-space coordinates needed to render and
//! annotate a single or dual display installation. The engine is pure: it
//! never fails, and degenerate or non-finite inputs produce degenerate
//! geometry instead of errors.

use serde::Serialize;
use tracing::debug;

use crate::{
    constants::{CAMERA_PHYSICAL_HEIGHT, CAMERA_PHYSICAL_WIDTH, DUAL_SCREEN_GAP},
    models::{
        to_screen, CameraPosition, DisplayCount, DisplayDimensions, InstallationSpec, Millimeters,
        MountingBracket, RoomDimensions, ScreenAnchors, VerticalAnchors,
    },
};

/// Axis-aligned rectangle in drawing space (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical center.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Horizontal extent of the display group, centered on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalGroup {
    /// Left edge of the first panel
    pub left: f64,
    /// Wall center line
    pub center: f64,
    /// Right edge of the last panel
    pub right: f64,
    /// Total group width (panels plus the dual-screen gap)
    pub width: f64,
}

impl HorizontalGroup {
    /// Centers a group of `count` panels of `panel_width` on a wall.
    #[must_use]
    pub fn centered(panel_width: f64, count: DisplayCount, wall_width: f64) -> Self {
        let width = match count {
            DisplayCount::Single => panel_width,
            DisplayCount::Dual => panel_width * 2.0 + DUAL_SCREEN_GAP,
        };
        let center = wall_width / 2.0;
        Self {
            left: center - width / 2.0,
            center,
            right: center + width / 2.0,
            width,
        }
    }
}

/// Video-conference camera body drawn next to the display group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPlacement {
    /// Mounting position relative to the displays
    pub position: CameraPosition,
    /// Camera body in drawing space
    pub body: Rect,
    /// Height of the camera center above finished floor
    pub elevation: Millimeters,
}

/// Everything the elevation engine needs for one computation.
#[derive(Debug, Clone, Copy)]
pub struct ElevationInput<'a> {
    /// Panel dimensions (shared by both panels of a dual installation)
    pub dimensions: &'a DisplayDimensions,
    /// Installation height
    pub spec: InstallationSpec,
    /// Single or dual
    pub display_count: DisplayCount,
    /// Wall bracket behind each panel
    pub bracket: &'a MountingBracket,
    /// Wall envelope
    pub room: RoomDimensions,
    /// Camera guide, when shown
    pub camera: Option<CameraPosition>,
}

/// Result of an elevation computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElevationLayout {
    /// Bottom, center and top in millimeters AFFL
    pub anchors: VerticalAnchors,
    /// The same anchors in drawing space
    pub screen: ScreenAnchors,
    /// Drawing-space y of the finished floor
    pub floor_y: f64,
    /// Horizontal extent of the group
    pub group: HorizontalGroup,
    /// One rectangle per panel, left to right
    pub panels: Vec<Rect>,
    /// One bracket per panel; empty for hidden brackets
    pub brackets: Vec<Rect>,
    /// Camera body, when the camera guide is on
    pub camera: Option<CameraPlacement>,
}

/// Computes the elevation layout.
///
/// Vertical anchors depend only on the installation spec and the panel height, so adding a
/// second panel changes the horizontal group and nothing else.
#[must_use]
pub fn compute_elevation(input: &ElevationInput<'_>) -> ElevationLayout {
    let dims = input.dimensions;
    let room_height = input.room.height;

    let anchors = input.spec.anchors(dims.height);
    let screen = anchors.to_screen(room_height);
    let group = HorizontalGroup::centered(dims.width, input.display_count, input.room.width);

    let panels: Vec<Rect> = (0..input.display_count.count())
        .map(|index| {
            let x = group.left + (index as f64) * (dims.width + DUAL_SCREEN_GAP);
            Rect::new(x, screen.top.value(), dims.width, dims.height)
        })
        .collect();

    let brackets = if input.bracket.is_hidden() {
        Vec::new()
    } else {
        panels
            .iter()
            .map(|panel| bracket_behind(panel, input.bracket, screen.center.value()))
            .collect()
    };

    let camera = input
        .camera
        .map(|position| place_camera(position, &anchors, group.center, room_height));

    debug!(
        bottom = anchors.bottom.value(),
        center = anchors.center.value(),
        top = anchors.top.value(),
        group_width = group.width,
        "computed elevation layout"
    );

    ElevationLayout {
        anchors,
        screen,
        floor_y: room_height,
        group,
        panels,
        brackets,
        camera,
    }
}

/// Centers a bracket behind one panel, vertically on the display center.
fn bracket_behind(panel: &Rect, bracket: &MountingBracket, center_y: f64) -> Rect {
    Rect::new(
        panel.center_x() - bracket.width / 2.0,
        center_y - bracket.height / 2.0,
        bracket.width,
        bracket.height,
    )
}

/// Places the camera body flush against the display group edge.
fn place_camera(
    position: CameraPosition,
    anchors: &VerticalAnchors,
    center_x: f64,
    room_height: f64,
) -> CameraPlacement {
    let half = CAMERA_PHYSICAL_HEIGHT / 2.0;
    let elevation = match position {
        CameraPosition::Bottom => Millimeters(anchors.bottom.value() - half),
        CameraPosition::Top => Millimeters(anchors.top.value() + half),
    };
    let center_y = to_screen(elevation, room_height).value();
    CameraPlacement {
        position,
        body: Rect::new(
            center_x - CAMERA_PHYSICAL_WIDTH / 2.0,
            center_y - half,
            CAMERA_PHYSICAL_WIDTH,
            CAMERA_PHYSICAL_HEIGHT,
        ),
        elevation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_bracket, NO_BRACKET_ID};
    use crate::models::ReferencePoint;

    fn input<'a>(
        dims: &'a DisplayDimensions,
        bracket: &'a MountingBracket,
        count: DisplayCount,
    ) -> ElevationInput<'a> {
        ElevationInput {
            dimensions: dims,
            spec: InstallationSpec::center(1350.0),
            display_count: count,
            bracket,
            room: RoomDimensions::default(),
            camera: None,
        }
    }

    #[test]
    fn test_single_display_is_centered() {
        let dims = DisplayDimensions::new(1450.0, 830.0);
        let bracket = find_bracket("chief-lsm1u").unwrap();
        let layout = compute_elevation(&input(&dims, bracket, DisplayCount::Single));

        assert_eq!(layout.group.width, 1450.0);
        assert_eq!(layout.group.left, 1275.0);
        assert_eq!(layout.group.right, 2725.0);
        assert_eq!(layout.panels.len(), 1);
        assert_eq!(layout.panels[0].y, 1035.0);
        assert_eq!(layout.floor_y, 2800.0);
    }

    #[test]
    fn test_dual_display_keeps_vertical_anchors() {
        let dims = DisplayDimensions::new(1450.0, 830.0);
        let bracket = find_bracket("chief-lsm1u").unwrap();
        let single = compute_elevation(&input(&dims, bracket, DisplayCount::Single));
        let dual = compute_elevation(&input(&dims, bracket, DisplayCount::Dual));

        assert_eq!(single.anchors, dual.anchors);
        assert_eq!(single.screen, dual.screen);
        assert_eq!(dual.group.width, 2920.0);
        assert_eq!(dual.group.left, 540.0);
        assert_eq!(dual.panels[1].x, 540.0 + 1450.0 + 20.0);
        assert_eq!(dual.panels[1].right(), dual.group.right);
    }

    #[test]
    fn test_bracket_centered_behind_each_panel() {
        let dims = DisplayDimensions::new(1450.0, 830.0);
        let bracket = find_bracket("chief-lsm1u").unwrap();
        let layout = compute_elevation(&input(&dims, bracket, DisplayCount::Dual));

        assert_eq!(layout.brackets.len(), 2);
        for (panel, placed) in layout.panels.iter().zip(&layout.brackets) {
            assert_eq!(placed.center_x(), panel.center_x());
            assert_eq!(placed.center_y(), layout.screen.center.value());
            assert_eq!(placed.y, 1450.0 - 216.0);
        }
    }

    #[test]
    fn test_hidden_bracket_has_no_placements() {
        let dims = DisplayDimensions::new(1450.0, 830.0);
        let bracket = find_bracket(NO_BRACKET_ID).unwrap();
        let layout = compute_elevation(&input(&dims, bracket, DisplayCount::Single));
        assert!(layout.brackets.is_empty());
    }

    #[test]
    fn test_camera_below_display() {
        let dims = DisplayDimensions::new(1462.0, 842.0);
        let bracket = find_bracket(NO_BRACKET_ID).unwrap();
        let mut request = input(&dims, bracket, DisplayCount::Single);
        request.spec = CameraPosition::Bottom.target_spec(dims.height);
        request.camera = Some(CameraPosition::Bottom);

        let camera = compute_elevation(&request).camera.unwrap();
        assert_eq!(camera.elevation, Millimeters(1100.0));
        assert_eq!(camera.body.center_y(), 2800.0 - 1100.0);
        assert_eq!(camera.body.center_x(), 2000.0);
    }

    #[test]
    fn test_camera_above_display() {
        let dims = DisplayDimensions::new(1462.0, 842.0);
        let bracket = find_bracket(NO_BRACKET_ID).unwrap();
        let mut request = input(&dims, bracket, DisplayCount::Single);
        request.spec = CameraPosition::Top.target_spec(dims.height);
        request.camera = Some(CameraPosition::Top);

        let layout = compute_elevation(&request);
        let camera = layout.camera.unwrap();
        assert_eq!(camera.elevation, Millimeters(1100.0));
        assert_eq!(camera.body.bottom(), layout.screen.top.value());
    }

    #[test]
    fn test_zero_size_display_is_degenerate() {
        let dims = DisplayDimensions::new(0.0, 0.0);
        let bracket = find_bracket(NO_BRACKET_ID).unwrap();
        let mut request = input(&dims, bracket, DisplayCount::Dual);
        request.spec = InstallationSpec::new(1000.0, ReferencePoint::Bottom);

        let layout = compute_elevation(&request);
        assert_eq!(layout.group.width, DUAL_SCREEN_GAP);
        assert_eq!(layout.anchors.top, layout.anchors.bottom);
    }

    #[test]
    fn test_negative_affl_is_below_floor() {
        let dims = DisplayDimensions::new(1000.0, 600.0);
        let bracket = find_bracket(NO_BRACKET_ID).unwrap();
        let mut request = input(&dims, bracket, DisplayCount::Single);
        request.spec = InstallationSpec::bottom(-100.0);

        let layout = compute_elevation(&request);
        assert!(layout.screen.bottom.value() > layout.floor_y);
    }
}

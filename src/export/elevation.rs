//! Single/dual display elevation drawing.
//!
//! Front view shows the display faces with the bracket ghosted behind them;
//! the mounting view ghosts the displays and details the bracket instead.

use super::dimension::Dimension;
use super::marks::{center_mark, eye_level_guides, floor_line};
use super::scene::{num, Element, Scene};
use super::style::{
    EXTENSION_DASH, FONT_MONO, FONT_SANS, GHOST, GHOST_DASH, GREEN_500, RED_500, SLATE_200,
    SLATE_300, SLATE_400, SLATE_500, SLATE_600, SLATE_800, SLATE_900, WHITE,
};
use crate::{
    models::{BracketProfile, DisplayCount, Millimeters, MountingBracket, ViewMode},
    services::{
        geometry::{CameraPlacement, ElevationLayout, Rect},
        interaction::ViewBox,
        session::ElevationSession,
    },
};

/// Inset of the screen inside the bezel.
const BEZEL: f64 = 10.0;

/// Height of each LSM1U wall rail.
const LSM_RAIL_HEIGHT: f64 = 38.0;

/// Distance of each LSM1U upright from the bracket center.
const LSM_UPRIGHT_SPREAD: f64 = 200.0;

/// Width of the upright end caps.
const LSM_CAP_WIDTH: f64 = 121.0;

/// Height of the upright end caps.
const LSM_CAP_HEIGHT: f64 = 55.0;

/// Width of the upright column between the caps.
const LSM_COLUMN_WIDTH: f64 = 76.0;

/// Number of VESA slots per upright.
const LSM_VESA_SLOTS: usize = 5;

/// Renders the session in its current view.
#[must_use]
pub fn render_elevation(session: &ElevationSession) -> Scene {
    let layout = session.layout();
    let room = session.room();
    let view = session.view();
    let backing = view.is_backing();

    let mut scene = Scene::new(
        ViewBox {
            x: 0.0,
            y: 0.0,
            width: room.width,
            height: room.height,
        },
        if backing {
            "Mounting Detail View"
        } else {
            "Display Elevation View"
        },
    );
    scene.background = Some(WHITE);
    scene.description = describe(session);

    scene.push(floor_line(0.0, room.width, layout.floor_y, 40.0));
    if session.show_guides() {
        scene.push(eye_level_guides(0.0, room.width, layout.floor_y));
    }
    if let Some(camera) = &layout.camera {
        scene.push(camera_guide(camera, room.width));
    }

    for panel in &layout.panels {
        scene.push(panel_outline(panel, view));
    }
    let bracket = session.bracket();
    for placed in &layout.brackets {
        scene.push(bracket_drawing(placed, bracket, view));
    }

    scene.extend(annotations(&layout, view));
    scene.push(title_block(session));
    scene
}

fn describe(session: &ElevationSession) -> String {
    let dims = session.dimensions();
    let count = match session.display_count() {
        DisplayCount::Single => "single",
        DisplayCount::Dual => "dual",
    };
    format!(
        "Technical drawing showing {count} display installation at {} above finished floor level. Display dimensions: {} wide by {} tall.",
        Millimeters(session.spec().affl_value),
        Millimeters(dims.width),
        Millimeters(dims.height)
    )
}

fn camera_guide(camera: &CameraPlacement, wall_width: f64) -> Element {
    let body = &camera.body;
    let cy = body.center_y();
    Element::group(vec![
        Element::line(0.0, cy, wall_width, cy)
            .stroke(GREEN_500, 2.0)
            .dash("5,5")
            .opacity(0.5),
        Element::rect(body.x, body.y, body.width, body.height)
            .rounded(4.0)
            .fill(SLATE_800),
        Element::circle(body.center_x(), cy, 15.0)
            .fill(SLATE_600)
            .stroke(WHITE, 2.0),
        Element::text(
            body.right() + 20.0,
            cy,
            format!("VC Camera ({}, {})", camera.elevation, camera.position),
        )
        .fill(GREEN_500)
        .font(FONT_SANS, 24.0, "bold")
        .middle_baseline(),
    ])
}

fn panel_outline(panel: &Rect, view: ViewMode) -> Element {
    match view {
        ViewMode::Backing => Element::rect(panel.x, panel.y, panel.width, panel.height)
            .rounded(4.0)
            .fill(WHITE)
            .fill_opacity(0.2)
            .stroke(SLATE_400, 4.0)
            .dash(GHOST_DASH),
        ViewMode::Front => {
            let inner_w = (panel.width - 2.0 * BEZEL).max(0.0);
            let inner_h = (panel.height - 2.0 * BEZEL).max(0.0);
            let (sx, sy) = (panel.x + BEZEL, panel.y + BEZEL);
            let glare = format!(
                "M {} {} L {} {} L {} {} Z",
                num(sx),
                num(sy),
                num(sx + inner_w * 0.4),
                num(sy),
                num(sx),
                num(sy + inner_h * 0.6)
            );
            Element::group(vec![
                Element::rect(panel.x, panel.y, panel.width, panel.height)
                    .rounded(4.0)
                    .fill(SLATE_200)
                    .stroke(SLATE_800, 4.0),
                Element::rect(sx, sy, inner_w, inner_h).fill(SLATE_900),
                Element::path(glare).fill(WHITE).opacity(0.05),
            ])
        }
    }
}

fn bracket_drawing(placed: &Rect, bracket: &MountingBracket, view: ViewMode) -> Element {
    let backing = view.is_backing();
    let mut parts = Vec::new();

    match bracket.profile {
        BracketProfile::DualRail => parts.push(lsm1u_wireframe(placed.width, placed.height, !backing)),
        BracketProfile::Plate | BracketProfile::Hidden => {
            let plate = Element::rect(0.0, 0.0, placed.width, placed.height).rounded(4.0);
            parts.push(if backing {
                plate.fill(SLATE_300).stroke(SLATE_800, 3.0)
            } else {
                plate.no_fill().stroke(SLATE_400, 3.0).dash("12, 12")
            });
            parts.push(
                Element::text(placed.width / 2.0, placed.height / 2.0, bracket.mount_label())
                    .fill(if backing { SLATE_800 } else { SLATE_400 })
                    .font(FONT_MONO, 24.0, "bold")
                    .anchor("middle")
                    .middle_baseline(),
            );
        }
    }

    parts.push(
        Element::line(
            placed.width / 2.0,
            -20.0,
            placed.width / 2.0,
            placed.height + 20.0,
        )
        .stroke(if backing { RED_500 } else { SLATE_300 }, 2.0)
        .dash("8,8"),
    );

    let mut group = vec![Element::group(parts).translate(placed.x, placed.y)];
    if backing {
        group.push(
            Dimension::horizontal(placed.x, placed.right(), placed.y, Millimeters(placed.width).to_string())
                .offset(-50.0)
                .render(),
        );
        group.push(
            Dimension::vertical(placed.right(), placed.y, placed.bottom(), Millimeters(placed.height).to_string())
                .offset(50.0)
                .render(),
        );
    }
    Element::group(group)
}

/// Chief LSM1U: two horizontal wall rails carrying two display uprights.
///
/// Drawn in bracket-local coordinates; `ghost` renders the faint outline used
/// behind the displays in front view.
fn lsm1u_wireframe(w: f64, h: f64, ghost: bool) -> Element {
    let line_color = if ghost { GHOST } else { SLATE_800 };
    let body_fill = if ghost { "none" } else { SLATE_300 };
    let mut parts = Vec::new();

    for rail_y in [h * 0.2, h * 0.8 - LSM_RAIL_HEIGHT] {
        parts.push(
            Element::rect(0.0, rail_y, w, LSM_RAIL_HEIGHT)
                .rounded(2.0)
                .fill(body_fill)
                .stroke(line_color, 2.0),
        );
        let mid = rail_y + LSM_RAIL_HEIGHT / 2.0;
        parts.push(
            Element::line(100.0, mid, w - 100.0, mid)
                .stroke(line_color, 1.0)
                .dash("50, 50"),
        );
    }

    let flare = (LSM_CAP_WIDTH - LSM_COLUMN_WIDTH) / 2.0;
    for side in [-1.0, 1.0] {
        let ux = w / 2.0 + side * LSM_UPRIGHT_SPREAD - LSM_CAP_WIDTH / 2.0;
        let cap_mid = ux + LSM_CAP_WIDTH / 2.0;

        parts.push(
            Element::rect(ux + flare, LSM_CAP_HEIGHT, LSM_COLUMN_WIDTH, h - 2.0 * LSM_CAP_HEIGHT)
                .fill(body_fill)
                .stroke(line_color, 2.0),
        );
        let top = format!(
            "M {} 0 H {} V {} L {} {} H {} L {} {} Z",
            num(ux),
            num(ux + LSM_CAP_WIDTH),
            num(LSM_CAP_HEIGHT / 2.0),
            num(ux + LSM_CAP_WIDTH - flare),
            num(LSM_CAP_HEIGHT),
            num(ux + flare),
            num(ux),
            num(LSM_CAP_HEIGHT / 2.0)
        );
        let bottom = format!(
            "M {} {} H {} V {} L {} {} H {} L {} {} Z",
            num(ux),
            num(h),
            num(ux + LSM_CAP_WIDTH),
            num(h - LSM_CAP_HEIGHT / 2.0),
            num(ux + LSM_CAP_WIDTH - flare),
            num(h - LSM_CAP_HEIGHT),
            num(ux + flare),
            num(ux),
            num(h - LSM_CAP_HEIGHT / 2.0)
        );
        for housing in [top, bottom] {
            parts.push(Element::path(housing).fill(body_fill).stroke(line_color, 2.0));
        }
        for cy in [LSM_CAP_HEIGHT / 2.0, h - LSM_CAP_HEIGHT / 2.0] {
            parts.push(Element::circle(cap_mid, cy, 10.0).no_fill().stroke(line_color, 2.0));
        }
        for slot in 0..LSM_VESA_SLOTS {
            parts.push(
                Element::rect(
                    ux + flare + 20.0,
                    LSM_CAP_HEIGHT + 30.0 + (slot as f64) * 50.0,
                    36.0,
                    35.0,
                )
                .rounded(8.0)
                .fill(if ghost { "none" } else { WHITE })
                .stroke(line_color, 1.5),
            );
        }
        if !ghost {
            let cord_end = h + 80.0;
            parts.push(
                Element::line(cap_mid, h - LSM_CAP_HEIGHT, cap_mid, cord_end).stroke(SLATE_500, 2.0),
            );
            parts.push(Element::circle(cap_mid, cord_end, 6.0).fill(SLATE_500));
        }
    }

    let group = Element::group(parts);
    if ghost {
        group.opacity(0.3)
    } else {
        group
    }
}

fn annotations(layout: &ElevationLayout, view: ViewMode) -> Vec<Element> {
    let group = &layout.group;
    let screen = &layout.screen;
    let top = screen.top.value();
    let center = screen.center.value();
    let bottom = screen.bottom.value();
    let floor = layout.floor_y;

    let mut parts = vec![
        center_mark(group.center, center),
        Dimension::horizontal(group.left, group.right, top, Millimeters(group.width).to_string())
            .offset(-180.0)
            .render(),
    ];
    if !view.is_backing() {
        parts.push(
            Dimension::vertical(
                group.right,
                top,
                bottom,
                Millimeters(layout.anchors.height()).to_string(),
            )
            .offset(120.0)
            .render(),
        );
    }

    let affl = |y: f64, reach: f64, label: String| {
        Element::group(vec![
            Element::line(group.left, y, group.left - reach, y)
                .stroke(SLATE_400, 2.0)
                .dash(EXTENSION_DASH),
            Dimension::vertical(group.left - reach + 50.0, floor, y, label).render(),
        ])
    };
    parts.push(affl(
        center,
        350.0,
        format!("AFFL (Center): {}", layout.anchors.center),
    ));
    parts.push(affl(
        bottom,
        600.0,
        format!("AFFL (Bottom): {}", layout.anchors.bottom),
    ));
    parts
}

fn title_block(session: &ElevationSession) -> Element {
    let room = session.room();
    let backing = session.view().is_backing();
    let spec = session.spec();

    let rows = [
        ("MODEL", session.dimensions().display_name().to_string()),
        (
            "CONFIG",
            match session.display_count() {
                DisplayCount::Single => "SINGLE DISPLAY",
                DisplayCount::Dual => "DUAL SCREEN",
            }
            .to_string(),
        ),
        ("MOUNT", session.bracket().mount_label().to_string()),
        ("ALIGNMENT", spec.reference_point.id().to_uppercase()),
        ("MOUNTING", format!("{} AFFL", Millimeters(spec.affl_value))),
    ];

    let mut fields = Vec::new();
    for (index, (label, value)) in rows.into_iter().enumerate() {
        let y = (index as f64) * 70.0;
        fields.push(
            Element::text(0.0, y, label)
                .fill(SLATE_500)
                .font(FONT_SANS, 28.0, "bold"),
        );
        fields.push(
            Element::text(320.0, y, value)
                .fill(SLATE_800)
                .font(FONT_MONO, 32.0, "normal"),
        );
    }

    Element::group(vec![
        Element::rect(0.0, 0.0, 1050.0, 450.0)
            .fill(WHITE)
            .stroke(SLATE_800, 4.0),
        Element::rect(0.0, 0.0, 1050.0, 80.0).fill(if backing { SLATE_300 } else { SLATE_800 }),
        Element::text(
            30.0,
            55.0,
            if backing {
                "MOUNTING DETAIL"
            } else {
                "DISPLAY ELEVATION"
            },
        )
        .fill(if backing { SLATE_800 } else { WHITE })
        .font(FONT_SANS, 40.0, "bold"),
        Element::group(fields).translate(50.0, 150.0),
    ])
    .translate(room.width - 1100.0, room.height - 500.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InstallationSpec, ScenarioKind};

    #[test]
    fn test_front_view_document() {
        let session = ElevationSession::new();
        let scene = render_elevation(&session);
        assert_eq!(scene.title, "Display Elevation View");
        assert!(scene.has_area());

        let svg = scene.to_svg();
        assert!(svg.contains(r#"viewBox="0 0 4000 2800""#));
        assert!(svg.contains("single display installation at 1350mm"));
        assert!(svg.contains("AFFL (Center): 1350mm"));
        assert!(svg.contains("DISPLAY ELEVATION"));
        assert!(svg.contains("SINGLE DISPLAY"));
        assert!(svg.contains("1350mm AFFL"));
        assert!(!svg.contains("VC Camera"));
        assert!(!svg.contains("Seated Eye Level"));
    }

    #[test]
    fn test_backing_view_details_bracket() {
        let mut session = ElevationSession::new();
        session.set_view(ViewMode::Backing);
        let svg = render_elevation(&session).to_svg();
        assert!(svg.contains("<title>Mounting Detail View</title>"));
        assert!(svg.contains("MOUNTING DETAIL"));
        // bracket width and height dimensions
        assert!(svg.contains(">883mm</text>"));
        assert!(svg.contains(">432mm</text>"));
    }

    #[test]
    fn test_dual_camera_and_guides() {
        let mut session = ElevationSession::new();
        session.set_display_count(DisplayCount::Dual);
        session.select_scenario(ScenarioKind::VideoConference);
        session.set_guides(true);
        let svg = render_elevation(&session).to_svg();
        assert!(svg.contains("DUAL SCREEN"));
        assert!(svg.contains("dual display installation"));
        assert!(svg.contains("VC Camera (1100mm, bottom)"));
        assert!(svg.contains("Standing Eye Level (1500mm)"));
    }

    #[test]
    fn test_direct_wall_mount_has_no_bracket() {
        let mut session = ElevationSession::new();
        session.select_bracket("none").unwrap();
        session.set_view(ViewMode::Backing);
        let svg = render_elevation(&session).to_svg();
        assert!(svg.contains("Direct Wall"));
        assert!(!svg.contains(r#"stroke-dasharray="8,8""#));
    }

    #[test]
    fn test_below_floor_installation_still_renders() {
        let mut session = ElevationSession::new();
        session.select_scenario(ScenarioKind::General);
        session.set_installation(InstallationSpec::bottom(-200.0));
        let scene = render_elevation(&session);
        assert!(scene.to_svg().contains("AFFL (Bottom): -200mm"));
    }
}

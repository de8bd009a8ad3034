//! Video-wall elevation drawing.
//!
//! The front view shows the panel faces; the mounting view ghosts the panels
//! and adds the rails, flushboxes and rail heights.

use super::dimension::Dimension;
use super::marks::{center_mark, eye_level_guides, floor_line};
use super::scene::{num, Element, Scene};
use super::style::{
    EXTENSION_DASH, FONT_MONO, FONT_SANS, GHOST_DASH, ORANGE_500, SLATE_100, SLATE_200,
    SLATE_300, SLATE_400, SLATE_500, SLATE_800, SLATE_900, WHITE,
};
use crate::{
    models::{Flushbox, Millimeters, RoomDimensions, ViewMode},
    services::{
        interaction::{DimensionAnchor, ViewBox},
        session::VideoWallSession,
        videowall::{RailPlacement, WallCell, WallLayout},
    },
};

/// Margin kept around the array and the room when fitting the view.
const FIT_PADDING: f64 = 500.0;

/// Floor line extent, wide enough for any panned view.
const FLOOR_EXTENT: (f64, f64) = (-5000.0, 10000.0);

/// Mounting tab size.
const TAB_WIDTH: f64 = 60.0;
const TAB_HEIGHT: f64 = 20.0;

/// Renders the session in its current view.
#[must_use]
pub fn render_videowall(session: &VideoWallSession) -> Scene {
    let layout = session.layout();
    let room = session.room();
    let view = session.view();
    let config = session.config();

    let mut scene = Scene::new(
        fit_view_box(&layout, &room),
        if view.is_backing() {
            "Video Wall Mounting Detail"
        } else {
            "Video Wall Elevation"
        },
    );
    scene.background = Some(WHITE);
    let dims = layout.dimensions();
    scene.description = format!(
        "Video wall of {} rows by {} columns of {} panels, {} wide by {} tall, bottom edge at {} above finished floor level.",
        config.rows,
        config.cols,
        config.display.label,
        Millimeters(dims.total_width),
        Millimeters(dims.total_height),
        dims.distance_to_bottom
    );

    scene.push(room_outline(&room));
    scene.push(floor_line(
        FLOOR_EXTENT.0,
        FLOOR_EXTENT.1,
        layout.floor_y,
        layout.start_x - FIT_PADDING,
    ));
    if session.show_guides() {
        scene.push(eye_level_guides(0.0, room.width, layout.floor_y));
    }

    for cell in &layout.cells {
        scene.push(panel(cell, view));
    }

    if view.is_backing() {
        let label = config.mounting_system.rail_label();
        for rail in &layout.rails {
            scene.push(rail_drawing(rail, label));
            scene.push(
                Dimension::vertical(
                    layout.start_x,
                    layout.floor_y,
                    rail.rect.center_y(),
                    format!("Rail AFFL: {}", rail.elevation),
                )
                .offset(session.rail_offset(rail.row))
                .color(SLATE_500)
                .render(),
            );
        }
        for (index, flushbox) in session.flushboxes().iter().enumerate() {
            scene.push(flushbox_drawing(flushbox, index, layout.floor_y));
        }
    }

    let bounds = layout.bounds();
    scene.push(center_mark(bounds.center_x(), bounds.center_y()));
    scene.push(
        Dimension::horizontal(
            bounds.x,
            bounds.right(),
            bounds.y,
            Millimeters(bounds.width).to_string(),
        )
        .offset(-150.0)
        .render(),
    );
    scene.push(
        Dimension::vertical(
            bounds.right(),
            bounds.y,
            bounds.bottom(),
            Millimeters(bounds.height).to_string(),
        )
        .offset(150.0)
        .render(),
    );

    let offsets = session.dimension_offsets();
    let anchors: &[DimensionAnchor] = if view.is_backing() {
        &[DimensionAnchor::Bottom, DimensionAnchor::Top]
    } else {
        &[
            DimensionAnchor::Center,
            DimensionAnchor::Bottom,
            DimensionAnchor::Top,
        ]
    };
    for &anchor in anchors {
        let (y, height, name) = match anchor {
            DimensionAnchor::Center => (bounds.center_y(), dims.distance_to_center, "Center"),
            DimensionAnchor::Bottom => (bounds.bottom(), dims.distance_to_bottom, "Bottom"),
            DimensionAnchor::Top => (bounds.y, dims.distance_to_top, "Top"),
        };
        let line_x = layout.start_x + offsets.get(anchor);
        scene.push(Element::group(vec![
            Element::line(layout.start_x, y, line_x, y)
                .stroke(SLATE_400, 2.0)
                .dash(EXTENSION_DASH),
            Dimension::vertical(
                line_x + 50.0,
                layout.floor_y,
                y,
                format!("AFFL ({name}): {height}"),
            )
            .render(),
        ]));
    }

    scene
}

/// View box that keeps the whole room and the array, padded on every side.
#[must_use]
pub fn fit_view_box(layout: &WallLayout, room: &RoomDimensions) -> ViewBox {
    let ceiling_y = 0.0;
    let min_x = (layout.start_x - FIT_PADDING).min(0.0);
    let min_y = (layout.start_y - FIT_PADDING).min(ceiling_y);
    let max_x = (layout.start_x + layout.total_width + FIT_PADDING).max(room.width);
    let max_y = (layout.start_y + layout.total_height + FIT_PADDING).max(layout.floor_y);
    ViewBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

fn room_outline(room: &RoomDimensions) -> Element {
    let label = |x: f64, y: f64, text: String| {
        Element::text(x, y, text)
            .fill(SLATE_400)
            .font(FONT_SANS, 24.0, "normal")
            .anchor("middle")
    };
    let (hx, hy) = (room.width + 40.0, room.height / 2.0);
    Element::group(vec![
        Element::rect(0.0, 0.0, room.width, room.height)
            .fill(SLATE_100)
            .fill_opacity(0.4)
            .stroke(SLATE_300, 2.0),
        label(
            room.width / 2.0,
            -20.0,
            format!("Room Width: {}", Millimeters(room.width)),
        ),
        label(hx, hy, format!("Room Height: {}", Millimeters(room.height))).rotate(-90.0, hx, hy),
    ])
}

fn panel(cell: &WallCell, view: ViewMode) -> Element {
    let r = &cell.rect;
    match view {
        ViewMode::Backing => Element::group(vec![
            Element::rect(r.x, r.y, r.width, r.height)
                .fill(WHITE)
                .fill_opacity(0.05)
                .stroke(SLATE_900, 3.0)
                .dash(GHOST_DASH),
            Element::text(
                r.center_x(),
                r.center_y(),
                format!("{}-{}", cell.row + 1, cell.col + 1),
            )
            .fill(SLATE_400)
            .font(FONT_SANS, 48.0, "bold")
            .anchor("middle")
            .middle_baseline()
            .opacity(0.5),
        ]),
        ViewMode::Front => {
            let glare = format!(
                "M {} {} L {} {} L {} {} Z",
                num(r.x),
                num(r.y),
                num(r.x + r.width * 0.4),
                num(r.y),
                num(r.x),
                num(r.y + r.height * 0.6)
            );
            Element::group(vec![
                Element::rect(r.x, r.y, r.width, r.height)
                    .rounded(1.0)
                    .fill(SLATE_900)
                    .stroke(SLATE_800, 2.0),
                Element::path(glare).fill(WHITE).opacity(0.03),
            ])
        }
    }
}

/// PFB-style interface bar: tabs, body, screw holes and grooves per segment.
fn rail_drawing(rail: &RailPlacement, label: &str) -> Element {
    let body = &rail.rect;
    let center_y = body.center_y();
    let mut parts = Vec::new();

    for segment in &rail.segments {
        for &tab_x in &segment.tabs {
            for tab_y in [body.y - TAB_HEIGHT, body.bottom()] {
                parts.push(
                    Element::rect(tab_x - TAB_WIDTH / 2.0, tab_y, TAB_WIDTH, TAB_HEIGHT)
                        .fill(SLATE_200)
                        .stroke(SLATE_900, 2.0),
                );
                parts.push(
                    Element::circle(tab_x, tab_y + TAB_HEIGHT / 2.0, 6.5)
                        .fill(WHITE)
                        .stroke(SLATE_900, 1.5),
                );
            }
        }

        parts.push(
            Element::rect(segment.x, body.y, segment.width, body.height)
                .rounded(3.0)
                .fill(SLATE_200)
                .stroke(SLATE_900, 3.0),
        );
        parts.push(
            Element::rect(
                segment.x + 10.0,
                body.y + 9.5,
                segment.width - 20.0,
                body.height - 19.0,
            )
            .no_fill()
            .stroke(SLATE_500, 1.0),
        );

        for groove in [0.3, 0.7] {
            let y = body.y + body.height * groove;
            parts.push(
                Element::line(segment.x + 10.0, y, segment.x + segment.width - 10.0, y)
                    .stroke(SLATE_400, 1.5),
            );
        }

        for &tab_x in &segment.tabs {
            parts.push(
                Element::circle(tab_x, center_y, 9.0)
                    .fill(WHITE)
                    .stroke(SLATE_900, 2.0),
            );
            parts.push(Element::circle(tab_x, center_y, 3.0).fill(SLATE_900));
        }

        parts.push(
            Element::text(segment.x + segment.width * 0.325, center_y, label)
                .fill(SLATE_500)
                .font(FONT_MONO, 20.0, "bold")
                .anchor("middle")
                .middle_baseline(),
        );
    }

    Element::group(parts)
}

/// Flushbox marker with its staggered center-height leader.
fn flushbox_drawing(flushbox: &Flushbox, index: usize, floor_y: f64) -> Element {
    let cx = flushbox.x + flushbox.width / 2.0;
    let cy = flushbox.y + flushbox.height / 2.0;
    let leader_x = flushbox.x - 80.0 - (index as f64) * 150.0;
    let label_x = leader_x - 20.0;
    let label_y = (floor_y + cy) / 2.0;

    Element::group(vec![
        Element::rect(flushbox.x, flushbox.y, flushbox.width, flushbox.height)
            .rounded(4.0)
            .fill(WHITE)
            .stroke(ORANGE_500, 2.0),
        Element::text(cx, cy, flushbox.label.as_str())
            .fill(ORANGE_500)
            .font(FONT_MONO, 20.0, "bold")
            .anchor("middle")
            .middle_baseline(),
        Element::line(flushbox.x, cy, leader_x, cy)
            .stroke(ORANGE_500, 2.0)
            .dash("8,8"),
        Element::line(leader_x, floor_y, leader_x, cy).stroke(ORANGE_500, 2.0),
        Element::line(leader_x - 30.0, floor_y, leader_x + 30.0, floor_y).stroke(ORANGE_500, 2.0),
        Element::line(leader_x - 30.0, cy, leader_x + 30.0, cy).stroke(ORANGE_500, 2.0),
        Element::text(
            label_x,
            label_y,
            format!("AFFL (Center): {}", flushbox.elevation(floor_y)),
        )
        .fill(ORANGE_500)
        .font(FONT_MONO, 24.0, "500")
        .anchor("middle")
        .rotate(-90.0, label_x, label_y),
    ])
}

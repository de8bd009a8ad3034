//! Video-wall array layout.
//!
//! Lays out a `rows × cols` grid of identical panels centered on the wall,
//! positioned vertically by one of three floor references, plus the
//! Vogel's Connect-it rail carrying each row.

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    constants::{MAX_WALL_GRID, VIDEOWALL_ROOM_BUFFER},
    models::{
        from_screen, Millimeters, MountingReference, RoomDimensions, ScreenY, ValidationWarning,
        WallConfiguration,
    },
    services::geometry::Rect,
};

/// Height of a PFB 3427 interface bar.
pub const RAIL_HEIGHT: f64 = 180.0;

/// Rail center sits this far above the center of the row it carries.
pub const RAIL_CENTER_ABOVE_ROW: f64 = 150.0;

/// Longest single rail segment; longer rows are split evenly.
pub const MAX_RAIL_SEGMENT: f64 = 2750.0;

/// Most segments a single rail is split into.
pub const MAX_RAIL_SEGMENTS: usize = 256;

/// Mounting tab positions as fractions of a segment length.
pub const TAB_FRACTIONS: [f64; 3] = [0.15, 0.5, 0.85];

/// One panel position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallCell {
    /// Zero-based row, top to bottom
    pub row: u32,
    /// Zero-based column, left to right
    pub col: u32,
    /// Panel rectangle
    pub rect: Rect,
}

/// A run of rail between two joints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RailSegment {
    /// Left edge in drawing space
    pub x: f64,
    /// Segment length
    pub width: f64,
    /// Absolute x of each mounting tab
    pub tabs: [f64; 3],
}

/// Horizontal rail carrying one row of panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RailPlacement {
    /// Row the rail carries
    pub row: u32,
    /// Rail body in drawing space
    pub rect: Rect,
    /// Equal-length segments covering the rail
    pub segments: Vec<RailSegment>,
    /// Height of the rail center above finished floor
    pub elevation: Millimeters,
}

/// Computed video-wall geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallLayout {
    /// Width of the whole array
    pub total_width: f64,
    /// Height of the whole array
    pub total_height: f64,
    /// Left edge of the array
    pub start_x: f64,
    /// Top edge of the array
    pub start_y: f64,
    /// Drawing-space y of the finished floor
    pub floor_y: f64,
    /// Panels in row-major order
    pub cells: Vec<WallCell>,
    /// One rail per row
    pub rails: Vec<RailPlacement>,
}

impl WallLayout {
    /// Outline of the whole array.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.start_x, self.start_y, self.total_width, self.total_height)
    }

    /// Floor-referenced heights of the array edges.
    #[must_use]
    pub fn dimensions(&self) -> WallDimensions {
        let bounds = self.bounds();
        WallDimensions {
            total_width: self.total_width,
            total_height: self.total_height,
            distance_to_bottom: from_screen(ScreenY(bounds.bottom()), self.floor_y),
            distance_to_center: from_screen(ScreenY(bounds.center_y()), self.floor_y),
            distance_to_top: from_screen(ScreenY(bounds.y), self.floor_y),
        }
    }
}

/// Summary of the array size and its heights above floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallDimensions {
    /// Width of the whole array
    pub total_width: f64,
    /// Height of the whole array
    pub total_height: f64,
    /// Floor to bottom edge
    pub distance_to_bottom: Millimeters,
    /// Floor to vertical center
    pub distance_to_center: Millimeters,
    /// Floor to top edge
    pub distance_to_top: Millimeters,
}

/// Extent of `count` items of `size` separated by `gap`.
fn span(count: u32, size: f64, gap: f64) -> f64 {
    f64::from(count) * size + f64::from(count.saturating_sub(1)) * gap
}

/// Computes the array layout inside `room`.
///
/// The floor sits at the bottom of the room envelope. Rows and columns are
/// capped at [`MAX_WALL_GRID`].
#[must_use]
pub fn compute_wall_layout(config: &WallConfiguration, room: &RoomDimensions) -> WallLayout {
    let display = &config.display;
    let rows = config.rows.min(MAX_WALL_GRID);
    let cols = config.cols.min(MAX_WALL_GRID);
    if rows != config.rows || cols != config.cols {
        warn!(
            rows = config.rows,
            cols = config.cols,
            max = MAX_WALL_GRID,
            "video-wall grid capped"
        );
    }
    let total_width = span(cols, display.width, config.gap);
    let total_height = span(rows, display.height, config.gap);
    let floor_y = room.height;

    let start_y = match config.mounting_reference {
        MountingReference::FloorToTop => floor_y - config.mounting_value,
        MountingReference::FloorToCenter => floor_y - config.mounting_value - total_height / 2.0,
        MountingReference::FloorToBottom => floor_y - config.mounting_value - total_height,
    };
    let start_x = (room.width - total_width) / 2.0;

    let pitch_x = display.width + config.gap;
    let pitch_y = display.height + config.gap;

    let cells = (0..rows)
        .flat_map(|row| {
            (0..cols).map(move |col| WallCell {
                row,
                col,
                rect: Rect::new(
                    start_x + f64::from(col) * pitch_x,
                    start_y + f64::from(row) * pitch_y,
                    display.width,
                    display.height,
                ),
            })
        })
        .collect();

    let rails = (0..rows)
        .map(|row| {
            let row_center = start_y + f64::from(row) * pitch_y + display.height / 2.0;
            rail_for_row(row, start_x, total_width, row_center - RAIL_CENTER_ABOVE_ROW, floor_y)
        })
        .collect();

    debug!(
        rows,
        cols,
        total_width,
        total_height,
        "computed video-wall layout"
    );

    WallLayout {
        total_width,
        total_height,
        start_x,
        start_y,
        floor_y,
        cells,
        rails,
    }
}

fn rail_for_row(row: u32, x: f64, width: f64, center_y: f64, floor_y: f64) -> RailPlacement {
    let count = (width / MAX_RAIL_SEGMENT).ceil();
    let count = if count.is_finite() {
        count.clamp(1.0, MAX_RAIL_SEGMENTS as f64)
    } else {
        1.0
    };
    let segment_width = width / count;
    let segments = (0..count as usize)
        .map(|index| {
            let seg_x = x + (index as f64) * segment_width;
            RailSegment {
                x: seg_x,
                width: segment_width,
                tabs: TAB_FRACTIONS.map(|fraction| seg_x + segment_width * fraction),
            }
        })
        .collect();

    RailPlacement {
        row,
        rect: Rect::new(x, center_y - RAIL_HEIGHT / 2.0, width, RAIL_HEIGHT),
        segments,
        elevation: from_screen(ScreenY(center_y), floor_y),
    }
}

/// Warns when the array plus its side clearance does not fit the room.
#[must_use]
pub fn room_fit_warnings(layout: &WallLayout, room: &RoomDimensions) -> Vec<ValidationWarning> {
    let clearance = VIDEOWALL_ROOM_BUFFER * 2.0;
    let mut warnings = Vec::new();
    if layout.total_width + clearance > room.width {
        warnings.push(ValidationWarning::warning(format!(
            "Video wall is wider ({:.0}mm) than the room allows ({:.0}mm incl. {:.0}mm clearance).",
            layout.total_width, room.width, clearance
        )));
    }
    if layout.total_height + clearance > room.height {
        warnings.push(ValidationWarning::warning(format!(
            "Video wall is taller ({:.0}mm) than the room allows ({:.0}mm incl. {:.0}mm clearance).",
            layout.total_height, room.height, clearance
        )));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WallDisplay;

    const EPS: f64 = 1e-9;

    fn config(rows: u32, cols: u32) -> WallConfiguration {
        WallConfiguration {
            rows,
            cols,
            gap: 1.5,
            display: WallDisplay {
                id: "custom".to_string(),
                label: "Custom Size".to_string(),
                width: 1213.0,
                height: 684.0,
                depth: 80.0,
                weight: 20.0,
                res_x: 1920,
                res_y: 1080,
            },
            ..WallConfiguration::default()
        }
    }

    #[test]
    fn test_two_by_two_totals_and_cells() {
        let layout = compute_wall_layout(&config(2, 2), &RoomDimensions::videowall_default());

        assert!((layout.total_width - 2427.5).abs() < EPS);
        assert!((layout.total_height - 1369.5).abs() < EPS);
        assert_eq!(layout.cells.len(), 4);

        let cell = layout.cells.iter().find(|c| c.row == 1 && c.col == 1).unwrap();
        assert!((cell.rect.x - (layout.start_x + 1214.5)).abs() < EPS);
        assert!((cell.rect.y - (layout.start_y + 685.5)).abs() < EPS);
    }

    #[test]
    fn test_mounting_references() {
        let room = RoomDimensions::videowall_default();
        let mut cfg = config(2, 2);
        cfg.mounting_value = 900.0;

        cfg.mounting_reference = MountingReference::FloorToBottom;
        let dims = compute_wall_layout(&cfg, &room).dimensions();
        assert!((dims.distance_to_bottom.value() - 900.0).abs() < EPS);

        cfg.mounting_reference = MountingReference::FloorToCenter;
        let dims = compute_wall_layout(&cfg, &room).dimensions();
        assert!((dims.distance_to_center.value() - 900.0).abs() < EPS);

        cfg.mounting_reference = MountingReference::FloorToTop;
        let layout = compute_wall_layout(&cfg, &room);
        assert!((layout.start_y - 2100.0).abs() < EPS);
        assert!((layout.dimensions().distance_to_top.value() - 900.0).abs() < EPS);
    }

    #[test]
    fn test_centered_horizontally() {
        let layout = compute_wall_layout(&config(1, 3), &RoomDimensions::videowall_default());
        let bounds = layout.bounds();
        assert!((bounds.center_x() - 2000.0).abs() < EPS);
    }

    #[test]
    fn test_zero_rows_or_cols_is_empty() {
        let layout = compute_wall_layout(&config(0, 3), &RoomDimensions::videowall_default());
        assert_eq!(layout.total_height, 0.0);
        assert!(layout.cells.is_empty());
        assert!(layout.rails.is_empty());

        let layout = compute_wall_layout(&config(2, 0), &RoomDimensions::videowall_default());
        assert_eq!(layout.total_width, 0.0);
        assert!(layout.cells.is_empty());
    }

    #[test]
    fn test_rail_sits_above_row_center() {
        let cfg = config(2, 2);
        let layout = compute_wall_layout(&cfg, &RoomDimensions::videowall_default());
        let first = &layout.rails[0];
        let row_center = layout.start_y + 342.0;
        assert!((first.rect.center_y() - (row_center - 150.0)).abs() < EPS);
        assert_eq!(first.rect.height, RAIL_HEIGHT);
        assert_eq!(first.rect.width, layout.total_width);

        // bottom at 900 -> row 1 center at 900 + 342, rail 150 above
        let second = &layout.rails[1];
        assert!((second.elevation.value() - 1392.0).abs() < EPS);
    }

    #[test]
    fn test_rail_segments_and_tabs() {
        let layout = compute_wall_layout(&config(1, 2), &RoomDimensions::videowall_default());
        let rail = &layout.rails[0];
        assert_eq!(rail.segments.len(), 1);
        let seg = rail.segments[0];
        assert!((seg.tabs[1] - rail.rect.center_x()).abs() < EPS);

        let wide = compute_wall_layout(&config(1, 4), &RoomDimensions::new(6000.0, 3000.0));
        let rail = &wide.rails[0];
        // 4 × 1213 + 3 × 1.5 = 4856.5 -> two segments
        assert_eq!(rail.segments.len(), 2);
        assert!((rail.segments[1].x - (rail.rect.x + 4856.5 / 2.0)).abs() < EPS);
        assert!((rail.segments[1].tabs[0] - (rail.segments[1].x + 0.15 * 2428.25)).abs() < EPS);
    }

    #[test]
    fn test_huge_panel_caps_rail_segments() {
        let mut wall = config(1, 1);
        wall.display.width = 1e300;
        let layout = compute_wall_layout(&wall, &RoomDimensions::videowall_default());
        let rail = &layout.rails[0];
        assert_eq!(rail.segments.len(), MAX_RAIL_SEGMENTS);
        assert!(rail.segments[0].width.is_finite());

        wall.display.width = f64::INFINITY;
        let layout = compute_wall_layout(&wall, &RoomDimensions::videowall_default());
        assert_eq!(layout.rails[0].segments.len(), 1);
    }

    #[test]
    fn test_grid_is_capped() {
        let layout = compute_wall_layout(
            &config(100_000, 100_000),
            &RoomDimensions::videowall_default(),
        );
        let max = MAX_WALL_GRID as usize;
        assert_eq!(layout.cells.len(), max * max);
        assert_eq!(layout.rails.len(), max);
        assert!((layout.total_width - span(MAX_WALL_GRID, 1213.0, 1.5)).abs() < EPS);
    }

    #[test]
    fn test_room_fit() {
        let room = RoomDimensions::videowall_default();
        let layout = compute_wall_layout(&config(2, 2), &room);
        assert!(room_fit_warnings(&layout, &room).is_empty());

        let layout = compute_wall_layout(&config(4, 4), &room);
        let warnings = room_fit_warnings(&layout, &room);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("wider"));
    }
}

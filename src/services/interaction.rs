//! Viewport and pointer-drag handling for the drawing surface.
//!
//! A drag runs through `begin`, any number of `move`s and `end`. Only one
//! drag is active at a time; beginning a new one replaces the old one.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Zoom change per step.
pub const ZOOM_STEP: f64 = 0.1;

/// Smallest zoom factor.
pub const MIN_ZOOM: f64 = 0.5;

/// Largest zoom factor.
pub const MAX_ZOOM: f64 = 3.0;

/// Point in pointer or drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Visible region of the drawing, in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Visible width
    pub width: f64,
    /// Visible height
    pub height: f64,
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// Zoom and pan state of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    zoom: f64,
    pan: Point,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Viewport over a drawing of `width × height` at zoom 1.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan: Point::new(0.0, 0.0),
            width,
            height,
        }
    }

    /// Current zoom factor.
    #[must_use]
    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current pan offset.
    #[must_use]
    pub const fn pan(&self) -> Point {
        self.pan
    }

    /// Zooms in one step, up to [`MAX_ZOOM`].
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    /// Zooms out one step, down to [`MIN_ZOOM`].
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Restores zoom 1 and removes any pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Point::default();
    }

    /// Shifts the view by a pointer delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.x += dx;
        self.pan.y += dy;
    }

    /// Changes the drawing size, keeping zoom and pan.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Region of the drawing currently visible.
    #[must_use]
    pub fn view_box(&self) -> ViewBox {
        ViewBox {
            x: 0.0 - self.pan.x,
            y: 0.0 - self.pan.y,
            width: self.width / self.zoom,
            height: self.height / self.zoom,
        }
    }
}

/// Which AFFL dimension line a drag moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionAnchor {
    /// Floor to center
    Center,
    /// Floor to bottom edge
    Bottom,
    /// Floor to top edge
    Top,
}

impl FromStr for DimensionAnchor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            "top" => Ok(Self::Top),
            other => bail!("Unknown dimension '{other}' (expected center, bottom or top)"),
        }
    }
}

/// Horizontal offsets of the three AFFL dimension lines from the array edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionOffsets {
    /// Floor-to-center line
    pub center: f64,
    /// Floor-to-bottom line
    pub bottom: f64,
    /// Floor-to-top line
    pub top: f64,
}

impl Default for DimensionOffsets {
    fn default() -> Self {
        Self {
            center: -350.0,
            bottom: -600.0,
            top: -350.0,
        }
    }
}

impl DimensionOffsets {
    /// Offset of one line.
    #[must_use]
    pub const fn get(&self, anchor: DimensionAnchor) -> f64 {
        match anchor {
            DimensionAnchor::Center => self.center,
            DimensionAnchor::Bottom => self.bottom,
            DimensionAnchor::Top => self.top,
        }
    }

    /// Moves one line.
    pub fn set(&mut self, anchor: DimensionAnchor, offset: f64) {
        match anchor {
            DimensionAnchor::Center => self.center = offset,
            DimensionAnchor::Bottom => self.bottom = offset,
            DimensionAnchor::Top => self.top = offset,
        }
    }
}

/// What a drag is moving.
#[derive(Debug, Clone, PartialEq)]
pub enum DragTarget {
    /// The whole view
    Pan,
    /// A flushbox, by id
    Flushbox(String),
    /// One of the AFFL dimension lines
    Dimension(DimensionAnchor),
    /// The Rail AFFL dimension line of a row
    Rail(u32),
}

/// Change produced by one pointer move.
#[derive(Debug, Clone, PartialEq)]
pub enum DragUpdate {
    /// Pan the view by a pointer delta
    Pan {
        /// Horizontal delta since the previous move
        dx: f64,
        /// Vertical delta since the previous move
        dy: f64,
    },
    /// Place a flushbox's top-left corner
    Flushbox {
        /// Box id
        id: String,
        /// New left edge
        x: f64,
        /// New top edge
        y: f64,
    },
    /// Set an AFFL dimension offset
    Dimension {
        /// Which line
        anchor: DimensionAnchor,
        /// New horizontal offset
        offset: f64,
    },
    /// Set a rail dimension offset
    Rail {
        /// Row of the rail
        row: u32,
        /// New horizontal offset
        offset: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveDrag {
    target: DragTarget,
    start: Point,
    last: Point,
    origin: Point,
}

/// Tracks the single active drag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragController {
    active: Option<ActiveDrag>,
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Starts a drag, capturing the pointer and the value being moved.
    ///
    /// `origin` is the current offset (in `origin.x`) for dimension and rail
    /// drags and the current top-left corner for flushbox drags; pans ignore
    /// it. Any drag already in progress is dropped.
    pub fn begin(&mut self, target: DragTarget, pointer: Point, origin: Point) {
        self.active = Some(ActiveDrag {
            target,
            start: pointer,
            last: pointer,
            origin,
        });
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Target of the drag in progress.
    #[must_use]
    pub fn target(&self) -> Option<&DragTarget> {
        self.active.as_ref().map(|drag| &drag.target)
    }

    /// Applies a pointer move. Returns `None` when no drag is active.
    ///
    /// Dimension and rail offsets follow the horizontal pointer delta scaled
    /// by `1 / zoom`; flushboxes follow both axes unscaled; pans report the
    /// delta since the previous move.
    pub fn drag_move(&mut self, pointer: Point, zoom: f64) -> Option<DragUpdate> {
        let drag = self.active.as_mut()?;
        let dx = pointer.x - drag.start.x;
        let dy = pointer.y - drag.start.y;

        let update = match &drag.target {
            DragTarget::Pan => DragUpdate::Pan {
                dx: pointer.x - drag.last.x,
                dy: pointer.y - drag.last.y,
            },
            DragTarget::Flushbox(id) => DragUpdate::Flushbox {
                id: id.clone(),
                x: drag.origin.x + dx,
                y: drag.origin.y + dy,
            },
            DragTarget::Dimension(anchor) => DragUpdate::Dimension {
                anchor: *anchor,
                offset: drag.origin.x + dx / zoom,
            },
            DragTarget::Rail(row) => DragUpdate::Rail {
                row: *row,
                offset: drag.origin.x + dx / zoom,
            },
        };
        drag.last = pointer;
        Some(update)
    }

    /// Ends the drag in progress and returns what it was moving.
    pub fn end(&mut self) -> Option<DragTarget> {
        self.active.take().map(|drag| drag.target)
    }
}

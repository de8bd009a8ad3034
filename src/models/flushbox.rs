//! Free-standing in-wall box markers.

use crate::models::units::{from_screen, Millimeters, ScreenY};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default flushbox width (double-gang back box).
pub const FLUSHBOX_WIDTH: f64 = 97.0;

/// Default flushbox height.
pub const FLUSHBOX_HEIGHT: f64 = 62.0;

/// A draggable in-wall electrical/AV box marker.
///
/// `x`/`y` are the drawing-space top-left corner. Boxes are not attached to
/// the display stack; moving the displays leaves them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flushbox {
    /// Unique identifier
    pub id: String,
    /// Left edge in drawing space
    pub x: f64,
    /// Top edge in drawing space
    pub y: f64,
    /// Box width
    pub width: f64,
    /// Box height
    pub height: f64,
    /// Label printed on the box (e.g. "FB01")
    pub label: String,
}

impl Flushbox {
    /// Creates the next box for a wall that already holds `existing` boxes.
    ///
    /// New boxes step 150mm to the right of the previous one so they do not
    /// stack on top of each other.
    #[must_use]
    pub fn next(existing: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            x: 2000.0 + (existing as f64) * 150.0,
            y: 1500.0,
            width: FLUSHBOX_WIDTH,
            height: FLUSHBOX_HEIGHT,
            label: format!("FB{:02}", existing + 1),
        }
    }

    /// Places the box with its top-left corner at `(x, y)`.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Moves the box to a new top-left corner.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Height of the box center above finished floor.
    #[must_use]
    pub fn elevation(&self, floor_y: f64) -> Millimeters {
        from_screen(ScreenY(self.y + self.height / 2.0), floor_y)
    }
}

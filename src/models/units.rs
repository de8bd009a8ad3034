//! Millimeter and drawing-space coordinates.
//!
//! Heights are measured upward from the finished floor level (FFL) in
//! millimeters. The drawing uses screen coordinates where `y` grows downward
//! from the ceiling, so the floor sits at `y = room_height`. The two spaces
//! are kept apart as distinct types with one conversion in each direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Height above finished floor level, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl Millimeters {
    /// Raw millimeter value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Value rounded to the nearest whole millimeter, for labels.
    #[must_use]
    pub fn rounded(self) -> f64 {
        self.0.round()
    }
}

impl fmt::Display for Millimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.0.round())
    }
}

/// Vertical coordinate in drawing space (grows downward, ceiling at zero).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenY(pub f64);

impl ScreenY {
    /// Raw drawing-space value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Moves the coordinate by `delta` drawing units.
    #[must_use]
    pub fn offset(self, delta: f64) -> Self {
        Self(self.0 + delta)
    }
}

/// Converts a floor-referenced height into drawing space.
#[must_use]
pub fn to_screen(height: Millimeters, room_height: f64) -> ScreenY {
    ScreenY(room_height - height.0)
}

/// Converts a drawing-space coordinate back to a floor-referenced height.
///
/// Used by drag interactions to report where a dragged item now sits.
#[must_use]
pub fn from_screen(y: ScreenY, room_height: f64) -> Millimeters {
    Millimeters(room_height - y.0)
}

//! Installation height and the three vertical anchors derived from it.

use crate::models::units::{to_screen, Millimeters, ScreenY};
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which edge of the display an AFFL value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePoint {
    /// Vertical center of the display
    #[default]
    Center,
    /// Bottom edge of the display
    Bottom,
}

impl ReferencePoint {
    /// Stable identifier used in files and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for ReferencePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ReferencePoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            other => bail!("Unknown reference point '{other}' (expected center or bottom)"),
        }
    }
}

/// The single user-controlled degree of freedom of an installation.
///
/// `affl_value` is the distance above finished floor level to the edge named
/// by `reference_point`. Negative values are accepted (below floor level).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallationSpec {
    /// Distance above finished floor level in millimeters
    pub affl_value: f64,
    /// Edge the AFFL value is measured to
    pub reference_point: ReferencePoint,
}

impl InstallationSpec {
    /// Creates a new installation spec.
    #[must_use]
    pub const fn new(affl_value: f64, reference_point: ReferencePoint) -> Self {
        Self {
            affl_value,
            reference_point,
        }
    }

    /// Spec measured to the display center.
    #[must_use]
    pub const fn center(affl_value: f64) -> Self {
        Self::new(affl_value, ReferencePoint::Center)
    }

    /// Spec measured to the display bottom edge.
    #[must_use]
    pub const fn bottom(affl_value: f64) -> Self {
        Self::new(affl_value, ReferencePoint::Bottom)
    }

    /// Resolves bottom, center and top for a display of `display_height`.
    #[must_use]
    pub fn anchors(&self, display_height: f64) -> VerticalAnchors {
        VerticalAnchors::from_spec(self, display_height)
    }

    /// Re-expresses the same physical position against another reference point.
    #[must_use]
    pub fn rebased(&self, display_height: f64, reference_point: ReferencePoint) -> Self {
        let anchors = self.anchors(display_height);
        let affl_value = match reference_point {
            ReferencePoint::Center => anchors.center.value(),
            ReferencePoint::Bottom => anchors.bottom.value(),
        };
        Self::new(affl_value, reference_point)
    }
}

impl Default for InstallationSpec {
    fn default() -> Self {
        Self::center(1350.0)
    }
}

/// Bottom, center and top of a display (or display group), in millimeters AFFL.
///
/// `top - bottom` always equals the height the anchors were built from and
/// `center` is always their midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalAnchors {
    /// Bottom edge
    pub bottom: Millimeters,
    /// Vertical center
    pub center: Millimeters,
    /// Top edge
    pub top: Millimeters,
}

impl VerticalAnchors {
    /// Derives the three anchors from an installation spec.
    #[must_use]
    pub fn from_spec(spec: &InstallationSpec, display_height: f64) -> Self {
        let half = display_height / 2.0;
        match spec.reference_point {
            ReferencePoint::Bottom => Self {
                bottom: Millimeters(spec.affl_value),
                center: Millimeters(spec.affl_value + half),
                top: Millimeters(spec.affl_value + display_height),
            },
            ReferencePoint::Center => Self {
                bottom: Millimeters(spec.affl_value - half),
                center: Millimeters(spec.affl_value),
                top: Millimeters(spec.affl_value + half),
            },
        }
    }

    /// Builds anchors from a known bottom edge and total height.
    #[must_use]
    pub fn from_bottom(bottom: f64, height: f64) -> Self {
        Self::from_spec(&InstallationSpec::bottom(bottom), height)
    }

    /// Distance from bottom to top.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top.value() - self.bottom.value()
    }

    /// Converts every anchor into drawing space.
    #[must_use]
    pub fn to_screen(&self, room_height: f64) -> ScreenAnchors {
        ScreenAnchors {
            bottom: to_screen(self.bottom, room_height),
            center: to_screen(self.center, room_height),
            top: to_screen(self.top, room_height),
        }
    }
}

/// The three vertical anchors in drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenAnchors {
    /// Bottom edge (largest y)
    pub bottom: ScreenY,
    /// Vertical center
    pub center: ScreenY,
    /// Top edge (smallest y)
    pub top: ScreenY,
}

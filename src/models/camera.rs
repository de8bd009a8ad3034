//! Video-conference camera placement relative to the display.

use crate::constants::{CAMERA_HEIGHT_STANDARD, CAMERA_PHYSICAL_HEIGHT};
use crate::models::installation::InstallationSpec;
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the camera is mounted relative to the display group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CameraPosition {
    /// Camera flush above the display top edge
    Top,
    /// Camera flush below the display bottom edge
    #[default]
    Bottom,
}

impl CameraPosition {
    /// Stable identifier used on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// Returns the other mounting position.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Installation spec that keeps the camera center at the standard height.
    ///
    /// The result is always bottom-referenced: below-mounted cameras push the
    /// display up by half the camera body, above-mounted cameras hang the
    /// display under the camera.
    #[must_use]
    pub fn target_spec(self, display_height: f64) -> InstallationSpec {
        let half_camera = CAMERA_PHYSICAL_HEIGHT / 2.0;
        match self {
            Self::Bottom => InstallationSpec::bottom(CAMERA_HEIGHT_STANDARD + half_camera),
            Self::Top => {
                let display_top = CAMERA_HEIGHT_STANDARD - half_camera;
                InstallationSpec::bottom(display_top - display_height)
            }
        }
    }
}

impl fmt::Display for CameraPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CameraPosition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" | "above" => Ok(Self::Top),
            "bottom" | "below" => Ok(Self::Bottom),
            other => bail!("Unknown camera position '{other}' (expected top or bottom)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::installation::ReferencePoint;

    #[test]
    fn test_camera_below_display() {
        let spec = CameraPosition::Bottom.target_spec(842.0);
        assert_eq!(spec, InstallationSpec::bottom(1130.0));
    }

    #[test]
    fn test_camera_above_display() {
        let spec = CameraPosition::Top.target_spec(842.0);
        assert_eq!(spec.reference_point, ReferencePoint::Bottom);
        assert_eq!(spec.affl_value, 1070.0 - 842.0);
        let anchors = spec.anchors(842.0);
        assert_eq!(anchors.top.value(), 1070.0);
    }

    #[test]
    fn test_toggle_roundtrip_restores_spec() {
        let height = 969.0;
        let start = CameraPosition::Top;
        let original = start.target_spec(height);
        let toggled = start.toggled().target_spec(height);
        assert_ne!(original, toggled);
        let restored = start.toggled().toggled().target_spec(height);
        assert_eq!(original, restored);
    }

    #[test]
    fn test_parse() {
        assert_eq!("above".parse::<CameraPosition>().unwrap(), CameraPosition::Top);
        assert!("left".parse::<CameraPosition>().is_err());
    }
}

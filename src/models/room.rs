//! Room envelope and drawing options shared by both planners.

use crate::constants::{VIDEOWALL_ROOM_HEIGHT, WALL_HEIGHT, WALL_WIDTH};
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wall area represented by the drawing, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    /// Wall width
    pub width: f64,
    /// Floor-to-ceiling height
    pub height: f64,
}

impl RoomDimensions {
    /// Creates a room envelope.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Default envelope for the video-wall planner.
    #[must_use]
    pub const fn videowall_default() -> Self {
        Self::new(WALL_WIDTH, VIDEOWALL_ROOM_HEIGHT)
    }
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self::new(WALL_WIDTH, WALL_HEIGHT)
    }
}

/// Which face of the installation a drawing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Display faces with bezels
    #[default]
    Front,
    /// Bracket / rail mounting detail behind ghosted displays
    Backing,
}

impl ViewMode {
    /// Stable identifier, also used in export file names.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Backing => "backing",
        }
    }

    /// Whether this is the mounting detail view.
    #[must_use]
    pub const fn is_backing(self) -> bool {
        matches!(self, Self::Backing)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ViewMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "backing" | "mounting" => Ok(Self::Backing),
            other => bail!("Unknown view '{other}' (expected front or backing)"),
        }
    }
}

/// Single or side-by-side dual installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCount {
    /// One display
    #[default]
    Single,
    /// Two displays separated by the dual-screen gap
    Dual,
}

impl DisplayCount {
    /// Number of panels.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Dual => 2,
        }
    }
}

impl TryFrom<u8> for DisplayCount {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Single),
            2 => Ok(Self::Dual),
            other => bail!("Display count must be 1 or 2, got {other}"),
        }
    }
}

impl FromStr for DisplayCount {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "single" => Ok(Self::Single),
            "2" | "dual" => Ok(Self::Dual),
            other => bail!("Unknown display count '{other}' (expected 1, 2, single or dual)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(RoomDimensions::default(), RoomDimensions::new(4000.0, 2800.0));
        assert_eq!(RoomDimensions::videowall_default().height, 3000.0);
        assert_eq!(ViewMode::default(), ViewMode::Front);
    }

    #[test]
    fn test_display_count() {
        assert_eq!(DisplayCount::try_from(2).unwrap().count(), 2);
        assert!(DisplayCount::try_from(3).is_err());
        assert_eq!("dual".parse::<DisplayCount>().unwrap(), DisplayCount::Dual);
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("mounting".parse::<ViewMode>().unwrap(), ViewMode::Backing);
        assert!("side".parse::<ViewMode>().is_err());
    }
}

//! Video-wall array configuration.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which edge of the whole array the mounting value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MountingReference {
    /// Floor to the top edge of the array
    FloorToTop,
    /// Floor to the vertical center of the array
    FloorToCenter,
    /// Floor to the bottom edge of the array
    #[default]
    FloorToBottom,
}

impl MountingReference {
    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::FloorToTop => "floor_to_top",
            Self::FloorToCenter => "floor_to_center",
            Self::FloorToBottom => "floor_to_bottom",
        }
    }
}

impl fmt::Display for MountingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MountingReference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "floor_to_top" | "top" => Ok(Self::FloorToTop),
            "floor_to_center" | "center" => Ok(Self::FloorToCenter),
            "floor_to_bottom" | "bottom" => Ok(Self::FloorToBottom),
            other => bail!(
                "Unknown mounting reference '{other}' (expected floor_to_top, floor_to_center or floor_to_bottom)"
            ),
        }
    }
}

/// Rail system carrying the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MountingSystem {
    /// Vogel's Connect-it (PFB 3427 rails)
    #[default]
    VogelsConnectIt,
}

impl MountingSystem {
    /// Label printed on rails and summaries.
    #[must_use]
    pub const fn rail_label(self) -> &'static str {
        match self {
            Self::VogelsConnectIt => "PFB 3427",
        }
    }
}

/// Video-wall panel model from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallDisplayPreset {
    /// Stable identifier (`custom` for user-sized panels)
    pub id: &'static str,
    /// Catalog label
    pub label: &'static str,
    /// Overall width
    pub width: f64,
    /// Overall height
    pub height: f64,
    /// Overall depth
    pub depth: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Horizontal resolution in pixels
    pub res_x: u32,
    /// Vertical resolution in pixels
    pub res_y: u32,
}

/// Panel used by a wall configuration; editable copy of a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallDisplay {
    /// Catalog id this panel came from (`custom` once resized)
    pub id: String,
    /// Label
    pub label: String,
    /// Overall width
    pub width: f64,
    /// Overall height
    pub height: f64,
    /// Overall depth
    pub depth: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Horizontal resolution in pixels
    pub res_x: u32,
    /// Vertical resolution in pixels
    pub res_y: u32,
}

impl From<&WallDisplayPreset> for WallDisplay {
    fn from(preset: &WallDisplayPreset) -> Self {
        Self {
            id: preset.id.to_string(),
            label: preset.label.to_string(),
            width: preset.width,
            height: preset.height,
            depth: preset.depth,
            weight: preset.weight,
            res_x: preset.res_x,
            res_y: preset.res_y,
        }
    }
}

/// Complete description of a video-wall array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallConfiguration {
    /// Number of panel rows
    pub rows: u32,
    /// Number of panel columns
    pub cols: u32,
    /// Gap between adjacent panels
    pub gap: f64,
    /// Edge the mounting value refers to
    pub mounting_reference: MountingReference,
    /// Floor distance to the reference edge
    pub mounting_value: f64,
    /// Panel model
    pub display: WallDisplay,
    /// Rail system
    pub mounting_system: MountingSystem,
}

impl Default for WallConfiguration {
    /// 2×2 Philips 55BDL4105X array, 1.5mm gap, bottom edge at 900mm.
    fn default() -> Self {
        Self {
            rows: 2,
            cols: 2,
            gap: 1.5,
            mounting_reference: MountingReference::FloorToBottom,
            mounting_value: 900.0,
            display: WallDisplay::from(crate::catalog::default_wall_display()),
            mounting_system: MountingSystem::VogelsConnectIt,
        }
    }
}

impl WallConfiguration {
    /// Total number of panels.
    #[must_use]
    pub fn panel_count(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }

    /// Combined weight of all panels in kilograms.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        f64::from(self.rows) * f64::from(self.cols) * self.display.weight
    }

    /// Combined pixel resolution of the array.
    #[must_use]
    pub fn total_resolution(&self) -> (u64, u64) {
        (
            u64::from(self.cols) * u64::from(self.display.res_x),
            u64::from(self.rows) * u64::from(self.display.res_y),
        )
    }
}

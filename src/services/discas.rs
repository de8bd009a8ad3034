//! AVIXA DISCAS viewing-distance calculator.
//!
//! Relates the furthest viewer distance to the minimum image height for a
//! content class (AVIXA V202.01:2016, 2D image size). Diagonals assume a
//! 16:9 image.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::MM_PER_INCH;

/// Image height as a fraction of the diagonal for a 16:9 image.
pub const HEIGHT_TO_DIAGONAL: f64 = 0.4903;

/// Viewing task the image must support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentClass {
    /// Basic decision making (video, presentations): distance ≤ 6 × image height
    #[default]
    Basic,
    /// Analytical decision making (spreadsheets, CAD): distance ≤ 4 × image height
    Analytical,
}

impl ContentClass {
    /// Distance-to-height ratio.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Basic => 6.0,
            Self::Analytical => 4.0,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Analytical => "analytical",
        }
    }
}

impl fmt::Display for ContentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ContentClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "analytical" => Ok(Self::Analytical),
            other => bail!("Unknown content class '{other}' (expected basic or analytical)"),
        }
    }
}

/// Minimum display size for a viewing distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeRecommendation {
    /// Minimum image height in millimeters
    pub image_height: f64,
    /// Exact minimum diagonal in inches
    pub diagonal_inch: f64,
    /// Recommended diagonal, rounded up to a whole inch
    pub recommended_inch: f64,
}

/// Maximum viewing distance for a display size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceRecommendation {
    /// Image height in millimeters
    pub image_height: f64,
    /// Furthest viewer distance in millimeters
    pub max_distance: f64,
}

/// Smallest display that serves a viewer `distance_mm` away.
///
/// The recommendation is rounded up, so feeding it back into
/// [`size_to_distance`] yields a distance at least as large as the input.
#[must_use]
pub fn distance_to_size(distance_mm: f64, content: ContentClass) -> SizeRecommendation {
    let image_height = distance_mm / content.factor();
    let diagonal_inch = image_height / HEIGHT_TO_DIAGONAL / MM_PER_INCH;
    SizeRecommendation {
        image_height,
        diagonal_inch,
        recommended_inch: diagonal_inch.ceil(),
    }
}

/// Furthest viewer distance a `diagonal_inch` display serves.
#[must_use]
pub fn size_to_distance(diagonal_inch: f64, content: ContentClass) -> DistanceRecommendation {
    let image_height = diagonal_inch * MM_PER_INCH * HEIGHT_TO_DIAGONAL;
    DistanceRecommendation {
        image_height,
        max_distance: image_height * content.factor(),
    }
}

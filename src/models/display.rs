//! Display panel dimensions and catalog entries.

use serde::{Deserialize, Serialize};

/// Physical size of one display panel (bezel included), in millimeters.
///
/// Catalog entries always have positive width and height. User-edited sizes
/// may be zero or non-finite; geometry built from them degenerates instead of
/// failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayDimensions {
    /// Overall width
    pub width: f64,
    /// Overall height
    pub height: f64,
    /// Overall depth, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// Nominal diagonal in inches (labels only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagonal_inch: Option<f64>,
    /// Model name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DisplayDimensions {
    /// Creates an unnamed panel of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            depth: None,
            diagonal_inch: None,
            name: None,
        }
    }

    /// Sets the model name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the depth.
    #[must_use]
    pub const fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Sets the nominal diagonal.
    #[must_use]
    pub const fn with_diagonal(mut self, diagonal_inch: f64) -> Self {
        self.diagonal_inch = Some(diagonal_inch);
        self
    }

    /// Name for title blocks and file names.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Custom Display")
    }
}

/// A display model from the preset catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayPreset {
    /// Stable identifier
    pub id: &'static str,
    /// Catalog label
    pub label: &'static str,
    /// Model name
    pub name: &'static str,
    /// Overall width
    pub width: f64,
    /// Overall height
    pub height: f64,
    /// Overall depth, when published
    pub depth: Option<f64>,
    /// Nominal diagonal in inches
    pub diagonal_inch: f64,
}

impl DisplayPreset {
    /// Dimensions snapshot for this preset.
    #[must_use]
    pub fn dimensions(&self) -> DisplayDimensions {
        DisplayDimensions {
            width: self.width,
            height: self.height,
            depth: self.depth,
            diagonal_inch: Some(self.diagonal_inch),
            name: Some(self.name.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let dims = DisplayDimensions::new(1450.0, 830.0)
            .with_name("Panel")
            .with_depth(71.0)
            .with_diagonal(65.0);
        assert_eq!(dims.display_name(), "Panel");
        assert_eq!(dims.depth, Some(71.0));
        assert_eq!(dims.diagonal_inch, Some(65.0));
    }

    #[test]
    fn test_unnamed_display_name() {
        assert_eq!(DisplayDimensions::new(1.0, 1.0).display_name(), "Custom Display");
    }

    #[test]
    fn test_preset_dimensions() {
        let preset = DisplayPreset {
            id: "p",
            label: "P",
            name: "Panel P",
            width: 972.0,
            height: 567.0,
            depth: Some(70.0),
            diagonal_inch: 43.0,
        };
        let dims = preset.dimensions();
        assert_eq!(dims.width, 972.0);
        assert_eq!(dims.name.as_deref(), Some("Panel P"));
    }
}

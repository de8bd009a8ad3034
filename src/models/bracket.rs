//! Wall mounting brackets.

use serde::Serialize;

/// How a bracket is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BracketProfile {
    /// Not drawn at all (direct wall mount)
    Hidden,
    /// Two horizontal wall rails with two display uprights
    DualRail,
    /// Plain wall plate rectangle
    Plate,
}

/// Static catalog entry describing a wall plate / rail envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MountingBracket {
    /// Stable identifier (`none` for no bracket)
    pub id: &'static str,
    /// Catalog label
    pub label: &'static str,
    /// Manufacturer model name (empty for no bracket)
    pub model_name: &'static str,
    /// Wall plate / rail width
    pub width: f64,
    /// Wall plate / upright height
    pub height: f64,
    /// Depth off the wall
    pub depth: f64,
    /// Drawing style
    pub profile: BracketProfile,
}

impl MountingBracket {
    /// Brackets with a hidden profile or no extent are suppressed from rendering.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.profile == BracketProfile::Hidden || (self.width <= 0.0 && self.height <= 0.0)
    }

    /// Model name for title blocks.
    #[must_use]
    pub fn mount_label(&self) -> &'static str {
        if self.model_name.is_empty() {
            "Direct Wall"
        } else {
            self.model_name
        }
    }
}

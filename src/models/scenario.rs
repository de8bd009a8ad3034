//! Installation scenarios and their ergonomic rules.
//!
//! The scenario set is closed. Each kind maps to a recommended mounting
//! height and, for most kinds, a rule that checks the current height against
//! an installation standard (table height, camera height, ADA reach range).

use crate::constants::{
    ADA_REACH_TOP_LIMIT, CAMERA_HEIGHT_STANDARD, EDUCATION_MIN_BOTTOM, TABLE_HEIGHT,
};
use crate::models::camera::CameraPosition;
use crate::models::installation::{InstallationSpec, ReferencePoint};
use crate::models::warning::ValidationWarning;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named installation scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    /// Huddle / small conference room
    MeetingHuddle,
    /// Medium / large conference room
    #[default]
    MeetingConference,
    /// Video conferencing with a camera at the display
    VideoConference,
    /// Education / lecture hall
    Education,
    /// Interactive (touch) signage within ADA reach
    SignageInteractive,
    /// Passive signage / retail
    SignagePassive,
    /// Home theater
    HomeTheater,
    /// Manual control without auto-adjustments
    General,
}

impl ScenarioKind {
    /// Every scenario, in catalog order.
    pub const ALL: [Self; 8] = [
        Self::MeetingHuddle,
        Self::MeetingConference,
        Self::VideoConference,
        Self::Education,
        Self::SignageInteractive,
        Self::SignagePassive,
        Self::HomeTheater,
        Self::General,
    ];

    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::MeetingHuddle => "meeting-huddle",
            Self::MeetingConference => "meeting-conference",
            Self::VideoConference => "video-conference",
            Self::Education => "education",
            Self::SignageInteractive => "signage-interactive",
            Self::SignagePassive => "signage-passive",
            Self::HomeTheater => "home-theater",
            Self::General => "general",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MeetingHuddle => "Huddle / Small Conference",
            Self::MeetingConference => "Medium / Large Conference",
            Self::VideoConference => "Video Conferencing (VC)",
            Self::Education => "Education / Lecture Hall",
            Self::SignageInteractive => "Interactive Signage (ADA)",
            Self::SignagePassive => "Passive Signage / Retail",
            Self::HomeTheater => "Home Theater",
            Self::General => "Custom / General Use",
        }
    }

    /// One-line description of the scenario.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MeetingHuddle => "Seated viewing for 10-15 occupants. Center aligned ~1.2m.",
            Self::MeetingConference => "Seated viewing for 15+ occupants. Center aligned ~1.35m.",
            Self::VideoConference => {
                "Optimized for eye contact. Display positioned flush with a 1.1m camera."
            }
            Self::Education => "High mounting for rear visibility. Bottom edge > 1.22m.",
            Self::SignageInteractive => {
                "Touchscreen accessibility. Controls within 24-48\" (610-1220mm)."
            }
            Self::SignagePassive => "Standing eye level visibility (1.5m - 1.7m center).",
            Self::HomeTheater => "Lower mounting for comfortable sofa viewing.",
            Self::General => "Manual control without auto-adjustments.",
        }
    }

    /// Manual mode never recalculates the installation height.
    #[must_use]
    pub const fn is_manual(self) -> bool {
        matches!(self, Self::General)
    }

    /// Recommended installation for a display of `display_height`.
    ///
    /// Video conferencing derives its height from the camera geometry with
    /// the camera below the display; use [`CameraPosition::target_spec`] for
    /// the other mounting position. `General` still answers (1500 center)
    /// even though manual mode never asks.
    #[must_use]
    pub fn calculate_target(self, display_height: f64) -> InstallationSpec {
        match self {
            Self::MeetingHuddle => InstallationSpec::center(1200.0),
            Self::MeetingConference => InstallationSpec::center(1350.0),
            Self::VideoConference => CameraPosition::Bottom.target_spec(display_height),
            Self::Education => InstallationSpec::bottom(1220.0),
            Self::SignageInteractive => InstallationSpec::center(1000.0),
            Self::SignagePassive => InstallationSpec::center(1600.0),
            Self::HomeTheater => InstallationSpec::center(1150.0),
            Self::General => InstallationSpec::center(1500.0),
        }
    }

    /// Checks the current installation against the scenario's rule.
    ///
    /// Returns `None` when there is no concern or the scenario has no rule.
    #[must_use]
    pub fn validate(
        self,
        affl_value: f64,
        display_height: f64,
        reference_point: ReferencePoint,
    ) -> Option<ValidationWarning> {
        let anchors = InstallationSpec::new(affl_value, reference_point).anchors(display_height);
        let bottom = anchors.bottom.value();
        let top = anchors.top.value();

        match self {
            Self::MeetingHuddle | Self::MeetingConference if bottom < TABLE_HEIGHT => {
                Some(ValidationWarning::warning(
                    "Bottom edge is below standard table height (750mm).",
                ))
            }
            Self::VideoConference if bottom < CAMERA_HEIGHT_STANDARD => Some(
                ValidationWarning::warning("Display may obstruct camera position (1100mm)."),
            ),
            Self::Education if bottom < EDUCATION_MIN_BOTTOM => Some(ValidationWarning::warning(
                "Bottom edge below 1220mm may be blocked for rear viewers.",
            )),
            Self::SignageInteractive if top > ADA_REACH_TOP_LIMIT => {
                Some(ValidationWarning::warning(
                    "Top of screen may exceed ADA reach range (check specific UI elements).",
                ))
            }
            _ => None,
        }
    }

    /// Whether the scenario defines a validation rule at all.
    #[must_use]
    pub const fn has_rule(self) -> bool {
        !matches!(
            self,
            Self::SignagePassive | Self::HomeTheater | Self::General
        )
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ScenarioKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == needle)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.id()).collect();
                anyhow!("Unknown scenario '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_match_rule_table() {
        let h = 830.0;
        assert_eq!(ScenarioKind::MeetingHuddle.calculate_target(h), InstallationSpec::center(1200.0));
        assert_eq!(ScenarioKind::MeetingConference.calculate_target(h), InstallationSpec::center(1350.0));
        assert_eq!(ScenarioKind::Education.calculate_target(h), InstallationSpec::bottom(1220.0));
        assert_eq!(ScenarioKind::SignageInteractive.calculate_target(h), InstallationSpec::center(1000.0));
        assert_eq!(ScenarioKind::SignagePassive.calculate_target(h), InstallationSpec::center(1600.0));
        assert_eq!(ScenarioKind::HomeTheater.calculate_target(h), InstallationSpec::center(1150.0));
        assert_eq!(ScenarioKind::General.calculate_target(h), InstallationSpec::center(1500.0));
    }

    #[test]
    fn test_video_conference_target_uses_camera_geometry() {
        let spec = ScenarioKind::VideoConference.calculate_target(842.0);
        assert_eq!(spec, InstallationSpec::bottom(1130.0));
    }

    #[test]
    fn test_calculate_target_is_pure() {
        for kind in ScenarioKind::ALL {
            assert_eq!(kind.calculate_target(710.0), kind.calculate_target(710.0));
        }
    }

    #[test]
    fn test_huddle_validation() {
        let ok = ScenarioKind::MeetingHuddle.validate(1200.0, 800.0, ReferencePoint::Center);
        assert!(ok.is_none());

        let low = ScenarioKind::MeetingHuddle.validate(1000.0, 800.0, ReferencePoint::Center);
        let warning = low.expect("bottom at 600mm should warn");
        assert!(warning.message.contains("750mm"));
    }

    #[test]
    fn test_conference_bottom_reference() {
        assert!(ScenarioKind::MeetingConference
            .validate(749.0, 800.0, ReferencePoint::Bottom)
            .is_some());
        assert!(ScenarioKind::MeetingConference
            .validate(750.0, 800.0, ReferencePoint::Bottom)
            .is_none());
    }

    #[test]
    fn test_video_conference_validation() {
        assert!(ScenarioKind::VideoConference
            .validate(1130.0, 842.0, ReferencePoint::Bottom)
            .is_none());
        assert!(ScenarioKind::VideoConference
            .validate(1000.0, 842.0, ReferencePoint::Bottom)
            .is_some());
    }

    #[test]
    fn test_education_validation() {
        assert!(ScenarioKind::Education
            .validate(1220.0, 700.0, ReferencePoint::Bottom)
            .is_none());
        assert!(ScenarioKind::Education
            .validate(1500.0, 700.0, ReferencePoint::Center)
            .is_some());
    }

    #[test]
    fn test_interactive_signage_top_edge() {
        // 55" at 1000 center: top = 1000 + 355 = 1355
        assert!(ScenarioKind::SignageInteractive
            .validate(1000.0, 710.0, ReferencePoint::Center)
            .is_none());
        // 75" at 1000 center: top = 1480
        assert!(ScenarioKind::SignageInteractive
            .validate(1000.0, 960.0, ReferencePoint::Center)
            .is_some());
    }

    #[test]
    fn test_scenarios_without_rules_never_warn() {
        for kind in [ScenarioKind::SignagePassive, ScenarioKind::HomeTheater, ScenarioKind::General] {
            assert!(!kind.has_rule());
            assert!(kind.validate(-500.0, 2000.0, ReferencePoint::Center).is_none());
        }
    }

    #[test]
    fn test_only_general_is_manual() {
        let manual: Vec<_> = ScenarioKind::ALL.into_iter().filter(|k| k.is_manual()).collect();
        assert_eq!(manual, vec![ScenarioKind::General]);
    }

    #[test]
    fn test_parse_roundtrip() {
        for kind in ScenarioKind::ALL {
            assert_eq!(kind.id().parse::<ScenarioKind>().unwrap(), kind);
        }
        assert!("boardroom".parse::<ScenarioKind>().is_err());
    }

    #[test]
    fn test_serde_ids() {
        let json = serde_json::to_string(&ScenarioKind::SignageInteractive).unwrap();
        assert_eq!(json, "\"signage-interactive\"");
    }
}

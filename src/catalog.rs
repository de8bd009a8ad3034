//! Preset catalogs for displays, brackets and video-wall panels.
//!
//! Catalog entries are addressed by stable string ids. The id `custom` is a
//! sentinel meaning "dimensions were overridden by the user"; it resolves to
//! no display preset, and to the editable placeholder entry in the video-wall
//! catalog.

use crate::models::{BracketProfile, DisplayPreset, MountingBracket, WallDisplayPreset};
use anyhow::{anyhow, Result};
use tracing::debug;

/// Sentinel id for user-overridden dimensions.
pub const CUSTOM_PRESET_ID: &str = "custom";

/// Id of the "no bracket" entry.
pub const NO_BRACKET_ID: &str = "none";

/// Generic 16:9 panels (bezel included) and the Sony BZ30L series.
pub static DISPLAY_PRESETS: &[DisplayPreset] = &[
    DisplayPreset {
        id: "generic-55",
        label: "55\" Generic Display",
        name: "Generic 55\"",
        width: 1230.0,
        height: 710.0,
        depth: None,
        diagonal_inch: 55.0,
    },
    DisplayPreset {
        id: "generic-65",
        label: "65\" Generic Display",
        name: "Generic 65\"",
        width: 1450.0,
        height: 830.0,
        depth: None,
        diagonal_inch: 65.0,
    },
    DisplayPreset {
        id: "generic-75",
        label: "75\" Generic Display",
        name: "Generic 75\"",
        width: 1670.0,
        height: 960.0,
        depth: None,
        diagonal_inch: 75.0,
    },
    DisplayPreset {
        id: "generic-85",
        label: "85\" Generic Display",
        name: "Generic 85\"",
        width: 1890.0,
        height: 1090.0,
        depth: None,
        diagonal_inch: 85.0,
    },
    DisplayPreset {
        id: "generic-98",
        label: "98\" Generic Display",
        name: "Generic 98\"",
        width: 2190.0,
        height: 1250.0,
        depth: None,
        diagonal_inch: 98.0,
    },
    DisplayPreset {
        id: "sony-fw-98bz30l",
        label: "Sony FW-98BZ30L (98\")",
        name: "Sony FW-98BZ30L",
        width: 2199.0,
        height: 1255.0,
        depth: Some(85.0),
        diagonal_inch: 98.0,
    },
    DisplayPreset {
        id: "sony-fw-85bz30l",
        label: "Sony FW-85BZ30L (85\")",
        name: "Sony FW-85BZ30L",
        width: 1899.0,
        height: 1089.0,
        depth: Some(71.0),
        diagonal_inch: 85.0,
    },
    DisplayPreset {
        id: "sony-fw-75bz30l",
        label: "Sony FW-75BZ30L (75\")",
        name: "Sony FW-75BZ30L",
        width: 1686.0,
        height: 969.0,
        depth: Some(72.0),
        diagonal_inch: 75.0,
    },
    DisplayPreset {
        id: "sony-fw-65bz30l",
        label: "Sony FW-65BZ30L (65\")",
        name: "Sony FW-65BZ30L",
        width: 1462.0,
        height: 842.0,
        depth: Some(71.0),
        diagonal_inch: 65.0,
    },
    DisplayPreset {
        id: "sony-fw-55bz30l",
        label: "Sony FW-55BZ30L (55\")",
        name: "Sony FW-55BZ30L",
        width: 1243.0,
        height: 721.0,
        depth: Some(71.0),
        diagonal_inch: 55.0,
    },
    DisplayPreset {
        id: "sony-fw-50bz30l",
        label: "Sony FW-50BZ30L (50\")",
        name: "Sony FW-50BZ30L",
        width: 1126.0,
        height: 653.0,
        depth: Some(70.0),
        diagonal_inch: 50.0,
    },
    DisplayPreset {
        id: "sony-fw-43bz30l",
        label: "Sony FW-43BZ30L (43\")",
        name: "Sony FW-43BZ30L",
        width: 972.0,
        height: 567.0,
        depth: Some(70.0),
        diagonal_inch: 43.0,
    },
];

/// Wall brackets.
pub static BRACKET_PRESETS: &[MountingBracket] = &[
    MountingBracket {
        id: NO_BRACKET_ID,
        label: "None / Hidden",
        model_name: "",
        width: 0.0,
        height: 0.0,
        depth: 0.0,
        profile: BracketProfile::Hidden,
    },
    // Wall rail width 34.75" (883mm); upright interface height 17.0" (432mm).
    MountingBracket {
        id: "chief-lsm1u",
        label: "Chief LSM1U (Fixed)",
        model_name: "Chief LSM1U",
        width: 883.0,
        height: 432.0,
        depth: 51.0,
        profile: BracketProfile::DualRail,
    },
];

/// Video-wall panels. The first entry is the editable `custom` placeholder.
pub static WALL_DISPLAY_PRESETS: &[WallDisplayPreset] = &[
    WallDisplayPreset {
        id: CUSTOM_PRESET_ID,
        label: "Custom Size",
        width: 1213.0,
        height: 684.0,
        depth: 80.0,
        weight: 20.0,
        res_x: 1920,
        res_y: 1080,
    },
    WallDisplayPreset {
        id: "philips_55bdl4105x",
        label: "Philips 55BDL4105X (55\")",
        width: 1212.2,
        height: 683.0,
        depth: 97.7,
        weight: 25.33,
        res_x: 1920,
        res_y: 1080,
    },
    WallDisplayPreset {
        id: "samsung_vm55b",
        label: "Samsung VM55B-U (55\")",
        width: 1211.5,
        height: 682.3,
        depth: 73.1,
        weight: 19.4,
        res_x: 1920,
        res_y: 1080,
    },
    WallDisplayPreset {
        id: "samsung_vm55c_e",
        label: "Samsung VH55C-E / VM55C-E (55\")",
        width: 1209.6,
        height: 680.4,
        depth: 70.0,
        weight: 20.0,
        res_x: 1920,
        res_y: 1080,
    },
    WallDisplayPreset {
        id: "philips_55bdl3305x",
        label: "Philips 55BDL3305X (55\")",
        width: 1211.3,
        height: 682.1,
        depth: 97.8,
        weight: 28.7,
        res_x: 1920,
        res_y: 1080,
    },
    WallDisplayPreset {
        id: "lg_55svh7f",
        label: "LG 55SVH7F (55\")",
        width: 1210.51,
        height: 681.22,
        depth: 86.5,
        weight: 18.6,
        res_x: 1920,
        res_y: 1080,
    },
    WallDisplayPreset {
        id: "nec_un552",
        label: "NEC UN552 (55\")",
        width: 1211.4,
        height: 682.2,
        depth: 99.0,
        weight: 25.8,
        res_x: 1920,
        res_y: 1080,
    },
    WallDisplayPreset {
        id: "barco_uni55",
        label: "Barco UniSee (55\")",
        width: 1213.5,
        height: 683.0,
        depth: 102.0,
        weight: 28.0,
        res_x: 1920,
        res_y: 1080,
    },
    WallDisplayPreset {
        id: "generic_46",
        label: "Generic 46\" LCD",
        width: 1022.0,
        height: 577.0,
        depth: 80.0,
        weight: 15.0,
        res_x: 1920,
        res_y: 1080,
    },
    WallDisplayPreset {
        id: "generic_55",
        label: "Generic 55\" LCD",
        width: 1213.0,
        height: 684.0,
        depth: 80.0,
        weight: 20.0,
        res_x: 1920,
        res_y: 1080,
    },
    WallDisplayPreset {
        id: "generic_65",
        label: "Generic 65\" LCD",
        width: 1450.0,
        height: 830.0,
        depth: 90.0,
        weight: 30.0,
        res_x: 3840,
        res_y: 2160,
    },
];

/// Default display for the elevation planner (65" generic).
#[must_use]
pub fn default_display() -> &'static DisplayPreset {
    &DISPLAY_PRESETS[1]
}

/// Default bracket (Chief LSM1U).
#[must_use]
pub fn default_bracket() -> &'static MountingBracket {
    &BRACKET_PRESETS[1]
}

/// Default video-wall panel (Philips 55BDL4105X).
#[must_use]
pub fn default_wall_display() -> &'static WallDisplayPreset {
    &WALL_DISPLAY_PRESETS[1]
}

/// Finds a display preset by id.
///
/// Returns `Ok(None)` for the `custom` sentinel.
pub fn find_display(id: &str) -> Result<Option<&'static DisplayPreset>> {
    if id == CUSTOM_PRESET_ID {
        return Ok(None);
    }
    debug!(id, "looking up display preset");
    DISPLAY_PRESETS
        .iter()
        .find(|preset| preset.id == id)
        .map(Some)
        .ok_or_else(|| unknown_id("display preset", id, DISPLAY_PRESETS.iter().map(|p| p.id)))
}

/// Finds a bracket by id.
pub fn find_bracket(id: &str) -> Result<&'static MountingBracket> {
    debug!(id, "looking up bracket");
    BRACKET_PRESETS
        .iter()
        .find(|bracket| bracket.id == id)
        .ok_or_else(|| unknown_id("bracket", id, BRACKET_PRESETS.iter().map(|b| b.id)))
}

/// Finds a video-wall panel by id (`custom` included).
pub fn find_wall_display(id: &str) -> Result<&'static WallDisplayPreset> {
    debug!(id, "looking up video-wall display");
    WALL_DISPLAY_PRESETS
        .iter()
        .find(|preset| preset.id == id)
        .ok_or_else(|| {
            unknown_id(
                "video-wall display",
                id,
                WALL_DISPLAY_PRESETS.iter().map(|p| p.id),
            )
        })
}

fn unknown_id<'a>(kind: &str, id: &str, known: impl Iterator<Item = &'a str>) -> anyhow::Error {
    let known: Vec<&str> = known.collect();
    anyhow!("Unknown {kind} '{id}'. Known ids: {}", known.join(", "))
}

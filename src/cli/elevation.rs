//! Elevation command: height, layout and findings for a single or dual
//! display installation.

use crate::cli::common::{
    check_warnings, parse_arg, print_json, print_warnings, require_finite, require_positive,
    CliError, CliResult,
};
use crate::config::Config;
use crate::models::{
    CameraPosition, DisplayCount, DisplayDimensions, InstallationSpec, ReferencePoint,
    RoomDimensions, ScenarioKind, ValidationWarning,
};
use crate::services::{ElevationLayout, ElevationSession};
use clap::Args;
use serde::Serialize;

/// Display, height and room options shared by `elevation` and `export elevation`.
#[derive(Debug, Clone, Default, Args)]
pub struct ElevationOptions {
    /// Display preset id (see `catalog displays`)
    #[arg(long, value_name = "ID")]
    pub preset: Option<String>,

    /// Custom display width in mm (requires --height)
    #[arg(long, value_name = "MM", requires = "height")]
    pub width: Option<f64>,

    /// Custom display height in mm (requires --width)
    #[arg(long, value_name = "MM", requires = "width")]
    pub height: Option<f64>,

    /// Scenario id (see `scenarios`)
    #[arg(long, value_name = "ID")]
    pub scenario: Option<String>,

    /// Height above finished floor in mm, overriding the scenario target
    #[arg(long, value_name = "MM", allow_hyphen_values = true)]
    pub affl: Option<f64>,

    /// Which edge the AFFL value measures to (center or bottom)
    #[arg(long, value_name = "POINT")]
    pub reference: Option<String>,

    /// Number of displays side by side (1 or 2)
    #[arg(long, value_name = "N")]
    pub displays: Option<u8>,

    /// Bracket id (see `catalog brackets`)
    #[arg(long, value_name = "ID")]
    pub bracket: Option<String>,

    /// Show the video-conference camera above or below the display (top or bottom)
    #[arg(long, value_name = "POSITION")]
    pub camera: Option<String>,

    /// Wall width in mm
    #[arg(long, value_name = "MM")]
    pub room_width: Option<f64>,

    /// Floor-to-ceiling height in mm
    #[arg(long, value_name = "MM")]
    pub room_height: Option<f64>,
}

impl ElevationOptions {
    /// Builds a session from the configured defaults plus these options.
    ///
    /// Options are applied in planner order: display, scenario, camera, then
    /// any manual height override, so an explicit `--affl` always wins.
    pub fn build_session(&self, config: &Config) -> CliResult<ElevationSession> {
        let mut session = ElevationSession::from_config(config)
            .map_err(|e| CliError::invalid_args(format!("Invalid configured defaults: {e}")))?;

        if let Some(preset) = &self.preset {
            session
                .select_preset(preset)
                .map_err(|e| CliError::invalid_args(e.to_string()))?;
        }
        if let (Some(width), Some(height)) = (self.width, self.height) {
            session.set_dimensions(
                require_positive("--width", width)?,
                require_positive("--height", height)?,
            );
        }
        if let Some(scenario) = &self.scenario {
            session.select_scenario(parse_arg::<ScenarioKind>(scenario)?);
        }
        if let Some(camera) = &self.camera {
            session.set_camera_visible(true);
            session.set_camera_position(parse_arg::<CameraPosition>(camera)?);
        }
        if let Some(reference) = &self.reference {
            session.set_reference_point(parse_arg::<ReferencePoint>(reference)?);
        }
        if let Some(affl) = self.affl {
            session.set_affl(require_finite("--affl", affl)?);
        }
        if let Some(count) = self.displays {
            session.set_display_count(
                DisplayCount::try_from(count).map_err(|e| CliError::invalid_args(e.to_string()))?,
            );
        }
        if let Some(bracket) = &self.bracket {
            session
                .select_bracket(bracket)
                .map_err(|e| CliError::invalid_args(e.to_string()))?;
        }
        if self.room_width.is_some() || self.room_height.is_some() {
            let room = session.room();
            session.set_room(RoomDimensions::new(
                require_positive("--room-width", self.room_width.unwrap_or(room.width))?,
                require_positive("--room-height", self.room_height.unwrap_or(room.height))?,
            ));
        }

        Ok(session)
    }
}

/// Compute the installation height and layout of a single or dual display
#[derive(Debug, Clone, Args)]
pub struct ElevationArgs {
    #[command(flatten)]
    options: ElevationOptions,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// JSON report of one elevation.
#[derive(Debug, Serialize)]
struct ElevationReport<'a> {
    preset: &'a str,
    display: &'a DisplayDimensions,
    scenario: ScenarioKind,
    spec: InstallationSpec,
    display_count: DisplayCount,
    bracket: &'static str,
    room: RoomDimensions,
    layout: ElevationLayout,
    warnings: Vec<ValidationWarning>,
}

impl ElevationArgs {
    /// Execute the elevation command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        let session = self.options.build_session(&config)?;

        let report = ElevationReport {
            preset: session.preset_id(),
            display: session.dimensions(),
            scenario: session.scenario(),
            spec: session.spec(),
            display_count: session.display_count(),
            bracket: session.bracket().id,
            room: session.room(),
            layout: session.layout(),
            warnings: session.warnings(),
        };

        if self.json {
            print_json(&report)?;
        } else {
            print_report(&report);
        }

        check_warnings(&report.warnings, self.strict)
    }
}

fn print_report(report: &ElevationReport<'_>) {
    let dims = report.display;
    let anchors = &report.layout.anchors;
    let group = &report.layout.group;

    println!(
        "Display:   {} ({}mm x {}mm)",
        dims.display_name(),
        dims.width,
        dims.height
    );
    println!(
        "Scenario:  {} [{}]",
        report.scenario.label(),
        report.scenario.id()
    );
    println!(
        "Mounting:  {}mm AFFL to {}",
        report.spec.affl_value, report.spec.reference_point
    );
    println!();
    println!("Heights above finished floor:");
    println!("  Top:     {}", anchors.top);
    println!("  Center:  {}", anchors.center);
    println!("  Bottom:  {}", anchors.bottom);
    println!();
    println!(
        "Layout:    {} display(s), group {}mm wide from x={} to x={}",
        report.display_count.count(),
        group.width,
        group.left,
        group.right
    );
    println!("Bracket:   {}", report.bracket);
    if let Some(camera) = &report.layout.camera {
        println!(
            "Camera:    {} the display, center at {}",
            match camera.position {
                CameraPosition::Top => "above",
                CameraPosition::Bottom => "below",
            },
            camera.elevation
        );
    }
    print_warnings(&report.warnings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::ExitCode;

    fn options() -> ElevationOptions {
        ElevationOptions::default()
    }

    #[test]
    fn test_defaults_follow_config() {
        let session = options().build_session(&Config::new()).unwrap();
        assert_eq!(session.preset_id(), "generic-65");
        assert_eq!(session.spec(), InstallationSpec::center(1350.0));
    }

    #[test]
    fn test_manual_affl_overrides_scenario() {
        let mut opts = options();
        opts.scenario = Some("education".to_string());
        opts.affl = Some(1400.0);
        let session = opts.build_session(&Config::new()).unwrap();
        assert_eq!(session.scenario(), ScenarioKind::Education);
        assert_eq!(session.spec(), InstallationSpec::bottom(1400.0));
    }

    #[test]
    fn test_custom_size_and_dual() {
        let mut opts = options();
        opts.width = Some(1200.0);
        opts.height = Some(700.0);
        opts.displays = Some(2);
        let session = opts.build_session(&Config::new()).unwrap();
        assert_eq!(session.preset_id(), "custom");
        assert_eq!(session.display_count(), DisplayCount::Dual);
        assert_eq!(session.layout().group.width, 2420.0);
    }

    #[test]
    fn test_camera_flag_shows_camera() {
        let mut opts = options();
        opts.scenario = Some("video-conference".to_string());
        opts.camera = Some("top".to_string());
        let session = opts.build_session(&Config::new()).unwrap();
        assert!(session.show_camera());
        assert_eq!(session.camera_position(), CameraPosition::Top);
        assert!(session.layout().camera.is_some());
    }

    #[test]
    fn test_bad_values_are_invalid_args() {
        let mut opts = options();
        opts.preset = Some("generic-120".to_string());
        assert_eq!(
            opts.build_session(&Config::new()).unwrap_err().kind,
            ExitCode::InvalidArguments
        );

        let mut opts = options();
        opts.displays = Some(3);
        assert!(opts.build_session(&Config::new()).is_err());

        let mut opts = options();
        opts.room_height = Some(-1.0);
        assert!(opts.build_session(&Config::new()).is_err());
    }
}

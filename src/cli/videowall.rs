//! Video-wall command: array size, floor heights and rail positions.

use crate::cli::common::{
    check_warnings, parse_arg, print_json, print_warnings, require_finite, require_positive,
    CliError, CliResult,
};
use crate::config::Config;
use crate::constants::{MAX_WALL_GAP, MAX_WALL_GRID, MAX_WALL_PANEL_SIZE};
use crate::models::{MountingReference, RoomDimensions, ValidationWarning, WallConfiguration};
use crate::services::{VideoWallSession, WallDimensions, WallLayout};
use clap::Args;
use serde::Serialize;

/// Array and room options shared by `videowall` and `export videowall`.
#[derive(Debug, Clone, Default, Args)]
pub struct VideoWallOptions {
    /// Number of panel rows (at most 64)
    #[arg(long, value_name = "N")]
    pub rows: Option<u32>,

    /// Number of panel columns (at most 64)
    #[arg(long, value_name = "N")]
    pub cols: Option<u32>,

    /// Gap between panels in mm (at most 1000)
    #[arg(long, value_name = "MM")]
    pub gap: Option<f64>,

    /// Panel id (see `catalog videowall`)
    #[arg(long, value_name = "ID")]
    pub display: Option<String>,

    /// Custom panel width in mm, at most 10000 (requires --height)
    #[arg(long, value_name = "MM", requires = "height")]
    pub width: Option<f64>,

    /// Custom panel height in mm, at most 10000 (requires --width)
    #[arg(long, value_name = "MM", requires = "width")]
    pub height: Option<f64>,

    /// Array edge the mounting value refers to (floor_to_top, floor_to_center, floor_to_bottom)
    #[arg(long, value_name = "REF")]
    pub reference: Option<String>,

    /// Mounting height in mm for the chosen reference
    #[arg(long, value_name = "MM", allow_hyphen_values = true)]
    pub value: Option<f64>,

    /// Wall width in mm
    #[arg(long, value_name = "MM")]
    pub room_width: Option<f64>,

    /// Floor-to-ceiling height in mm
    #[arg(long, value_name = "MM")]
    pub room_height: Option<f64>,
}

impl VideoWallOptions {
    /// Builds a session from the configured room plus these options.
    pub fn build_session(&self, config: &Config) -> CliResult<VideoWallSession> {
        let mut session = VideoWallSession::from_config(config);

        if let Some(display) = &self.display {
            session
                .select_display(display)
                .map_err(|e| CliError::invalid_args(e.to_string()))?;
        }
        if let (Some(width), Some(height)) = (self.width, self.height) {
            let width = require_positive("--width", width)?;
            let height = require_positive("--height", height)?;
            session.set_display_size(
                require_at_most("--width", width, MAX_WALL_PANEL_SIZE)?,
                require_at_most("--height", height, MAX_WALL_PANEL_SIZE)?,
            );
        }

        let current = session.config().clone();
        session.set_grid(
            require_grid("--rows", self.rows.unwrap_or(current.rows))?,
            require_grid("--cols", self.cols.unwrap_or(current.cols))?,
        );
        if let Some(gap) = self.gap {
            let gap = require_finite("--gap", gap)?;
            if gap < 0.0 {
                return Err(CliError::invalid_args(format!(
                    "--gap must not be negative, got {gap}"
                )));
            }
            session.set_gap(require_at_most("--gap", gap, MAX_WALL_GAP)?);
        }

        if self.reference.is_some() || self.value.is_some() {
            let reference = match &self.reference {
                Some(reference) => parse_arg::<MountingReference>(reference)?,
                None => current.mounting_reference,
            };
            let value = match self.value {
                Some(value) => require_finite("--value", value)?,
                None => current.mounting_value,
            };
            session.set_mounting(reference, value);
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

fn require_grid(flag: &str, value: u32) -> CliResult<u32> {
    if value > MAX_WALL_GRID {
        return Err(CliError::invalid_args(format!(
            "{flag} must be at most {MAX_WALL_GRID}, got {value}"
        )));
    }
    Ok(value)
}

fn require_at_most(flag: &str, value: f64, max: f64) -> CliResult<f64> {
    if value > max {
        return Err(CliError::invalid_args(format!(
            "{flag} must be at most {max}mm, got {value}"
        )));
    }
    Ok(value)
}

/// Compute the size, heights and rails of a video-wall array
#[derive(Debug, Clone, Args)]
pub struct VideoWallArgs {
    #[command(flatten)]
    options: VideoWallOptions,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct Totals {
    panels: u64,
    weight: f64,
    resolution: (u64, u64),
}

/// JSON report of one video wall.
#[derive(Debug, Serialize)]
struct VideoWallReport<'a> {
    config: &'a WallConfiguration,
    room: RoomDimensions,
    dimensions: WallDimensions,
    totals: Totals,
    layout: WallLayout,
    warnings: Vec<ValidationWarning>,
}

impl VideoWallArgs {
    /// Execute the videowall command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        let session = self.options.build_session(&config)?;
        let wall = session.config();

        let report = VideoWallReport {
            config: wall,
            room: session.room(),
            dimensions: session.dimensions(),
            totals: Totals {
                panels: wall.panel_count(),
                weight: wall.total_weight(),
                resolution: wall.total_resolution(),
            },
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

fn print_report(report: &VideoWallReport<'_>) {
    let wall = report.config;
    let dims = &report.dimensions;

    println!(
        "Array:     {} x {} {} ({}mm x {}mm, gap {}mm)",
        wall.rows, wall.cols, wall.display.label, wall.display.width, wall.display.height, wall.gap
    );
    println!("Size:      {}mm x {}mm", dims.total_width, dims.total_height);
    println!(
        "Mounting:  {}mm {}",
        wall.mounting_value, wall.mounting_reference
    );
    println!();
    println!("Heights above finished floor:");
    println!("  Top:     {}", dims.distance_to_top);
    println!("  Center:  {}", dims.distance_to_center);
    println!("  Bottom:  {}", dims.distance_to_bottom);

    if !report.layout.rails.is_empty() {
        println!();
        println!("Rails ({}):", wall.mounting_system.rail_label());
        for rail in &report.layout.rails {
            println!(
                "  Row {}: {} AFFL, {} segment(s) of {}mm",
                rail.row + 1,
                rail.elevation,
                rail.segments.len(),
                rail.segments.first().map_or(0.0, |s| s.width)
            );
        }
    }

    println!();
    println!(
        "Totals:    {} panel(s), {}kg, {} x {} px",
        report.totals.panels,
        report.totals.weight,
        report.totals.resolution.0,
        report.totals.resolution.1
    );
    print_warnings(&report.warnings);
}

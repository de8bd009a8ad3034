//! Export command: technical drawings as SVG or PNG.

use crate::cli::common::{parse_arg, print_json, require_finite, CliError, CliResult};
use crate::cli::elevation::ElevationOptions;
use crate::cli::videowall::VideoWallOptions;
use crate::config::Config;
use crate::export::{
    elevation_file_name, render_elevation, render_videowall, videowall_file_name, write_scene,
    ExportFormat, Scene,
};
use crate::models::ViewMode;
use crate::services::{DimensionAnchor, VideoWallSession};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Export a technical drawing
#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(subcommand)]
    command: ExportCommand,
}

#[derive(Debug, Subcommand)]
enum ExportCommand {
    /// Single or dual display elevation
    Elevation(ExportElevationArgs),
    /// Video-wall elevation
    Videowall(ExportVideoWallArgs),
}

/// Output options shared by both drawings.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputOptions {
    /// Drawing view: front or backing (mounting detail)
    #[arg(long, value_name = "VIEW", default_value = "front")]
    pub view: String,

    /// File format: svg or png (defaults to the output extension, then png)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Output file, or directory to place the default file name in
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Draw seated and standing eye-level guides
    #[arg(long)]
    pub guides: bool,

    /// PNG pixels per millimeter (overrides the configured scale)
    #[arg(long, value_name = "FACTOR")]
    pub scale: Option<f32>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Export a single or dual display elevation
#[derive(Debug, Args)]
pub struct ExportElevationArgs {
    #[command(flatten)]
    options: ElevationOptions,

    #[command(flatten)]
    output: OutputOptions,
}

/// Export a video-wall elevation
#[derive(Debug, Args)]
pub struct ExportVideoWallArgs {
    #[command(flatten)]
    options: VideoWallOptions,

    #[command(flatten)]
    output: OutputOptions,

    /// Place a flushbox with its top-left corner at X,Y (drawing mm); repeatable
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    flushbox: Vec<String>,

    /// Move an AFFL dimension line: ANCHOR=MM with anchor center, bottom or top; repeatable
    #[arg(long, value_name = "ANCHOR=MM", allow_hyphen_values = true)]
    offset: Vec<String>,

    /// Move a rail dimension line: ROW=MM with 1-based row; repeatable
    #[arg(long, value_name = "ROW=MM", allow_hyphen_values = true)]
    rail_offset: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    path: PathBuf,
    format: String,
    view: ViewMode,
    width: f64,
    height: f64,
}

impl ExportArgs {
    /// Execute the export subcommand
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        match &self.command {
            ExportCommand::Elevation(args) => args.execute(&config),
            ExportCommand::Videowall(args) => args.execute(&config),
        }
    }
}

impl ExportElevationArgs {
    fn execute(&self, config: &Config) -> CliResult<()> {
        let view = parse_arg::<ViewMode>(&self.output.view)?;
        let mut session = self.options.build_session(config)?;
        session.set_view(view);
        session.set_guides(self.output.guides);

        let format = self.output.resolve_format()?;
        let default_name = elevation_file_name(view, session.dimensions().display_name(), format)
            .map_err(|e| CliError::io(e.to_string()))?;
        let scene = render_elevation(&session);
        self.output.write(&scene, view, format, &default_name, config)
    }
}

impl ExportVideoWallArgs {
    fn execute(&self, config: &Config) -> CliResult<()> {
        let view = parse_arg::<ViewMode>(&self.output.view)?;
        let mut session = self.options.build_session(config)?;
        session.set_view(view);
        session.set_guides(self.output.guides);
        self.apply_placements(&mut session)?;

        let format = self.output.resolve_format()?;
        let default_name = videowall_file_name(view, session.config(), format);
        let scene = render_videowall(&session);
        self.output.write(&scene, view, format, &default_name, config)
    }

    fn apply_placements(&self, session: &mut VideoWallSession) -> CliResult<()> {
        for spec in &self.flushbox {
            let (x, y) = parse_pair(spec, ',', "--flushbox")?;
            let x = parse_number(x, "--flushbox")?;
            let y = parse_number(y, "--flushbox")?;
            let id = session.add_flushbox().id.clone();
            session.move_flushbox(&id, x, y);
        }
        for spec in &self.offset {
            let (anchor, value) = parse_pair(spec, '=', "--offset")?;
            let anchor = parse_arg::<DimensionAnchor>(anchor)?;
            session.set_dimension_offset(anchor, parse_number(value, "--offset")?);
        }
        for spec in &self.rail_offset {
            let (row, value) = parse_pair(spec, '=', "--rail-offset")?;
            let row: u32 = row
                .trim()
                .parse()
                .ok()
                .filter(|row| *row >= 1)
                .ok_or_else(|| {
                    CliError::invalid_args(format!("--rail-offset row must be 1 or more: '{spec}'"))
                })?;
            session.set_rail_offset(row - 1, parse_number(value, "--rail-offset")?);
        }
        Ok(())
    }
}

impl OutputOptions {
    fn resolve_format(&self) -> CliResult<ExportFormat> {
        if let Some(format) = &self.format {
            return parse_arg(format);
        }
        Ok(self
            .output
            .as_deref()
            .filter(|path| !path.is_dir())
            .and_then(ExportFormat::from_path)
            .unwrap_or_default())
    }

    fn resolve_path(&self, default_name: &str, config: &Config) -> PathBuf {
        match &self.output {
            Some(path) if path.is_dir() => path.join(default_name),
            Some(path) => path.clone(),
            None => config
                .export
                .output_dir
                .as_deref()
                .unwrap_or_else(|| Path::new("."))
                .join(default_name),
        }
    }

    fn write(
        &self,
        scene: &Scene,
        view: ViewMode,
        format: ExportFormat,
        default_name: &str,
        config: &Config,
    ) -> CliResult<()> {
        let scale = match self.scale {
            Some(scale) if scale.is_finite() && scale > 0.0 => scale,
            Some(scale) => {
                return Err(CliError::invalid_args(format!(
                    "--scale must be a positive number, got {scale}"
                )))
            }
            None => config.export.scale,
        };
        let path = self.resolve_path(default_name, config);

        write_scene(scene, &path, format, scale)
            .map_err(|e| CliError::io(format!("Export failed: {e:#}")))?;

        if self.json {
            print_json(&ExportReport {
                path,
                format: format.to_string(),
                view,
                width: scene.view_box.width,
                height: scene.view_box.height,
            })
        } else {
            println!("✓ Exported {} ({format}, {view} view)", path.display());
            Ok(())
        }
    }
}

fn parse_pair<'a>(spec: &'a str, separator: char, flag: &str) -> CliResult<(&'a str, &'a str)> {
    spec.split_once(separator).ok_or_else(|| {
        CliError::invalid_args(format!(
            "{flag} expects two values separated by '{separator}', got '{spec}'"
        ))
    })
}

fn parse_number(value: &str, flag: &str) -> CliResult<f64> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| CliError::invalid_args(format!("{flag}: '{value}' is not a number")))?;
    require_finite(flag, number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::ExitCode;
    use tempfile::TempDir;

    fn output() -> OutputOptions {
        OutputOptions {
            view: "front".to_string(),
            ..OutputOptions::default()
        }
    }

    #[test]
    fn test_format_resolution() {
        let mut opts = output();
        assert_eq!(opts.resolve_format().unwrap(), ExportFormat::Png);

        opts.output = Some(PathBuf::from("drawing.svg"));
        assert_eq!(opts.resolve_format().unwrap(), ExportFormat::Svg);

        opts.format = Some("png".to_string());
        assert_eq!(opts.resolve_format().unwrap(), ExportFormat::Png);

        opts.format = Some("gif".to_string());
        assert_eq!(
            opts.resolve_format().unwrap_err().kind,
            ExitCode::InvalidArguments
        );
    }

    #[test]
    fn test_path_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::new();
        let mut opts = output();

        assert_eq!(
            opts.resolve_path("a.png", &config),
            Path::new(".").join("a.png")
        );

        config.export.output_dir = Some(temp_dir.path().join("exports"));
        assert_eq!(
            opts.resolve_path("a.png", &config),
            temp_dir.path().join("exports").join("a.png")
        );

        opts.output = Some(temp_dir.path().to_path_buf());
        assert_eq!(
            opts.resolve_path("a.png", &config),
            temp_dir.path().join("a.png")
        );

        opts.output = Some(temp_dir.path().join("named.png"));
        assert_eq!(
            opts.resolve_path("a.png", &config),
            temp_dir.path().join("named.png")
        );
    }

    #[test]
    fn test_pair_parsing() {
        assert_eq!(parse_pair("100,200", ',', "--flushbox").unwrap(), ("100", "200"));
        assert!(parse_pair("100", ',', "--flushbox").is_err());
        assert_eq!(parse_number(" -350 ", "--offset").unwrap(), -350.0);
        assert!(parse_number("abc", "--offset").is_err());
        assert!(parse_number("inf", "--offset").is_err());
    }
}

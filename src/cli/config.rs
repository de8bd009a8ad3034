//! Configuration management CLI commands.

use crate::catalog;
use crate::cli::common::{print_json, require_positive, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::ScenarioKind;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Elevation wall width in mm
    #[arg(long, value_name = "MM")]
    room_width: Option<f64>,

    /// Elevation floor-to-ceiling height in mm
    #[arg(long, value_name = "MM")]
    room_height: Option<f64>,

    /// Default display preset id
    #[arg(long, value_name = "ID")]
    display_preset: Option<String>,

    /// Default scenario id
    #[arg(long, value_name = "ID")]
    scenario: Option<String>,

    /// Default bracket id
    #[arg(long, value_name = "ID")]
    bracket: Option<String>,

    /// Video-wall room width in mm
    #[arg(long, value_name = "MM")]
    videowall_room_width: Option<f64>,

    /// Video-wall room height in mm
    #[arg(long, value_name = "MM")]
    videowall_room_height: Option<f64>,

    /// PNG pixels per millimeter
    #[arg(long, value_name = "FACTOR")]
    scale: Option<f32>,

    /// Directory exports are written to by default
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.room_width.is_none()
            && self.room_height.is_none()
            && self.display_preset.is_none()
            && self.scenario.is_none()
            && self.bracket.is_none()
            && self.videowall_room_width.is_none()
            && self.videowall_room_height.is_none()
            && self.scale.is_none()
            && self.output_dir.is_none()
    }

    /// Applies the given values to `config`, validating each one.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(width) = self.room_width {
            config.room.width = require_positive("--room-width", width)?;
        }
        if let Some(height) = self.room_height {
            config.room.height = require_positive("--room-height", height)?;
        }
        if let Some(preset) = &self.display_preset {
            let found =
                catalog::find_display(preset).map_err(|e| CliError::invalid_args(e.to_string()))?;
            if found.is_none() {
                return Err(CliError::invalid_args(format!(
                    "--display-preset must name a catalog display, not '{preset}'"
                )));
            }
            config.defaults.display_preset.clone_from(preset);
        }
        if let Some(scenario) = &self.scenario {
            let kind = scenario
                .parse::<ScenarioKind>()
                .map_err(|e| CliError::invalid_args(e.to_string()))?;
            config.defaults.scenario = kind.id().to_string();
        }
        if let Some(bracket) = &self.bracket {
            catalog::find_bracket(bracket).map_err(|e| CliError::invalid_args(e.to_string()))?;
            config.defaults.bracket.clone_from(bracket);
        }
        if let Some(width) = self.videowall_room_width {
            config.videowall.room_width = require_positive("--videowall-room-width", width)?;
        }
        if let Some(height) = self.videowall_room_height {
            config.videowall.room_height = require_positive("--videowall-room-height", height)?;
        }
        if let Some(scale) = self.scale {
            require_positive("--scale", f64::from(scale))?;
            config.export.scale = scale;
        }
        if let Some(dir) = &self.output_dir {
            config.export.output_dir = Some(dir.clone());
        }
        Ok(())
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::invalid_args(
                "At least one configuration option must be specified (see `config set --help`)",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        self.apply(&mut config)?;

        if let Some(dir) = &config.export.output_dir {
            std::fs::create_dir_all(dir).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    dir.display()
                ))
            })?;
        }

        let path = config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated: {}", path.display());
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    println!("Room:");
    println!("  Width:  {}mm", config.room.width);
    println!("  Height: {}mm", config.room.height);
    println!();

    println!("Defaults:");
    println!("  Display Preset: {}", config.defaults.display_preset);
    println!("  Scenario:       {}", config.defaults.scenario);
    println!("  Bracket:        {}", config.defaults.bracket);
    println!();

    println!("Video Wall Room:");
    println!("  Width:  {}mm", config.videowall.room_width);
    println!("  Height: {}mm", config.videowall.room_height);
    println!();

    println!("Export:");
    println!("  Scale:            {}", config.export.scale);
    match &config.export.output_dir {
        Some(dir) => println!("  Output Directory: {}", dir.display()),
        None => println!("  Output Directory: (current directory)"),
    }
    println!();
}

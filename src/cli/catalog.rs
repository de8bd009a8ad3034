//! Catalog listing command.

use crate::catalog::{BRACKET_PRESETS, DISPLAY_PRESETS, WALL_DISPLAY_PRESETS};
use crate::cli::common::{print_json, CliResult};
use clap::{Args, ValueEnum};

/// Which catalog to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    /// Elevation display presets
    Displays,
    /// Wall brackets
    Brackets,
    /// Video-wall panels
    Videowall,
}

/// List display, bracket or video-wall panel presets
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Catalog to list
    #[arg(value_enum)]
    pub kind: CatalogKind,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CatalogArgs {
    /// Execute the catalog command
    pub fn execute(&self) -> CliResult<()> {
        match self.kind {
            CatalogKind::Displays => {
                if self.json {
                    return print_json(&DISPLAY_PRESETS);
                }
                println!("Display presets:");
                for preset in DISPLAY_PRESETS {
                    println!(
                        "  {:<18} {:<28} {:>7}mm x {:>6}mm  {}\"",
                        preset.id, preset.label, preset.width, preset.height, preset.diagonal_inch
                    );
                }
                println!("  {:<18} Custom Size (use --width/--height)", "custom");
            }
            CatalogKind::Brackets => {
                if self.json {
                    return print_json(&BRACKET_PRESETS);
                }
                println!("Brackets:");
                for bracket in BRACKET_PRESETS {
                    if bracket.is_hidden() {
                        println!("  {:<18} {}", bracket.id, bracket.label);
                    } else {
                        println!(
                            "  {:<18} {:<28} {:>7}mm x {:>6}mm",
                            bracket.id, bracket.label, bracket.width, bracket.height
                        );
                    }
                }
            }
            CatalogKind::Videowall => {
                if self.json {
                    return print_json(&WALL_DISPLAY_PRESETS);
                }
                println!("Video-wall panels:");
                for panel in WALL_DISPLAY_PRESETS {
                    println!(
                        "  {:<22} {:<32} {:>7}mm x {:>6}mm  {}kg  {}x{}",
                        panel.id,
                        panel.label,
                        panel.width,
                        panel.height,
                        panel.weight,
                        panel.res_x,
                        panel.res_y
                    );
                }
            }
        }
        Ok(())
    }
}

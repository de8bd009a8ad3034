//! DISCAS viewing-distance calculator command.

use crate::cli::common::{parse_arg, print_json, require_positive, CliError, CliResult};
use crate::models::Millimeters;
use crate::services::discas::{DistanceRecommendation, SizeRecommendation};
use crate::services::{distance_to_size, size_to_distance, ContentClass};
use clap::Args;
use serde::Serialize;

/// Size a display for a viewing distance, or a distance for a display size
#[derive(Debug, Clone, Args)]
pub struct DiscasArgs {
    /// Furthest viewer distance in mm; prints the minimum display size
    #[arg(long, value_name = "MM", conflicts_with = "diagonal")]
    pub distance: Option<f64>,

    /// Display diagonal in inches; prints the furthest viewer distance
    #[arg(long, value_name = "INCH")]
    pub diagonal: Option<f64>,

    /// Viewing task: basic (video, presentations) or analytical (spreadsheets, CAD)
    #[arg(long, value_name = "CLASS", default_value = "basic")]
    pub content: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
enum DiscasReport {
    DistanceToSize {
        content: ContentClass,
        distance: f64,
        result: SizeRecommendation,
    },
    SizeToDistance {
        content: ContentClass,
        diagonal: f64,
        result: DistanceRecommendation,
    },
}

impl DiscasArgs {
    /// Execute the discas command
    pub fn execute(&self) -> CliResult<()> {
        let content = parse_arg::<ContentClass>(&self.content)?;

        let report = match (self.distance, self.diagonal) {
            (Some(distance), None) => DiscasReport::DistanceToSize {
                content,
                distance,
                result: distance_to_size(require_positive("--distance", distance)?, content),
            },
            (None, Some(diagonal)) => DiscasReport::SizeToDistance {
                content,
                diagonal,
                result: size_to_distance(require_positive("--diagonal", diagonal)?, content),
            },
            _ => {
                return Err(CliError::invalid_args(
                    "Specify exactly one of --distance or --diagonal",
                ))
            }
        };

        if self.json {
            return print_json(&report);
        }

        match &report {
            DiscasReport::DistanceToSize {
                distance, result, ..
            } => {
                println!("{}\"", result.recommended_inch);
                println!("Height: {}", Millimeters(result.image_height));
                println!(
                    "Minimum display for a viewer at {} ({content} content)",
                    Millimeters(*distance)
                );
            }
            DiscasReport::SizeToDistance {
                diagonal, result, ..
            } => {
                println!("{:.1}m", result.max_distance / 1000.0);
                println!("{}", Millimeters(result.max_distance));
                println!(
                    "Furthest viewer for a {diagonal}\" display ({content} content)"
                );
            }
        }
        Ok(())
    }
}

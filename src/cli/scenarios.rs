//! Scenario listing command.

use crate::catalog;
use crate::cli::common::{print_json, require_positive, CliResult};
use crate::models::{InstallationSpec, ScenarioKind};
use clap::Args;
use serde::Serialize;

/// List installation scenarios and their target heights
#[derive(Debug, Clone, Args)]
pub struct ScenariosArgs {
    /// Display height in mm used to compute targets (defaults to the default preset)
    #[arg(long, value_name = "MM")]
    pub height: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ScenarioEntry {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    manual: bool,
    has_rule: bool,
    target: InstallationSpec,
}

impl ScenariosArgs {
    /// Execute the scenarios command
    pub fn execute(&self) -> CliResult<()> {
        let height = match self.height {
            Some(height) => require_positive("--height", height)?,
            None => catalog::default_display().height,
        };

        let entries: Vec<ScenarioEntry> = ScenarioKind::ALL
            .into_iter()
            .map(|kind| ScenarioEntry {
                id: kind.id(),
                label: kind.label(),
                description: kind.description(),
                manual: kind.is_manual(),
                has_rule: kind.has_rule(),
                target: kind.calculate_target(height),
            })
            .collect();

        if self.json {
            return print_json(&entries);
        }

        println!("Scenarios (targets for a {height}mm tall display):");
        println!();
        for entry in &entries {
            let target = if entry.manual {
                "manual".to_string()
            } else {
                format!(
                    "{}mm {}",
                    entry.target.affl_value, entry.target.reference_point
                )
            };
            println!("  {:<20} {:<28} {target}", entry.id, entry.label);
            println!("  {:<20} {}", "", entry.description);
        }
        Ok(())
    }
}

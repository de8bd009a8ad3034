//! CLI command handlers for Elevation Architect.
//!
//! Every command is headless and scriptable: human-readable output by
//! default, `--json` for automation, and exit codes from [`ExitCode`].

pub mod catalog;
pub mod common;
pub mod config;
pub mod discas;
pub mod elevation;
pub mod export;
pub mod scenarios;
pub mod videowall;

// Re-export types used by main.rs and tests
pub use catalog::CatalogArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use discas::DiscasArgs;
pub use elevation::ElevationArgs;
pub use export::ExportArgs;
pub use scenarios::ScenariosArgs;
pub use videowall::VideoWallArgs;

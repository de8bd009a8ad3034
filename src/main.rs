//! Elevation Architect - display installation planner
//!
//! Computes mounting heights, layouts and viewing distances for single,
//! dual and video-wall displays, and exports dimensioned elevations.

use clap::{Parser, Subcommand};
use tracing::debug;

use elevation_architect::cli::{
    CatalogArgs, CliResult, ConfigArgs, DiscasArgs, ElevationArgs, ExportArgs, ScenariosArgs,
    VideoWallArgs,
};

/// Elevation Architect - display installation planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute height, layout and findings for a single or dual display
    Elevation(ElevationArgs),
    /// Compute size, heights and rails of a video-wall array
    Videowall(VideoWallArgs),
    /// Size a display for a viewing distance, or the reverse
    Discas(DiscasArgs),
    /// List installation scenarios and their target heights
    Scenarios(ScenariosArgs),
    /// List display, bracket and video-wall presets
    Catalog(CatalogArgs),
    /// Export an elevation drawing as SVG or PNG
    Export(ExportArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Elevation(args) => args.execute(),
            Self::Videowall(args) => args.execute(),
            Self::Discas(args) => args.execute(),
            Self::Scenarios(args) => args.execute(),
            Self::Catalog(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for --json
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(command = ?cli.command, "starting");

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.kind.code());
    }
}

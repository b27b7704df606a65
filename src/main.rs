//! BeadGrid - headless bead-pattern editor
//!
//! This binary exposes the editing engine on the command line: bead counts,
//! region inspection, region erase, color replacement, single-cell painting,
//! and catalog translation over grid JSON files.

mod cli;

use beadgrid::constants::APP_BINARY_NAME;
use clap::{Parser, Subcommand};
use cli::{
    CatalogArgs, CliError, ConfigArgs, EraseArgs, ExitCode, PaintArgs, RecodeArgs, RegionsArgs,
    ReplaceArgs, StatsArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// BeadGrid - bead pattern editing engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count the beads of each color
    Stats(StatsArgs),
    /// List connected regions of one color
    Regions(RegionsArgs),
    /// Erase the connected region around a cell
    Erase(EraseArgs),
    /// Replace every bead of one color with another
    Replace(ReplaceArgs),
    /// Paint a single cell
    Paint(PaintArgs),
    /// Rewrite bead codes for another catalog
    Recode(RecodeArgs),
    /// Color catalog lookups
    Catalog(CatalogArgs),
    /// Configuration management
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> Result<(), CliError> {
        match self {
            Self::Stats(args) => args.execute(),
            Self::Regions(args) => args.execute(),
            Self::Erase(args) => args.execute(),
            Self::Replace(args) => args.execute(),
            Self::Paint(args) => args.execute(),
            Self::Recode(args) => args.execute(),
            Self::Catalog(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli::install_catalog_table();

    let code = match cli.command.execute() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{APP_BINARY_NAME}: {e}");
            e.exit_code()
        }
    };

    std::process::exit(code.into());
}

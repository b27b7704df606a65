//! Catalog switch command.

use crate::cli::common::{load_config, read_grid, resolve_catalog, write_grid, CliResult};
use beadgrid::services::PatternDocument;
use clap::Args;
use std::path::PathBuf;

/// Rewrite every bead's code for another catalog
#[derive(Debug, Clone, Args)]
pub struct RecodeArgs {
    /// Path to grid JSON file
    #[arg(short, long, value_name = "FILE")]
    pub grid: PathBuf,

    /// Target catalog (defaults to the configured catalog)
    #[arg(short, long, value_name = "NAME")]
    pub catalog: Option<String>,

    /// Write the recoded grid here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl RecodeArgs {
    /// Execute the recode command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let catalog = resolve_catalog(self.catalog.as_deref(), &config)?;

        let mut document = PatternDocument::new(read_grid(&self.grid)?);
        document.recode(catalog);

        write_grid(document.grid(), self.output.as_deref(), config.output.pretty_json)
    }
}

//! Color replacement command.

use crate::cli::common::{
    load_config, parse_color, read_grid, resolve_catalog, write_grid, CliError, CliResult,
};
use beadgrid::services::PatternDocument;
use clap::Args;
use std::path::PathBuf;

/// Replace every bead of one color with another
#[derive(Debug, Clone, Args)]
pub struct ReplaceArgs {
    /// Path to grid JSON file
    #[arg(short, long, value_name = "FILE")]
    pub grid: PathBuf,

    /// Color to replace (catalog code or #RRGGBB)
    #[arg(long, value_name = "COLOR")]
    pub from: String,

    /// Replacement color (catalog code or #RRGGBB)
    #[arg(long, value_name = "COLOR")]
    pub to: String,

    /// Catalog the color codes belong to (defaults to the configured catalog)
    #[arg(short, long, value_name = "NAME")]
    pub catalog: Option<String>,

    /// Write the edited grid here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ReplaceArgs {
    /// Execute the replace command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let catalog = resolve_catalog(self.catalog.as_deref(), &config)?;
        let source = parse_color(&self.from, catalog)?;
        let target = parse_color(&self.to, catalog)?;

        if source.is_eraser() || target.is_eraser() {
            return Err(CliError::validation(
                "Color replacement works on bead colors; use erase or paint to remove beads",
            ));
        }

        let mut document = PatternDocument::new(read_grid(&self.grid)?);
        let replaced = document.replace_color(&source, &target);

        write_grid(document.grid(), self.output.as_deref(), config.output.pretty_json)?;
        eprintln!(
            "Replaced {replaced} bead(s) of {} ({}) with {} ({})",
            source.key, source.color_hex, target.key, target.color_hex
        );
        Ok(())
    }
}

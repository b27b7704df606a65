//! Single-cell paint command.

use crate::cli::common::{
    check_position, load_config, parse_color, read_grid, resolve_catalog, write_grid, CliResult,
};
use beadgrid::services::PatternDocument;
use clap::Args;
use std::path::PathBuf;

/// Paint one cell with a color, or ERASE to remove its bead
#[derive(Debug, Clone, Args)]
pub struct PaintArgs {
    /// Path to grid JSON file
    #[arg(short, long, value_name = "FILE")]
    pub grid: PathBuf,

    /// Row of the cell
    #[arg(long)]
    pub row: usize,

    /// Column of the cell
    #[arg(long)]
    pub col: usize,

    /// Color to paint (catalog code, #RRGGBB, or ERASE)
    #[arg(long, value_name = "COLOR")]
    pub color: String,

    /// Catalog the color code belongs to (defaults to the configured catalog)
    #[arg(short, long, value_name = "NAME")]
    pub catalog: Option<String>,

    /// Write the edited grid here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl PaintArgs {
    /// Execute the paint command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let catalog = resolve_catalog(self.catalog.as_deref(), &config)?;
        let color = parse_color(&self.color, catalog)?;

        let grid = read_grid(&self.grid)?;
        check_position(&grid, self.row, self.col)?;

        let mut document = PatternDocument::new(grid);
        let changed = document.paint_cell(self.row, self.col, &color);

        write_grid(document.grid(), self.output.as_deref(), config.output.pretty_json)?;
        if changed {
            eprintln!("Painted ({}, {}) with {}", self.row, self.col, color.key);
        } else {
            eprintln!("Cell ({}, {}) already holds {}", self.row, self.col, color.key);
        }
        Ok(())
    }
}

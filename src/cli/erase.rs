//! Region erase command.

use crate::cli::common::{check_position, load_config, read_grid, write_grid, CliError, CliResult};
use beadgrid::services::PatternDocument;
use clap::Args;
use std::path::PathBuf;

/// Erase the connected region of beads around a cell
#[derive(Debug, Clone, Args)]
pub struct EraseArgs {
    /// Path to grid JSON file
    #[arg(short, long, value_name = "FILE")]
    pub grid: PathBuf,

    /// Row of the seed cell
    #[arg(long)]
    pub row: usize,

    /// Column of the seed cell
    #[arg(long)]
    pub col: usize,

    /// Write the edited grid here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl EraseArgs {
    /// Execute the erase command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let grid = read_grid(&self.grid)?;
        check_position(&grid, self.row, self.col)?;

        let Some(seed) = grid.get(self.row, self.col).filter(|cell| !cell.is_external) else {
            return Err(CliError::validation(format!(
                "Cell ({}, {}) holds no bead",
                self.row, self.col
            )));
        };
        let key = seed.key.clone();

        let mut document = PatternDocument::new(grid);
        let before = document.stats().total_count();
        document.erase_region(self.row, self.col, &key);
        let erased = before.saturating_sub(document.stats().total_count());

        write_grid(document.grid(), self.output.as_deref(), config.output.pretty_json)?;
        eprintln!("Erased {erased} bead(s) of {key}");
        Ok(())
    }
}

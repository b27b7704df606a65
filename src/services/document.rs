//! A pattern grid paired with its bead statistics.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{ColorSelection, Grid};
use crate::services::editing::{self, PaintOutcome};
use crate::services::statistics::ColorStatistics;

/// Current grid and the statistics that describe it.
///
/// Bulk edits (region erase, color replacement) recompute the statistics from
/// scratch; single-cell paints patch them incrementally. Either way the
/// statistics always equal a full recompute of the current grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDocument {
    grid: Grid,
    stats: ColorStatistics,
}

impl PatternDocument {
    /// Wraps a grid and computes its statistics.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let stats = ColorStatistics::from_grid(&grid);
        Self { grid, stats }
    }

    /// Replaces the whole grid (e.g. after undo) and recomputes statistics.
    pub fn load(&mut self, grid: Grid) {
        self.stats = ColorStatistics::from_grid(&grid);
        self.grid = grid;
    }

    /// The current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current statistics.
    #[must_use]
    pub fn stats(&self) -> &ColorStatistics {
        &self.stats
    }

    /// Cheap copy of the current grid for an external history stack.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Erases the region of `target_key` around `(row, col)`.
    ///
    /// Returns true if any cell was erased.
    pub fn erase_region(&mut self, row: usize, col: usize, target_key: &str) -> bool {
        let erased = editing::erase_region(&self.grid, row, col, target_key);
        if erased == self.grid {
            return false;
        }
        self.load(erased);
        true
    }

    /// Replaces every bead of `source`'s color with `target`.
    ///
    /// Returns the number of cells replaced; nothing is committed when it is 0.
    pub fn replace_color(&mut self, source: &ColorSelection, target: &ColorSelection) -> usize {
        let outcome = editing::replace_color(&self.grid, source, target);
        if outcome.replaced_count > 0 {
            self.load(outcome.grid);
            tracing::info!(
                "Color replacement done: {} bead(s) of {} replaced with {}",
                outcome.replaced_count,
                source.key,
                target.key
            );
        }
        outcome.replaced_count
    }

    /// Paints one cell and patches the statistics.
    ///
    /// Returns true if the cell changed.
    pub fn paint_cell(&mut self, row: usize, col: usize, color: &ColorSelection) -> bool {
        let outcome = editing::paint_cell(&self.grid, row, col, color);
        let PaintOutcome {
            grid,
            previous_cell: Some(previous),
            changed: true,
        } = outcome
        else {
            return false;
        };

        self.grid = grid;
        if let Some(current) = self.grid.get(row, col) {
            self.stats.apply_paint(&previous, current);
        }
        true
    }

    /// Switches every bead's display key to `catalog` codes.
    ///
    /// Colors and statistics are unaffected.
    pub fn recode(&mut self, catalog: Catalog) {
        self.grid = editing::recode_keys(&self.grid, catalog);
    }
}

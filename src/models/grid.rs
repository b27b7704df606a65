//! Rectangular cell grid with copy-on-write rows.

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellPosition};

/// Grid size: `columns` (N) by `rows` (M).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Number of columns (N)
    pub columns: usize,
    /// Number of rows (M)
    pub rows: usize,
}

impl GridDimensions {
    /// Creates dimensions from a column and row count.
    #[must_use]
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Checks whether a coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }
}

/// Immutable-by-value snapshot of a bead pattern, indexed `[row][col]`.
///
/// Rows are reference-counted. Cloning a grid is cheap and writing through
/// [`Grid::replace_cell`] copies only the touched row, so a snapshot handed
/// out earlier never observes later edits.
///
/// # Validation
///
/// - All rows have the same length
/// - Cells are stored in canonical form (see [`Cell::normalized`])
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    rows: Vec<Arc<Vec<Cell>>>,
    columns: usize,
}

impl Grid {
    /// Builds a grid from row vectors.
    ///
    /// Every cell is normalized on the way in, so hex colors are uppercase
    /// and any cell keyed with the erase key is external.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != columns) {
            anyhow::bail!(
                "Grid row {index} has {} cells, expected {columns} (rows must be rectangular)",
                row.len()
            );
        }

        Ok(Self {
            rows: rows
                .into_iter()
                .map(|row| Arc::new(row.into_iter().map(Cell::normalized).collect()))
                .collect(),
            columns,
        })
    }

    /// Builds a grid where every cell is a clone of `cell`.
    #[must_use]
    pub fn filled(dimensions: GridDimensions, cell: &Cell) -> Self {
        let cell = cell.clone().normalized();
        Self {
            rows: (0..dimensions.rows)
                .map(|_| Arc::new(vec![cell.clone(); dimensions.columns]))
                .collect(),
            columns: dimensions.columns,
        }
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.columns, self.rows.len())
    }

    /// Checks if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns == 0
    }

    /// Gets the cell at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    /// Gets the cell at a position.
    #[must_use]
    pub fn get_at(&self, position: CellPosition) -> Option<&Cell> {
        self.get(position.row, position.col)
    }

    /// Iterates over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Iterates over every cell in row-major order with its position.
    pub fn cells(&self) -> impl Iterator<Item = (CellPosition, &Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (CellPosition::new(row, col), cell))
        })
    }

    /// Replaces the cell at `(row, col)` and returns the previous one.
    ///
    /// Only the affected row is copied, and only if another snapshot still
    /// shares it. Out-of-bounds coordinates leave the grid untouched and
    /// return `None`.
    pub fn replace_cell(&mut self, row: usize, col: usize, cell: Cell) -> Option<Cell> {
        if !self.dimensions().contains(row, col) {
            return None;
        }
        let cells = Arc::make_mut(&mut self.rows[row]);
        Some(std::mem::replace(&mut cells[col], cell))
    }

    /// Rewrites every cell for which `rewrite` returns a replacement.
    ///
    /// Rows without any replacement stay shared with earlier snapshots.
    /// Returns the number of cells rewritten.
    pub fn rewrite_cells<F>(&mut self, mut rewrite: F) -> usize
    where
        F: FnMut(CellPosition, &Cell) -> Option<Cell>,
    {
        let mut rewritten = 0;
        for (row, cells) in self.rows.iter_mut().enumerate() {
            let replacements: Vec<(usize, Cell)> = cells
                .iter()
                .enumerate()
                .filter_map(|(col, cell)| {
                    rewrite(CellPosition::new(row, col), cell).map(|new_cell| (col, new_cell))
                })
                .collect();

            if replacements.is_empty() {
                continue;
            }

            rewritten += replacements.len();
            let cells = Arc::make_mut(cells);
            for (col, new_cell) in replacements {
                cells[col] = new_cell;
            }
        }
        rewritten
    }

    /// Checks whether this grid and `other` share the storage of `row`.
    #[must_use]
    pub fn shares_row_with(&self, other: &Self, row: usize) -> bool {
        match (self.rows.get(row), other.rows.get(row)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Copies the grid into plain row vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows.iter().map(|row| row.as_ref().clone()).collect()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = anyhow::Error;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.rows
            .into_iter()
            .map(|row| Arc::try_unwrap(row).unwrap_or_else(|shared| shared.as_ref().clone()))
            .collect()
    }
}

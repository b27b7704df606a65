//! Grid editing operations.
//!
//! Every operation takes the current snapshot by reference and returns a new
//! one; the input grid is never modified. Only rows that actually change are
//! copied, the rest stay shared with the input.

use crate::catalog::{Catalog, ColorCatalog};
use crate::models::{Cell, CellPosition, ColorSelection, Grid};
use crate::services::regions::grow_region;

/// Result of [`replace_color`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// Grid after the substitution
    pub grid: Grid,
    /// Number of cells rewritten
    pub replaced_count: usize,
}

/// Result of [`paint_cell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintOutcome {
    /// Grid after painting (the input grid when nothing changed)
    pub grid: Grid,
    /// Cell that was at the target position, `None` when out of bounds
    pub previous_cell: Option<Cell>,
    /// True if the cell's key or external flag changed
    pub changed: bool,
}

impl PaintOutcome {
    /// The cell now at the painted position, if the paint changed anything.
    #[must_use]
    pub fn painted_cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if self.changed {
            self.grid.get(row, col)
        } else {
            None
        }
    }
}

/// Erases the 4-connected region of cells whose key is `target_key`,
/// starting at `(start_row, start_col)`.
///
/// Every cell in the region becomes the erase sentinel. A seed that is out of
/// bounds, external, or carries another key leaves the grid unchanged.
#[must_use]
pub fn erase_region(grid: &Grid, start_row: usize, start_col: usize, target_key: &str) -> Grid {
    let region = grow_region(grid, CellPosition::new(start_row, start_col), |cell| {
        !cell.is_external && cell.key == target_key
    });

    let mut erased = grid.clone();
    for position in &region {
        erased.replace_cell(position.row, position.col, Cell::erased());
    }

    tracing::debug!(
        "Erased {} cell(s) of key {} from ({}, {})",
        region.len(),
        target_key,
        start_row,
        start_col
    );

    erased
}

/// Replaces every bead of `source.color_hex` with `target`.
///
/// Matching is on color only (case-insensitive); external cells are skipped.
/// Matching cells are rewritten even when source and target share a color,
/// which updates their key.
#[must_use]
pub fn replace_color(grid: &Grid, source: &ColorSelection, target: &ColorSelection) -> ReplaceOutcome {
    let replacement = Cell::new(target.key.clone(), &target.color_hex);

    let mut replaced = grid.clone();
    let replaced_count = replaced.rewrite_cells(|_, cell| {
        cell.has_color(&source.color_hex).then(|| replacement.clone())
    });

    tracing::debug!(
        "Replaced {} cell(s) of {} ({}) with {} ({})",
        replaced_count,
        source.key,
        source.color_hex,
        target.key,
        target.color_hex
    );

    ReplaceOutcome {
        grid: replaced,
        replaced_count,
    }
}

/// Paints a single cell with `color`.
///
/// Painting with the eraser produces the erase sentinel. The returned grid is
/// the input itself when the key and external flag are already the same, or
/// when the position is out of bounds (then `previous_cell` is `None`).
#[must_use]
pub fn paint_cell(grid: &Grid, row: usize, col: usize, color: &ColorSelection) -> PaintOutcome {
    let Some(current) = grid.get(row, col) else {
        return PaintOutcome {
            grid: grid.clone(),
            previous_cell: None,
            changed: false,
        };
    };

    let painted = color.to_cell();
    let changed = painted.key != current.key || painted.is_external != current.is_external;

    let mut next = grid.clone();
    if changed {
        next.replace_cell(row, col, painted);
    }

    PaintOutcome {
        grid: next,
        previous_cell: Some(current.clone()),
        changed,
    }
}

/// Rewrites the display key of every bead cell to its code in `catalog`.
///
/// External cells keep their key. Colors the catalog does not stock get the
/// unknown code.
#[must_use]
pub fn recode_keys(grid: &Grid, catalog: Catalog) -> Grid {
    recode_keys_with(ColorCatalog::global(), grid, catalog)
}

/// [`recode_keys`] against an explicit catalog table.
#[must_use]
pub fn recode_keys_with(table: &ColorCatalog, grid: &Grid, catalog: Catalog) -> Grid {
    let mut recoded = grid.clone();
    let rewritten = recoded.rewrite_cells(|_, cell| {
        if cell.is_external {
            return None;
        }
        let code = table.code_for(&cell.color_hex, catalog);
        (code != cell.key).then(|| Cell {
            key: code,
            ..cell.clone()
        })
    });

    tracing::debug!("Recoded {} cell(s) to {}", rewritten, catalog);
    recoded
}

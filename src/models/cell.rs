//! Cell and color selection data structures.

use serde::{Deserialize, Serialize};

use crate::constants::{ERASE_KEY, ERASE_PLACEHOLDER_HEX};
use crate::models::rgb::{normalize_hex, same_hex};

/// Grid coordinate of a single cell.
///
/// Rows grow downward, columns grow to the right; both are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPosition {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based)
    pub col: usize,
}

impl CellPosition {
    /// Creates a new position with the given row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn manhattan_distance(&self, other: &Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// One grid position holding a bead color.
///
/// `color_hex` is the comparison key; `key` is the vendor code shown to the
/// user under the active catalog. External cells hold no bead and are ignored
/// by regions and statistics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Vendor color code (display metadata)
    pub key: String,
    /// `#RRGGBB` color, uppercase
    pub color_hex: String,
    /// True when no bead is placed here
    #[serde(default)]
    pub is_external: bool,
}

impl Cell {
    /// Creates a bead cell. The hex color is normalized to uppercase.
    pub fn new(key: impl Into<String>, color_hex: &str) -> Self {
        Self {
            key: key.into(),
            color_hex: normalize_hex(color_hex),
            is_external: false,
        }
    }

    /// Creates an external (background) cell that keeps its color.
    pub fn external(key: impl Into<String>, color_hex: &str) -> Self {
        Self {
            is_external: true,
            ..Self::new(key, color_hex)
        }
    }

    /// The erase sentinel: no bead, reserved key, placeholder color.
    #[must_use]
    pub fn erased() -> Self {
        Self {
            key: ERASE_KEY.to_string(),
            color_hex: ERASE_PLACEHOLDER_HEX.to_string(),
            is_external: true,
        }
    }

    /// Checks if this cell carries the reserved erase key.
    #[must_use]
    pub fn is_erased(&self) -> bool {
        self.key == ERASE_KEY
    }

    /// Brings a cell read from outside the engine into canonical form.
    ///
    /// Any cell carrying the erase key becomes the erase sentinel, and the
    /// hex color of every other cell is uppercased.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.is_erased() {
            return Self::erased();
        }
        Self {
            color_hex: normalize_hex(&self.color_hex),
            ..self
        }
    }

    /// Checks if this cell holds a physical bead and so counts in statistics.
    #[must_use]
    pub fn is_countable(&self) -> bool {
        !self.is_external && !self.is_erased()
    }

    /// Checks if this cell is a bead of the given color.
    #[must_use]
    pub fn has_color(&self, hex: &str) -> bool {
        !self.is_external && same_hex(&self.color_hex, hex)
    }
}

/// A color picked from the palette or sampled from the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSelection {
    /// Vendor color code, or the reserved erase key
    pub key: String,
    /// `#RRGGBB` color
    pub color_hex: String,
    /// Selection refers to a background cell
    #[serde(default)]
    pub is_external: bool,
}

impl ColorSelection {
    /// Creates a selection for a bead color.
    pub fn new(key: impl Into<String>, color_hex: &str) -> Self {
        Self {
            key: key.into(),
            color_hex: normalize_hex(color_hex),
            is_external: false,
        }
    }

    /// The eraser brush.
    #[must_use]
    pub fn eraser() -> Self {
        Self {
            key: ERASE_KEY.to_string(),
            color_hex: ERASE_PLACEHOLDER_HEX.to_string(),
            is_external: true,
        }
    }

    /// Checks if this selection is the eraser.
    #[must_use]
    pub fn is_eraser(&self) -> bool {
        self.key == ERASE_KEY
    }

    /// The cell that painting with this selection produces.
    ///
    /// The eraser always yields the erase sentinel; any other selection yields
    /// a bead cell regardless of its `is_external` flag.
    #[must_use]
    pub fn to_cell(&self) -> Cell {
        if self.is_eraser() {
            Cell::erased()
        } else {
            Cell::new(self.key.clone(), &self.color_hex)
        }
    }
}

impl From<&Cell> for ColorSelection {
    fn from(cell: &Cell) -> Self {
        Self {
            key: cell.key.clone(),
            color_hex: cell.color_hex.clone(),
            is_external: cell.is_external,
        }
    }
}

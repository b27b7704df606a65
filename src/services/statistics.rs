//! Per-color bead counts.
//!
//! [`ColorStatistics::from_grid`] is the source of truth. After a single-cell
//! paint the statistics may instead be patched with
//! [`ColorStatistics::apply_paint`], which must always agree with a full
//! recompute of the painted grid.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::rgb::{normalize_hex, sort_by_hue};
use crate::models::{Cell, CellPosition, Grid};

/// Bead count of a single color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorCount {
    /// Number of bead cells with this color
    pub count: usize,
    /// Normalized `#RRGGBB`
    pub color_hex: String,
}

/// Bead counts keyed by normalized hex color, plus the overall total.
///
/// # Invariants
///
/// - `total_count` equals the sum of all counts
/// - no entry has a zero count
///
/// Statistics are only ever built from a grid, never read back from JSON, so
/// the invariants cannot be broken from outside the crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorStatistics {
    counts: BTreeMap<String, ColorCount>,
    total_count: usize,
}

impl ColorStatistics {
    /// Counts every bead cell of `grid` in a single pass.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut stats = Self::default();
        for (_, cell) in grid.cells() {
            if cell.is_countable() {
                stats.increment(&cell.color_hex);
            }
        }
        stats
    }

    /// Patches the counts for one painted cell.
    ///
    /// The previous color loses one bead if `previous` was counted, and the
    /// new color gains one if `current` is countable.
    pub fn apply_paint(&mut self, previous: &Cell, current: &Cell) {
        if previous.is_countable() {
            self.decrement(&previous.color_hex);
        }
        if current.is_countable() {
            self.increment(&current.color_hex);
        }
    }

    fn increment(&mut self, hex: &str) {
        let hex = normalize_hex(hex);
        self.counts
            .entry(hex.clone())
            .or_insert_with(|| ColorCount {
                count: 0,
                color_hex: hex,
            })
            .count += 1;
        self.total_count += 1;
    }

    fn decrement(&mut self, hex: &str) {
        let hex = normalize_hex(hex);
        let Some(entry) = self.counts.get_mut(&hex) else {
            tracing::warn!("Bead count for {hex} missing while removing a bead");
            return;
        };

        entry.count -= 1;
        if entry.count == 0 {
            self.counts.remove(&hex);
        }
        self.total_count = self.total_count.saturating_sub(1);
    }

    /// Total number of bead cells.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Count for a color (case-insensitive), 0 when absent.
    #[must_use]
    pub fn count_of(&self, hex: &str) -> usize {
        self.get(hex).map_or(0, |entry| entry.count)
    }

    /// Entry for a color (case-insensitive).
    #[must_use]
    pub fn get(&self, hex: &str) -> Option<&ColorCount> {
        self.counts.get(&normalize_hex(hex))
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Checks if no beads are counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over entries in hex order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorCount> + '_ {
        self.counts.values()
    }

    /// Entries ordered for palette display (by hue, light to dark).
    #[must_use]
    pub fn entries_by_hue(&self) -> Vec<ColorCount> {
        let entries: Vec<ColorCount> = self.counts.values().cloned().collect();
        sort_by_hue(&entries, |entry| entry.color_hex.as_str())
    }

    /// Checks that these statistics equal a full recompute of `grid`.
    #[must_use]
    pub fn matches_grid(&self, grid: &Grid) -> bool {
        *self == Self::from_grid(grid)
    }
}

/// Full recompute; same as [`ColorStatistics::from_grid`].
#[must_use]
pub fn recompute_stats(grid: &Grid) -> ColorStatistics {
    ColorStatistics::from_grid(grid)
}

/// Number of cells in `done` that hold a bead of `hex`.
#[must_use]
pub fn completed_count(grid: &Grid, done: &HashSet<CellPosition>, hex: &str) -> usize {
    done.iter()
        .filter_map(|position| grid.get_at(*position))
        .filter(|cell| cell.is_countable() && cell.has_color(hex))
        .count()
}

/// Whole-number completion percentage, floored and capped at 100.
///
/// Returns 0 when there is nothing to complete.
#[must_use]
pub fn progress_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = completed.min(total) * 100 / total;
    u8::try_from(percent).unwrap_or(100)
}

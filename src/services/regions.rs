//! Connected-region analysis.
//!
//! A region is a maximal set of same-colored bead cells reachable through
//! up/down/left/right neighbors. External cells never belong to a region and
//! act as walls.

use std::collections::HashSet;

use crate::models::{Cell, CellPosition, Grid};

/// Ordered list of member positions, in discovery order.
pub type Region = Vec<CellPosition>;

/// 4-connected flood fill from `start`, accepting cells for which `matches`
/// returns true.
///
/// Uses an explicit stack, so region size is bounded by memory rather than
/// call depth. Returns an empty region when the seed is out of bounds or
/// rejected by `matches`.
pub(crate) fn grow_region<F>(grid: &Grid, start: CellPosition, matches: F) -> Region
where
    F: Fn(&Cell) -> bool,
{
    let mut visited = vec![false; grid.dimensions().cell_count()];
    grow_region_marking(grid, start, &matches, &mut visited)
}

/// Flood fill that records members in a caller-owned `visited` buffer
/// (row-major, one flag per cell), so consecutive fills can skip cells an
/// earlier fill already claimed.
fn grow_region_marking<F>(
    grid: &Grid,
    start: CellPosition,
    matches: &F,
    visited: &mut [bool],
) -> Region
where
    F: Fn(&Cell) -> bool,
{
    let dimensions = grid.dimensions();
    let mut region = Vec::new();

    if !dimensions.contains(start.row, start.col) {
        return region;
    }

    let mut stack = vec![start];

    while let Some(position) = stack.pop() {
        let index = position.row * dimensions.columns + position.col;
        if visited[index] {
            continue;
        }

        let Some(cell) = grid.get_at(position) else {
            continue;
        };
        if !matches(cell) {
            continue;
        }

        visited[index] = true;
        region.push(position);

        let CellPosition { row, col } = position;
        if row > 0 {
            stack.push(CellPosition::new(row - 1, col));
        }
        if row + 1 < dimensions.rows {
            stack.push(CellPosition::new(row + 1, col));
        }
        if col > 0 {
            stack.push(CellPosition::new(row, col - 1));
        }
        if col + 1 < dimensions.columns {
            stack.push(CellPosition::new(row, col + 1));
        }
    }

    region
}

/// Collects the connected region of `target_hex` containing `(start_row, start_col)`.
///
/// The hex comparison is case-insensitive. Returns an empty region if the
/// seed is out of bounds, external, or a different color.
///
/// # Examples
///
/// ```
/// use beadgrid::models::{Cell, Grid, GridDimensions};
/// use beadgrid::services::regions::region_from;
///
/// let grid = Grid::filled(GridDimensions::new(2, 2), &Cell::new("A1", "#FF0000"));
/// assert_eq!(region_from(&grid, 0, 0, "#ff0000").len(), 4);
/// assert!(region_from(&grid, 9, 9, "#FF0000").is_empty());
/// ```
#[must_use]
pub fn region_from(grid: &Grid, start_row: usize, start_col: usize, target_hex: &str) -> Region {
    grow_region(grid, CellPosition::new(start_row, start_col), |cell| {
        cell.has_color(target_hex)
    })
}

/// Partitions every bead cell of `target_hex` into disjoint regions.
///
/// Regions are discovered in row-major order of their first cell.
#[must_use]
pub fn all_regions_of(grid: &Grid, target_hex: &str) -> Vec<Region> {
    let dimensions = grid.dimensions();
    let matches = |cell: &Cell| cell.has_color(target_hex);
    let mut visited = vec![false; dimensions.cell_count()];
    let mut regions = Vec::new();

    for (position, cell) in grid.cells() {
        let index = position.row * dimensions.columns + position.col;
        if visited[index] || !matches(cell) {
            continue;
        }
        regions.push(grow_region_marking(grid, position, &matches, &mut visited));
    }

    tracing::debug!(
        "Found {} region(s) of {} covering {} cell(s)",
        regions.len(),
        target_hex,
        regions.iter().map(Vec::len).sum::<usize>()
    );

    regions
}

/// Checks if every member of `region` is in `done`.
///
/// An empty region counts as done.
#[must_use]
pub fn is_fully_done(region: &[CellPosition], done: &HashSet<CellPosition>) -> bool {
    region.iter().all(|position| done.contains(position))
}

/// Checks if at least one member of `region` is in `done`.
#[must_use]
pub fn is_partially_done(region: &[CellPosition], done: &HashSet<CellPosition>) -> bool {
    region.iter().any(|position| done.contains(position))
}

/// Mean member coordinate, floored. `(0, 0)` for an empty region.
#[must_use]
pub fn center_of(region: &[CellPosition]) -> CellPosition {
    if region.is_empty() {
        return CellPosition::new(0, 0);
    }

    let (row_sum, col_sum) = region
        .iter()
        .fold((0usize, 0usize), |(rows, cols), p| (rows + p.row, cols + p.col));

    CellPosition::new(row_sum / region.len(), col_sum / region.len())
}

/// Sorts regions by Manhattan distance from `reference` to each center, nearest first.
///
/// The sort is stable: equidistant regions keep their input order.
#[must_use]
pub fn order_by_distance(mut regions: Vec<Region>, reference: CellPosition) -> Vec<Region> {
    regions.sort_by_cached_key(|region| center_of(region).manhattan_distance(&reference));
    regions
}

/// Sorts regions by member count, largest first. Stable for equal sizes.
#[must_use]
pub fn order_by_size(mut regions: Vec<Region>) -> Vec<Region> {
    regions.sort_by(|a, b| b.len().cmp(&a.len()));
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GridDimensions;

    fn grid_from(pattern: &[&str]) -> Grid {
        // 'R' red, 'B' blue, '.' external
        let rows = pattern
            .iter()
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        'R' => Cell::new("R", "#FF0000"),
                        'B' => Cell::new("B", "#0000FF"),
                        _ => Cell::erased(),
                    })
                    .collect()
            })
            .collect();
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_region_stops_at_other_colors() {
        let grid = grid_from(&["RRB", "BRB", "BBR"]);
        let region = region_from(&grid, 0, 0, "#FF0000");
        let cells: HashSet<_> = region.into_iter().collect();
        assert_eq!(
            cells,
            HashSet::from([
                CellPosition::new(0, 0),
                CellPosition::new(0, 1),
                CellPosition::new(1, 1)
            ])
        );
    }

    #[test]
    fn test_diagonal_is_not_connected() {
        let grid = grid_from(&["RB", "BR"]);
        assert_eq!(region_from(&grid, 0, 0, "#FF0000").len(), 1);
    }

    #[test]
    fn test_seed_with_wrong_color_is_empty() {
        let grid = grid_from(&["RB"]);
        assert!(region_from(&grid, 0, 1, "#FF0000").is_empty());
    }

    #[test]
    fn test_zero_sized_grid() {
        let grid = Grid::filled(GridDimensions::new(0, 0), &Cell::erased());
        assert!(region_from(&grid, 0, 0, "#FF0000").is_empty());
        assert!(all_regions_of(&grid, "#FF0000").is_empty());
    }

    #[test]
    fn test_large_region_does_not_overflow_stack() {
        let grid = Grid::filled(GridDimensions::new(400, 400), &Cell::new("R", "#FF0000"));
        assert_eq!(region_from(&grid, 200, 200, "#FF0000").len(), 160_000);
    }

    #[test]
    fn test_all_regions_row_major_discovery() {
        let grid = grid_from(&["R.R", "...", "RR."]);
        let regions = all_regions_of(&grid, "#FF0000");
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0], vec![CellPosition::new(0, 0)]);
        assert_eq!(regions[1], vec![CellPosition::new(0, 2)]);
        assert_eq!(regions[2].len(), 2);
    }

    #[test]
    fn test_done_predicates() {
        let region = vec![CellPosition::new(0, 0), CellPosition::new(0, 1)];
        let mut done = HashSet::new();
        assert!(!is_partially_done(&region, &done));
        assert!(!is_fully_done(&region, &done));

        done.insert(CellPosition::new(0, 1));
        assert!(is_partially_done(&region, &done));
        assert!(!is_fully_done(&region, &done));

        done.insert(CellPosition::new(0, 0));
        assert!(is_fully_done(&region, &done));
        assert!(is_fully_done(&[], &done));
    }

    #[test]
    fn test_center_of_floors() {
        let region = vec![
            CellPosition::new(0, 0),
            CellPosition::new(0, 1),
            CellPosition::new(1, 1),
        ];
        assert_eq!(center_of(&region), CellPosition::new(0, 0));
        assert_eq!(center_of(&[]), CellPosition::new(0, 0));
        assert_eq!(
            center_of(&[CellPosition::new(3, 4), CellPosition::new(5, 8)]),
            CellPosition::new(4, 6)
        );
    }

    #[test]
    fn test_order_by_distance_is_stable() {
        let near_a = vec![CellPosition::new(0, 1)];
        let far = vec![CellPosition::new(5, 5)];
        let near_b = vec![CellPosition::new(1, 0)];
        let ordered = order_by_distance(
            vec![far.clone(), near_a.clone(), near_b.clone()],
            CellPosition::new(0, 0),
        );
        assert_eq!(ordered, vec![near_a, near_b, far]);
    }

    #[test]
    fn test_order_by_size_is_stable() {
        let small_a = vec![CellPosition::new(0, 0)];
        let big = vec![CellPosition::new(1, 0), CellPosition::new(1, 1)];
        let small_b = vec![CellPosition::new(3, 3)];
        let ordered = order_by_size(vec![small_a.clone(), big.clone(), small_b.clone()]);
        assert_eq!(ordered, vec![big, small_a, small_b]);
    }
}

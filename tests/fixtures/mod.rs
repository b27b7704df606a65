//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use beadgrid::models::{Cell, Grid};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Catalog entry used by tests: MARD A1 / COCO E01.
pub const PINK_HEX: &str = "#F3CECE";
/// Catalog entry used by tests: MARD A2 / COCO E02.
pub const ROSE_HEX: &str = "#ECA7A7";
/// Catalog entry used by tests: MARD H11.
pub const WHITE_HEX: &str = "#FFFFFF";

/// Maps a pattern character to a cell.
///
/// - `R`, `G`, `B`: red, green and blue beads (keys `R1`, `G1`, `B1`)
/// - `P`, `Q`: catalog colors A1 and A2
/// - `.`: external (background) cell
/// - `x`: erased cell
pub fn cell_for(symbol: char) -> Cell {
    match symbol {
        'R' => Cell::new("R1", "#FF0000"),
        'G' => Cell::new("G1", "#00FF00"),
        'B' => Cell::new("B1", "#0000FF"),
        'P' => Cell::new("A1", PINK_HEX),
        'Q' => Cell::new("A2", ROSE_HEX),
        '.' => Cell::external("BG", "#000000"),
        'x' => Cell::erased(),
        other => panic!("Unknown pattern symbol '{other}'"),
    }
}

/// Builds a grid from one string per row.
///
/// # Example
///
/// ```ignore
/// let grid = grid_from(&["RRG", "R.G"]);
/// ```
pub fn grid_from(pattern: &[&str]) -> Grid {
    let rows = pattern
        .iter()
        .map(|row| row.chars().map(cell_for).collect())
        .collect();
    Grid::from_rows(rows).expect("Pattern rows must have equal length")
}

/// Deterministic pseudo-random grid of `R`, `G`, `B` and `.` cells.
///
/// Uses a fixed linear congruential generator so failures are reproducible.
pub fn scrambled_grid(rows: usize, cols: usize, seed: u64) -> Grid {
    const SYMBOLS: [char; 4] = ['R', 'G', 'B', '.'];
    let mut state = seed;
    let rows = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    state = state
                        .wrapping_mul(6_364_136_223_846_793_005)
                        .wrapping_add(1_442_695_040_888_963_407);
                    #[allow(clippy::cast_possible_truncation)]
                    let index = ((state >> 33) % 4) as usize;
                    cell_for(SYMBOLS[index])
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).expect("Generated rows have equal length")
}

/// Writes a grid as JSON into `dir` and returns its path.
pub fn write_grid_file(dir: &Path, name: &str, grid: &Grid) -> PathBuf {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(grid).expect("Failed to serialize grid");
    fs::write(&path, json).expect("Failed to write grid file");
    path
}

/// Reads a grid JSON file.
pub fn read_grid_file(path: &Path) -> Grid {
    let json = fs::read_to_string(path).expect("Failed to read grid file");
    serde_json::from_str(&json).expect("Failed to parse grid file")
}

/// Path to the beadgrid binary.
pub fn beadgrid_bin() -> String {
    env!("CARGO_BIN_EXE_beadgrid").to_string()
}

/// Creates a Command with an isolated config directory.
pub fn beadgrid_command(config_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(beadgrid_bin());
    cmd.env("BEADGRID_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

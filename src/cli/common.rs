//! Shared CLI plumbing: error types, exit codes, and grid file I/O.

use beadgrid::catalog::{self, Catalog, ColorCatalog};
use beadgrid::config::Config;
use beadgrid::constants::ERASE_KEY;
use beadgrid::models::{CellPosition, ColorSelection, Grid, RgbColor};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was rejected
    ValidationError = 1,
    /// A file could not be read or written
    IoError = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad arguments or bad input data
    Validation,
    /// Filesystem or serialization failure
    Io,
}

/// Error reported by a CLI command.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Failure category, decides the exit code
    pub kind: ErrorKind,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            ErrorKind::Validation => ExitCode::ValidationError,
            ErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the user config, falling back to defaults when it is unreadable.
pub fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable configuration: {e:#}");
        Config::default()
    })
}

/// Installs the catalog table named in the config before any lookup runs.
///
/// Without a configured table the built-in sample table stays in effect.
pub fn install_catalog_table() {
    let config = load_config();
    let path = match config.catalog_table_path() {
        Ok(Some(path)) => path,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!("Cannot locate catalog table: {e:#}");
            return;
        }
    };

    match ColorCatalog::from_file(&path).and_then(ColorCatalog::install) {
        Ok(table) => tracing::debug!(
            "Using catalog table {} from {} ({} colors)",
            table.version(),
            path.display(),
            table.len()
        ),
        Err(e) => tracing::warn!("Using the built-in sample catalog table: {e:#}"),
    }
}

/// Resolves a `--catalog` argument, defaulting to the configured catalog.
pub fn resolve_catalog(arg: Option<&str>, config: &Config) -> CliResult<Catalog> {
    arg.map_or(Ok(config.catalog.default), |name| {
        name.parse()
            .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))
    })
}

/// Reads a grid from a JSON file holding an array of rows.
pub fn read_grid(path: &Path) -> CliResult<Grid> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read grid {}: {e}", path.display())))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::validation(format!("Invalid grid {}: {e}", path.display())))
}

/// Reads a done set from a JSON file holding an array of `{row, col}` positions.
pub fn read_done_set(path: &Path) -> CliResult<HashSet<CellPosition>> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read done set {}: {e}", path.display())))?;

    let positions: Vec<CellPosition> = serde_json::from_str(&content)
        .map_err(|e| CliError::validation(format!("Invalid done set {}: {e}", path.display())))?;
    Ok(positions.into_iter().collect())
}

/// Serializes a value as JSON, indented when `pretty` is set.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}

/// Writes a grid to `output`, or to stdout when no path is given.
pub fn write_grid(grid: &Grid, output: Option<&Path>, pretty: bool) -> CliResult<()> {
    let json = to_json(grid, pretty)?;

    match output {
        Some(path) => fs::write(path, json + "\n")
            .map_err(|e| CliError::io(format!("Failed to write grid {}: {e}", path.display()))),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

/// Builds a color selection from a catalog code, a `#RRGGBB` literal, or the erase key.
///
/// A hex literal gets its key from `catalog`; a code must exist in `catalog`.
pub fn parse_color(value: &str, catalog: Catalog) -> CliResult<ColorSelection> {
    if value.eq_ignore_ascii_case(ERASE_KEY) {
        return Ok(ColorSelection::eraser());
    }

    if value.starts_with('#') {
        let hex = RgbColor::from_hex(value)
            .map_err(|e| CliError::validation(format!("{e:#}")))?
            .to_hex();
        return Ok(ColorSelection::new(catalog::code_for(&hex, catalog), &hex));
    }

    let hex = catalog::hex_for(value, catalog);
    if hex == value {
        return Err(CliError::validation(format!(
            "Unknown {catalog} color code '{value}'"
        )));
    }
    Ok(ColorSelection::new(value, &hex))
}

/// Checks that `(row, col)` lies inside the grid.
pub fn check_position(grid: &Grid, row: usize, col: usize) -> CliResult<()> {
    if grid.get(row, col).is_none() {
        let dims = grid.dimensions();
        return Err(CliError::validation(format!(
            "Position ({row}, {col}) is outside the {}x{} grid",
            dims.rows, dims.columns
        )));
    }
    Ok(())
}

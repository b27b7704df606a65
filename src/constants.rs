//! Application-wide constants.
//!
//! This module defines the reserved keys and placeholder values shared by the
//! editing engine, plus the application name used by the CLI and config.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "BeadGrid";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "beadgrid";

/// Reserved key marking a cell that holds no bead.
///
/// Never a valid catalog code. A cell carrying this key is always external.
pub const ERASE_KEY: &str = "ERASE";

/// Hex color stored on erased cells.
pub const ERASE_PLACEHOLDER_HEX: &str = "#FFFFFF";

/// Code returned when a hex color has no entry in the requested catalog.
pub const UNKNOWN_CODE: &str = "?";

//! Data models for bead pattern grids.
//!
//! This module contains the core data structures used throughout the engine.
//! Models are independent of editing logic and of any display surface.

pub mod cell;
pub mod grid;
pub mod rgb;

// Re-export all model types
pub use cell::{Cell, CellPosition, ColorSelection};
pub use grid::{Grid, GridDimensions};
pub use rgb::RgbColor;

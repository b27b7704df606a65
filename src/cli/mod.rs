//! CLI command handlers for BeadGrid.
//!
//! This module provides headless, scriptable access to the editing engine
//! for automation and testing. Grids are read from and written to JSON files
//! holding an array of rows of cells.

pub mod catalog;
pub mod common;
pub mod config;
pub mod erase;
pub mod paint;
pub mod recode;
pub mod regions;
pub mod replace;
pub mod stats;

// Re-export types used by main.rs
pub use catalog::CatalogArgs;
pub use common::{install_catalog_table, CliError, ExitCode};
pub use config::ConfigArgs;
pub use erase::EraseArgs;
pub use paint::PaintArgs;
pub use recode::RecodeArgs;
pub use regions::RegionsArgs;
pub use replace::ReplaceArgs;
pub use stats::StatsArgs;

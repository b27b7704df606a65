//! Service layer for grid analysis and editing.
//!
//! This module contains the algorithms that read and transform pattern grids,
//! and the document type that keeps a grid and its statistics in step.

pub mod document;
pub mod editing;
pub mod regions;
pub mod statistics;

// Re-export commonly used types and functions
pub use document::PatternDocument;
pub use editing::{erase_region, paint_cell, recode_keys, replace_color, PaintOutcome, ReplaceOutcome};
pub use regions::{
    all_regions_of, center_of, is_fully_done, is_partially_done, order_by_distance, order_by_size,
    region_from, Region,
};
pub use statistics::{
    completed_count, progress_percentage, recompute_stats, ColorCount, ColorStatistics,
};

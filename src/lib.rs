//! BeadGrid Library
//!
//! This library provides the editing engine behind the BeadGrid bead-pattern
//! editor: translating colors between vendor catalogs, finding connected
//! regions of one color, editing the grid, keeping bead statistics current,
//! and driving the manual editing tools.
//!
//! The engine never touches the filesystem or a display; snapshots come in as
//! values and new snapshots go out.

// Module declarations
pub mod catalog;
pub mod config;
pub mod constants;
pub mod editor;
pub mod models;
pub mod services;

//! Editing mode controller.
//!
//! [`PatternEditor`] receives palette and canvas events from the surrounding
//! UI, checks them against the active [`EditMode`], and runs the matching
//! grid operation on its [`PatternDocument`]. Events that do not apply to the
//! current mode are ignored without error.
//!
//! The controller is driven by one caller at a time and holds no locks.

pub mod mode;

pub use mode::{EditMode, EditOutcome, ReplaceStep};

use crate::catalog::Catalog;
use crate::models::rgb::normalize_hex;
use crate::models::{ColorSelection, Grid};
use crate::services::{ColorStatistics, PatternDocument};

/// Tool state plus the document it edits.
#[derive(Debug, Clone, Default)]
pub struct PatternEditor {
    document: PatternDocument,
    mode: EditMode,
    /// Last palette pick; painted on click while idle
    brush: Option<ColorSelection>,
    /// Hex color the display layer should emphasize
    highlight: Option<String>,
}

impl PatternEditor {
    /// Creates an editor for `grid` with manual editing off.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            document: PatternDocument::new(grid),
            mode: EditMode::Inactive,
            brush: None,
            highlight: None,
        }
    }

    /// The active tool.
    #[must_use]
    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    /// Highlighted hex color, if any.
    #[must_use]
    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref()
    }

    /// The brush color, if one is selected.
    ///
    /// A pick made while a replacement waits for its source is kept here and
    /// paints once replacement mode is left.
    #[must_use]
    pub fn selected_color(&self) -> Option<&ColorSelection> {
        self.brush.as_ref()
    }

    /// The document being edited.
    #[must_use]
    pub fn document(&self) -> &PatternDocument {
        &self.document
    }

    /// Shortcut for the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.document.grid()
    }

    /// Shortcut for the current statistics.
    #[must_use]
    pub fn stats(&self) -> &ColorStatistics {
        self.document.stats()
    }

    /// Replaces the grid (e.g. when restoring an undo snapshot).
    ///
    /// The tool mode is kept.
    pub fn load_grid(&mut self, grid: Grid) {
        self.document.load(grid);
    }

    /// Switches the display keys of the grid to `catalog` codes.
    pub fn recode(&mut self, catalog: Catalog) {
        self.document.recode(catalog);
    }

    fn set_mode(&mut self, mode: EditMode) {
        tracing::trace!("Edit mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    /// Turns manual editing on with a clean slate: no tool, no brush, no highlight.
    pub fn enter_manual_mode(&mut self) {
        self.set_mode(EditMode::idle());
        self.brush = None;
        self.highlight = None;
    }

    /// Turns manual editing off and clears all tool state.
    pub fn exit_manual_mode(&mut self) {
        self.set_mode(EditMode::Inactive);
        self.brush = None;
        self.highlight = None;
    }

    /// Arms or disarms the erase-all tool.
    ///
    /// Leaves color replacement first if it is active. Arming clears the brush.
    pub fn toggle_erase_mode(&mut self) {
        match self.mode {
            EditMode::Inactive => {}
            EditMode::EraseAll => self.set_mode(EditMode::idle()),
            EditMode::Replace(_) => {
                self.highlight = None;
                self.brush = None;
                self.set_mode(EditMode::EraseAll);
            }
            EditMode::Idle => {
                self.brush = None;
                self.set_mode(EditMode::EraseAll);
            }
        }
    }

    /// Starts or leaves color replacement.
    ///
    /// Starting disarms erase-all, clears the brush and waits for a source.
    /// Leaving clears the highlight and keeps any color picked meanwhile.
    pub fn toggle_color_replace_mode(&mut self) {
        match self.mode {
            EditMode::Inactive => {}
            EditMode::Replace(_) => {
                self.highlight = None;
                self.set_mode(EditMode::idle());
            }
            EditMode::Idle | EditMode::EraseAll => {
                self.brush = None;
                self.set_mode(EditMode::Replace(ReplaceStep::SelectSource));
            }
        }
    }

    /// Handles a color picked from the palette.
    ///
    /// - Waiting for a replacement target: a non-eraser color runs the
    ///   replacement and ends it.
    /// - Replacing and the eraser is picked: replacement ends, eraser becomes the brush.
    /// - Waiting for a replacement source: the color becomes the brush, used
    ///   once replacement mode is left.
    /// - Erase-all armed: it is disarmed and the color becomes the brush.
    /// - Idle: the color becomes the brush.
    pub fn select_color(&mut self, color: ColorSelection) -> EditOutcome {
        match &self.mode {
            EditMode::Inactive => EditOutcome::Ignored,
            EditMode::Replace(step) if color.is_eraser() => {
                tracing::trace!("Eraser picked during replacement ({step:?})");
                self.highlight = None;
                self.brush = Some(color);
                self.set_mode(EditMode::idle());
                EditOutcome::ModeChanged
            }
            EditMode::Replace(ReplaceStep::SelectTarget { source }) => {
                let source = source.clone();
                let count = self.document.replace_color(&source, &color);
                self.complete_color_replace();
                EditOutcome::Replaced(count)
            }
            // The source still has to be sampled from the canvas
            EditMode::Replace(ReplaceStep::SelectSource) => {
                self.brush = Some(color);
                EditOutcome::ModeChanged
            }
            EditMode::EraseAll | EditMode::Idle => {
                self.brush = Some(color);
                self.set_mode(EditMode::idle());
                EditOutcome::ModeChanged
            }
        }
    }

    /// Records the replacement source sampled from the canvas.
    ///
    /// Only honored while waiting for a source. Highlights the source color.
    pub fn select_source_from_canvas(&mut self, color: ColorSelection) -> EditOutcome {
        if self.mode != EditMode::Replace(ReplaceStep::SelectSource) {
            return EditOutcome::Ignored;
        }

        self.highlight = Some(normalize_hex(&color.color_hex));
        self.set_mode(EditMode::Replace(ReplaceStep::SelectTarget { source: color }));
        EditOutcome::ModeChanged
    }

    /// Ends a color replacement and clears the highlight.
    ///
    /// Replacement is single-shot: the next one starts by toggling it on again.
    pub fn complete_color_replace(&mut self) {
        if self.mode.is_replacing() {
            self.set_mode(EditMode::idle());
        }
        self.highlight = None;
    }

    /// Highlights a hex color.
    pub fn set_highlight(&mut self, hex: &str) {
        self.highlight = Some(normalize_hex(hex));
    }

    /// Removes any highlight.
    pub fn clear_highlight(&mut self) {
        self.highlight = None;
    }

    /// Handles a click on the cell at `(row, col)`.
    ///
    /// - Erase-all: erases the clicked bead's connected region (same key).
    /// - Replacement waiting for a source: samples the clicked bead.
    /// - Idle with a brush: paints the cell.
    ///
    /// Clicks outside the grid, on external cells (except when painting), or
    /// in any other mode are ignored.
    pub fn click_cell(&mut self, row: usize, col: usize) -> EditOutcome {
        let Some(cell) = self.document.grid().get(row, col) else {
            return EditOutcome::Ignored;
        };

        match &self.mode {
            EditMode::EraseAll => {
                if cell.is_external {
                    return EditOutcome::Ignored;
                }
                let key = cell.key.clone();
                if self.document.erase_region(row, col, &key) {
                    EditOutcome::Erased
                } else {
                    EditOutcome::Unchanged
                }
            }
            EditMode::Replace(ReplaceStep::SelectSource) => {
                if cell.is_external {
                    return EditOutcome::Ignored;
                }
                let source = ColorSelection::from(cell);
                self.select_source_from_canvas(source)
            }
            EditMode::Idle => {
                let Some(brush) = &self.brush else {
                    return EditOutcome::Ignored;
                };
                if self.document.paint_cell(row, col, brush) {
                    EditOutcome::Painted
                } else {
                    EditOutcome::Unchanged
                }
            }
            EditMode::Inactive | EditMode::Replace(ReplaceStep::SelectTarget { .. }) => {
                EditOutcome::Ignored
            }
        }
    }
}

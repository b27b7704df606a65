//! Editing tool modes.

use crate::models::ColorSelection;

/// Progress through a two-step color replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceStep {
    /// Waiting for the user to pick the color to replace on the canvas
    SelectSource,
    /// Source picked; waiting for the replacement color from the palette
    SelectTarget {
        /// Color being replaced
        source: ColorSelection,
    },
}

/// The active editing tool. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Manual editing is off; canvas clicks and tool toggles are ignored
    #[default]
    Inactive,
    /// Manual editing with no special tool; painting when a brush is selected
    Idle,
    /// Clicking a cell erases its whole connected region
    EraseAll,
    /// Replacing every bead of one color with another
    Replace(ReplaceStep),
}

impl EditMode {
    /// Manual editing with no tool armed.
    #[must_use]
    pub const fn idle() -> Self {
        Self::Idle
    }

    /// Checks if manual editing is on.
    #[must_use]
    pub fn is_manual(&self) -> bool {
        !matches!(self, Self::Inactive)
    }

    /// Checks if the erase-all tool is armed.
    #[must_use]
    pub fn is_erase_all(&self) -> bool {
        matches!(self, Self::EraseAll)
    }

    /// Checks if color replacement is in progress.
    #[must_use]
    pub fn is_replacing(&self) -> bool {
        matches!(self, Self::Replace(_))
    }

    /// The recorded replacement source, when waiting for a target.
    #[must_use]
    pub fn replace_source(&self) -> Option<&ColorSelection> {
        match self {
            Self::Replace(ReplaceStep::SelectTarget { source }) => Some(source),
            _ => None,
        }
    }
}

/// What a dispatched user action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Precondition not met; nothing happened
    Ignored,
    /// Only the tool state changed
    ModeChanged,
    /// A region was erased
    Erased,
    /// This many cells were replaced (0 leaves the grid as it was)
    Replaced(usize),
    /// A cell was painted
    Painted,
    /// The action ran but the grid already matched
    Unchanged,
}

impl EditOutcome {
    /// Checks if the grid changed.
    #[must_use]
    pub const fn grid_changed(&self) -> bool {
        match self {
            Self::Erased | Self::Painted => true,
            Self::Replaced(count) => *count > 0,
            Self::Ignored | Self::ModeChanged | Self::Unchanged => false,
        }
    }
}

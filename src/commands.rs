//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::ops::RangeInclusive;

use crate::model::{DocumentId, Position, TextEdit};
use crate::strings::{EntryKey, StringSpan};

/// Hover text shown on split strings
pub const DECORATION_HOVER: &str = "Split string: collapses back to one line on save";

/// Message shown when a toggle finds no string
pub const NOT_IN_STRING: &str = "Cursor is not inside a string";

/// Registry change to perform once the host confirms an edit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrackingOp {
    #[default]
    None,
    /// Record the freshly split string
    Track(StringSpan),
    /// Forget a string that was merged
    Untrack(EntryKey),
    /// Forget every string of the document (after collapse-all)
    ClearDocument,
}

/// Visual marker for one split string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub lines: RangeInclusive<usize>,
    pub hover: &'static str,
}

impl Decoration {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            lines: start_line..=end_line,
            hover: DECORATION_HOVER,
        }
    }
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Apply a batch of replacements as one unit.
    /// On success the host reports `Changed` then `EditApplied`.
    ApplyEdits {
        document_id: DocumentId,
        edits: Vec<TextEdit>,
        cursor: Option<Position>,
        tracking: TrackingOp,
    },
    /// Show a one-line informational message
    ShowInfo(String),
    /// Replace the decorations of a document
    SetDecorations {
        document_id: DocumentId,
        decorations: Vec<Decoration>,
    },
    /// Start debounce timer for decoration refresh.
    /// After delay_ms, sends Msg::Decorations(RefreshReady)
    DebouncedRefresh {
        document_id: DocumentId,
        revision: u64,
        delay_ms: u64,
    },
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command does nothing
    pub fn is_none(&self) -> bool {
        match self {
            Cmd::None => true,
            Cmd::Batch(cmds) => cmds.iter().all(Cmd::is_none),
            _ => false,
        }
    }
}

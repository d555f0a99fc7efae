//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::commands::TrackingOp;
use crate::config::ToggleConfig;
use crate::model::{ContentChange, Document, DocumentId, Position};

/// Toggle command and the host's answer to its edits
#[derive(Debug, Clone)]
pub enum ToggleMsg {
    /// Split or merge the string under the cursor
    Toggle,
    /// The host applied an `ApplyEdits` batch
    EditApplied {
        document_id: DocumentId,
        tracking: TrackingOp,
        cursor: Option<Position>,
    },
    /// The host refused an `ApplyEdits` batch
    EditRejected {
        document_id: DocumentId,
        reason: String,
    },
}

/// Document lifecycle notifications from the host
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// A document was opened
    Opened(Document),
    /// Text changed; changes are in application order
    Changed {
        document_id: DocumentId,
        changes: Vec<ContentChange>,
    },
    /// The document is about to be saved
    WillSave { document_id: DocumentId },
    /// The document was closed
    Closed { document_id: DocumentId },
}

/// Editor focus and cursor notifications
#[derive(Debug, Clone)]
pub enum EditorMsg {
    /// Focus moved to another editor
    ActiveEditorChanged {
        document_id: DocumentId,
        cursor: Position,
    },
    /// Cursor moved in the focused editor
    SetCursor(Position),
}

/// Decoration refresh messages
#[derive(Debug, Clone)]
pub enum DecorationMsg {
    /// Debounce delay elapsed for a document revision
    RefreshReady {
        document_id: DocumentId,
        revision: u64,
    },
}

/// Application-level messages
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Configuration was edited or reloaded
    ConfigChanged(ToggleConfig),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Toggle command and edit feedback
    Toggle(ToggleMsg),
    /// Document lifecycle
    Document(DocumentMsg),
    /// Editor focus and cursor
    Editor(EditorMsg),
    /// Decoration refresh
    Decorations(DecorationMsg),
    /// App messages (configuration)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a toggle message
    pub fn toggle() -> Self {
        Msg::Toggle(ToggleMsg::Toggle)
    }

    /// Create a cursor movement message
    pub fn set_cursor(line: usize, column: usize) -> Self {
        Msg::Editor(EditorMsg::SetCursor(Position::new(line, column)))
    }

    /// Create a will-save message
    pub fn will_save(document_id: DocumentId) -> Self {
        Msg::Document(DocumentMsg::WillSave { document_id })
    }
}

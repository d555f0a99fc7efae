//! The editor the controller runs inside

use crate::commands::Decoration;
use crate::model::{ContentChange, DocumentId, EditError, Position, TextEdit};

/// Editing primitives and UI channels provided by the host editor
pub trait EditorHost {
    /// Apply a batch of replacements as one unit.
    ///
    /// Returns the resulting changes in application order, or an error when
    /// nothing was applied.
    fn apply_edits(
        &mut self,
        document_id: DocumentId,
        edits: &[TextEdit],
    ) -> Result<Vec<ContentChange>, EditError>;

    fn set_cursor(&mut self, document_id: DocumentId, position: Position);

    /// Show a one-line informational message
    fn show_info(&mut self, message: &str);

    /// Replace the decorations shown for a document
    fn set_decorations(&mut self, document_id: DocumentId, decorations: &[Decoration]);
}

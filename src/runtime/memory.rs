//! In-memory host
//!
//! Keeps its own copy of every document and records what the controller
//! asked it to show. Used by the command-line front end and by tests.

use std::collections::HashMap;

use super::host::EditorHost;
use crate::commands::Decoration;
use crate::model::{ContentChange, Document, DocumentId, EditError, Position, TextEdit};

#[derive(Debug, Default)]
pub struct MemoryHost {
    documents: HashMap<DocumentId, Document>,
    cursors: HashMap<DocumentId, Position>,
    decorations: HashMap<DocumentId, Vec<Decoration>>,
    messages: Vec<String>,
    read_only: bool,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start hosting a document; returns the copy to hand to the controller
    pub fn open(&mut self, document: Document) -> Document {
        self.documents.insert(document.id, document.clone());
        document
    }

    /// Refuse every edit from now on
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(&id)
    }

    pub fn text(&self, id: DocumentId) -> Option<String> {
        self.documents.get(&id).map(Document::text)
    }

    pub fn cursor(&self, id: DocumentId) -> Option<Position> {
        self.cursors.get(&id).copied()
    }

    pub fn decorations(&self, id: DocumentId) -> &[Decoration] {
        self.decorations.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Informational messages shown so far
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl EditorHost for MemoryHost {
    fn apply_edits(
        &mut self,
        document_id: DocumentId,
        edits: &[TextEdit],
    ) -> Result<Vec<ContentChange>, EditError> {
        if self.read_only {
            return Err(EditError::Rejected("document is read-only".to_string()));
        }
        let doc = self
            .documents
            .get_mut(&document_id)
            .ok_or_else(|| EditError::Rejected(format!("unknown document {}", document_id.0)))?;
        doc.apply_edits(edits)
    }

    fn set_cursor(&mut self, document_id: DocumentId, position: Position) {
        self.cursors.insert(document_id, position);
    }

    fn show_info(&mut self, message: &str) {
        tracing::info!("{}", message);
        self.messages.push(message.to_string());
    }

    fn set_decorations(&mut self, document_id: DocumentId, decorations: &[Decoration]) {
        self.decorations.insert(document_id, decorations.to_vec());
    }
}

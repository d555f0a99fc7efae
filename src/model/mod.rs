//! Application model - the complete state of the toggle controller
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod editor;

pub use document::{ContentChange, Document, DocumentId, EditError, TextEdit};
pub use editor::{EditorState, Position, Range};

use std::collections::HashMap;

use crate::config::ToggleConfig;
use crate::strings::{AttributeContext, QuoteRuleSet, Registry};
use crate::syntax::SyntaxAttributeContext;

/// The complete application model
pub struct AppModel {
    /// Mirrors of the documents the host has open
    pub documents: HashMap<DocumentId, Document>,
    /// The focused editor, if any
    pub editor: Option<EditorState>,
    /// Strings currently in split form
    pub registry: Registry,
    /// Persisted configuration
    pub config: ToggleConfig,
    /// Decides whether a quote sits in a markup attribute value
    pub attribute_context: Box<dyn AttributeContext>,
}

impl AppModel {
    /// Create a model using the tree-sitter attribute detector
    pub fn new(config: ToggleConfig) -> Self {
        Self {
            documents: HashMap::new(),
            editor: None,
            registry: Registry::new(),
            config,
            attribute_context: Box::new(SyntaxAttributeContext::new()),
        }
    }

    /// Swap the attribute detector
    pub fn with_attribute_context(mut self, context: Box<dyn AttributeContext>) -> Self {
        self.attribute_context = context;
        self
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(&id)
    }

    pub fn document_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.get_mut(&id)
    }

    /// Document shown in the focused editor
    pub fn active_document(&self) -> Option<&Document> {
        self.editor
            .as_ref()
            .and_then(|editor| self.documents.get(&editor.document_id))
    }

    /// Quote rules for a document's language
    pub fn rules_for(&self, id: DocumentId) -> Option<QuoteRuleSet> {
        self.document(id)
            .map(|doc| QuoteRuleSet::for_language(doc.language))
    }

    /// Whether decorations and collapse-on-save are active
    pub fn tracking_enabled(&self) -> bool {
        self.config.auto_collapse_on_save
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(ToggleConfig::default())
    }
}

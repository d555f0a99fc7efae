//! Decoration update handlers
//!
//! Split strings are marked in the editor. Marks are recomputed after a
//! quiet period following edits, and only for the revision that asked.

use crate::commands::{Cmd, Decoration};
use crate::messages::DecorationMsg;
use crate::model::{AppModel, DocumentId};

/// Handle decoration messages
pub fn update_decorations(model: &mut AppModel, msg: DecorationMsg) -> Option<Cmd> {
    match msg {
        DecorationMsg::RefreshReady {
            document_id,
            revision,
        } => {
            tracing::debug!(
                "update_decorations: RefreshReady received for doc={} rev={}",
                document_id.0,
                revision
            );

            let doc = match model.documents.get(&document_id) {
                Some(d) => d,
                None => {
                    tracing::warn!(
                        "update_decorations: Document {} not found for RefreshReady",
                        document_id.0
                    );
                    return None;
                }
            };

            // Skip if document has been edited since debounce started
            if doc.revision != revision {
                tracing::debug!(
                    "Skipping stale refresh request: doc revision {} != request revision {}",
                    doc.revision,
                    revision
                );
                return None;
            }

            refresh_decorations(model, document_id)
        }
    }
}

/// Drop tracked strings that are no longer valid and mark the rest
pub(crate) fn refresh_decorations(model: &mut AppModel, document_id: DocumentId) -> Option<Cmd> {
    if !model.tracking_enabled() {
        return None;
    }
    let lines = model.documents.get(&document_id)?.lines();
    model.registry.prune(document_id, &lines);

    let decorations: Vec<Decoration> = model
        .registry
        .entries(document_id)
        .iter()
        .map(|entry| Decoration::new(entry.opener().line, entry.closer_end().line))
        .collect();

    tracing::debug!(
        "Decorating {} split strings in doc {}",
        decorations.len(),
        document_id.0
    );
    Some(Cmd::SetDecorations {
        document_id,
        decorations,
    })
}

/// Schedule a decoration refresh for a document (call after document edits)
pub fn schedule_refresh(model: &AppModel, document_id: DocumentId) -> Option<Cmd> {
    if !model.tracking_enabled() {
        return None;
    }
    let doc = model.documents.get(&document_id)?;
    Some(Cmd::DebouncedRefresh {
        document_id,
        revision: doc.revision,
        delay_ms: model.config.refresh_debounce_ms,
    })
}

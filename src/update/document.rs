//! Document lifecycle handlers

use crate::commands::{Cmd, TrackingOp};
use crate::messages::DocumentMsg;
use crate::model::AppModel;

use super::decorations::schedule_refresh;

/// Handle document messages
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::Opened(doc) => {
            tracing::debug!(
                "Opened doc {} ({}, {} lines)",
                doc.id.0,
                doc.language,
                doc.line_count()
            );
            model.documents.insert(doc.id, doc);
            None
        }

        DocumentMsg::Changed {
            document_id,
            changes,
        } => {
            let Some(doc) = model.documents.get_mut(&document_id) else {
                tracing::warn!(
                    "update_document: Document {} not found for Changed",
                    document_id.0
                );
                return None;
            };
            doc.apply_changes(&changes);
            let lines = doc.lines();

            let had_entries = model.registry.tracked_count(document_id) > 0;
            model
                .registry
                .on_document_change(document_id, &changes, &lines);

            if had_entries {
                schedule_refresh(model, document_id)
            } else {
                None
            }
        }

        DocumentMsg::WillSave { document_id } => {
            if !model.config.auto_collapse_on_save {
                return None;
            }
            let lines = model.document(document_id)?.lines();
            let rules = model.rules_for(document_id)?;

            let edits = model.registry.collapse_all(document_id, &lines, &rules);
            if edits.is_empty() {
                return None;
            }

            tracing::info!(
                "Collapsing {} split strings before saving doc {}",
                edits.len(),
                document_id.0
            );
            Some(Cmd::ApplyEdits {
                document_id,
                edits,
                cursor: None,
                tracking: TrackingOp::ClearDocument,
            })
        }

        DocumentMsg::Closed { document_id } => {
            model.documents.remove(&document_id);
            model.registry.clear(document_id);
            if model
                .editor
                .is_some_and(|editor| editor.document_id == document_id)
            {
                model.editor = None;
            }
            tracing::debug!("Closed doc {}", document_id.0);
            None
        }
    }
}

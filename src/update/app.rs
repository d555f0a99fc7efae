//! App-level handlers

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, DocumentId};

use super::decorations::refresh_decorations;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::ConfigChanged(config) => {
            let was_enabled = model.tracking_enabled();
            model.config = config;
            let enabled = model.tracking_enabled();
            tracing::info!(
                "Config changed: auto_collapse_on_save={}, refresh_debounce_ms={}",
                model.config.auto_collapse_on_save,
                model.config.refresh_debounce_ms
            );

            let mut ids: Vec<DocumentId> = model.documents.keys().copied().collect();
            ids.sort();

            let cmds: Vec<Cmd> = match (was_enabled, enabled) {
                (true, false) => ids
                    .into_iter()
                    .map(|document_id| Cmd::SetDecorations {
                        document_id,
                        decorations: Vec::new(),
                    })
                    .collect(),
                (false, true) => ids
                    .into_iter()
                    .filter_map(|document_id| refresh_decorations(model, document_id))
                    .collect(),
                _ => Vec::new(),
            };

            if cmds.is_empty() {
                None
            } else {
                Some(Cmd::batch(cmds))
            }
        }
    }
}

//! Editor focus and cursor handlers

use crate::commands::Cmd;
use crate::messages::EditorMsg;
use crate::model::{AppModel, EditorState};

use super::decorations::refresh_decorations;

/// Handle editor messages
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::ActiveEditorChanged {
            document_id,
            cursor,
        } => {
            model.editor = Some(EditorState::new(document_id, cursor));
            if model.registry.tracked_count(document_id) == 0 {
                return None;
            }
            refresh_decorations(model, document_id)
        }

        EditorMsg::SetCursor(position) => {
            if let Some(editor) = model.editor.as_mut() {
                editor.cursor = position;
            }
            None
        }
    }
}

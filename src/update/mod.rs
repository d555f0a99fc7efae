//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod decorations;
mod document;
mod editor;
mod toggle;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use decorations::{schedule_refresh, update_decorations};
pub use document::update_document;
pub use editor::update_editor;
pub use toggle::update_toggle;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Toggle(m) => toggle::update_toggle(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Decorations(m) => decorations::update_decorations(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update with message name and registry size
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::EditorMsg;

    // Cursor moves arrive on every keystroke
    let is_noisy = matches!(&msg, Msg::Editor(EditorMsg::SetCursor(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if !is_noisy {
        if let Some(editor) = model.editor {
            debug!(
                target: "registry",
                doc = editor.document_id.0,
                tracked = model.registry.tracked_count(editor.document_id),
                "after update"
            );
        }
    }

    result
}

/// Short name of a message for logs
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{AppMsg, DecorationMsg, DocumentMsg, EditorMsg, ToggleMsg};

    match msg {
        Msg::Toggle(m) => match m {
            ToggleMsg::Toggle => "Toggle::Toggle".to_string(),
            ToggleMsg::EditApplied { .. } => "Toggle::EditApplied".to_string(),
            ToggleMsg::EditRejected { .. } => "Toggle::EditRejected".to_string(),
        },
        Msg::Document(m) => match m {
            DocumentMsg::Opened(_) => "Document::Opened".to_string(),
            DocumentMsg::Changed { changes, .. } => {
                format!("Document::Changed({})", changes.len())
            }
            DocumentMsg::WillSave { .. } => "Document::WillSave".to_string(),
            DocumentMsg::Closed { .. } => "Document::Closed".to_string(),
        },
        Msg::Editor(m) => match m {
            EditorMsg::ActiveEditorChanged { .. } => "Editor::ActiveEditorChanged".to_string(),
            EditorMsg::SetCursor(_) => "Editor::SetCursor".to_string(),
        },
        Msg::Decorations(DecorationMsg::RefreshReady { revision, .. }) => {
            format!("Decorations::RefreshReady(rev {})", revision)
        }
        Msg::App(AppMsg::ConfigChanged(_)) => "App::ConfigChanged".to_string(),
    }
}

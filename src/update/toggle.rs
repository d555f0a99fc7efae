//! Toggle command handlers
//!
//! A single-line string under the cursor is split into one word per line;
//! a multi-line one is merged back. The edit is only requested here: the
//! registry changes once the host confirms it through `EditApplied`.

use crate::commands::{Cmd, TrackingOp, NOT_IN_STRING};
use crate::messages::ToggleMsg;
use crate::model::{AppModel, Document, Position, TextEdit};
use crate::strings::{
    locate, map_from_word, map_to_word, merge, split, EntryKey, QuoteRuleSet, Registry,
    StringSpan,
};
use crate::util::leading_whitespace;

use super::decorations::refresh_decorations;

/// Handle toggle messages
pub fn update_toggle(model: &mut AppModel, msg: ToggleMsg) -> Option<Cmd> {
    match msg {
        ToggleMsg::Toggle => toggle(model),

        ToggleMsg::EditApplied {
            document_id,
            tracking,
            cursor,
        } => {
            match tracking {
                TrackingOp::None => {}
                TrackingOp::Track(span) => model.registry.track(document_id, &span),
                TrackingOp::Untrack(key) => {
                    model.registry.untrack(document_id, &key);
                }
                TrackingOp::ClearDocument => model.registry.clear(document_id),
            }

            if let (Some(editor), Some(cursor)) = (model.editor.as_mut(), cursor) {
                if editor.document_id == document_id {
                    editor.cursor = cursor;
                }
            }

            refresh_decorations(model, document_id)
        }

        ToggleMsg::EditRejected {
            document_id,
            reason,
        } => {
            tracing::warn!("Edit rejected for doc {}: {}", document_id.0, reason);
            None
        }
    }
}

fn not_in_string() -> Option<Cmd> {
    Some(Cmd::ShowInfo(NOT_IN_STRING.to_string()))
}

fn toggle(model: &mut AppModel) -> Option<Cmd> {
    let Some(editor) = model.editor else {
        return not_in_string();
    };
    let Some(doc) = model.documents.get(&editor.document_id) else {
        return not_in_string();
    };

    let lines = doc.lines();
    let rules = QuoteRuleSet::for_language(doc.language);
    let Some(span) = locate(&lines, editor.cursor, &rules.candidate_tokens()) else {
        tracing::debug!(
            "No string at {}:{} in doc {}",
            editor.cursor.line,
            editor.cursor.column,
            doc.id.0
        );
        return not_in_string();
    };

    let cmd = if span.is_multiline {
        merge_at(&model.registry, doc, &lines, &rules, span, editor.cursor)
    } else {
        let in_attribute = model.attribute_context.is_attribute_value(doc, span.start);
        split_at(doc, &lines, &rules, span, editor.cursor, in_attribute)
    };
    Some(cmd)
}

fn split_at(
    doc: &Document,
    lines: &[String],
    rules: &QuoteRuleSet,
    span: StringSpan,
    cursor: Position,
    in_attribute: bool,
) -> Cmd {
    let anchor = map_to_word(&span, lines, cursor);
    let base_indent = lines
        .get(span.start.line)
        .map(|line| leading_whitespace(line))
        .unwrap_or("");

    let output = split(&span, rules, in_attribute, base_indent);
    let new_cursor = map_from_word(&output.text, &output.quote, span.start, anchor, true);
    let tracked = output.span_at(span.start);

    tracing::debug!(
        "Splitting {} string at {}:{} in doc {}",
        output.quote,
        span.start.line,
        span.start.column,
        doc.id.0
    );
    Cmd::ApplyEdits {
        document_id: doc.id,
        edits: vec![TextEdit::replace(span.range(), output.text)],
        cursor: Some(new_cursor),
        tracking: TrackingOp::Track(tracked),
    }
}

fn merge_at(
    registry: &Registry,
    doc: &Document,
    lines: &[String],
    rules: &QuoteRuleSet,
    mut span: StringSpan,
    cursor: Position,
) -> Cmd {
    let anchor = map_to_word(&span, lines, cursor);

    let key = match registry.lookup(doc.id, &span) {
        Some(entry) => {
            span.original_quote = entry.original_quote.clone();
            entry.key
        }
        None => EntryKey::from_span(&span),
    };

    let output = merge(&span, rules);
    let new_cursor = map_from_word(&output.text, &output.quote, span.start, anchor, false);

    tracing::debug!(
        "Merging {} string at {}:{} in doc {}",
        span.quote,
        span.start.line,
        span.start.column,
        doc.id.0
    );
    Cmd::ApplyEdits {
        document_id: doc.id,
        edits: vec![TextEdit::replace(span.range(), output.text)],
        cursor: Some(new_cursor),
        tracking: TrackingOp::Untrack(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentId, EditorState};
    use crate::syntax::LanguageId;

    fn model_with(text: &str, language: LanguageId, cursor: Position) -> AppModel {
        let mut model = AppModel::default();
        let doc = Document::with_text(DocumentId(1), text).with_language(language);
        model.documents.insert(doc.id, doc);
        model.editor = Some(EditorState::new(DocumentId(1), cursor));
        model
    }

    #[test]
    fn test_toggle_outside_string_shows_info() {
        let mut model = model_with("let x = 1;\n", LanguageId::Rust, Position::new(0, 4));
        match update_toggle(&mut model, ToggleMsg::Toggle) {
            Some(Cmd::ShowInfo(text)) => assert_eq!(text, NOT_IN_STRING),
            other => panic!("expected ShowInfo, got {:?}", other),
        }
    }

    #[test]
    fn test_toggle_without_editor_shows_info() {
        let mut model = AppModel::default();
        assert!(matches!(
            update_toggle(&mut model, ToggleMsg::Toggle),
            Some(Cmd::ShowInfo(_))
        ));
    }

    #[test]
    fn test_split_requests_edit_and_defers_tracking() {
        let mut model = model_with(
            "const x = \"one two three\";\n",
            LanguageId::Rust,
            Position::new(0, 12),
        );
        let Some(Cmd::ApplyEdits {
            edits,
            cursor,
            tracking,
            ..
        }) = update_toggle(&mut model, ToggleMsg::Toggle)
        else {
            panic!("expected ApplyEdits");
        };

        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].new_text, "\"\n  one\n  two\n  three\n\"");
        // 'n' of "one"
        assert_eq!(cursor, Some(Position::new(1, 3)));
        assert!(matches!(tracking, TrackingOp::Track(_)));
        assert_eq!(model.registry.tracked_count(DocumentId(1)), 0);
    }

    #[test]
    fn test_rejected_edit_leaves_registry_alone() {
        let mut model = model_with("x = \"a b\"\n", LanguageId::Rust, Position::new(0, 5));
        update_toggle(
            &mut model,
            ToggleMsg::EditRejected {
                document_id: DocumentId(1),
                reason: "read-only".to_string(),
            },
        );
        assert_eq!(model.registry.tracked_count(DocumentId(1)), 0);
    }
}

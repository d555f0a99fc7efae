//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use string_toggle::config::ToggleConfig;
use string_toggle::messages::{DocumentMsg, EditorMsg, Msg};
use string_toggle::model::{AppModel, Document, DocumentId, Position, TextEdit};
use string_toggle::runtime::{EditorHost, ManualClock, MemoryHost, Runtime};
use string_toggle::syntax::LanguageId;

pub type TestRuntime = Runtime<MemoryHost, ManualClock>;

/// Id of the document opened by [`open`]
pub const DOC: DocumentId = DocumentId(1);

/// Open `text` in a fresh runtime with the default config
pub fn open(text: &str, language: LanguageId) -> (TestRuntime, ManualClock) {
    open_with_config(text, language, ToggleConfig::default())
}

/// Open `text` in a fresh runtime with `config`
pub fn open_with_config(
    text: &str,
    language: LanguageId,
    config: ToggleConfig,
) -> (TestRuntime, ManualClock) {
    let clock = ManualClock::new();
    let mut host = MemoryHost::new();
    let document = host.open(Document::with_text(DOC, text).with_language(language));

    let mut runtime = Runtime::with_clock(AppModel::new(config), host, clock.clone());
    runtime.dispatch(Msg::Document(DocumentMsg::Opened(document)));
    runtime.dispatch(Msg::Editor(EditorMsg::ActiveEditorChanged {
        document_id: DOC,
        cursor: Position::default(),
    }));
    (runtime, clock)
}

/// Move the cursor and toggle
pub fn toggle_at(runtime: &mut TestRuntime, line: usize, column: usize) {
    runtime.dispatch(Msg::set_cursor(line, column));
    runtime.dispatch(Msg::toggle());
}

/// Toggle at the current cursor
pub fn toggle(runtime: &mut TestRuntime) {
    runtime.dispatch(Msg::toggle());
}

/// Simulate the user typing: edit the host buffer, then notify the controller
pub fn user_edit(runtime: &mut TestRuntime, edits: Vec<TextEdit>) {
    let changes = runtime
        .host_mut()
        .apply_edits(DOC, &edits)
        .expect("user edit should apply");
    runtime.dispatch(Msg::Document(DocumentMsg::Changed {
        document_id: DOC,
        changes,
    }));
}

/// Insert `text` at `line:column`
pub fn type_at(runtime: &mut TestRuntime, line: usize, column: usize, text: &str) {
    user_edit(runtime, vec![TextEdit::insert(Position::new(line, column), text)]);
}

/// Host buffer contents
pub fn text(runtime: &TestRuntime) -> String {
    runtime.host().text(DOC).unwrap_or_default()
}

/// Controller's idea of the cursor
pub fn cursor(runtime: &TestRuntime) -> Position {
    runtime
        .model()
        .editor
        .map(|editor| editor.cursor)
        .unwrap_or_default()
}

pub fn tracked(runtime: &TestRuntime) -> usize {
    runtime.model().registry.tracked_count(DOC)
}

/// Save: collapse split strings as the host would before writing
pub fn save(runtime: &mut TestRuntime) {
    runtime.dispatch(Msg::will_save(DOC));
}

/// Owned lines of `text`
pub fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

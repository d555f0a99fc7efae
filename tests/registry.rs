//! Registry tests - bookkeeping and collapse against real document edits

use string_toggle::model::{Document, DocumentId, Position, Range, TextEdit};
use string_toggle::strings::{QuoteRuleSet, Registry, StringSpan};
use string_toggle::syntax::LanguageId;

const DOC: DocumentId = DocumentId(3);

fn span(start: (usize, usize), end: (usize, usize), quote: &str, content: &str) -> StringSpan {
    StringSpan::new(
        Position::new(start.0, start.1),
        Position::new(end.0, end.1),
        quote,
        content.to_string(),
    )
}

/// Apply edits to the document and feed the changes to the registry
fn edit(document: &mut Document, registry: &mut Registry, edits: &[TextEdit]) {
    let changes = document.apply_edits(edits).unwrap();
    registry.on_document_change(DOC, &changes, &document.lines());
}

/// Two template literals whose closer and opener share line 2
fn shared_line() -> (Document, Registry) {
    let document = Document::with_text(DOC, "f(`\n  a\n`, `\n  b\n`);");
    let mut registry = Registry::new();
    for (start, end, content) in [((0, 2), (2, 1), "\n  a\n"), ((2, 3), (4, 1), "\n  b\n")] {
        let mut s = span(start, end, "`", content);
        s.original_quote = Some("'".to_string());
        registry.track(DOC, &s);
    }
    (document, registry)
}

#[test]
fn test_collapse_all_edits_bottom_up() {
    let mut document =
        Document::with_text(DOC, "let a = \"\n  x\n  y\n\";\nlet b = \"\n  p\n  q\n\";\n");
    let mut registry = Registry::new();
    registry.track(DOC, &span((0, 8), (3, 1), "\"", "\n  x\n  y\n"));
    registry.track(DOC, &span((4, 8), (7, 1), "\"", "\n  p\n  q\n"));

    let rules = QuoteRuleSet::for_language(LanguageId::Rust);
    let edits = registry.collapse_all(DOC, &document.lines(), &rules);
    assert_eq!(edits.len(), 2);
    assert_eq!(edits[0].range.start, Position::new(4, 8));
    assert_eq!(edits[1].range.start, Position::new(0, 8));

    edit(&mut document, &mut registry, &edits);
    assert_eq!(document.text(), "let a = \"x y\";\nlet b = \"p q\";\n");
    // Both strings were replaced wholesale
    assert_eq!(registry.tracked_count(DOC), 0);
    assert!(registry
        .collapse_all(DOC, &document.lines(), &rules)
        .is_empty());
}

#[test]
fn test_strings_sharing_a_line_collapse_separately() {
    let (mut document, mut registry) = shared_line();
    let rules = QuoteRuleSet::for_language(LanguageId::TypeScript);

    let edits = registry.collapse_all(DOC, &document.lines(), &rules);
    assert_eq!(edits.len(), 2);
    edit(&mut document, &mut registry, &edits);
    assert_eq!(document.text(), "f('a', 'b');");
}

#[test]
fn test_typing_between_strings_touches_only_the_later_one() {
    let (mut document, mut registry) = shared_line();
    edit(
        &mut document,
        &mut registry,
        &[TextEdit::insert(Position::new(2, 1), "z")],
    );

    let entries = registry.entries(DOC);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].key.content_end(), Position::new(2, 0));
    assert_eq!(entries[1].key.content_start(), Position::new(2, 5));
    assert_eq!(entries[1].content, "\n  b\n");
}

#[test]
fn test_rewritten_word_line_is_not_collapsed() {
    let mut document = Document::with_text(DOC, "let s = \"\n  one\n  two\n\";");
    let mut registry = Registry::new();
    registry.track(DOC, &span((0, 8), (3, 1), "\"", "\n  one\n  two\n"));

    // Change the buffer without telling the registry
    document
        .apply_edits(&[TextEdit::replace(
            Range::new(Position::new(1, 2), Position::new(1, 5)),
            "uno",
        )])
        .unwrap();

    let rules = QuoteRuleSet::for_language(LanguageId::Rust);
    assert!(registry.find_live(DOC, &document.lines()).is_empty());
    assert!(registry
        .collapse_all(DOC, &document.lines(), &rules)
        .is_empty());
    assert_eq!(registry.prune(DOC, &document.lines()), 1);
    assert_eq!(registry.tracked_count(DOC), 0);
}

#[test]
fn test_documents_are_independent() {
    let other = DocumentId(4);
    let mut registry = Registry::new();
    let s = span((0, 8), (3, 1), "\"", "\n  one\n  two\n");
    registry.track(DOC, &s);
    registry.track(other, &s);

    registry.clear(DOC);
    assert_eq!(registry.tracked_count(DOC), 0);
    assert_eq!(registry.tracked_count(other), 1);
}

#[test]
fn test_lookup_restores_original_quote() {
    let (document, registry) = shared_line();
    let located = span((2, 3), (4, 1), "`", "\n  b\n");
    let entry = registry.lookup(DOC, &located).unwrap();
    assert_eq!(entry.original_quote.as_deref(), Some("'"));
    assert_eq!(registry.find_live(DOC, &document.lines()).len(), 2);
}

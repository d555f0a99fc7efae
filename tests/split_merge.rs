//! Split/merge round trips across languages, driven through the runtime

mod common;

use common::{cursor, open, text, toggle, toggle_at, tracked};
use string_toggle::model::Position;
use string_toggle::syntax::LanguageId;

/// Split at `(line, col)`, check the split form, then toggle again where the
/// cursor landed and expect the original back.
fn round_trip(language: LanguageId, source: &str, at: (usize, usize), split_form: &str) {
    let (mut rt, _) = open(source, language);
    toggle_at(&mut rt, at.0, at.1);
    assert_eq!(text(&rt), split_form, "split form for {:?}", language);
    assert_eq!(tracked(&rt), 1);

    toggle(&mut rt);
    assert_eq!(text(&rt), source, "merged form for {:?}", language);
    assert_eq!(cursor(&rt), Position::new(at.0, at.1));
}

#[test]
fn test_round_trip_template_languages() {
    round_trip(
        LanguageId::JavaScript,
        "const s = 'a b';\n",
        (0, 11),
        "const s = `\n  a\n  b\n`;\n",
    );
    round_trip(
        LanguageId::TypeScript,
        "  f(\"one two\");\n",
        (0, 6),
        "  f(`\n    one\n    two\n  `);\n",
    );
}

#[test]
fn test_round_trip_triple_quote_languages() {
    round_trip(
        LanguageId::Java,
        "String s = \"x y\";\n",
        (0, 12),
        "String s = \"\"\"\n  x\n  y\n\"\"\";\n",
    );
    round_trip(
        LanguageId::Kotlin,
        "val s = \"x y\"\n",
        (0, 9),
        "val s = \"\"\"\n  x\n  y\n\"\"\"\n",
    );
    round_trip(
        LanguageId::Dart,
        "var s = 'a b';\n",
        (0, 9),
        "var s = '''\n  a\n  b\n''';\n",
    );
}

#[test]
fn test_round_trip_go_raw_string() {
    round_trip(
        LanguageId::Go,
        "s := \"a b c\"\n",
        (0, 6),
        "s := `\n  a\n  b\n  c\n`\n",
    );
}

#[test]
fn test_round_trip_keeps_quote_in_tolerant_languages() {
    round_trip(
        LanguageId::Ruby,
        "puts 'hi there'\n",
        (0, 6),
        "puts '\n  hi\n  there\n'\n",
    );
    round_trip(
        LanguageId::Rust,
        "let s = \"a b\";\n",
        (0, 9),
        "let s = \"\n  a\n  b\n\";\n",
    );
}

#[test]
fn test_python_content_with_other_quote_round_trips() {
    round_trip(
        LanguageId::Python,
        "s = \"it's ok\"\n",
        (0, 5),
        "s = \"\"\"\n  it's\n  ok\n\"\"\"\n",
    );
}

#[test]
fn test_interpolation_syntax_blocks_template_conversion() {
    let source = "const s = \"cost ${price} now\";\n";
    let (mut rt, _) = open(source, LanguageId::JavaScript);
    toggle_at(&mut rt, 0, 11);
    assert_eq!(
        text(&rt),
        "const s = \"\n  cost\n  ${price}\n  now\n\";\n"
    );

    toggle(&mut rt);
    assert_eq!(text(&rt), source);
}

#[test]
fn test_backslash_blocks_raw_string_conversion() {
    let source = "s := \"a\\tb c\"\n";
    let (mut rt, _) = open(source, LanguageId::Go);
    toggle_at(&mut rt, 0, 6);
    assert_eq!(text(&rt), "s := \"\n  a\\tb\n  c\n\"\n");

    toggle_at(&mut rt, 2, 2);
    assert_eq!(text(&rt), source);
}

#[test]
fn test_empty_string_round_trip() {
    let source = "let s = \"\";\n";
    let (mut rt, _) = open(source, LanguageId::Rust);
    toggle_at(&mut rt, 0, 9);
    assert_eq!(text(&rt), "let s = \"\n\";\n");
    // No words to anchor to: cursor goes to the opening quote
    assert_eq!(cursor(&rt), Position::new(0, 8));

    toggle_at(&mut rt, 1, 0);
    assert_eq!(text(&rt), source);
}

#[test]
fn test_merge_untracked_multiline_string() {
    // Written multi-line by hand, never split by us
    let source = "const s = `\n    a\n  b\n`;\n";
    let (mut rt, _) = open(source, LanguageId::JavaScript);
    toggle_at(&mut rt, 1, 5);
    assert_eq!(text(&rt), "const s = `a b`;\n");
    // Caret was right after "a"
    assert_eq!(cursor(&rt), Position::new(0, 12));
}

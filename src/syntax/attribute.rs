//! Tree-sitter refinement for attribute-value detection
//!
//! Parses HTML-like documents and JSX/TSX sources and checks whether the
//! quote sits in a string node owned by an attribute. Any other language,
//! a failed parse, or a tree with syntax errors falls back to the line
//! heuristic.

use std::collections::HashMap;

use tree_sitter::{Node, Parser, Point, Tree};

use super::languages::LanguageId;
use crate::model::{Document, Position};
use crate::strings::{AttributeContext, HeuristicAttributeContext};

/// Grammars that can answer the attribute question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Dialect {
    Html,
    Jsx,
    Tsx,
}

impl Dialect {
    fn for_language(language: LanguageId) -> Option<Self> {
        match language {
            LanguageId::Html | LanguageId::Vue | LanguageId::Svelte => Some(Dialect::Html),
            LanguageId::JavaScript | LanguageId::Jsx => Some(Dialect::Jsx),
            LanguageId::Tsx => Some(Dialect::Tsx),
            _ => None,
        }
    }

    fn grammar(self) -> tree_sitter::Language {
        match self {
            Dialect::Html => tree_sitter_html::LANGUAGE.into(),
            Dialect::Jsx => tree_sitter_javascript::LANGUAGE.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// Syntax-aware attribute detection with heuristic fallback
#[derive(Default)]
pub struct SyntaxAttributeContext {
    /// Parser instances per dialect (created on first use)
    parsers: HashMap<Dialect, Parser>,
    fallback: HeuristicAttributeContext,
}

impl SyntaxAttributeContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn parse(&mut self, dialect: Dialect, source: &str) -> Option<Tree> {
        if !self.parsers.contains_key(&dialect) {
            let mut parser = Parser::new();
            if let Err(e) = parser.set_language(&dialect.grammar()) {
                tracing::warn!("Failed to load {:?} grammar: {}", dialect, e);
                return None;
            }
            self.parsers.insert(dialect, parser);
        }
        self.parsers.get_mut(&dialect)?.parse(source, None)
    }
}

impl AttributeContext for SyntaxAttributeContext {
    fn is_attribute_value(&mut self, document: &Document, position: Position) -> bool {
        let Some(dialect) = Dialect::for_language(document.language) else {
            return self.fallback.is_attribute_value(document, position);
        };

        let source = document.text();
        let Some(tree) = self.parse(dialect, &source) else {
            return self.fallback.is_attribute_value(document, position);
        };
        let root = tree.root_node();
        if root.has_error() {
            tracing::debug!("Syntax errors in document {}, using heuristic", document.id.0);
            return self.fallback.is_attribute_value(document, position);
        }

        let Some(line) = document.line(position.line) else {
            return false;
        };
        let byte_column = line
            .char_indices()
            .nth(position.column)
            .map(|(byte, _)| byte)
            .unwrap_or(line.len());
        let point = Point::new(position.line, byte_column);

        root.descendant_for_point_range(point, point)
            .is_some_and(|node| owned_by_attribute(node, dialect))
    }
}

/// Walk up to the nearest string node and check who owns it
fn owned_by_attribute(node: Node<'_>, dialect: Dialect) -> bool {
    let mut current = Some(node);
    while let Some(n) = current {
        match (dialect, n.kind()) {
            (Dialect::Html, "quoted_attribute_value") => {
                return n.parent().is_some_and(|p| p.kind() == "attribute");
            }
            (Dialect::Jsx | Dialect::Tsx, "string") => {
                return n.parent().is_some_and(|p| p.kind() == "jsx_attribute");
            }
            (Dialect::Jsx | Dialect::Tsx, "template_string") => return false,
            _ => {}
        }
        current = n.parent();
    }
    false
}

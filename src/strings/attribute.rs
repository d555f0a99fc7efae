//! Attribute-value context
//!
//! Strings assigned to a markup attribute (`<div class="a b">`) may hold raw
//! line breaks, so splitting them never converts the quote.

use crate::model::{Document, Position};

/// Decides whether a quote position sits in a tag attribute value
pub trait AttributeContext {
    fn is_attribute_value(&mut self, document: &Document, position: Position) -> bool;
}

/// Line-based fallback that needs no parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAttributeContext;

impl AttributeContext for HeuristicAttributeContext {
    fn is_attribute_value(&mut self, document: &Document, position: Position) -> bool {
        if !document.language.has_markup() {
            return false;
        }
        document
            .line(position.line)
            .is_some_and(|line| in_attribute_assignment(&line, position.column))
    }
}

/// True when `column` follows `<tag ... name=` on the same line with no
/// `>` closing the tag in between.
pub fn in_attribute_assignment(line: &str, column: usize) -> bool {
    let before: String = line.chars().take(column).collect();
    let Some(open) = before.rfind('<') else {
        return false;
    };
    if before.rfind('>').is_some_and(|close| close > open) {
        return false;
    }
    before[open..].trim_end().ends_with('=')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentId;
    use crate::syntax::LanguageId;

    #[test]
    fn test_in_attribute_assignment() {
        let line = r#"<div className="a b c">"#;
        assert!(in_attribute_assignment(line, 15));
        assert!(in_attribute_assignment(r#"<img alt = "x">"#, 11));
    }

    #[test]
    fn test_closed_tag_is_not_attribute() {
        let line = r#"<p>text = "quoted"</p>"#;
        assert!(!in_attribute_assignment(line, 10));
    }

    #[test]
    fn test_comparison_is_not_attribute() {
        // The line rule alone would match; languages without markup never do
        assert!(in_attribute_assignment(r#"if a < b: x = "y""#, 14));
        let doc = Document::with_text(DocumentId(1), r#"if a < b: x = "y""#)
            .with_language(LanguageId::Python);
        assert!(!HeuristicAttributeContext.is_attribute_value(&doc, Position::new(0, 14)));
    }

    #[test]
    fn test_plain_assignment_is_not_attribute() {
        assert!(!in_attribute_assignment(r#"const x = "a b";"#, 10));
    }
}

//! Located string literals

use crate::model::{Position, Range};

/// A string literal found in a document
///
/// `start` is the first char of the opening quote, `end` is exclusive and
/// sits right after the closing quote. `content` is everything between the
/// two quote tokens with line breaks kept as `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSpan {
    pub start: Position,
    pub end: Position,
    pub quote: String,
    pub content: String,
    pub is_multiline: bool,
    /// Quote used before a split converted it; only set when it changed
    pub original_quote: Option<String>,
}

impl StringSpan {
    pub fn new(start: Position, end: Position, quote: &str, content: String) -> Self {
        let is_multiline = start.line != end.line || content.contains('\n');
        Self {
            start,
            end,
            quote: quote.to_string(),
            content,
            is_multiline,
            original_quote: None,
        }
    }

    /// Length of the quote token in chars
    pub fn quote_len(&self) -> usize {
        self.quote.chars().count()
    }

    /// First char of the content
    pub fn content_start(&self) -> Position {
        Position::new(self.start.line, self.start.column + self.quote_len())
    }

    /// Position of the closing quote
    pub fn content_end(&self) -> Position {
        Position::new(
            self.end.line,
            self.end.column.saturating_sub(self.quote_len()),
        )
    }

    /// Range covering both quotes
    pub fn range(&self) -> Range {
        Range::new(self.start, self.end)
    }

    /// Range covering only the content
    pub fn content_range(&self) -> Range {
        Range::new(self.content_start(), self.content_end())
    }
}

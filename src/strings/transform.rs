//! Split/merge transformer
//!
//! `split` turns a located string into the one-word-per-line form, `merge`
//! folds a multi-line string back onto one line. Both return the full
//! replacement text for the quote-inclusive span.

use super::rules::QuoteRuleSet;
use super::span::StringSpan;
use crate::model::Position;
use crate::util::{delimiter_at, normalize_whitespace};

/// Extra indentation of word lines relative to the string's line
pub const WORD_INDENT: &str = "  ";

/// Result of splitting a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutput {
    pub text: String,
    /// Quote token used by the multi-line form
    pub quote: String,
    /// The token the string had before, when `quote` differs from it
    pub original_quote: Option<String>,
}

impl SplitOutput {
    /// Span the split text occupies once written at `start`
    pub fn span_at(&self, start: Position) -> StringSpan {
        let newlines = self.text.matches('\n').count();
        let last_len = self.text.rsplit('\n').next().map_or(0, |l| l.chars().count());
        let end = if newlines == 0 {
            Position::new(start.line, start.column + last_len)
        } else {
            Position::new(start.line + newlines, last_len)
        };

        let chars: Vec<char> = self.text.chars().collect();
        let quote_len = self.quote.chars().count();
        let content: String = chars[quote_len.min(chars.len())..chars.len().saturating_sub(quote_len)]
            .iter()
            .collect();

        let mut span = StringSpan::new(start, end, &self.quote, content);
        span.original_quote = self.original_quote.clone();
        span
    }
}

/// Result of merging a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutput {
    pub text: String,
    pub quote: String,
    pub content: String,
}

/// Words of a string's content, in order
pub fn split_words(content: &str) -> Vec<&str> {
    content.split_whitespace().collect()
}

/// Does `content` contain `token` where it would act as a delimiter?
fn contains_delimiter(content: &str, token: &str) -> bool {
    let chars: Vec<char> = content.chars().collect();
    let token: Vec<char> = token.chars().collect();
    (0..chars.len()).any(|idx| delimiter_at(&chars, idx, &token))
}

/// Pick the quote for the multi-line form.
///
/// Returns the quote to use and, when it differs, the quote it replaces.
pub fn resolve_split_quote(
    span: &StringSpan,
    rules: &QuoteRuleSet,
    in_attribute: bool,
) -> (String, Option<String>) {
    let keep = (span.quote.clone(), None);
    if in_attribute || rules.keeps_quote_on_split() || rules.is_multiline_token(&span.quote) {
        return keep;
    }
    let Some(target) = rules.preferred_multiline else {
        return keep;
    };

    if contains_delimiter(&span.content, target)
        || rules.uses_special_feature(&span.content, target)
    {
        tracing::debug!(
            "Keeping {} quote: content is not safe inside {}",
            span.quote,
            target
        );
        return keep;
    }

    (target.to_string(), Some(span.quote.clone()))
}

/// Produce the one-word-per-line form of `span`.
///
/// `base_indent` is the leading whitespace of the line the string starts on.
pub fn split(
    span: &StringSpan,
    rules: &QuoteRuleSet,
    in_attribute: bool,
    base_indent: &str,
) -> SplitOutput {
    let (quote, original_quote) = resolve_split_quote(span, rules, in_attribute);

    let mut text = String::with_capacity(span.content.len() * 2 + 16);
    text.push_str(&quote);
    text.push('\n');
    for word in split_words(&span.content) {
        text.push_str(base_indent);
        text.push_str(WORD_INDENT);
        text.push_str(word);
        text.push('\n');
    }
    text.push_str(base_indent);
    text.push_str(&quote);

    SplitOutput {
        text,
        quote,
        original_quote,
    }
}

/// Produce the single-line form of `span`, restoring its original quote
/// when the merged content allows it.
pub fn merge(span: &StringSpan, rules: &QuoteRuleSet) -> MergeOutput {
    let content = span
        .content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let quote = match span.original_quote.as_deref() {
        Some(original)
            if original != span.quote
                && !rules.uses_special_feature(&content, &span.quote)
                && !contains_delimiter(&content, original) =>
        {
            original.to_string()
        }
        _ => span.quote.clone(),
    };

    MergeOutput {
        text: format!("{quote}{content}{quote}"),
        quote,
        content,
    }
}

/// Whitespace-normalized signature of string content
pub fn fingerprint(content: &str) -> String {
    normalize_whitespace(content)
}

//! Per-language quote rules
//!
//! Describes which quote tokens a language has, which one it uses for
//! literals that span lines, and which string contents only make sense
//! inside a particular quote kind.

use crate::syntax::LanguageId;
use crate::util::is_escaped;

const DQ3: &str = "\"\"\"";
const SQ3: &str = "'''";
const BACKTICK: &str = "`";
const DQ: &str = "\"";
const SQ: &str = "'";

/// Predicate over `(content, quote)`: does `content` rely on something that
/// is only valid inside `quote`?
pub type SpecialFeature = fn(&str, &str) -> bool;

/// Quote rules for one language
#[derive(Clone, Copy)]
pub struct QuoteRuleSet {
    pub language: LanguageId,
    /// Tokens that natively delimit multi-line literals
    pub multiline_tokens: &'static [&'static str],
    /// Token used when converting a string to multi-line form
    pub preferred_multiline: Option<&'static str>,
    /// Ordinary single-line quote styles
    pub single_tokens: &'static [&'static str],
    /// Ordinary quotes may already contain raw line breaks
    pub tolerates_multiline: bool,
    special: SpecialFeature,
}

impl std::fmt::Debug for QuoteRuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteRuleSet")
            .field("language", &self.language)
            .field("multiline_tokens", &self.multiline_tokens)
            .field("preferred_multiline", &self.preferred_multiline)
            .field("single_tokens", &self.single_tokens)
            .field("tolerates_multiline", &self.tolerates_multiline)
            .finish()
    }
}

fn never(_content: &str, _quote: &str) -> bool {
    false
}

/// `${...}` is interpolation only inside template literals
fn template_interpolation(content: &str, quote: &str) -> bool {
    quote == BACKTICK && content.contains("${")
}

/// An unescaped quote char is fine inside a triple-quoted string but
/// terminates the single-quoted form of the same char.
fn bare_quote_char(content: &str, quote: &str) -> bool {
    if quote.chars().count() < 2 {
        return false;
    }
    let Some(q) = quote.chars().next() else {
        return false;
    };
    let chars: Vec<char> = content.chars().collect();
    chars
        .iter()
        .enumerate()
        .any(|(idx, &c)| c == q && !is_escaped(&chars, idx))
}

/// Raw strings keep backslashes literally and cannot hold their own quote
fn raw_string(content: &str, quote: &str) -> bool {
    let is_raw = quote == BACKTICK || quote == DQ3;
    is_raw && (content.contains('\\') || content.contains('"'))
}

impl QuoteRuleSet {
    /// Rules for a language
    pub fn for_language(language: LanguageId) -> Self {
        use LanguageId::*;

        let base = Self {
            language,
            multiline_tokens: &[],
            preferred_multiline: None,
            single_tokens: &[DQ, SQ],
            tolerates_multiline: false,
            special: never,
        };

        match language {
            JavaScript | Jsx | TypeScript | Tsx | Vue | Svelte => Self {
                multiline_tokens: &[BACKTICK],
                preferred_multiline: Some(BACKTICK),
                special: template_interpolation,
                ..base
            },
            Python => Self {
                multiline_tokens: &[DQ3, SQ3],
                preferred_multiline: Some(DQ3),
                special: bare_quote_char,
                ..base
            },
            Java | Swift => Self {
                multiline_tokens: &[DQ3],
                preferred_multiline: Some(DQ3),
                single_tokens: &[DQ],
                special: bare_quote_char,
                ..base
            },
            Kotlin | CSharp => Self {
                multiline_tokens: &[DQ3],
                preferred_multiline: Some(DQ3),
                single_tokens: &[DQ],
                special: raw_string,
                ..base
            },
            Dart => Self {
                multiline_tokens: &[SQ3, DQ3],
                preferred_multiline: Some(SQ3),
                special: bare_quote_char,
                ..base
            },
            Go => Self {
                multiline_tokens: &[BACKTICK],
                preferred_multiline: Some(BACKTICK),
                single_tokens: &[DQ],
                special: raw_string,
                ..base
            },
            Rust => Self {
                single_tokens: &[DQ],
                tolerates_multiline: true,
                ..base
            },
            Ruby | Php | Bash | Yaml | Markdown | Html | Xml | Css | PlainText => Self {
                tolerates_multiline: true,
                ..base
            },
            C | Cpp | Json | Toml => Self {
                single_tokens: &[DQ],
                ..base
            },
        }
    }

    /// Candidate delimiters for locating strings, longest first
    pub fn candidate_tokens(&self) -> Vec<&'static str> {
        let mut tokens: Vec<&'static str> = self
            .multiline_tokens
            .iter()
            .chain(self.single_tokens.iter())
            .copied()
            .collect();
        tokens.dedup();
        // Stable sort keeps the table order among tokens of equal length
        tokens.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));
        tokens
    }

    /// Does this token natively delimit multi-line literals?
    pub fn is_multiline_token(&self, quote: &str) -> bool {
        self.multiline_tokens.contains(&quote)
    }

    /// Splitting never needs to change the quote token
    pub fn keeps_quote_on_split(&self) -> bool {
        self.tolerates_multiline || self.preferred_multiline.is_none()
    }

    /// Does `content` use a feature only valid inside `quote`?
    pub fn uses_special_feature(&self, content: &str, quote: &str) -> bool {
        (self.special)(content, quote)
    }
}

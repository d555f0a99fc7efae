//! String locator
//!
//! Finds the string literal around a cursor without a real lexer. Lines are
//! scanned independently; a first pass looks for a string that opens and
//! closes on the cursor's line, a second pass pairs the nearest opener above
//! the cursor with the nearest closer below it.

use super::rules::QuoteRuleSet;
use super::span::StringSpan;
use crate::model::{Document, Position};
use crate::util::delimiter_at;

/// How far (in lines) the multi-line pass looks in either direction
pub const MULTILINE_SCAN_LIMIT: usize = 2_000;

/// A quote token found at a line/column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hit {
    line: usize,
    column: usize,
}

/// Locate the string containing `position` in a document, using the quote
/// tokens of the document's language.
pub fn locate_in(document: &Document, position: Position) -> Option<StringSpan> {
    let tokens = QuoteRuleSet::for_language(document.language).candidate_tokens();
    locate(&document.lines(), position, &tokens)
}

/// Locate the string literal containing `position`.
///
/// `tokens` must be ordered longest first so a triple quote wins over its
/// one-char prefix.
pub fn locate<S: AsRef<str>>(lines: &[S], position: Position, tokens: &[&str]) -> Option<StringSpan> {
    if position.line >= lines.len() {
        return None;
    }

    let first = position.line.saturating_sub(MULTILINE_SCAN_LIMIT);
    let last = (position.line + MULTILINE_SCAN_LIMIT).min(lines.len() - 1);
    let window = LineWindow {
        first,
        lines: lines[first..=last]
            .iter()
            .map(|l| l.as_ref().chars().collect())
            .collect(),
    };
    let tokens: Vec<(Vec<char>, &str)> = tokens.iter().map(|t| (t.chars().collect(), *t)).collect();

    locate_single_line(&window, position, &tokens)
        .or_else(|| locate_multiline(&window, position, &tokens))
}

/// Slice of the document converted to chars
struct LineWindow {
    first: usize,
    lines: Vec<Vec<char>>,
}

impl LineWindow {
    fn get(&self, line: usize) -> Option<&[char]> {
        line.checked_sub(self.first)
            .and_then(|idx| self.lines.get(idx))
            .map(Vec::as_slice)
    }

    fn last_line(&self) -> usize {
        self.first + self.lines.len() - 1
    }

    /// Text between `from` (inclusive) and `to` (exclusive), lines joined by `\n`
    fn extract(&self, from: Position, to: Position) -> String {
        let mut out = String::new();
        for line_idx in from.line..=to.line {
            let chars = self.get(line_idx).unwrap_or(&[]);
            let start = if line_idx == from.line { from.column } else { 0 };
            let end = if line_idx == to.line {
                to.column
            } else {
                chars.len()
            };
            if line_idx != from.line {
                out.push('\n');
            }
            out.extend(&chars[start.min(chars.len())..end.min(chars.len())]);
        }
        out
    }
}

fn find_closer(line: &[char], from: usize, token: &[char]) -> Option<usize> {
    (from..line.len()).find(|&idx| delimiter_at(line, idx, token))
}

fn locate_single_line(
    window: &LineWindow,
    position: Position,
    tokens: &[(Vec<char>, &str)],
) -> Option<StringSpan> {
    let line = window.get(position.line)?;
    let col = position.column;
    let mut idx = 0;

    'scan: while idx < line.len() {
        for (token, quote) in tokens {
            if !delimiter_at(line, idx, token) {
                continue;
            }
            let content_start = idx + token.len();
            // No closer on this line: a stray apostrophe or the start of a
            // multi-line literal. Try the next token and keep scanning.
            let Some(close) = find_closer(line, content_start, token) else {
                continue;
            };
            let close_last = close + token.len() - 1;

            if col > idx && col <= close_last {
                let content: String = line[content_start..close].iter().collect();
                return Some(StringSpan::new(
                    Position::new(position.line, idx),
                    Position::new(position.line, close + token.len()),
                    quote,
                    content,
                ));
            }

            idx = close + token.len();
            continue 'scan;
        }
        idx += 1;
    }

    None
}

fn find_opener_backward(window: &LineWindow, position: Position, token: &[char]) -> Option<Hit> {
    for line_idx in (window.first..=position.line).rev() {
        let chars = window.get(line_idx)?;
        let upper = if line_idx == position.line {
            position.column.min(chars.len())
        } else {
            chars.len()
        };
        if let Some(column) = (0..upper).rev().find(|&c| delimiter_at(chars, c, token)) {
            return Some(Hit {
                line: line_idx,
                column,
            });
        }
    }
    None
}

fn find_closer_forward(window: &LineWindow, from: Position, token: &[char]) -> Option<Hit> {
    for line_idx in from.line..=window.last_line() {
        let chars = window.get(line_idx)?;
        let start = if line_idx == from.line { from.column } else { 0 };
        if let Some(column) = find_closer(chars, start, token) {
            return Some(Hit {
                line: line_idx,
                column,
            });
        }
    }
    None
}

fn locate_multiline(
    window: &LineWindow,
    position: Position,
    tokens: &[(Vec<char>, &str)],
) -> Option<StringSpan> {
    for (token, quote) in tokens {
        let Some(open) = find_opener_backward(window, position, token) else {
            continue;
        };
        let content_start = Position::new(open.line, open.column + token.len());
        let Some(close) = find_closer_forward(window, content_start, token) else {
            continue;
        };

        let start = Position::new(open.line, open.column);
        let end = Position::new(close.line, close.column + token.len());
        if position > start && position <= end {
            let content = window.extract(content_start, Position::new(close.line, close.column));
            return Some(StringSpan::new(start, end, quote, content));
        }
    }

    None
}

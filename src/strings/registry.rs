//! Tracked-string registry
//!
//! Remembers every string that was split, per document, so it can be
//! collapsed again later. Boundaries are moved along with edits made
//! elsewhere in the document, and every entry is re-validated against the
//! live text before it is used: an entry whose quotes can no longer be
//! found, or whose content no longer matches its fingerprint, is dropped
//! rather than guessed at.

use std::collections::HashMap;

use super::rules::QuoteRuleSet;
use super::span::StringSpan;
use super::transform::{fingerprint, merge};
use crate::model::{ContentChange, DocumentId, Position, Range, TextEdit};
use crate::util::delimiter_at;

/// Quote-exclusive boundaries of a tracked string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey {
    pub start_line: usize,
    pub start_char: usize,
    pub end_line: usize,
    pub end_char: usize,
}

impl EntryKey {
    pub fn new(content_start: Position, content_end: Position) -> Self {
        Self {
            start_line: content_start.line,
            start_char: content_start.column,
            end_line: content_end.line,
            end_char: content_end.column,
        }
    }

    pub fn from_span(span: &StringSpan) -> Self {
        Self::new(span.content_start(), span.content_end())
    }

    pub fn content_start(&self) -> Position {
        Position::new(self.start_line, self.start_char)
    }

    pub fn content_end(&self) -> Position {
        Position::new(self.end_line, self.end_char)
    }
}

/// One split string waiting to be collapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedEntry {
    pub key: EntryKey,
    pub quote: String,
    pub original_quote: Option<String>,
    pub content: String,
    pub fingerprint: String,
}

impl TrackedEntry {
    pub fn from_span(span: &StringSpan) -> Self {
        Self {
            key: EntryKey::from_span(span),
            quote: span.quote.clone(),
            original_quote: span.original_quote.clone(),
            content: span.content.clone(),
            fingerprint: fingerprint(&span.content),
        }
    }

    fn quote_len(&self) -> usize {
        self.quote.chars().count()
    }

    /// Position of the opening quote
    pub fn opener(&self) -> Position {
        Position::new(
            self.key.start_line,
            self.key.start_char.saturating_sub(self.quote_len()),
        )
    }

    /// Position right after the closing quote
    pub fn closer_end(&self) -> Position {
        Position::new(self.key.end_line, self.key.end_char + self.quote_len())
    }

    /// The tracked string as a span, quotes included
    pub fn to_span(&self) -> StringSpan {
        let mut span = StringSpan::new(
            self.opener(),
            self.closer_end(),
            &self.quote,
            self.content.clone(),
        );
        span.original_quote = self.original_quote.clone();
        span
    }

    fn is_multiline(&self) -> bool {
        self.key.start_line != self.key.end_line || self.content.contains('\n')
    }
}

/// Move a position that sits at or after the end of `change`
fn shift_after(pos: Position, change: &ContentChange) -> Position {
    let range = change.range;
    let inserted: Vec<&str> = change.text.split('\n').collect();
    let added = inserted.len() - 1;

    if pos.line == range.end.line {
        let base = if added == 0 {
            range.start.column + inserted[0].chars().count()
        } else {
            inserted[added].chars().count()
        };
        Position::new(
            range.start.line + added,
            base + pos.column.saturating_sub(range.end.column),
        )
    } else {
        Position::new(shift_line(pos.line, change), pos.column)
    }
}

/// Apply a change's line delta to a line number
fn shift_line(line: usize, change: &ContentChange) -> usize {
    let added = change.text.matches('\n').count() as isize;
    let removed = change.range.line_span() as isize;
    (line as isize + added - removed).max(0) as usize
}

/// Nearest delimiter to `column` on `line`, searching outward
fn search_outward(line: &[char], column: usize, token: &[char]) -> Option<usize> {
    // The line may have shrunk since the column was recorded
    let column = column.min(line.len());
    if delimiter_at(line, column, token) {
        return Some(column);
    }
    for distance in 1..=line.len() {
        if let Some(left) = column.checked_sub(distance) {
            if delimiter_at(line, left, token) {
                return Some(left);
            }
        }
        let right = column + distance;
        if right < line.len() && delimiter_at(line, right, token) {
            return Some(right);
        }
    }
    None
}

/// First delimiter at or after `from`, never looking past `last_line`
fn first_closer<S: AsRef<str>>(
    lines: &[S],
    from: Position,
    last_line: usize,
    token: &[char],
) -> Option<Position> {
    for line_idx in from.line..=last_line.min(lines.len().saturating_sub(1)) {
        let chars: Vec<char> = lines[line_idx].as_ref().chars().collect();
        let start = if line_idx == from.line { from.column } else { 0 };
        if let Some(col) = (start..chars.len()).find(|&c| delimiter_at(&chars, c, token)) {
            return Some(Position::new(line_idx, col));
        }
    }
    None
}

fn extract<S: AsRef<str>>(lines: &[S], from: Position, to: Position) -> String {
    let mut out = String::new();
    for line_idx in from.line..=to.line {
        let chars: Vec<char> = lines
            .get(line_idx)
            .map(|l| l.as_ref().chars().collect())
            .unwrap_or_default();
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

/// Re-find an entry's quotes in the current text.
///
/// Returns the entry with refreshed boundaries and content, keeping the old
/// fingerprint. `None` when the quotes cannot be found near their last known
/// columns or no longer pair up with each other.
fn resolve<S: AsRef<str>>(entry: &TrackedEntry, lines: &[S]) -> Option<TrackedEntry> {
    let token: Vec<char> = entry.quote.chars().collect();
    let opener = entry.opener();
    let closer = entry.key.content_end();

    let open_line: Vec<char> = lines.get(opener.line)?.as_ref().chars().collect();
    let open_col = search_outward(&open_line, opener.column, &token)?;
    let close_line: Vec<char> = lines.get(closer.line)?.as_ref().chars().collect();
    let close_col = search_outward(&close_line, closer.column, &token)?;

    let content_start = Position::new(opener.line, open_col + token.len());
    let content_end = Position::new(closer.line, close_col);
    if content_end < content_start {
        return None;
    }
    // The closer must be the first one after the opener, otherwise the pair
    // belongs to two different strings.
    if first_closer(lines, content_start, closer.line, &token)? != content_end {
        return None;
    }

    Some(TrackedEntry {
        key: EntryKey::new(content_start, content_end),
        content: extract(lines, content_start, content_end),
        ..entry.clone()
    })
}

/// Move an entry's boundaries for one change.
///
/// Returns `false` when the change replaced the whole string.
fn adjust(entry: &mut TrackedEntry, change: &ContentChange) -> bool {
    let range = change.range;
    let opener = entry.opener();
    let closer_end = entry.closer_end();
    let start = entry.key.content_start();
    let end = entry.key.content_end();

    if !range.is_empty() && range.start <= opener && range.end >= closer_end {
        return false;
    }

    let (new_start, new_end) = if range.end <= opener {
        // Entirely before the string
        (shift_after(start, change), shift_after(end, change))
    } else if range.start >= closer_end {
        // After the closing quote, possibly on the same line
        (start, end)
    } else {
        // Inside the string or overlapping one of its quotes
        let new_end = if range.end <= end {
            shift_after(end, change)
        } else {
            Position::new(shift_line(end.line, change), end.column)
        };
        let new_start = if range.start.line < start.line {
            Position::new(shift_line(start.line, change), start.column)
        } else {
            start
        };
        (new_start, new_end)
    };

    entry.key = EntryKey::new(new_start, new_end);
    true
}

/// Split strings per document
#[derive(Debug, Default)]
pub struct Registry {
    documents: HashMap<DocumentId, Vec<TrackedEntry>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a split string, replacing any entry with the same boundaries
    pub fn track(&mut self, document: DocumentId, span: &StringSpan) {
        let entry = TrackedEntry::from_span(span);
        let entries = self.documents.entry(document).or_default();
        entries.retain(|e| e.key != entry.key);
        tracing::debug!(
            "Tracking string in doc {} at {}:{}",
            document.0,
            entry.key.start_line,
            entry.key.start_char
        );
        entries.push(entry);
    }

    /// Forget a string; returns whether it was tracked
    pub fn untrack(&mut self, document: DocumentId, key: &EntryKey) -> bool {
        let Some(entries) = self.documents.get_mut(&document) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|e| e.key != *key);
        let removed = entries.len() != before;
        if entries.is_empty() {
            self.documents.remove(&document);
        }
        removed
    }

    /// Find the entry describing `span`: same boundaries, or failing that the
    /// same content start and fingerprint.
    pub fn lookup(&self, document: DocumentId, span: &StringSpan) -> Option<&TrackedEntry> {
        let entries = self.documents.get(&document)?;
        let key = EntryKey::from_span(span);
        entries.iter().find(|e| e.key == key).or_else(|| {
            let print = fingerprint(&span.content);
            entries.iter().find(|e| {
                e.key.content_start() == key.content_start()
                    && e.quote == span.quote
                    && e.fingerprint == print
            })
        })
    }

    /// Entries as currently recorded (not validated)
    pub fn entries(&self, document: DocumentId) -> &[TrackedEntry] {
        self.documents
            .get(&document)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn tracked_count(&self, document: DocumentId) -> usize {
        self.entries(document).len()
    }

    /// Drop everything recorded for a document
    pub fn clear(&mut self, document: DocumentId) {
        if self.documents.remove(&document).is_some() {
            tracing::debug!("Cleared tracked strings for doc {}", document.0);
        }
    }

    /// Entries that still describe a multi-line string with unchanged
    /// content, with boundaries re-resolved against `lines`.
    pub fn find_live<S: AsRef<str>>(&self, document: DocumentId, lines: &[S]) -> Vec<TrackedEntry> {
        self.entries(document)
            .iter()
            .filter_map(|entry| {
                let live = resolve(entry, lines)?;
                let valid = live.is_multiline() && fingerprint(&live.content) == entry.fingerprint;
                valid.then_some(live)
            })
            .collect()
    }

    /// Replace a document's entries with their live versions.
    ///
    /// Returns the number of entries dropped.
    pub fn prune<S: AsRef<str>>(&mut self, document: DocumentId, lines: &[S]) -> usize {
        let before = self.tracked_count(document);
        let live = self.find_live(document, lines);
        let dropped = before - live.len();
        if dropped > 0 {
            tracing::debug!("Pruned {} stale entries in doc {}", dropped, document.0);
        }
        if live.is_empty() {
            self.documents.remove(&document);
        } else {
            self.documents.insert(document, live);
        }
        dropped
    }

    /// Keep boundaries in step with edits to a document.
    ///
    /// `changes` are replayed in order, each relative to the text left by the
    /// previous one; `lines_after` is the text once all were applied.
    pub fn on_document_change<S: AsRef<str>>(
        &mut self,
        document: DocumentId,
        changes: &[ContentChange],
        lines_after: &[S],
    ) {
        let Some(entries) = self.documents.get_mut(&document) else {
            return;
        };

        for change in changes {
            entries.retain_mut(|entry| adjust(entry, change));
        }

        for entry in entries.iter_mut() {
            match resolve(entry, lines_after) {
                Some(live) => {
                    *entry = TrackedEntry {
                        fingerprint: fingerprint(&live.content),
                        ..live
                    };
                }
                None => {
                    tracing::debug!(
                        "Could not re-resolve tracked string at {}:{} in doc {}",
                        entry.key.start_line,
                        entry.key.start_char,
                        document.0
                    );
                }
            }
        }

        entries.sort_by_key(|e| e.key);
        entries.dedup_by_key(|e| e.key);
        if entries.is_empty() {
            self.documents.remove(&document);
        }
    }

    /// Merge edits for every live entry, bottom of the document first.
    ///
    /// The caller applies them as one batch and then clears the document.
    pub fn collapse_all<S: AsRef<str>>(
        &self,
        document: DocumentId,
        lines: &[S],
        rules: &QuoteRuleSet,
    ) -> Vec<TextEdit> {
        let mut live = self.find_live(document, lines);
        live.sort_by(|a, b| b.key.content_start().cmp(&a.key.content_start()));

        live.iter()
            .map(|entry| {
                let span = entry.to_span();
                TextEdit::replace(
                    Range::new(span.start, span.end),
                    merge(&span, rules).text,
                )
            })
            .collect()
    }
}

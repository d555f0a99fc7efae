//! Document model - a mirror of the host's text buffer
//!
//! The host owns the real buffer; this copy is kept in sync through
//! [`ContentChange`] notifications so the string engine can read lines
//! without calling back into the host.

use ropey::Rope;
use std::borrow::Cow;
use std::path::PathBuf;

use super::editor::{Position, Range};
use crate::syntax::LanguageId;

/// Unique identifier for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// A single replacement to apply to a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

impl TextEdit {
    pub fn replace(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    pub fn insert(pos: Position, text: impl Into<String>) -> Self {
        Self::replace(Range::point(pos), text)
    }
}

/// Describes one applied change: `range` (in the text as it was right
/// before this change) was replaced by `text`.
///
/// A batch of changes is ordered so that replaying them one after another
/// reproduces the final document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChange {
    pub range: Range,
    pub text: String,
}

impl From<TextEdit> for ContentChange {
    fn from(edit: TextEdit) -> Self {
        Self {
            range: edit.range,
            text: edit.new_text,
        }
    }
}

/// Error types for edit operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Position is outside the document
    OutOfBounds { position: Position },
    /// Two edits of one batch touch the same text
    Overlapping { first: Range, second: Range },
    /// The host refused to apply the batch
    Rejected(String),
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::OutOfBounds { position } => write!(
                f,
                "Position {}:{} is outside the document",
                position.line, position.column
            ),
            EditError::Overlapping { first, second } => write!(
                f,
                "Edits overlap: {}:{}..{}:{} and {}:{}..{}:{}",
                first.start.line,
                first.start.column,
                first.end.line,
                first.end.column,
                second.start.line,
                second.start.column,
                second.end.line,
                second.end.column
            ),
            EditError::Rejected(reason) => write!(f, "Edit rejected: {}", reason),
        }
    }
}

impl std::error::Error for EditError {}

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for untitled buffers)
    pub file_path: Option<PathBuf>,
    /// Language used to pick quote rules
    pub language: LanguageId,
    /// Incremented on each applied change; used to discard stale refreshes
    pub revision: u64,
}

impl Document {
    /// Create a document with initial text
    pub fn with_text(id: DocumentId, text: &str) -> Self {
        Self {
            id,
            buffer: Rope::from_str(text),
            file_path: None,
            language: LanguageId::PlainText,
            revision: 0,
        }
    }

    /// Load a document from a file path
    pub fn from_file(id: DocumentId, path: PathBuf) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(&path)?;
        let language = LanguageId::from_path(&path);
        Ok(Self {
            id,
            buffer: Rope::from_str(&content),
            file_path: Some(path),
            language,
            revision: 0,
        })
    }

    /// Builder-style language override
    pub fn with_language(mut self, language: LanguageId) -> Self {
        self.language = language;
        self
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Get line content without its line terminator
    pub fn line(&self, line_idx: usize) -> Option<Cow<'_, str>> {
        if line_idx >= self.buffer.len_lines() {
            return None;
        }

        let line = self.buffer.line(line_idx);
        let trimmed = line.slice(..self.line_length(line_idx));

        match trimmed.as_str() {
            Some(s) => Some(Cow::Borrowed(s)),
            None => Some(Cow::Owned(trimmed.to_string())),
        }
    }

    /// All lines without terminators, in order
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|idx| self.line(idx).map(Cow::into_owned))
            .collect()
    }

    /// Get the length of a line in chars (excluding LF / CRLF)
    pub fn line_length(&self, line_idx: usize) -> usize {
        if line_idx >= self.buffer.len_lines() {
            return 0;
        }
        let line = self.buffer.line(line_idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            if len > 1 && line.char(len - 2) == '\r' {
                len - 2
            } else {
                len - 1
            }
        } else {
            len
        }
    }

    /// Convert a position to an absolute char offset, if it exists
    pub fn position_to_char(&self, pos: Position) -> Option<usize> {
        if pos.line >= self.buffer.len_lines() || pos.column > self.line_length(pos.line) {
            return None;
        }
        Some(self.buffer.line_to_char(pos.line) + pos.column)
    }

    /// Convert a char offset back to a position
    pub fn char_to_position(&self, offset: usize) -> Position {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        Position::new(line, clamped - self.buffer.line_to_char(line))
    }

    /// Apply a batch of edits atomically
    ///
    /// Every range is validated before the buffer is touched. Edits are
    /// applied from the bottom of the document upwards so earlier ranges stay
    /// valid; the returned changes are in that application order.
    pub fn apply_edits(&mut self, edits: &[TextEdit]) -> Result<Vec<ContentChange>, EditError> {
        let mut sorted = edits.to_vec();
        sorted.sort_by(|a, b| b.range.start.cmp(&a.range.start));

        let mut offsets = Vec::with_capacity(sorted.len());
        for edit in &sorted {
            let start = self
                .position_to_char(edit.range.start)
                .ok_or(EditError::OutOfBounds {
                    position: edit.range.start,
                })?;
            let end = self
                .position_to_char(edit.range.end)
                .ok_or(EditError::OutOfBounds {
                    position: edit.range.end,
                })?;
            if end < start {
                return Err(EditError::OutOfBounds {
                    position: edit.range.end,
                });
            }
            offsets.push((start, end));
        }

        for (idx, pair) in offsets.windows(2).enumerate() {
            // pair[0] is further down the document than pair[1]
            if pair[1].1 > pair[0].0 {
                return Err(EditError::Overlapping {
                    first: sorted[idx + 1].range,
                    second: sorted[idx].range,
                });
            }
        }

        let mut changes = Vec::with_capacity(sorted.len());
        for (edit, (start, end)) in sorted.into_iter().zip(offsets) {
            self.buffer.remove(start..end);
            self.buffer.insert(start, &edit.new_text);
            changes.push(ContentChange::from(edit));
        }

        if !changes.is_empty() {
            self.revision = self.revision.wrapping_add(1);
        }
        Ok(changes)
    }

    /// Replay changes reported by the host
    ///
    /// Changes that do not fit the mirror are skipped and logged; the mirror
    /// is then out of sync until the host re-sends the document.
    pub fn apply_changes(&mut self, changes: &[ContentChange]) {
        for change in changes {
            let start = self.position_to_char(change.range.start);
            let end = self.position_to_char(change.range.end);
            match (start, end) {
                (Some(start), Some(end)) if start <= end => {
                    self.buffer.remove(start..end);
                    self.buffer.insert(start, &change.text);
                }
                _ => {
                    tracing::warn!(
                        "Dropping change {:?} that does not fit document {}",
                        change.range,
                        self.id.0
                    );
                }
            }
        }
        self.revision = self.revision.wrapping_add(1);
    }

    /// Full text of the document
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }
}

//! Editor state - positions, ranges, and the active cursor

use super::document::DocumentId;

/// A position in the document (line and column)
///
/// Both coordinates are 0-indexed; columns count `char`s, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A half-open range `[start, end)` between two positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// An empty range at a single position (an insertion point)
    pub const fn point(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of line breaks covered by the range
    pub fn line_span(&self) -> usize {
        self.end.line.saturating_sub(self.start.line)
    }
}

/// The editor the user is currently typing in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorState {
    /// Document shown by this editor
    pub document_id: DocumentId,
    /// Primary cursor position
    pub cursor: Position,
}

impl EditorState {
    pub fn new(document_id: DocumentId, cursor: Position) -> Self {
        Self {
            document_id,
            cursor,
        }
    }
}

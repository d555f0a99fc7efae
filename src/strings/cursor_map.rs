//! Cursor-word mapping
//!
//! Before a toggle the cursor is turned into "character `n` of word `k`";
//! after the toggle that pair is turned back into a position inside the
//! replacement text, so the cursor stays on the same character.

use super::span::StringSpan;
use crate::model::Position;
use crate::util::word_ranges;

/// Cursor location expressed relative to the words of a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordAnchor {
    pub word_index: usize,
    pub char_offset: usize,
}

/// Snap `column` onto one of `ranges` (absolute `[start, end)` columns).
///
/// Inside a word maps to that word; between two words maps to the nearer
/// boundary, ties going left; before the first word maps to its start and
/// after the last word to its end.
fn snap(ranges: &[(usize, usize)], column: usize) -> Option<(usize, usize)> {
    let (first_start, _) = *ranges.first()?;
    if column < first_start {
        return Some((0, 0));
    }

    for (idx, &(start, end)) in ranges.iter().enumerate() {
        if column >= start && column < end {
            return Some((idx, column - start));
        }
        match ranges.get(idx + 1) {
            Some(&(next_start, _)) if column >= end && column < next_start => {
                let to_left = column - end;
                let to_right = next_start - column;
                return Some(if to_left <= to_right {
                    (idx, end - start)
                } else {
                    (idx + 1, 0)
                });
            }
            Some(_) => {}
            None => return Some((idx, end - start)),
        }
    }
    None
}

/// Word ranges (absolute columns) of the part of `line_idx` inside `span`
fn segment_ranges(span: &StringSpan, line: &str, line_idx: usize) -> Vec<(usize, usize)> {
    let chars: Vec<char> = line.chars().collect();
    let lo = if line_idx == span.start.line {
        span.content_start().column
    } else {
        0
    };
    let hi = if line_idx == span.end.line {
        span.content_end().column
    } else {
        chars.len()
    };
    let lo = lo.min(chars.len());
    let hi = hi.clamp(lo, chars.len());

    word_ranges(&chars[lo..hi])
        .into_iter()
        .map(|(s, e)| (s + lo, e + lo))
        .collect()
}

/// Express `position` as a word anchor inside `span`.
///
/// Returns `None` when the string has no words or the cursor is on a line
/// the span does not cover.
pub fn map_to_word<S: AsRef<str>>(
    span: &StringSpan,
    lines: &[S],
    position: Position,
) -> Option<WordAnchor> {
    if position.line < span.start.line || position.line > span.end.line {
        return None;
    }

    let per_line: Vec<Vec<(usize, usize)>> = (span.start.line..=span.end.line)
        .map(|idx| {
            lines
                .get(idx)
                .map(|l| segment_ranges(span, l.as_ref(), idx))
                .unwrap_or_default()
        })
        .collect();

    let cursor_row = position.line - span.start.line;
    let words_before: usize = per_line[..cursor_row].iter().map(Vec::len).sum();
    let ranges = &per_line[cursor_row];

    if let Some((idx, offset)) = snap(ranges, position.column) {
        return Some(WordAnchor {
            word_index: words_before + idx,
            char_offset: offset,
        });
    }

    // No words on the cursor's line: prefer the next word, else the last one
    let words_after: usize = per_line[cursor_row + 1..].iter().map(Vec::len).sum();
    if words_after > 0 {
        return Some(WordAnchor {
            word_index: words_before,
            char_offset: 0,
        });
    }
    let (start, end) = per_line[..cursor_row]
        .iter()
        .rev()
        .find_map(|r| r.last().copied())?;
    Some(WordAnchor {
        word_index: words_before - 1,
        char_offset: end - start,
    })
}

/// Turn a word anchor back into a position inside freshly produced text.
///
/// `new_text` replaced the string starting at `span_start`; `quote` is its
/// quote token. Without an anchor the cursor goes to the start of the
/// literal.
pub fn map_from_word(
    new_text: &str,
    quote: &str,
    span_start: Position,
    anchor: Option<WordAnchor>,
    to_multiline: bool,
) -> Position {
    let Some(anchor) = anchor else {
        return span_start;
    };

    if to_multiline {
        let lines: Vec<&str> = new_text.split('\n').collect();
        let word_lines = lines.len().saturating_sub(2);
        let mut seen = 0;

        for (row, line) in lines.iter().enumerate().skip(1).take(word_lines) {
            let chars: Vec<char> = line.chars().collect();
            let ranges = word_ranges(&chars);
            if anchor.word_index < seen + ranges.len() {
                let (start, end) = ranges[anchor.word_index - seen];
                return Position::new(
                    span_start.line + row,
                    start + anchor.char_offset.min(end - start),
                );
            }
            seen += ranges.len();
        }
        return span_start;
    }

    let quote_len = quote.chars().count();
    let chars: Vec<char> = new_text.chars().collect();
    if chars.len() < 2 * quote_len {
        return span_start;
    }
    let content = &chars[quote_len..chars.len() - quote_len];

    match word_ranges(content).get(anchor.word_index) {
        Some(&(start, end)) => Position::new(
            span_start.line,
            span_start.column + quote_len + start + anchor.char_offset.min(end - start),
        ),
        None => span_start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(line: &str) -> StringSpan {
        let open = line.find('"').unwrap();
        let close = line.rfind('"').unwrap();
        StringSpan::new(
            Position::new(0, open),
            Position::new(0, close + 1),
            "\"",
            line[open + 1..close].to_string(),
        )
    }

    #[test]
    fn test_inside_word() {
        let line = r#"x = "one two three""#;
        let span = single(line);
        // 'w' of "two"
        let anchor = map_to_word(&span, &[line], Position::new(0, 10)).unwrap();
        assert_eq!(anchor, WordAnchor { word_index: 1, char_offset: 1 });
    }

    #[test]
    fn test_between_words_snaps_to_nearest() {
        let line = r#"x = "ab     cd""#;
        let span = single(line);
        // caret at col 8: 1 after "ab" end (7), 4 before "cd" (12)
        let anchor = map_to_word(&span, &[line], Position::new(0, 8)).unwrap();
        assert_eq!(anchor, WordAnchor { word_index: 0, char_offset: 2 });
        let anchor = map_to_word(&span, &[line], Position::new(0, 11)).unwrap();
        assert_eq!(anchor, WordAnchor { word_index: 1, char_offset: 0 });
    }

    #[test]
    fn test_tie_goes_left() {
        let line = r#""a  b""#;
        let span = single(line);
        let anchor = map_to_word(&span, &[line], Position::new(0, 3)).unwrap();
        assert_eq!(anchor, WordAnchor { word_index: 0, char_offset: 1 });
    }

    #[test]
    fn test_before_and_after_words() {
        let line = r#""  hi there  ""#;
        let span = single(line);
        assert_eq!(
            map_to_word(&span, &[line], Position::new(0, 1)),
            Some(WordAnchor { word_index: 0, char_offset: 0 })
        );
        assert_eq!(
            map_to_word(&span, &[line], Position::new(0, 13)),
            Some(WordAnchor { word_index: 1, char_offset: 5 })
        );
    }

    #[test]
    fn test_empty_string_has_no_anchor() {
        let line = r#"x = """#;
        let span = single(line);
        assert_eq!(map_to_word(&span, &[line], Position::new(0, 5)), None);
    }

    #[test]
    fn test_multiline_counts_previous_lines() {
        let lines = ["  s = `", "    one", "    two", "    three", "  `"];
        let span = StringSpan::new(
            Position::new(0, 6),
            Position::new(4, 3),
            "`",
            "\n    one\n    two\n    three\n  ".to_string(),
        );
        let anchor = map_to_word(&span, &lines, Position::new(3, 6)).unwrap();
        assert_eq!(anchor, WordAnchor { word_index: 2, char_offset: 2 });

        // Opening line has no words: snap to the first word
        let anchor = map_to_word(&span, &lines, Position::new(0, 7)).unwrap();
        assert_eq!(anchor, WordAnchor { word_index: 0, char_offset: 0 });

        // Closing line: end of the last word
        let anchor = map_to_word(&span, &lines, Position::new(4, 2)).unwrap();
        assert_eq!(anchor, WordAnchor { word_index: 2, char_offset: 5 });
    }

    #[test]
    fn test_map_from_word_to_multiline() {
        let text = "\"\n      one\n      two\n    \"";
        let pos = map_from_word(
            text,
            "\"",
            Position::new(3, 14),
            Some(WordAnchor { word_index: 1, char_offset: 2 }),
            true,
        );
        assert_eq!(pos, Position::new(5, 8));
    }

    #[test]
    fn test_map_from_word_to_single_line_clamps_offset() {
        let pos = map_from_word(
            "'one two'",
            "'",
            Position::new(2, 4),
            Some(WordAnchor { word_index: 1, char_offset: 99 }),
            false,
        );
        assert_eq!(pos, Position::new(2, 4 + 1 + 4 + 3));
    }

    #[test]
    fn test_map_from_word_without_anchor() {
        let start = Position::new(7, 3);
        assert_eq!(map_from_word("\"\"", "\"", start, None, false), start);
    }
}

//! Character-level helpers shared by the string engine
//!
//! Everything here works on `char` indices so that columns line up with
//! [`Position`](crate::model::Position) regardless of UTF-8 width.

/// Leading whitespace of a line (spaces and tabs, as written)
pub fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - trimmed.len()]
}

/// True when the char at `idx` is preceded by an odd number of backslashes
pub fn is_escaped(chars: &[char], idx: usize) -> bool {
    let backslashes = chars[..idx.min(chars.len())]
        .iter()
        .rev()
        .take_while(|&&c| c == '\\')
        .count();
    backslashes % 2 == 1
}

/// True when `token` occurs in `chars` starting at `idx`
pub fn token_at(chars: &[char], idx: usize, token: &[char]) -> bool {
    idx + token.len() <= chars.len() && chars[idx..idx + token.len()] == *token
}

/// A quote token may open or close a string at `idx`.
///
/// Single-character tokens must not be escaped; longer tokens are matched
/// as plain substrings.
pub fn delimiter_at(chars: &[char], idx: usize, token: &[char]) -> bool {
    token_at(chars, idx, token) && (token.len() > 1 || !is_escaped(chars, idx))
}

/// `[start, end)` char ranges of whitespace-delimited words
pub fn word_ranges(chars: &[char]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = None;

    for (idx, ch) in chars.iter().enumerate() {
        match (ch.is_whitespace(), start) {
            (false, None) => start = Some(idx),
            (true, Some(s)) => {
                ranges.push((s, idx));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        ranges.push((s, chars.len()));
    }

    ranges
}

/// Whitespace-collapsed, trimmed form of `text`
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(leading_whitespace("    let x"), "    ");
        assert_eq!(leading_whitespace("\t\tfoo"), "\t\t");
        assert_eq!(leading_whitespace("foo  "), "");
        assert_eq!(leading_whitespace("   "), "   ");
    }

    #[test]
    fn test_is_escaped_counts_backslash_runs() {
        let c = chars(r#"a\"b\\"c\\\"d"#);
        assert!(is_escaped(&c, 2));
        assert!(!is_escaped(&c, 6));
        assert!(is_escaped(&c, 11));
        assert!(!is_escaped(&c, 0));
    }

    #[test]
    fn test_delimiter_at_ignores_escape_for_long_tokens() {
        let c = chars(r#"\""""#);
        assert!(!delimiter_at(&c, 1, &['"']));
        assert!(delimiter_at(&c, 1, &['"', '"', '"']));
    }

    #[test]
    fn test_word_ranges() {
        assert_eq!(
            word_ranges(&chars("  one two   three ")),
            vec![(2, 5), (6, 9), (12, 17)]
        );
        assert!(word_ranges(&chars("   ")).is_empty());
        assert_eq!(word_ranges(&chars("héllo wörld")), vec![(0, 5), (6, 11)]);
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("\n  a   b\n\tc  \n"), "a b c");
        assert_eq!(normalize_whitespace("   "), "");
    }
}

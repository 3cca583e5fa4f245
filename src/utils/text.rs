//! Cursor movement and wrapping for terminal text.
//!
//! Cursor positions are byte offsets into a `String` and always sit on a
//! char boundary. Widths are terminal columns.

use unicode_width::UnicodeWidthChar;

pub fn prev_char_boundary(s: &str, byte_index: usize) -> usize {
    s[..byte_index.min(s.len())]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub fn next_char_boundary(s: &str, byte_index: usize) -> usize {
    if byte_index >= s.len() {
        return s.len();
    }
    s[byte_index..]
        .chars()
        .next()
        .map(|c| byte_index + c.len_utf8())
        .unwrap_or(s.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before `byte_index`, skipping separators first.
pub fn prev_word_boundary(s: &str, byte_index: usize) -> usize {
    let head = &s[..byte_index.min(s.len())];
    let mut seen_word = false;
    for (i, c) in head.char_indices().rev() {
        if is_word_char(c) {
            seen_word = true;
        } else if seen_word {
            return i + c.len_utf8();
        }
    }
    0
}

/// Start of the next word after `byte_index`.
pub fn next_word_boundary(s: &str, byte_index: usize) -> usize {
    if byte_index >= s.len() {
        return s.len();
    }
    let mut left_word = false;
    for (i, c) in s[byte_index..].char_indices() {
        if !is_word_char(c) {
            left_word = true;
        } else if left_word {
            return byte_index + i;
        }
    }
    s.len()
}

pub fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Split `text` into lines of at most `width` columns, breaking at spaces
/// where possible and mid-word otherwise. Always returns at least one line.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split(' ') {
        let word_width = display_width(word);
        let sep = if current.is_empty() { 0 } else { 1 };

        if current_width + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_char_boundary() {
        let s = "aöb";
        assert_eq!(prev_char_boundary(s, 0), 0);
        assert_eq!(prev_char_boundary(s, 1), 0);
        assert_eq!(prev_char_boundary(s, 3), 1);
        assert_eq!(prev_char_boundary(s, 4), 3);
    }

    #[test]
    fn test_next_char_boundary() {
        let s = "aöb";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 3);
        assert_eq!(next_char_boundary(s, 3), 4);
        assert_eq!(next_char_boundary(s, 4), 4);
    }

    #[test]
    fn test_prev_word_boundary() {
        let s = "hello world test";
        assert_eq!(prev_word_boundary(s, 16), 12);
        assert_eq!(prev_word_boundary(s, 12), 6);
        assert_eq!(prev_word_boundary(s, 6), 0);
        assert_eq!(prev_word_boundary(s, 3), 0);
        assert_eq!(prev_word_boundary(s, 0), 0);
    }

    #[test]
    fn test_next_word_boundary() {
        let s = "hello world test";
        assert_eq!(next_word_boundary(s, 0), 6);
        assert_eq!(next_word_boundary(s, 3), 6);
        assert_eq!(next_word_boundary(s, 6), 12);
        assert_eq!(next_word_boundary(s, 12), 16);
        assert_eq!(next_word_boundary(s, 16), 16);
    }

    #[test]
    fn test_word_boundary_with_punctuation() {
        let s = "hello, world!";
        assert_eq!(next_word_boundary(s, 0), 7);
        assert_eq!(prev_word_boundary(s, 13), 7);
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn test_wrap_fits_on_one_line() {
        assert_eq!(wrap_to_width("Buy milk", 20), vec!["Buy milk"]);
    }

    #[test]
    fn test_wrap_breaks_at_spaces() {
        assert_eq!(
            wrap_to_width("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_to_width("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_wide_chars() {
        assert_eq!(wrap_to_width("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_to_width("", 10), vec![""]);
    }
}

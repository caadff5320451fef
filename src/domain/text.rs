use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps text to `width` columns, breaking at spaces where possible and
/// inside words only when a single word is wider than the line. Explicit
/// newlines are kept.
pub fn wrap_lines(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    for paragraph in s.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split(' ') {
            let word_width = word.width();
            let sep = usize::from(!line.is_empty());
            if line_width + sep + word_width <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += sep + word_width;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            for c in word.chars() {
                let char_width = c.width().unwrap_or(0);
                if line_width + char_width > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += char_width;
            }
        }
        lines.push(line);
    }
    lines
}

/// Number of rows `s` occupies when wrapped to `width`.
pub fn line_count(s: &str, width: usize) -> usize {
    wrap_lines(s, width).len()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_lines_no_wrap() {
        assert_eq!(wrap_lines("hello, world!", 13), vec!["hello, world!"]);
    }

    #[test]
    fn test_wrap_lines_breaks_at_spaces() {
        assert_eq!(
            wrap_lines("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_lines_splits_long_words() {
        assert_eq!(wrap_lines("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_lines_double_width() {
        assert_eq!(
            wrap_lines("こんにちは、世界！", 7),
            vec!["こんに", "ちは、", "世界！"]
        );
    }

    #[test]
    fn test_wrap_lines_keeps_newlines() {
        assert_eq!(wrap_lines("a\nb", 10), vec!["a", "b"]);
    }

    #[test]
    fn test_wrap_lines_empty_text_is_one_row() {
        assert_eq!(wrap_lines("", 10), vec![""]);
        assert_eq!(line_count("", 10), 1);
    }

    #[test]
    fn test_wrap_lines_zero_width() {
        assert!(wrap_lines("hello", 0).is_empty());
    }
}

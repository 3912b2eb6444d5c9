//! Small text helpers shared by the rendering code.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Truncate `s` to at most `max` display columns, appending an
/// ellipsis when anything was cut.
///
/// Inputs:
/// - `s`: Source text
/// - `max`: Column budget (0 yields an empty string)
///
/// Output:
/// - The original string when it fits; otherwise a prefix plus `…` that
///   fits the budget, measured in display width rather than chars.
#[must_use]
pub fn ellipsize(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.width() <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut used = 0usize;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Fitting strings pass through untouched.
    fn short_strings_untouched() {
        assert_eq!(ellipsize("abc", 10), "abc");
        assert_eq!(ellipsize("abc", 3), "abc");
    }

    #[test]
    /// What: Overlong strings are cut to the column budget with an
    /// ellipsis, counting wide characters as two columns.
    fn long_strings_get_ellipsis() {
        assert_eq!(ellipsize("abcdef", 4), "abc\u{2026}");
        assert_eq!(ellipsize("", 0), "");
        // '你' is two columns wide
        let cut = ellipsize("你好世界", 5);
        assert!(cut.ends_with('\u{2026}'));
        assert!(cut.width() <= 5);
    }
}

//! Character classification used by the walker.
//!
//! Only space and horizontal tab count as skippable whitespace, and only
//! carriage return and line feed count as line terminators. Other Unicode
//! separators (NEL, LS, PS) are treated as ordinary characters.

use std::borrow::Cow;

/// Returns true for characters skipped by [`crate::walker::Walker::skip_spaces`].
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

/// Returns true if `c` ends a line.
pub const fn is_line_terminator(c: char) -> bool {
    matches!(c, '\r' | '\n')
}

/// Printable form of a character for diagnostics.
///
/// The NUL sentinel renders as `<none>`, control characters the walker cares
/// about render as escapes, everything else as itself.
pub fn escape(c: char) -> Cow<'static, str> {
    match c {
        '\0' => Cow::Borrowed("<none>"),
        '\n' => Cow::Borrowed("\\n"),
        '\r' => Cow::Borrowed("\\r"),
        '\t' => Cow::Borrowed("\\t"),
        c => Cow::Owned(c.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_is_space_and_tab_only() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(!is_whitespace('\n'));
        assert!(!is_whitespace('\r'));
        assert!(!is_whitespace('\u{a0}'), "no-break space is not skippable");
        assert!(!is_whitespace('\u{3000}'));
        assert!(!is_whitespace('x'));
    }

    #[test]
    fn test_line_terminators() {
        assert!(is_line_terminator('\n'));
        assert!(is_line_terminator('\r'));
        assert!(!is_line_terminator(' '));
        assert!(!is_line_terminator('\0'));
        assert!(!is_line_terminator('\u{2028}'));
        assert!(!is_line_terminator('\u{85}'));
    }

    #[test]
    fn test_escape_renders_specials() {
        assert_eq!(escape('\0'), "<none>");
        assert_eq!(escape('\n'), "\\n");
        assert_eq!(escape('\r'), "\\r");
        assert_eq!(escape('\t'), "\\t");
        assert_eq!(escape('é'), "é");
    }
}

//! Character-by-character cursor over an in-memory string.
//!
//! The walker always moves forward but keeps the previous, current and next
//! characters at hand, and tracks whether the current character starts or
//! ends a line. A Windows CR+LF pair is seen as a single line terminator:
//! the CR is reported and the LF is stepped over.
//!
//! Positions outside the input yield [`SENTINEL`]. Use [`Walker::is_valid`]
//! to tell a real character from an out-of-range one.
//!
//! # Example
//!
//! ```
//! use textwalk::walker::Walker;
//!
//! let mut walker = Walker::new("a\r\nb");
//! assert!(walker.match_pair('a', '\r'));
//! walker.forward();
//! assert!(walker.at_line_end());
//! assert_eq!(walker.next(), 'b');
//! walker.forward();
//! assert!(walker.at_line_start());
//! assert_eq!(walker.current(), 'b');
//! ```

use std::fmt;

use crate::chars::{self, is_line_terminator, is_whitespace};


/// Placeholder returned for positions outside the walked text.
pub const SENTINEL: char = '\0';

/// Forward-only cursor with one character of lookbehind and lookahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walker {
    text: Vec<char>,
    cursor: usize,
    at_line_start: bool,
    at_line_end: bool,
    previous: char,
    current: char,
    next: char,
}

impl Walker {
    /// Create a walker positioned on the first character of `text`.
    pub fn new(text: &str) -> Self {
        Self::from_chars(text.chars().collect())
    }

    fn from_chars(text: Vec<char>) -> Self {
        let current = raw_char(&text, 0);
        let (next, cursor) = peek_collapsing(&text, current, 0);
        let mut walker = Self {
            text,
            cursor,
            at_line_start: true,
            at_line_end: false,
            previous: SENTINEL,
            current,
            next,
        };
        walker.update_at_line_end();
        walker
    }

    /// True while the cursor has not moved past the last character.
    pub fn has_more(&self) -> bool {
        self.cursor < self.text.len()
    }

    /// Advance by one logical character.
    ///
    /// A CR+LF pair counts as one character. Past the end of the text this
    /// clears every lookaround slot and is otherwise a no-op.
    pub fn forward(&mut self) {
        if self.has_more() {
            self.at_line_start = self.at_line_end;
            self.cursor += 1;
            self.previous = self.current;
            self.current = self.next;
            self.update_at_line_end();
            let (next, cursor) = peek_collapsing(&self.text, self.current, self.cursor);
            self.next = next;
            self.cursor = cursor;
        } else {
            if Self::is_valid(self.previous) {
                tracing::trace!(cursor = self.cursor, "walker exhausted");
            }
            self.at_line_start = false;
            self.at_line_end = true;
            self.previous = SENTINEL;
            self.current = SENTINEL;
            self.next = SENTINEL;
        }
    }

    /// Advance by `n` logical characters, one [`forward`](Self::forward) at a time.
    pub fn forward_by(&mut self, n: usize) {
        for _ in 0..n {
            self.forward();
        }
    }

    /// Skip spaces and tabs.
    ///
    /// Returns the number of characters skipped.
    pub fn skip_spaces(&mut self) -> usize {
        let mut skipped = 0;
        while is_whitespace(self.current) {
            self.forward();
            skipped += 1;
        }
        skipped
    }

    /// Move to the first character of the next line, or to the end of input.
    ///
    /// Always moves at least once, so calling it on a line start moves to
    /// the following line.
    pub fn go_to_next_line(&mut self) {
        loop {
            self.forward();
            if self.at_line_start || !self.has_more() {
                break;
            }
        }
    }

    /// True if the current character ends a line (or the input is exhausted).
    pub const fn at_line_end(&self) -> bool {
        self.at_line_end
    }

    /// True if the current character starts a line.
    pub const fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    pub const fn previous(&self) -> char {
        self.previous
    }

    pub const fn current(&self) -> char {
        self.current
    }

    pub const fn next(&self) -> char {
        self.next
    }

    /// Raw index into the walked text.
    ///
    /// On the CR of a CR+LF pair this already points at the LF.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The raw text from the cursor to the end.
    pub fn remaining(&self) -> String {
        self.text
            .get(self.cursor..)
            .map(|rest| rest.iter().collect())
            .unwrap_or_default()
    }

    pub const fn match_char(&self, c: char) -> bool {
        c == self.current
    }

    pub const fn match_pair(&self, c1: char, c2: char) -> bool {
        c1 == self.current && c2 == self.next
    }

    /// True if the text at the cursor starts with `s`.
    ///
    /// The first two characters are compared against the normalized
    /// `current` and `next`, the rest against the raw text. `None` and the
    /// empty string never match.
    pub fn match_str<'a>(&self, s: impl Into<Option<&'a str>>) -> bool {
        let Some(s) = s.into() else {
            return false;
        };
        let mut expected = s.chars();
        let Some(first) = expected.next() else {
            return false;
        };
        if first != self.current {
            return false;
        }
        let Some(second) = expected.next() else {
            return true;
        };
        if second != self.next {
            return false;
        }
        expected.zip(2_isize..).all(|(c, i)| c == self.char_at(i))
    }

    /// Like [`match_str`](Self::match_str), but starting `offset` raw
    /// characters away from the cursor and comparing only against raw text.
    pub fn match_at<'a>(&self, offset: isize, s: impl Into<Option<&'a str>>) -> bool {
        let Some(s) = s.into().filter(|s| !s.is_empty()) else {
            return false;
        };
        s.chars()
            .zip(0_isize..)
            .all(|(c, i)| c == self.char_at(offset.saturating_add(i)))
    }

    /// The raw character at `position` relative to the cursor.
    ///
    /// Unlike the lookaround slots, this is not normalized and can return
    /// the LF of a CR+LF pair. Returns [`SENTINEL`] out of bounds.
    pub fn char_at(&self, position: isize) -> char {
        self.cursor
            .checked_add_signed(position)
            .map_or(SENTINEL, |index| raw_char(&self.text, index))
    }

    /// True if `c` is a real character rather than the out-of-range placeholder.
    ///
    /// Only meaningful for values returned by [`previous`](Self::previous),
    /// [`current`](Self::current), [`next`](Self::next) or
    /// [`char_at`](Self::char_at).
    pub const fn is_valid(c: char) -> bool {
        c != SENTINEL
    }

    fn update_at_line_end(&mut self) {
        self.at_line_end = is_line_terminator(self.current) || !self.has_more();
    }
}

impl From<&str> for Walker {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Walker {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl fmt::Display for Walker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Walker[cursor={}", self.cursor)?;
        if self.at_line_start {
            f.write_str(", line start")?;
        }
        if self.at_line_end {
            f.write_str(", line end")?;
        }
        write!(
            f,
            ", context={}{}{}, [{}]]",
            chars::escape(self.previous),
            chars::escape(self.current),
            chars::escape(self.next),
            self.remaining()
        )
    }
}

fn raw_char(text: &[char], index: usize) -> char {
    text.get(index).copied().unwrap_or(SENTINEL)
}

/// Peek the character after `cursor`, stepping over the LF of a CR+LF pair.
///
/// Returns the peeked character and the cursor to keep: one further along
/// when `current` is a CR followed by an LF. A lone CR is left alone.
fn peek_collapsing(text: &[char], current: char, cursor: usize) -> (char, usize) {
    let next = raw_char(text, cursor + 1);
    if current == '\r' && next == '\n' {
        tracing::trace!(cursor, "collapsing CR+LF");
        (raw_char(text, cursor + 2), cursor + 1)
    } else {
        (next, cursor)
    }
}

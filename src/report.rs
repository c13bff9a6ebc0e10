//! Step tables and summaries produced by walking a text.
//!
//! These back the `textwalk` binary, and double as a small example of a
//! parser-style consumer of [`Walker`].

use std::fmt;

use crate::chars::{escape, is_line_terminator};
use crate::walker::Walker;

/// Snapshot of the walker at one logical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub cursor: usize,
    pub previous: char,
    pub current: char,
    pub next: char,
    pub at_line_start: bool,
    pub at_line_end: bool,
}

impl Step {
    fn capture(walker: &Walker) -> Self {
        Self {
            cursor: walker.cursor(),
            previous: walker.previous(),
            current: walker.current(),
            next: walker.next(),
            at_line_start: walker.at_line_start(),
            at_line_end: walker.at_line_end(),
        }
    }

    /// Column header matching the [`Display`](fmt::Display) layout.
    pub const fn header() -> &'static str {
        "cursor  prev    curr    next    flags"
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = match (self.at_line_start, self.at_line_end) {
            (true, true) => "start,end",
            (true, false) => "start",
            (false, true) => "end",
            (false, false) => "-",
        };
        write!(
            f,
            "{:>6}  {:<6}  {:<6}  {:<6}  {flags}",
            self.cursor,
            escape(self.previous),
            escape(self.current),
            escape(self.next),
        )
    }
}

/// Walk `text` to the end, recording every logical position.
pub fn trace_steps(text: &str) -> Vec<Step> {
    let log_steps = crate::perf::is_debug_log_enabled();
    let mut walker = Walker::new(text);
    let mut steps = Vec::new();
    while walker.has_more() {
        let step = Step::capture(&walker);
        if log_steps {
            crate::perf::log_event("walk.step", step.to_string());
        }
        steps.push(step);
        walker.forward();
    }
    tracing::debug!(steps = steps.len(), "traced walk");
    steps
}

/// Line-level statistics of a text, as seen through the walker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Logical characters, a CR+LF pair counting as one.
    pub logical_chars: usize,
    pub lines: usize,
    /// Lines holding nothing but their terminator.
    pub blank_lines: usize,
    pub crlf_pairs: usize,
    /// Longest line, terminator excluded.
    pub longest_line: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "logical chars: {}", self.logical_chars)?;
        writeln!(f, "lines:         {}", self.lines)?;
        writeln!(f, "blank lines:   {}", self.blank_lines)?;
        writeln!(f, "CRLF pairs:    {}", self.crlf_pairs)?;
        write!(f, "longest line:  {}", self.longest_line)
    }
}

/// Compute a [`Summary`] for `text`.
pub fn summarize(text: &str) -> Summary {
    let mut walker = Walker::new(text);
    let mut summary = Summary::default();
    let mut line_len = 0;

    while walker.has_more() {
        summary.logical_chars += 1;
        if walker.at_line_start() {
            summary.lines += 1;
            line_len = 0;
            if walker.at_line_end() {
                summary.blank_lines += 1;
            }
        }
        if is_line_terminator(walker.current()) {
            // The raw view still sees the LF the walker stepped over.
            if walker.match_char('\r') && walker.char_at(0) == '\n' {
                summary.crlf_pairs += 1;
            }
        } else {
            line_len += 1;
            summary.longest_line = summary.longest_line.max(line_len);
        }
        walker.forward();
    }

    tracing::debug!(?summary, "summarized text");
    summary
}

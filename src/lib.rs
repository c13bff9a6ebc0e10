#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. report::Summary)
    clippy::module_name_repetitions
)]

//! # textwalk
//!
//! A character-stream cursor for hand-written text parsers.
//!
//! The [`Walker`](walker::Walker) scans a string one logical character at a
//! time, folding Windows CR+LF line endings into a single line terminator,
//! and offers one character of lookbehind, one of lookahead, arbitrary raw
//! lookahead and substring matching.
//!
//! ## Modules
//!
//! - [`chars`]: Character classification
//! - [`walker`]: The cursor itself
//! - [`report`]: Step tables and line statistics built on the walker
//! - [`config`]: Saved defaults for the `textwalk` binary
//! - [`perf`]: Timing scopes and the step log

pub mod chars;
pub mod config;
pub mod perf;
pub mod report;
pub mod walker;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::walker::{SENTINEL, Walker};
}

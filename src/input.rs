//! Reading and parsing puzzle inputs.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::InvalidInput;

/// Read the whole file at `path`.
///
/// A missing or unreadable file is logged and read as empty, which every puzzle treats as a degenerate input rather than an error.
pub fn read_input(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    fs::read_to_string(path).unwrap_or_else(|error| {
        warn!(path = %path.display(), %error, "could not read input, treating it as empty");
        String::new()
    })
}

/// Parse one integer, optionally negative, per line.
///
/// The first line which isn't an integer aborts parsing.
pub fn parse_numbers(text: &str) -> Result<Vec<i64>, InvalidInput> {
    text.lines()
        .enumerate()
        .map(|(index, line)| {
            let line = line.trim();
            line.parse().map_err(|source| InvalidInput::Number {
                line: index + 1,
                text: line.to_string(),
                source,
            })
        })
        .collect()
}

/// The first line of `text`, without its line ending. Empty if `text` is.
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

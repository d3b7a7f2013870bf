//! Errors raised while reading puzzle inputs.

use std::num::ParseIntError;

/// Reasons a puzzle input may be rejected.
///
/// There is no partial recovery: the first invalid line or symbol aborts the whole computation.
#[derive(Debug, thiserror::Error)]
pub enum InvalidInput {
    /// A line of the encrypted file is not an integer.
    #[error("line {line}: `{text}` is not an integer")]
    Number {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
        /// Why the line failed to parse.
        #[source]
        source: ParseIntError,
    },
    /// A symbol entering the signal window is outside `'a'..='z'`.
    #[error("symbol {symbol:?} at position {position} is outside 'a'..='z'")]
    Symbol {
        /// The offending symbol.
        symbol: char,
        /// 0-based position in the datastream.
        position: usize,
    },
}

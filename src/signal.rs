//! Locking onto the communication signal.
//!
//! A marker is the end of the first run of distinct symbols of a given length.

use tracing::trace;

use crate::error::InvalidInput;
use crate::part::Part;

/// Window length marking the start of a packet.
pub const PACKET_MARKER: usize = 4;
/// Window length marking the start of a message.
pub const MESSAGE_MARKER: usize = 14;

const ALPHABET: usize = (b'z' - b'a' + 1) as usize;

/// The marker length each [`Part`] of the puzzle searches for.
pub fn marker_size(part: Part) -> usize {
    match part {
        Part::One => PACKET_MARKER,
        Part::Two => MESSAGE_MARKER,
    }
}

/// Symbol counts over a sliding window of `'a'..='z'`.
///
/// Tracks how many symbols occur more than once, so a window can be checked for distinctness without rescanning it.
#[derive(Clone, Debug, Default)]
pub struct Window {
    counts: [u32; ALPHABET],
    // symbols with a count of two or more
    duplicates: usize,
    len: usize,
}

impl Window {
    /// Add `symbol`, found at `position` in the datastream, to the window.
    pub fn push(&mut self, symbol: char, position: usize) -> Result<(), InvalidInput> {
        let index = symbol_index(symbol, position)?;
        self.counts[index] += 1;
        if self.counts[index] == 2 {
            self.duplicates += 1;
        }
        self.len += 1;

        Ok(())
    }

    /// Remove `symbol`, found at `position` in the datastream, from the window.
    ///
    /// Removing a symbol that is not in the window does nothing.
    pub fn pop(&mut self, symbol: char, position: usize) -> Result<(), InvalidInput> {
        let index = symbol_index(symbol, position)?;
        if self.counts[index] == 0 {
            return Ok(());
        }
        self.counts[index] -= 1;
        if self.counts[index] == 1 {
            self.duplicates -= 1;
        }
        self.len -= 1;

        Ok(())
    }

    /// Number of symbols currently in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the window holds no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every symbol in the window is distinct.
    #[inline]
    pub fn is_marker(&self) -> bool {
        self.duplicates == 0
    }
}

fn symbol_index(symbol: char, position: usize) -> Result<usize, InvalidInput> {
    if symbol.is_ascii_lowercase() {
        Ok((symbol as u8 - b'a') as usize)
    } else {
        Err(InvalidInput::Symbol { symbol, position })
    }
}

/// Find the 1-based position of the last symbol of the first `size` distinct symbols in `datastream`.
///
/// Returns `None` if `datastream` is shorter than `size` or never settles on a marker.
/// Only symbols that enter the window before the marker is found are validated.
pub fn find_marker(datastream: &str, size: usize) -> Result<Option<usize>, InvalidInput> {
    let symbols: Vec<char> = datastream.chars().collect();
    let mut window = Window::default();

    for (position, symbol) in symbols.iter().take(size).enumerate() {
        window.push(*symbol, position)?;
    }
    if window.len() == size && window.is_marker() {
        return Ok(Some(size));
    }

    for entering in size..symbols.len() {
        let leaving = entering - size;
        window.push(symbols[entering], entering)?;
        window.pop(symbols[leaving], leaving)?;

        if window.is_marker() {
            trace!(size, end = entering + 1, "marker found");
            return Ok(Some(entering + 1));
        }
    }

    trace!(size, len = symbols.len(), "no marker");
    Ok(None)
}

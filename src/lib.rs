#![warn(missing_docs)]

//! # `handheld`
//!
//! Routines for the elves' handheld device: locking onto the communication signal and decrypting the grove coordinates.
//! Each routine is driven by a small executable in the `solver` crate, which reads a puzzle input, hands it to this crate, and prints one answer per [`Part`].
//!
//! # Decryption
//! The encrypted file is a list of integers which is "mixed" by moving every number, in the order it originally appeared, forward or backward around a circle by its own value.
//! [`RingMixer`] holds that circle as an arena of elements linked by [`Handle`]s, so moving a number is a splice of four links rather than a shift of the whole list.
//! The answer is read at fixed offsets from the number `0`; see [`grove::grove_coordinates`].
//!
//! # Signal lock
//! The start of a packet (or message) is the first run of distinct symbols of a given length.
//! [`signal::Window`] keeps per-symbol counts over a sliding window together with the number of repeated symbols, so each slide costs O(1); see [`signal::find_marker`].

pub use error::InvalidInput;
pub use part::Part;
pub use ring::{Direction, Handle, RingMixer};

pub mod error;
pub mod grove;
pub mod input;
pub(crate) mod part;
pub mod ring;
pub mod signal;

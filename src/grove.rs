//! Decrypting the grove coordinates from the encrypted file.

use tracing::{debug, instrument};

use crate::part::Part;
use crate::ring::RingMixer;

/// Offsets after the zero at which the grove coordinates are read.
pub const GROVE_OFFSETS: [usize; 3] = [1000, 2000, 3000];

/// How hard the encrypted file is mixed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Decryption {
    /// Multiplier applied to every number.
    pub key: i64,
    /// Number of full mixing passes.
    pub rounds: usize,
}

impl Decryption {
    /// A single pass over the numbers as written.
    pub const PLAIN: Self = Self { key: 1, rounds: 1 };
    /// Ten passes after applying the real decryption key.
    pub const FULL: Self = Self { key: 811589153, rounds: 10 };

    /// The parameters each [`Part`] of the puzzle asks for.
    pub fn for_part(part: Part) -> Self {
        match part {
            Part::One => Self::PLAIN,
            Part::Two => Self::FULL,
        }
    }
}

/// Mix `numbers` as `decryption` specifies and sum the coordinates at [`GROVE_OFFSETS`].
///
/// No numbers at all decrypt to `0`. The key is applied in `i128`, so values near `i64::MAX` still decrypt.
#[instrument(level = "debug", skip(numbers), fields(len = numbers.len()))]
pub fn grove_coordinates(numbers: &[i64], decryption: Decryption) -> i128 {
    let mut ring = RingMixer::new(numbers.iter().copied(), decryption.key);
    ring.mix_rounds(decryption.rounds);

    let sum = ring.sum_at_offsets(&GROVE_OFFSETS);
    debug!(sum, "decrypted");
    sum
}

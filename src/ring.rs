//! The mixing ring: a circular list of integers moved around by their own values.

use std::fmt::{self, Formatter};
use std::iter::successors;

use itertools::Itertools;
use strum::VariantArray;
use tracing::debug;

/// Index of an element within a [`RingMixer`].
///
/// Handles are handed out in input order, so `Handle(i)` is always the `i`th number given to [`RingMixer::new`], wherever mixing has moved it since.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Handle(pub usize);

/// The way an element travels around the ring.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, VariantArray)]
pub enum Direction {
    /// Toward the element's predecessors.
    Left,
    /// Toward the element's successors.
    Right,
}

impl Direction {
    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Element {
    value: i64,
    prev: Handle,
    next: Handle,
}

/// A circular, doubly-linked list of integers which can be "mixed".
///
/// Elements live in an arena in their original order and link to each other by [`Handle`].
/// Values are stored as given; the decryption `key` is applied only when computing how far an element moves and when reading results.
///
/// The ring keeps a `head`, the element it is iterated and displayed from.
/// The head never affects where an element ends up relative to the others, only where a printed listing begins.
#[derive(Clone, Debug)]
pub struct RingMixer {
    elements: Vec<Element>,
    head: Option<Handle>,
    key: i64,
}

impl RingMixer {
    /// Build a ring holding `values` in order, with the last value linked back to the first.
    pub fn new(values: impl IntoIterator<Item = i64>, key: i64) -> Self {
        let values = values.into_iter().collect_vec();
        let len = values.len();
        let elements = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Element {
                value,
                prev: Handle((i + len - 1) % len),
                next: Handle((i + 1) % len),
            })
            .collect_vec();

        Self {
            head: (len > 0).then_some(Handle(0)),
            elements,
            key,
        }
    }

    /// Number of elements in the ring.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the ring holds no elements at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The decryption key applied to every value.
    #[inline]
    pub fn key(&self) -> i64 {
        self.key
    }

    /// The element iteration starts from, or `None` if the ring is empty.
    #[inline]
    pub fn head(&self) -> Option<Handle> {
        self.head
    }

    /// All handles in original input order, which is the order [`Self::mix`] visits them in.
    pub fn handles(&self) -> impl Iterator<Item = Handle> {
        (0..self.len()).map(Handle)
    }

    /// The stored (unscaled) value at `handle`.
    ///
    /// Panics if `handle` did not come from this ring.
    pub fn value(&self, handle: Handle) -> i64 {
        self.elements[handle.0].value
    }

    /// The elements currently on either side of `handle`, as `(prev, next)`.
    ///
    /// Panics if `handle` did not come from this ring.
    pub fn neighbors(&self, handle: Handle) -> (Handle, Handle) {
        let element = &self.elements[handle.0];
        (element.prev, element.next)
    }

    /// Stored values in ring order, starting from the head.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.walk_from(self.head).map(|handle| self.value(handle))
    }

    /// Values in ring order, starting from the head, with the key applied.
    ///
    /// Widened to `i128`, which holds the product of any value and key.
    pub fn scaled(&self) -> impl Iterator<Item = i128> + '_ {
        self.iter().map(|value| i128::from(value) * i128::from(self.key))
    }

    /// Move the element at `handle` by `steps` positions in `direction`.
    ///
    /// An element travels past the `len() - 1` others, so steps are taken modulo `len() - 1` and a full lap leaves the ring unchanged.
    /// The result, head included, is the same as moving one position at a time, but costs a single unlink and relink.
    pub fn rotate(&mut self, handle: Handle, direction: Direction, steps: usize) {
        let lap = self.len().saturating_sub(1);
        if lap == 0 || steps % lap == 0 {
            return;
        }
        let steps = steps % lap;

        let Element { prev, next, .. } = self.elements[handle.0];
        if self.head == Some(handle) {
            self.head = Some(next);
        }
        self.elements[prev.0].next = next;
        self.elements[next.0].prev = prev;

        match direction {
            Direction::Right => {
                let mut before = next;
                for _ in 1..steps {
                    before = self.elements[before.0].next;
                }
                let after = self.elements[before.0].next;
                self.link(before, handle, after);

                // landing right before the head wraps the element around to the front
                if self.head == Some(after) {
                    self.head = Some(handle);
                }
            }
            Direction::Left => {
                let mut after = prev;
                for _ in 1..steps {
                    after = self.elements[after.0].prev;
                }
                let before = self.elements[after.0].prev;
                self.link(before, handle, after);
            }
        }
    }

    /// One mixing pass: every element, in original order, moves by its value times the key.
    pub fn mix(&mut self) {
        let lap = self.len().saturating_sub(1);
        if lap == 0 {
            return;
        }

        for handle in self.handles() {
            let value = self.value(handle);
            let direction = match value.signum() * self.key.signum() {
                1 => Direction::Right,
                -1 => Direction::Left,
                _ => continue,
            };
            self.rotate(handle, direction, scaled_steps(value, self.key, lap));
        }
    }

    /// Apply [`Self::mix`] `rounds` times.
    pub fn mix_rounds(&mut self, rounds: usize) {
        for round in 1..=rounds {
            self.mix();
            debug!(round, rounds, len = self.len(), "mixing round complete");
        }
    }

    /// Sum the values found `offsets` positions after the element valued zero, with the key applied.
    ///
    /// The first zero found from the head is used; without any zero, the head stands in for it.
    /// An empty ring sums to zero.
    /// The sum is taken in `i128`; a result beyond its range saturates rather than wrapping.
    pub fn sum_at_offsets(&self, offsets: &[usize]) -> i128 {
        let Some(head) = self.head else {
            return 0;
        };

        let zero = self
            .walk_from(Some(head))
            .find(|handle| self.value(*handle) == 0)
            .unwrap_or(head);

        let sum = offsets
            .iter()
            .map(|offset| i128::from(self.value(self.advance(zero, offset % self.len()))))
            .fold(0i128, i128::saturating_add);

        sum.saturating_mul(i128::from(self.key))
    }

    fn walk_from(&self, start: Option<Handle>) -> impl Iterator<Item = Handle> + '_ {
        successors(start, |handle| Some(self.elements[handle.0].next)).take(self.len())
    }

    fn advance(&self, mut handle: Handle, steps: usize) -> Handle {
        for _ in 0..steps {
            handle = self.elements[handle.0].next;
        }
        handle
    }

    #[inline]
    fn link(&mut self, before: Handle, handle: Handle, after: Handle) {
        self.elements[before.0].next = handle;
        self.elements[handle.0].prev = before;
        self.elements[handle.0].next = after;
        self.elements[after.0].prev = handle;
    }
}

/// `|value * key| mod lap`, without forming the product.
fn scaled_steps(value: i64, key: i64, lap: usize) -> usize {
    let lap = lap as u128;
    let steps = (u128::from(value.unsigned_abs()) % lap) * (u128::from(key.unsigned_abs()) % lap) % lap;
    // steps < lap, which came from a usize
    steps as usize
}

impl fmt::Display for RingMixer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scaled().join(", "))
    }
}

//! Generated integer sequences.

use num_traits::{CheckedAdd, PrimInt};

use super::{Cursor, ForwardCursor, Readable, Sequence, Unreachable};

/// A cursor over the integers counting up from a start value.
///
/// As a [`Sequence`] an `Iota` never ends; bound it with another `Iota`
/// through [`Iota::range`], or let the other side of a two-sequence
/// algorithm decide when to stop.
///
/// # Example
///
/// ```
/// use rangeforge_core::cursor::{Cursor, Iota, Readable};
///
/// let mut cursor = Iota::new(10u32);
/// cursor.advance();
/// assert_eq!(*cursor.read(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iota<T> {
    value: T,
}

impl<T: PrimInt> Iota<T> {
    /// Creates a cursor positioned at `start`.
    #[inline]
    pub fn new(start: T) -> Self {
        Self { value: start }
    }

    /// Returns the cursor at `start` and the end cursor at `end`.
    #[inline]
    pub fn range(start: T, end: T) -> (Self, Self) {
        (Self::new(start), Self::new(end))
    }

    /// Returns the current value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: PrimInt> Cursor for Iota<T> {
    /// # Panics
    ///
    /// Panics when the current value is the maximum of `T`.
    #[inline]
    fn advance(&mut self) {
        self.value = match CheckedAdd::checked_add(&self.value, &T::one()) {
            Some(value) => value,
            None => panic!("Iota advanced past the maximum value of its type"),
        };
    }
}

impl<T: PrimInt> Readable for Iota<T> {
    type Item = T;

    #[inline]
    fn read(&self) -> &T {
        &self.value
    }
}

impl<T: PrimInt> ForwardCursor for Iota<T> {
    #[inline]
    unsafe fn fork(&self) -> Self {
        *self
    }
}

impl<T: PrimInt> Sequence for Iota<T> {
    type Cursor = Self;
    type Sentinel = Unreachable;

    #[inline]
    fn into_bounds(self) -> (Self, Unreachable) {
        (self, Unreachable)
    }
}

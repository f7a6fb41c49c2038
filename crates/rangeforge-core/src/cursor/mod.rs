//! Cursor and sentinel abstractions.
//!
//! A cursor is a position inside a sequence. It can be advanced, and a
//! readable cursor hands out the element it points at. A sentinel marks
//! the end of a sequence; it only needs to answer whether a cursor has
//! reached it, so it may be a different type than the cursor (for example
//! [`Unreachable`] for sequences that never end).
//!
//! # Example
//!
//! ```
//! use rangeforge_core::cursor::{Cursor, Readable, Sentinel, Sequence};
//!
//! let values = [1, 2, 3];
//! let (mut cursor, end) = (&values).into_bounds();
//!
//! let mut seen = Vec::new();
//! while !end.is_end(&cursor) {
//!     seen.push(*cursor.read());
//!     cursor.advance();
//! }
//! assert_eq!(seen, vec![1, 2, 3]);
//! ```

mod input;
mod iota;
mod sequence;
mod slice;

#[cfg(test)]
mod tests;

pub use input::{InputCursor, InputEnd, InputSequence};
pub use iota::Iota;
pub use sequence::{
    Container, ForwardContainer, PermutableContainer, Sequence, Truncate, WritableContainer,
};
pub use slice::{SliceCursor, SliceCursorMut};

/// A position within a sequence.
pub trait Cursor {
    /// Moves the cursor to the next position.
    fn advance(&mut self);
}

/// A cursor whose element can be read.
///
/// Single-pass cursors are readable too; reading the same position twice
/// is only guaranteed to yield the same element for [`ForwardCursor`]s.
#[diagnostic::on_unimplemented(
    message = "sequence must be traversable",
    label = "`{Self}` cannot read the element under it"
)]
pub trait Readable: Cursor {
    /// Element type of the sequence.
    type Item;

    /// Returns the element under the cursor.
    ///
    /// # Panics
    ///
    /// Implementations panic when the cursor is positioned at the end.
    fn read(&self) -> &Self::Item;
}

/// A multi-pass cursor: forks may be advanced independently and revisit
/// the same elements.
///
/// A cursor whose copies share traversal state (such as a cursor over a
/// generator) must not implement it. Mutable cursors are not `Clone`;
/// forking one is `unsafe` because the fork aliases the same storage.
#[diagnostic::on_unimplemented(
    message = "sequence must be forward-traversable",
    label = "`{Self}` is a single-pass cursor"
)]
pub trait ForwardCursor: Cursor + PartialEq + Sized {
    /// Returns an independent cursor at the same position.
    ///
    /// # Safety
    ///
    /// For [`Permutable`] or [`Writable`] cursors the fork reaches the same
    /// elements as `self`. No reference returned by [`Readable::read`]
    /// through one of them may be alive while an element is exchanged or
    /// written through another.
    unsafe fn fork(&self) -> Self;
}

/// A cursor through which elements can be exchanged in place.
#[diagnostic::on_unimplemented(
    message = "elements must be permutable",
    label = "`{Self}` gives read-only access to its elements"
)]
pub trait Permutable: Readable {
    /// Exchanges the element under `self` with the element under `other`.
    ///
    /// # Safety
    ///
    /// Both cursors must point at live elements of the same exclusively
    /// borrowed storage, and no reference returned by [`Readable::read`]
    /// for either position may still be alive.
    unsafe fn swap_with(&self, other: &Self);
}

/// A cursor through which a value of type `O` can be stored.
#[diagnostic::on_unimplemented(
    message = "function result must be writable back into the sequence",
    label = "`{Self}` cannot store a `{O}`"
)]
pub trait Writable<O>: Cursor {
    /// Replaces the element under the cursor with `value`.
    ///
    /// # Safety
    ///
    /// The cursor must point at a live element and no reference returned
    /// by [`Readable::read`] for that position may still be alive.
    unsafe fn write(&self, value: O);
}

/// A cursor that knows its offset from the start of its sequence.
#[diagnostic::on_unimplemented(message = "cursor must report its offset in the sequence")]
pub trait Indexed: Cursor {
    /// Returns the zero-based offset of the cursor.
    fn index(&self) -> usize;
}

/// End-of-sequence test for cursors of type `C`.
pub trait Sentinel<C> {
    /// Returns true if `cursor` has reached the end.
    fn is_end(&self, cursor: &C) -> bool;
}

/// Every comparable cursor is a sentinel for its own type.
impl<C> Sentinel<C> for C
where
    C: Cursor + PartialEq,
{
    #[inline]
    fn is_end(&self, cursor: &C) -> bool {
        self == cursor
    }
}

/// A sentinel no cursor ever reaches.
///
/// Pairs with generated sequences such as [`Iota`], and terminates the
/// unbounded side of two-sequence algorithms only through the other side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unreachable;

impl<C: Cursor> Sentinel<C> for Unreachable {
    #[inline]
    fn is_end(&self, _: &C) -> bool {
        false
    }
}

/// Advances `cursor` until `last` reports the end, returning the number of
/// steps taken and the final position.
///
/// # Example
///
/// ```
/// use rangeforge_core::cursor::{measure, Sequence};
///
/// let values = vec![4, 5, 6];
/// let (first, last) = (&values).into_bounds();
/// let (len, end) = measure(first, &last);
/// assert_eq!(len, 3);
/// assert_eq!(end, last);
/// ```
pub fn measure<C, L>(mut cursor: C, last: &L) -> (usize, C)
where
    C: Cursor,
    L: Sentinel<C>,
{
    let mut len = 0;
    while !last.is_end(&cursor) {
        cursor.advance();
        len += 1;
    }
    (len, cursor)
}

/// Returns `cursor` advanced by `n` positions.
#[inline]
pub fn advanced_by<C: Cursor>(mut cursor: C, n: usize) -> C {
    for _ in 0..n {
        cursor.advance();
    }
    cursor
}

/// Returns a copy of `cursor` advanced by one position.
#[inline]
pub fn next<C: Cursor + Clone>(cursor: &C) -> C {
    let mut next = cursor.clone();
    next.advance();
    next
}

/// Returns a fork of `cursor` advanced by one position.
///
/// # Safety
///
/// Same contract as [`ForwardCursor::fork`].
#[inline]
pub unsafe fn fork_next<C: ForwardCursor>(cursor: &C) -> C {
    let mut next = cursor.fork();
    next.advance();
    next
}

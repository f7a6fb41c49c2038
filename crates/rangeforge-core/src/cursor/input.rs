//! Single-pass sequences adapted from iterators.

use std::fmt;

use super::{Cursor, Readable, Sentinel, Sequence};

/// Single-pass cursor pulling elements from an [`Iterator`].
///
/// The cursor buffers the current element. Advancing consumes it, so the
/// cursor is neither `Clone` nor a [`ForwardCursor`](super::ForwardCursor).
pub struct InputCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
}

impl<I: Iterator> InputCursor<I> {
    /// Creates a cursor at the first element of `iter`.
    pub fn new(mut iter: I) -> Self {
        let current = iter.next();
        Self { iter, current }
    }

    /// Returns the buffered element, if the cursor is not at the end.
    #[inline]
    pub fn current(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    /// Consumes the cursor and returns the buffered element together with
    /// the elements not yet visited.
    pub fn into_remaining(self) -> impl Iterator<Item = I::Item> {
        self.current.into_iter().chain(self.iter)
    }
}

impl<I: Iterator> fmt::Debug for InputCursor<I>
where
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputCursor")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<I: Iterator> Cursor for InputCursor<I> {
    #[inline]
    fn advance(&mut self) {
        self.current = self.iter.next();
    }
}

impl<I: Iterator> Readable for InputCursor<I> {
    type Item = I::Item;

    #[inline]
    fn read(&self) -> &I::Item {
        match &self.current {
            Some(item) => item,
            None => panic!("read past the end of a single-pass sequence"),
        }
    }
}

/// Sentinel for [`InputCursor`]: reached once the iterator is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEnd;

impl<I: Iterator> Sentinel<InputCursor<I>> for InputEnd {
    #[inline]
    fn is_end(&self, cursor: &InputCursor<I>) -> bool {
        cursor.current.is_none()
    }
}

/// A [`Sequence`] over any iterator, traversable exactly once.
///
/// # Example
///
/// ```
/// use rangeforge_core::cursor::{Cursor, InputSequence, Readable, Sentinel, Sequence};
///
/// let (mut cursor, end) = InputSequence::new("ab".chars()).into_bounds();
/// assert_eq!(*cursor.read(), 'a');
/// cursor.advance();
/// cursor.advance();
/// assert!(end.is_end(&cursor));
/// ```
#[derive(Debug, Clone)]
pub struct InputSequence<I> {
    iter: I,
}

impl<I: Iterator> InputSequence<I> {
    /// Wraps `iter`.
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: Iterator> Sequence for InputSequence<I> {
    type Cursor = InputCursor<I>;
    type Sentinel = InputEnd;

    fn into_bounds(self) -> (InputCursor<I>, InputEnd) {
        (InputCursor::new(self.iter), InputEnd)
    }
}

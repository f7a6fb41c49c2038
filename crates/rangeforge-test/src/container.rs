//! Containers with deliberately limited capabilities.
//!
//! Each container exposes fewer capabilities than `Vec` so tests can check
//! that diagnostics name exactly the missing ones.
//!
//! # Example
//!
//! ```ignore
//! use rangeforge_test::container::SinglePassVec;
//!
//! let values = SinglePassVec::new(vec![1, 2, 3]);
//! assert_eq!(values.as_slice(), &[1, 2, 3]);
//! ```

use rangeforge_core::cursor::{
    Container, Cursor, ForwardContainer, Indexed, Readable, Sentinel, Sequence, SliceCursor,
    SliceCursorMut, Truncate, Writable, WritableContainer,
};

/// A vector reachable only through single-pass cursors.
///
/// Its cursors read and write but can't be forked or swapped, so the
/// container is traversable and writable but neither forward-traversable
/// nor permutable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SinglePassVec<T> {
    items: Vec<T>,
}

impl<T> SinglePassVec<T> {
    /// Wraps `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Returns the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwraps the container.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for SinglePassVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> SinglePassVec<T> {
    fn single_pass_bounds(&mut self) -> (SinglePassCursor<'_, T>, SinglePassEnd) {
        let len = self.items.len();
        let (first, _) = SliceCursorMut::bounds(self.items.as_mut_slice());
        (SinglePassCursor { inner: first }, SinglePassEnd { len })
    }
}

impl<T> Container for SinglePassVec<T> {
    type Element = T;
    type Cursor<'a> = SinglePassCursor<'a, T> where Self: 'a;
    type End<'a> = SinglePassEnd where Self: 'a;

    fn bounds_mut(&mut self) -> (Self::Cursor<'_>, Self::End<'_>) {
        self.single_pass_bounds()
    }
}

impl<T> WritableContainer for SinglePassVec<T> {
    type WritableCursor<'a> = SinglePassCursor<'a, T> where Self: 'a;
    type WritableEnd<'a> = SinglePassEnd where Self: 'a;

    fn writable_bounds(&mut self) -> (Self::WritableCursor<'_>, Self::WritableEnd<'_>) {
        self.single_pass_bounds()
    }
}

impl<T> Truncate for SinglePassVec<T> {
    fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }
}

/// Cursor of [`SinglePassVec`]: readable and writable, never cloned.
#[derive(Debug)]
pub struct SinglePassCursor<'a, T> {
    inner: SliceCursorMut<'a, T>,
}

impl<T> Cursor for SinglePassCursor<'_, T> {
    fn advance(&mut self) {
        self.inner.advance();
    }
}

impl<T> Readable for SinglePassCursor<'_, T> {
    type Item = T;

    fn read(&self) -> &T {
        self.inner.read()
    }
}

impl<T, O: Into<T>> Writable<O> for SinglePassCursor<'_, T> {
    unsafe fn write(&self, value: O) {
        // SAFETY: forwarded contract.
        unsafe { self.inner.write(value) }
    }
}

impl<T> Indexed for SinglePassCursor<'_, T> {
    fn index(&self) -> usize {
        self.inner.index()
    }
}

/// End of a [`SinglePassVec`], a distinct type from its cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinglePassEnd {
    len: usize,
}

impl<T> Sentinel<SinglePassCursor<'_, T>> for SinglePassEnd {
    fn is_end(&self, cursor: &SinglePassCursor<'_, T>) -> bool {
        cursor.index() >= self.len
    }
}

/// A vector whose exclusive borrow still only hands out read-only cursors.
///
/// Traversable and forward-traversable, but not permutable and not
/// writable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrozenVec<T> {
    items: Vec<T>,
}

impl<T> FrozenVec<T> {
    /// Wraps `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Returns the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwraps the container.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for FrozenVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> Container for FrozenVec<T> {
    type Element = T;
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;
    type End<'a> = SliceCursor<'a, T> where Self: 'a;

    fn bounds_mut(&mut self) -> (Self::Cursor<'_>, Self::End<'_>) {
        self.items.as_slice().into_bounds()
    }
}

impl<T> ForwardContainer for FrozenVec<T> {
    type ForwardCursor<'a> = SliceCursor<'a, T> where Self: 'a;

    fn forward_bounds(&mut self) -> (Self::ForwardCursor<'_>, Self::ForwardCursor<'_>) {
        self.items.as_slice().into_bounds()
    }
}

impl<T> Truncate for FrozenVec<T> {
    fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pass_walk_and_write() {
        let mut values = SinglePassVec::new(vec![1_i32, 2, 3]);
        {
            let (mut cursor, end) = (&mut values).into_bounds();
            while !end.is_end(&cursor) {
                let doubled = cursor.read() * 2;
                unsafe { cursor.write(doubled) };
                cursor.advance();
            }
        }
        assert_eq!(values.into_inner(), vec![2, 4, 6]);
    }

    #[test]
    fn test_frozen_reads_through_exclusive_borrow() {
        let mut values = FrozenVec::new(vec![4, 5]);
        let (cursor, end) = (&mut values).into_bounds();
        assert_eq!(*cursor.read(), 4);
        assert_eq!(end.index(), 2);
    }

    #[test]
    fn test_single_pass_writable_bounds_match_sequence_bounds() {
        let mut values = SinglePassVec::new(vec![7_u8, 8]);
        let (cursor, end) = values.writable_bounds();
        assert_eq!(cursor.index(), 0);
        assert_eq!(end, SinglePassEnd { len: 2 });
    }

    #[test]
    fn test_frozen_forward_bounds_are_multi_pass() {
        let mut values = FrozenVec::new(vec![1, 2, 3]);
        let (first, last) = values.forward_bounds();
        let again = first;
        assert_eq!(rangeforge_core::cursor::measure(first, &last).0, 3);
        assert_eq!(*again.read(), 1);
    }
}

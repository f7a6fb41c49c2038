//! Cursors over contiguous storage.

use std::fmt;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use super::{Cursor, ForwardCursor, Indexed, Permutable, Readable, Writable};

/// Shared, multi-pass cursor over a slice.
///
/// Two cursors compare equal when they point at the same offset of the
/// same slice, so the cursor at `len` doubles as the end sentinel.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor at the start of `slice`.
    #[inline]
    pub fn begin(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Creates a cursor one past the last element of `slice`.
    #[inline]
    pub fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            pos: slice.len(),
        }
    }

    /// Returns the element under the cursor with the full slice lifetime.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of the slice.
    #[inline]
    pub fn get(&self) -> &'a T {
        &self.slice[self.pos]
    }

    /// Returns the remaining elements, starting at the cursor.
    #[inline]
    pub fn rest(&self) -> &'a [T] {
        &self.slice[self.pos..]
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && ptr::eq(self.slice.as_ptr(), other.slice.as_ptr())
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> Cursor for SliceCursor<'_, T> {
    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<T> Readable for SliceCursor<'_, T> {
    type Item = T;

    #[inline]
    fn read(&self) -> &T {
        self.get()
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {
    #[inline]
    unsafe fn fork(&self) -> Self {
        *self
    }
}

impl<T> Indexed for SliceCursor<'_, T> {
    #[inline]
    fn index(&self) -> usize {
        self.pos
    }
}

/// Exclusive, multi-pass cursor over a mutable slice.
///
/// The cursor keeps the slice mutably borrowed for `'a`. It is not `Clone`:
/// a second cursor into the same storage only comes from
/// [`ForwardCursor::fork`], which is `unsafe`. Elements are only ever
/// modified through the `unsafe` methods of [`Permutable`] and
/// [`Writable`], whose contracts forbid overlapping a live read.
///
/// Handing a cursor to an algorithm moves it, so a borrow from
/// [`Readable::read`] cannot outlive the hand-off:
///
/// ```compile_fail
/// use rangeforge_core::cursor::{Readable, SliceCursorMut};
///
/// let mut values = [3, 1, 2];
/// let (first, _last) = SliceCursorMut::bounds(&mut values[..]);
/// let held = first.read();
/// let copy = first.clone();
/// assert_eq!(*held, 3);
/// # drop(copy);
/// ```
///
/// ```compile_fail
/// use rangeforge_core::cursor::{Readable, SliceCursorMut};
///
/// let mut values = [3, 1, 2];
/// let (first, _last) = SliceCursorMut::bounds(&mut values[..]);
/// let held = first.read();
/// let moved = first;
/// assert_eq!(*held, 3);
/// # drop(moved);
/// ```
pub struct SliceCursorMut<'a, T> {
    base: NonNull<T>,
    len: usize,
    pos: usize,
    _marker: PhantomData<&'a mut [T]>,
}

impl<'a, T> SliceCursorMut<'a, T> {
    /// Creates a cursor at the start of `slice` and its end sentinel.
    #[inline]
    pub fn bounds(slice: &'a mut [T]) -> (Self, Self) {
        let len = slice.len();
        let base = NonNull::from(slice).cast::<T>();
        let first = Self {
            base,
            len,
            pos: 0,
            _marker: PhantomData,
        };
        let last = Self {
            base,
            len,
            pos: len,
            _marker: PhantomData,
        };
        (first, last)
    }

    #[inline]
    fn slot(&self) -> *mut T {
        assert!(
            self.pos < self.len,
            "cursor at offset {} is outside a sequence of length {}",
            self.pos,
            self.len
        );
        // SAFETY: `pos < len`, so the offset stays inside the borrowed slice.
        unsafe { self.base.as_ptr().add(self.pos) }
    }
}

impl<T> PartialEq for SliceCursorMut<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.base == other.base
    }
}

impl<T> Eq for SliceCursorMut<'_, T> {}

impl<T> fmt::Debug for SliceCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursorMut")
            .field("pos", &self.pos)
            .field("len", &self.len)
            .finish()
    }
}

impl<T> Cursor for SliceCursorMut<'_, T> {
    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<T> Readable for SliceCursorMut<'_, T> {
    type Item = T;

    #[inline]
    fn read(&self) -> &T {
        // SAFETY: the slot is in bounds and writes only happen through the
        // unsafe methods below, whose callers guarantee no read is alive.
        unsafe { &*self.slot() }
    }
}

impl<T> ForwardCursor for SliceCursorMut<'_, T> {
    #[inline]
    unsafe fn fork(&self) -> Self {
        Self {
            base: self.base,
            len: self.len,
            pos: self.pos,
            _marker: PhantomData,
        }
    }
}

impl<T> Permutable for SliceCursorMut<'_, T> {
    #[inline]
    unsafe fn swap_with(&self, other: &Self) {
        debug_assert!(self.base == other.base, "cursors belong to different sequences");
        ptr::swap(self.slot(), other.slot());
    }
}

impl<T, O: Into<T>> Writable<O> for SliceCursorMut<'_, T> {
    #[inline]
    unsafe fn write(&self, value: O) {
        *self.slot() = value.into();
    }
}

impl<T> Indexed for SliceCursorMut<'_, T> {
    #[inline]
    fn index(&self) -> usize {
        self.pos
    }
}

//! Whole-sequence access.

use super::{ForwardCursor, Permutable, Readable, Sentinel, SliceCursor, SliceCursorMut, Writable};

/// A value that yields a starting cursor and its end sentinel.
///
/// Implemented for shared borrows of slices, arrays and vectors, for
/// exclusive borrows of any [`Container`], and for generated or single-pass
/// sequences. Algorithms accept any `Sequence` wherever they accept a cursor
/// and sentinel pair.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a sequence",
    label = "expected a value that yields a cursor and a sentinel"
)]
pub trait Sequence {
    /// Cursor type of the sequence.
    type Cursor: super::Cursor;

    /// Sentinel type bounding the sequence.
    type Sentinel: Sentinel<Self::Cursor>;

    /// Returns the first position and the end sentinel.
    fn into_bounds(self) -> (Self::Cursor, Self::Sentinel);
}

/// An owned container whose elements are reached through `&mut Self`.
///
/// Actions take containers by value, mutate them through cursors borrowed
/// from `&mut Self` and hand them back. Every capability an action needs is
/// a sub-trait with its own cursor type, so a bound like
/// `S: PermutableContainer` names the capability directly instead of
/// quantifying over every borrow lifetime.
///
/// `&mut S` is a [`Sequence`] for every container `S`.
#[diagnostic::on_unimplemented(
    message = "sequence must be traversable",
    label = "`{Self}` is not a container of readable elements"
)]
pub trait Container {
    /// Element type stored in the container.
    type Element;

    /// Cursor over the borrowed container.
    type Cursor<'a>: Readable<Item = Self::Element>
    where
        Self: 'a;

    /// Sentinel bounding the borrowed container.
    type End<'a>: Sentinel<Self::Cursor<'a>>
    where
        Self: 'a;

    /// Returns the first position and the end of the borrowed container.
    fn bounds_mut(&mut self) -> (Self::Cursor<'_>, Self::End<'_>);
}

/// A container that can be traversed more than once.
#[diagnostic::on_unimplemented(
    message = "sequence must be forward-traversable",
    label = "`{Self}` only supports a single pass"
)]
pub trait ForwardContainer: Container {
    /// Multi-pass cursor over the borrowed container.
    type ForwardCursor<'a>: ForwardCursor + Readable<Item = Self::Element>
    where
        Self: 'a;

    /// Returns the first and one-past-the-last positions.
    fn forward_bounds(&mut self) -> (Self::ForwardCursor<'_>, Self::ForwardCursor<'_>);
}

/// A container whose elements can be exchanged in place.
#[diagnostic::on_unimplemented(
    message = "elements must be permutable",
    label = "`{Self}` gives read-only access to its elements"
)]
pub trait PermutableContainer: ForwardContainer {
    /// Multi-pass cursor that can exchange elements.
    type PermutableCursor<'a>: ForwardCursor + Permutable<Item = Self::Element>
    where
        Self: 'a;

    /// Returns the first and one-past-the-last positions.
    fn permutable_bounds(&mut self)
        -> (Self::PermutableCursor<'_>, Self::PermutableCursor<'_>);
}

/// A container whose elements can be overwritten in place.
#[diagnostic::on_unimplemented(
    message = "function result must be writable back into the sequence",
    label = "`{Self}` does not accept writes"
)]
pub trait WritableContainer: Container {
    /// Cursor that can overwrite the element under it.
    type WritableCursor<'a>: Readable<Item = Self::Element> + Writable<Self::Element>
    where
        Self: 'a;

    /// Sentinel bounding the writable cursor.
    type WritableEnd<'a>: Sentinel<Self::WritableCursor<'a>>
    where
        Self: 'a;

    /// Returns the first position and the end.
    fn writable_bounds(&mut self) -> (Self::WritableCursor<'_>, Self::WritableEnd<'_>);
}

/// A container that can drop every element from a given offset on.
#[diagnostic::on_unimplemented(message = "container must be truncatable")]
pub trait Truncate {
    /// Shortens the container to `len` elements.
    fn truncate(&mut self, len: usize);
}

impl<'a, S> Sequence for &'a mut S
where
    S: Container + ?Sized + 'a,
{
    type Cursor = S::Cursor<'a>;
    type Sentinel = S::End<'a>;

    #[inline]
    fn into_bounds(self) -> (Self::Cursor, Self::Sentinel) {
        self.bounds_mut()
    }
}

impl<'a, T> Sequence for &'a [T] {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = SliceCursor<'a, T>;

    #[inline]
    fn into_bounds(self) -> (Self::Cursor, Self::Sentinel) {
        (SliceCursor::begin(self), SliceCursor::end(self))
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = SliceCursor<'a, T>;

    #[inline]
    fn into_bounds(self) -> (Self::Cursor, Self::Sentinel) {
        self.as_slice().into_bounds()
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = SliceCursor<'a, T>;

    #[inline]
    fn into_bounds(self) -> (Self::Cursor, Self::Sentinel) {
        self.as_slice().into_bounds()
    }
}

// Contiguous storage gives every capability through `SliceCursorMut`.
macro_rules! contiguous_container {
    ([$($g:tt)*] $ty:ty) => {
        impl<$($g)*> Container for $ty {
            type Element = T;
            type Cursor<'a> = SliceCursorMut<'a, T> where Self: 'a;
            type End<'a> = SliceCursorMut<'a, T> where Self: 'a;

            #[inline]
            fn bounds_mut(&mut self) -> (Self::Cursor<'_>, Self::End<'_>) {
                SliceCursorMut::bounds(&mut self[..])
            }
        }

        impl<$($g)*> ForwardContainer for $ty {
            type ForwardCursor<'a> = SliceCursorMut<'a, T> where Self: 'a;

            #[inline]
            fn forward_bounds(&mut self) -> (Self::ForwardCursor<'_>, Self::ForwardCursor<'_>) {
                SliceCursorMut::bounds(&mut self[..])
            }
        }

        impl<$($g)*> PermutableContainer for $ty {
            type PermutableCursor<'a> = SliceCursorMut<'a, T> where Self: 'a;

            #[inline]
            fn permutable_bounds(
                &mut self,
            ) -> (Self::PermutableCursor<'_>, Self::PermutableCursor<'_>) {
                SliceCursorMut::bounds(&mut self[..])
            }
        }

        impl<$($g)*> WritableContainer for $ty {
            type WritableCursor<'a> = SliceCursorMut<'a, T> where Self: 'a;
            type WritableEnd<'a> = SliceCursorMut<'a, T> where Self: 'a;

            #[inline]
            fn writable_bounds(&mut self) -> (Self::WritableCursor<'_>, Self::WritableEnd<'_>) {
                SliceCursorMut::bounds(&mut self[..])
            }
        }
    };
}

contiguous_container!([T] [T]);
contiguous_container!([T] Vec<T>);
contiguous_container!([T, const N: usize] [T; N]);

impl<T> Truncate for Vec<T> {
    #[inline]
    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }
}

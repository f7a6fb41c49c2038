//! Named function objects and forwarding wrappers.

use std::fmt;
use std::marker::PhantomData;

use super::{Predicate, Projection, Relation, UnaryFunction};

// ============================================================================
// Identity - the default projection
// ============================================================================

/// Projection that lends the element itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T: ?Sized> Projection<T> for Identity {
    type Output = T;

    #[inline]
    fn project<R>(&self, value: &T, then: impl FnOnce(&T) -> R) -> R {
        then(value)
    }
}

// ============================================================================
// Comparison objects
// ============================================================================

/// `a < b`, the default ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<A, B> Relation<A, B> for Less
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    #[inline]
    fn holds(&mut self, a: &A, b: &B) -> bool {
        a < b
    }
}

/// `a > b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<A, B> Relation<A, B> for Greater
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    #[inline]
    fn holds(&mut self, a: &A, b: &B) -> bool {
        a > b
    }
}

/// `a == b`, the default equivalence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EqualTo;

impl<A, B> Relation<A, B> for EqualTo
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    #[inline]
    fn holds(&mut self, a: &A, b: &B) -> bool {
        a == b
    }
}

// ============================================================================
// Member - accessor returning a borrow into the element
// ============================================================================

/// Projection through an accessor that borrows part of the element.
///
/// Closures returning owned values are projections on their own; a closure
/// returning a reference into its argument needs this wrapper so the
/// borrow is tied to the element rather than to the closure.
///
/// Created by [`member`].
pub struct Member<T: ?Sized, U: ?Sized, F> {
    accessor: F,
    _phantom: PhantomData<fn(&T) -> &U>,
}

/// Creates a projection from a field accessor.
///
/// # Example
///
/// ```
/// use rangeforge_core::functional::{member, Projection};
///
/// struct Employee { name: String }
///
/// let by_name = member(|e: &Employee| &e.name);
/// let bob = Employee { name: "Bob".into() };
/// assert_eq!(by_name.project(&bob, |name| name.len()), 3);
/// ```
pub fn member<T, U, F>(accessor: F) -> Member<T, U, F>
where
    T: ?Sized,
    U: ?Sized,
    F: Fn(&T) -> &U,
{
    Member {
        accessor,
        _phantom: PhantomData,
    }
}

impl<T: ?Sized, U: ?Sized, F: Clone> Clone for Member<T, U, F> {
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, U: ?Sized, F> fmt::Debug for Member<T, U, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member").finish_non_exhaustive()
    }
}

impl<T, U, F> Projection<T> for Member<T, U, F>
where
    T: ?Sized,
    U: ?Sized,
    F: Fn(&T) -> &U,
{
    type Output = U;

    #[inline]
    fn project<R>(&self, value: &T, then: impl FnOnce(&U) -> R) -> R {
        then((self.accessor)(value))
    }
}

// ============================================================================
// Ref / RefMut - lend a callable without giving it up
// ============================================================================

/// Lends a projection by shared reference.
///
/// Bound actions keep their captured arguments and lend them to each call
/// through this wrapper, so a stateful argument is never duplicated.
pub struct Ref<'a, P: ?Sized>(&'a P);

/// Lends a predicate, relation or function by exclusive reference.
pub struct RefMut<'a, C: ?Sized>(&'a mut C);

/// Wraps a shared reference to a projection.
#[inline]
pub fn by_ref<P: ?Sized>(proj: &P) -> Ref<'_, P> {
    Ref(proj)
}

/// Wraps an exclusive reference to a predicate, relation or function.
#[inline]
pub fn by_mut<C: ?Sized>(callable: &mut C) -> RefMut<'_, C> {
    RefMut(callable)
}

impl<P: ?Sized> Clone for Ref<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for Ref<'_, P> {}

impl<P: ?Sized> fmt::Debug for Ref<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ref(..)")
    }
}

impl<C: ?Sized> fmt::Debug for RefMut<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefMut(..)")
    }
}

impl<T, P> Projection<T> for Ref<'_, P>
where
    T: ?Sized,
    P: Projection<T> + ?Sized,
{
    type Output = P::Output;

    #[inline]
    fn project<R>(&self, value: &T, then: impl FnOnce(&P::Output) -> R) -> R {
        self.0.project(value, then)
    }
}

impl<Q, C> Predicate<Q> for RefMut<'_, C>
where
    Q: ?Sized,
    C: Predicate<Q> + ?Sized,
{
    #[inline]
    fn test(&mut self, value: &Q) -> bool {
        self.0.test(value)
    }
}

impl<A, B, C> Relation<A, B> for RefMut<'_, C>
where
    A: ?Sized,
    B: ?Sized,
    C: Relation<A, B> + ?Sized,
{
    #[inline]
    fn holds(&mut self, a: &A, b: &B) -> bool {
        self.0.holds(a, b)
    }
}

impl<Q, C> UnaryFunction<Q> for RefMut<'_, C>
where
    Q: ?Sized,
    C: UnaryFunction<Q> + ?Sized,
{
    type Output = C::Output;

    #[inline]
    fn call(&mut self, value: &Q) -> C::Output {
        self.0.call(value)
    }
}

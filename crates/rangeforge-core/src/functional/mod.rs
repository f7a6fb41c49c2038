//! Uniform invocation of projections, predicates and relations.
//!
//! Every callable an algorithm accepts goes through one of four traits:
//!
//! | Trait | Shape | Default |
//! |-------|-------|---------|
//! | [`Projection`] | `&T -> Output` | [`Identity`] |
//! | [`Predicate`] | `&Q -> bool` | - |
//! | [`Relation`] | `(&A, &B) -> bool` | [`Less`] / [`EqualTo`] |
//! | [`UnaryFunction`] | `&Q -> Output` | - |
//!
//! Closures and plain functions implement them through blanket impls, named
//! function objects implement them directly, and [`member`] adapts field
//! accessors that return references into the element.
//!
//! Algorithms never call these traits directly; they go through
//! [`invoke_predicate`], [`invoke_relation`] and [`invoke_unary`], which
//! apply the projection before the predicate sees the element.
//!
//! # Example
//!
//! ```
//! use rangeforge_core::functional::{invoke_relation, member, EqualTo, Identity};
//!
//! struct Employee { name: String, age: u32 }
//!
//! let alice = Employee { name: "Alice".into(), age: 30 };
//! let by_name = member(|e: &Employee| &e.name);
//!
//! let mut eq = EqualTo;
//! assert!(invoke_relation(&mut eq, &by_name, &Identity, &alice, &"Alice".to_string()));
//! ```

mod objects;

#[cfg(test)]
mod tests;

pub use objects::{by_mut, by_ref, member, EqualTo, Greater, Identity, Less, Member, Ref, RefMut};

/// A unary transform applied to an element before any predicate sees it.
///
/// The projected value is lent to a continuation instead of being returned,
/// which lets projections hand out either a borrow of the element or a
/// freshly computed value behind the same lifetime-free `Output` type.
#[diagnostic::on_unimplemented(
    message = "projection must accept the element type",
    label = "`{Self}` cannot project a `&{T}`"
)]
pub trait Projection<T: ?Sized> {
    /// Type of the projected value.
    type Output: ?Sized;

    /// Projects `value` and passes the result to `then`.
    fn project<R>(&self, value: &T, then: impl FnOnce(&Self::Output) -> R) -> R;
}

impl<T, U, F> Projection<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> U,
{
    type Output = U;

    #[inline]
    fn project<R>(&self, value: &T, then: impl FnOnce(&U) -> R) -> R {
        then(&self(value))
    }
}

/// A unary test over a projected value.
#[diagnostic::on_unimplemented(
    message = "predicate must accept the projected value",
    label = "`{Self}` cannot test a `&{Q}`"
)]
pub trait Predicate<Q: ?Sized> {
    /// Returns true if `value` satisfies the predicate.
    fn test(&mut self, value: &Q) -> bool;
}

impl<Q, F> Predicate<Q> for F
where
    Q: ?Sized,
    F: FnMut(&Q) -> bool,
{
    #[inline]
    fn test(&mut self, value: &Q) -> bool {
        self(value)
    }
}

/// A binary test over two projected values.
///
/// Used both as an ordering (`sort`) and as an equivalence (`mismatch`).
#[diagnostic::on_unimplemented(
    message = "comparator must accept the projected values",
    label = "`{Self}` cannot compare a `&{A}` with a `&{B}`"
)]
pub trait Relation<A: ?Sized, B: ?Sized = A> {
    /// Returns true if the relation holds for `(a, b)`.
    fn holds(&mut self, a: &A, b: &B) -> bool;
}

impl<A, B, F> Relation<A, B> for F
where
    A: ?Sized,
    B: ?Sized,
    F: FnMut(&A, &B) -> bool,
{
    #[inline]
    fn holds(&mut self, a: &A, b: &B) -> bool {
        self(a, b)
    }
}

/// A unary function over a projected value, producing a new value.
#[diagnostic::on_unimplemented(
    message = "function must accept the projected value",
    label = "`{Self}` cannot be called with a `&{Q}`"
)]
pub trait UnaryFunction<Q: ?Sized> {
    /// Type of the produced value.
    type Output;

    /// Calls the function.
    fn call(&mut self, value: &Q) -> Self::Output;
}

impl<Q, R, F> UnaryFunction<Q> for F
where
    Q: ?Sized,
    F: FnMut(&Q) -> R,
{
    type Output = R;

    #[inline]
    fn call(&mut self, value: &Q) -> R {
        self(value)
    }
}

/// Evaluates `pred(proj(value))`.
#[inline]
pub fn invoke_predicate<T, P, C>(pred: &mut C, proj: &P, value: &T) -> bool
where
    T: ?Sized,
    P: Projection<T>,
    C: Predicate<P::Output> + ?Sized,
{
    proj.project(value, |projected| pred.test(projected))
}

/// Evaluates `rel(proj1(a), proj2(b))`.
#[inline]
pub fn invoke_relation<A, B, P1, P2, C>(rel: &mut C, proj1: &P1, proj2: &P2, a: &A, b: &B) -> bool
where
    A: ?Sized,
    B: ?Sized,
    P1: Projection<A>,
    P2: Projection<B>,
    C: Relation<P1::Output, P2::Output> + ?Sized,
{
    proj1.project(a, |left| proj2.project(b, |right| rel.holds(left, right)))
}

/// Evaluates `fun(proj(value))`.
#[inline]
pub fn invoke_unary<T, P, F>(fun: &mut F, proj: &P, value: &T) -> F::Output
where
    T: ?Sized,
    P: Projection<T>,
    F: UnaryFunction<P::Output> + ?Sized,
{
    proj.project(value, |projected| fun.call(projected))
}

use std::marker::PhantomData;

use rangeforge_core::cursor::WritableContainer;
use rangeforge_core::functional::{Identity, Projection, UnaryFunction};
use tracing::trace;

use super::{BoundAction, UnaryAction};
use crate::transform::transform_in_place_impl;

/// Rewrites every element of a container and returns it.
///
/// The function result must convert into the element type, since it is
/// written back over the element it came from.
///
/// # Example
///
/// ```
/// use rangeforge_algorithm::action;
///
/// let doubled = action::TRANSFORM.call(vec![1, 2, 3], |x: &i32| x * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformAction;

/// The transform action.
pub const TRANSFORM: TransformAction = TransformAction;

/// Converts each function result into the element type before it is
/// written back.
struct IntoElement<'f, F: ?Sized, E> {
    fun: &'f mut F,
    _element: PhantomData<fn() -> E>,
}

impl<Q, F, E> UnaryFunction<Q> for IntoElement<'_, F, E>
where
    Q: ?Sized,
    F: UnaryFunction<Q> + ?Sized,
    F::Output: Into<E>,
{
    type Output = E;

    #[inline]
    fn call(&mut self, value: &Q) -> E {
        self.fun.call(value).into()
    }
}

fn run<S, F, P>(seq: &mut S, fun: &mut F, proj: &P)
where
    S: WritableContainer,
    P: Projection<S::Element>,
    F: UnaryFunction<P::Output> + ?Sized,
    F::Output: Into<S::Element>,
{
    trace!(event = "action_start", action = "transform");
    let mut fun = IntoElement::<F, S::Element> {
        fun,
        _element: PhantomData,
    };
    let (first, last) = seq.writable_bounds();
    transform_in_place_impl(first, &last, &mut fun, proj);
    trace!(event = "action_end", action = "transform");
}

impl TransformAction {
    /// Replaces each element with `fun(element)`.
    pub fn call<S, F>(&self, seq: S, fun: F) -> S
    where
        S: WritableContainer,
        F: UnaryFunction<S::Element>,
        F::Output: Into<S::Element>,
    {
        self.call_by_key(seq, fun, Identity)
    }

    /// Replaces each element with `fun(proj(element))`.
    pub fn call_by_key<S, F, P>(&self, mut seq: S, mut fun: F, proj: P) -> S
    where
        S: WritableContainer,
        P: Projection<S::Element>,
        F: UnaryFunction<P::Output>,
        F::Output: Into<S::Element>,
    {
        run(&mut seq, &mut fun, &proj);
        seq
    }

    /// Captures the function.
    pub fn bind<F>(&self, fun: F) -> BoundAction<TransformAction, (F, Identity)> {
        BoundAction::new(*self, (fun, Identity))
    }

    /// Captures the function and projection.
    pub fn bind_by_key<F, P>(&self, fun: F, proj: P) -> BoundAction<TransformAction, (F, P)> {
        BoundAction::new(*self, (fun, proj))
    }
}

impl<S, F, P> UnaryAction<S> for BoundAction<TransformAction, (F, P)>
where
    S: WritableContainer,
    P: Projection<S::Element>,
    F: UnaryFunction<P::Output>,
    F::Output: Into<S::Element>,
{
    fn apply(&mut self, mut seq: S) -> S {
        let (fun, proj) = &mut self.args;
        run(&mut seq, fun, proj);
        seq
    }
}

use rangeforge_core::cursor::{measure, ForwardCursor, PermutableContainer, Truncate};
use rangeforge_core::functional::{Identity, Predicate, Projection};
use tracing::trace;

use super::{BoundAction, UnaryAction};
use crate::remove_if::remove_if_impl;

/// Erases every element satisfying a predicate and returns the container.
///
/// Runs `remove_if` and then truncates the container at the new end, so
/// the container must also be [`Truncate`].
///
/// # Example
///
/// ```
/// use rangeforge_algorithm::action;
///
/// let odd = action::REMOVE_IF.call(vec![1, 2, 3, 4, 5], |x: &i32| x % 2 == 0);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveIfAction;

/// The remove-if action.
pub const REMOVE_IF: RemoveIfAction = RemoveIfAction;

fn run<S, F, P>(seq: &mut S, pred: &mut F, proj: &P)
where
    S: PermutableContainer + Truncate,
    P: Projection<S::Element>,
    F: Predicate<P::Output> + ?Sized,
{
    trace!(event = "action_start", action = "remove_if");
    let kept = {
        let (first, last) = seq.permutable_bounds();
        // SAFETY: `start` never leaves this block and is only advanced and
        // compared, never read.
        let start = unsafe { first.fork() };
        let end = remove_if_impl(first, &last, pred, proj);
        measure(start, &end).0
    };
    seq.truncate(kept);
    trace!(event = "action_end", action = "remove_if", kept);
}

impl RemoveIfAction {
    /// Erases the elements satisfying `pred`.
    pub fn call<S, F>(&self, seq: S, pred: F) -> S
    where
        S: PermutableContainer + Truncate,
        F: Predicate<S::Element>,
    {
        self.call_by_key(seq, pred, Identity)
    }

    /// Erases the elements whose projection satisfies `pred`.
    pub fn call_by_key<S, F, P>(&self, mut seq: S, mut pred: F, proj: P) -> S
    where
        S: PermutableContainer + Truncate,
        P: Projection<S::Element>,
        F: Predicate<P::Output>,
    {
        run(&mut seq, &mut pred, &proj);
        seq
    }

    /// Captures the predicate.
    pub fn bind<F>(&self, pred: F) -> BoundAction<RemoveIfAction, (F, Identity)> {
        BoundAction::new(*self, (pred, Identity))
    }

    /// Captures the predicate and projection.
    pub fn bind_by_key<F, P>(&self, pred: F, proj: P) -> BoundAction<RemoveIfAction, (F, P)> {
        BoundAction::new(*self, (pred, proj))
    }
}

impl<S, F, P> UnaryAction<S> for BoundAction<RemoveIfAction, (F, P)>
where
    S: PermutableContainer + Truncate,
    P: Projection<S::Element>,
    F: Predicate<P::Output>,
{
    fn apply(&mut self, mut seq: S) -> S {
        let (pred, proj) = &mut self.args;
        run(&mut seq, pred, proj);
        seq
    }
}

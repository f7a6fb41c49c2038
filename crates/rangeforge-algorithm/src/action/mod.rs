//! Actions: algorithms that take a container by value and hand it back.
//!
//! An action owns the container for the duration of the call, mutates it
//! through the cursors of `&mut S` and returns it, so calls chain naturally:
//!
//! ```
//! use rangeforge_algorithm::action::{self, ActionExt};
//!
//! let values = vec![4, 1, 3, 1, 2]
//!     .act(action::SORT)
//!     .act(action::REMOVE_IF.bind(|x: &i32| *x == 1));
//! assert_eq!(values, vec![2, 3, 4]);
//! ```
//!
//! # Binding
//!
//! `bind` captures an action's secondary arguments by value and returns a
//! [`BoundAction`]. Each application lends the captured arguments to the
//! underlying call, so a stateful comparator or predicate is one logical
//! copy shared by every application:
//!
//! ```
//! use rangeforge_algorithm::action::{self, UnaryAction};
//!
//! let mut comparisons = 0;
//! {
//!     let mut by_value = action::SORT.bind(|a: &i32, b: &i32| {
//!         comparisons += 1;
//!         a < b
//!     });
//!     assert_eq!(by_value.apply(vec![2, 1]), vec![1, 2]);
//!     assert_eq!(by_value.apply(vec![3, 2, 1]), vec![1, 2, 3]);
//! }
//! assert!(comparisons >= 4);
//! ```
//!
//! Bound actions compose with [`BoundAction::then`] into a [`Pipeline`].

mod remove_if;
mod sort;
mod transform;


pub use remove_if::{RemoveIfAction, REMOVE_IF};
pub use sort::{SortAction, SORT};
pub use transform::{TransformAction, TRANSFORM};

use std::fmt;

/// An operation from a container to a container of the same type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be applied to a `{S}`",
    label = "the action's requirements are not met by `{S}`"
)]
pub trait UnaryAction<S> {
    /// Applies the action, returning the transformed container.
    fn apply(&mut self, seq: S) -> S;
}

impl<S, A> UnaryAction<S> for &mut A
where
    A: UnaryAction<S> + ?Sized,
{
    #[inline]
    fn apply(&mut self, seq: S) -> S {
        (**self).apply(seq)
    }
}

/// An action together with its captured secondary arguments.
///
/// Created by `bind`/`bind_by_key` on the action functors. The arguments
/// stay owned by the bound value for its whole life.
#[derive(Clone)]
pub struct BoundAction<A, Args> {
    action: A,
    args: Args,
}

impl<A, Args> BoundAction<A, Args> {
    /// Pairs `action` with its arguments.
    pub fn new(action: A, args: Args) -> Self {
        Self { action, args }
    }

    /// Returns the underlying action.
    pub fn action(&self) -> &A {
        &self.action
    }

    /// Returns the captured arguments.
    pub fn args(&self) -> &Args {
        &self.args
    }

    /// Releases the captured arguments.
    pub fn into_args(self) -> Args {
        self.args
    }

    /// Runs `self` and then `next` on every application.
    pub fn then<B>(self, next: B) -> Pipeline<Self, B> {
        Pipeline::new(self, next)
    }
}

impl<A: fmt::Debug, Args> fmt::Debug for BoundAction<A, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundAction")
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

/// Two actions applied one after the other.
#[derive(Debug, Clone)]
pub struct Pipeline<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pipeline<A, B> {
    /// Chains `first` then `second`.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Appends another stage.
    pub fn then<C>(self, next: C) -> Pipeline<Self, C> {
        Pipeline::new(self, next)
    }

    /// Splits the pipeline into its two stages.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<S, A, B> UnaryAction<S> for Pipeline<A, B>
where
    A: UnaryAction<S>,
    B: UnaryAction<S>,
{
    fn apply(&mut self, seq: S) -> S {
        let seq = self.first.apply(seq);
        self.second.apply(seq)
    }
}

/// An action backed by a closure.
///
/// ```
/// use rangeforge_algorithm::action::{from_fn, ActionExt};
///
/// let reversed = vec![1, 2, 3].act(from_fn(|mut v: Vec<i32>| {
///     v.reverse();
///     v
/// }));
/// assert_eq!(reversed, vec![3, 2, 1]);
/// ```
#[derive(Clone)]
pub struct FnAction<F>(F);

/// Wraps `f` as an action.
pub fn from_fn<F>(f: F) -> FnAction<F> {
    FnAction(f)
}

impl<F> FnAction<F> {
    /// Runs `self` and then `next` on every application.
    pub fn then<B>(self, next: B) -> Pipeline<Self, B> {
        Pipeline::new(self, next)
    }
}

impl<F> fmt::Debug for FnAction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAction").finish_non_exhaustive()
    }
}

impl<S, F> UnaryAction<S> for FnAction<F>
where
    F: FnMut(S) -> S,
{
    #[inline]
    fn apply(&mut self, seq: S) -> S {
        (self.0)(seq)
    }
}

/// Applies actions to values in method position.
pub trait ActionExt: Sized {
    /// Applies `action` to `self` and returns the result.
    fn act<A>(self, mut action: A) -> Self
    where
        A: UnaryAction<Self>,
    {
        action.apply(self)
    }

    /// Applies `action` to `self` in place.
    ///
    /// The value is moved out for the duration of the action. If the action
    /// panics, `self` is left as `Self::default()`.
    fn act_assign<A>(&mut self, action: A)
    where
        A: UnaryAction<Self>,
        Self: Default,
    {
        let seq = std::mem::take(self);
        *self = seq.act(action);
    }
}

impl<T> ActionExt for T {}

use rangeforge_config::SortConfig;
use rangeforge_core::cursor::PermutableContainer;
use rangeforge_core::functional::{Identity, Less, Projection, Relation};
use tracing::trace;

use super::{BoundAction, UnaryAction};
use crate::sort::sort_impl;

/// Sorts a container and returns it.
///
/// Accepts any [`PermutableContainer`]: forward-traversable with elements
/// that can be exchanged in place. Use [`diagnose_sort!`](rangeforge_core::diagnose_sort)
/// to list which of those capabilities a container lacks.
///
/// # Example
///
/// ```
/// use rangeforge_algorithm::action;
/// use rangeforge_core::Greater;
///
/// assert_eq!(action::SORT.call(vec![3, 1, 2]), vec![1, 2, 3]);
/// assert_eq!(action::SORT.call_by(vec![3, 1, 2], Greater), vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortAction;

/// The sort action.
pub const SORT: SortAction = SortAction;

fn run<S, F, P>(seq: &mut S, cmp: &mut F, proj: &P, config: &SortConfig)
where
    S: PermutableContainer,
    P: Projection<S::Element>,
    F: Relation<P::Output> + ?Sized,
{
    trace!(event = "action_start", action = "sort");
    let (first, last) = seq.permutable_bounds();
    sort_impl(first, &last, cmp, proj, config);
    trace!(event = "action_end", action = "sort");
}

impl SortAction {
    /// Sorts ascending.
    pub fn call<S>(&self, seq: S) -> S
    where
        S: PermutableContainer,
        S::Element: PartialOrd,
    {
        self.call_by_key(seq, Less, Identity)
    }

    /// Sorts by `cmp`.
    pub fn call_by<S, F>(&self, seq: S, cmp: F) -> S
    where
        S: PermutableContainer,
        F: Relation<S::Element>,
    {
        self.call_by_key(seq, cmp, Identity)
    }

    /// Sorts by `cmp` over projected keys.
    pub fn call_by_key<S, F, P>(&self, mut seq: S, mut cmp: F, proj: P) -> S
    where
        S: PermutableContainer,
        P: Projection<S::Element>,
        F: Relation<P::Output>,
    {
        run(&mut seq, &mut cmp, &proj, &SortConfig::default());
        seq
    }

    /// Sorts with explicit tuning.
    pub fn call_tuned<S, F, P>(&self, mut seq: S, mut cmp: F, proj: P, config: &SortConfig) -> S
    where
        S: PermutableContainer,
        P: Projection<S::Element>,
        F: Relation<P::Output>,
    {
        run(&mut seq, &mut cmp, &proj, config);
        seq
    }

    /// Captures the comparator.
    pub fn bind<F>(&self, cmp: F) -> BoundAction<SortAction, (F, Identity)> {
        BoundAction::new(*self, (cmp, Identity))
    }

    /// Captures the comparator and projection.
    pub fn bind_by_key<F, P>(&self, cmp: F, proj: P) -> BoundAction<SortAction, (F, P)> {
        BoundAction::new(*self, (cmp, proj))
    }
}

impl<S> UnaryAction<S> for SortAction
where
    S: PermutableContainer,
    S::Element: PartialOrd,
{
    fn apply(&mut self, seq: S) -> S {
        self.call(seq)
    }
}

impl<S, F, P> UnaryAction<S> for BoundAction<SortAction, (F, P)>
where
    S: PermutableContainer,
    P: Projection<S::Element>,
    F: Relation<P::Output>,
{
    fn apply(&mut self, mut seq: S) -> S {
        let (cmp, proj) = &mut self.args;
        run(&mut seq, cmp, proj, &SortConfig::default());
        seq
    }
}

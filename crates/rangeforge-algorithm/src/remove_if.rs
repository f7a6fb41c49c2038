//! Stable in-place compaction.
//!
//! `remove_if` keeps the elements that do not satisfy the predicate at the
//! front of the sequence, in their original order, and returns the new
//! logical end. Elements are moved by exchange, so the removed ones end up
//! in `[new_end, old_end)` in unspecified order.

use rangeforge_core::cursor::{fork_next, ForwardCursor, Permutable, Readable, Sentinel, Sequence};
use rangeforge_core::functional::{invoke_predicate, Identity, Predicate, Projection};

use crate::find_if::find_if_impl;

/// Moves every element not satisfying a predicate to the front.
///
/// # Example
///
/// ```
/// use rangeforge_algorithm::REMOVE_IF;
/// use rangeforge_core::cursor::Indexed;
///
/// let mut values = vec![1, 2, 3, 4, 5];
/// let end = REMOVE_IF.sequence(&mut values, |x: &i32| x % 2 == 0).index();
/// values.truncate(end);
/// assert_eq!(values, vec![1, 3, 5]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveIf;

/// The `remove_if` algorithm.
pub const REMOVE_IF: RemoveIf = RemoveIf;

pub(crate) fn remove_if_impl<C, L, F, P>(first: C, last: &L, pred: &mut F, proj: &P) -> C
where
    C: ForwardCursor + Permutable,
    L: Sentinel<C>,
    P: Projection<C::Item>,
    F: Predicate<P::Output> + ?Sized,
{
    let mut kept = find_if_impl(first, last, pred, proj);
    if last.is_end(&kept) {
        return kept;
    }

    // SAFETY: every cursor into the range was moved into this call and the
    // fork never leaves it.
    let mut scan = unsafe { fork_next(&kept) };
    while !last.is_end(&scan) {
        if !invoke_predicate(pred, proj, scan.read()) {
            // SAFETY: both cursors walk the same sequence, `kept` trails
            // `scan`, and no element reference is held across the swap.
            unsafe { kept.swap_with(&scan) };
            kept.advance();
        }
        scan.advance();
    }
    kept
}

impl RemoveIf {
    /// Compacts `[first, last)`, returning the new end.
    pub fn call<C, L, F>(&self, first: C, last: L, mut pred: F) -> C
    where
        C: ForwardCursor + Permutable,
        L: Sentinel<C>,
        F: Predicate<C::Item>,
    {
        remove_if_impl(first, &last, &mut pred, &Identity)
    }

    /// Compacts `[first, last)`, testing projected elements.
    pub fn call_by_key<C, L, F, P>(&self, first: C, last: L, mut pred: F, proj: P) -> C
    where
        C: ForwardCursor + Permutable,
        L: Sentinel<C>,
        P: Projection<C::Item>,
        F: Predicate<P::Output>,
    {
        remove_if_impl(first, &last, &mut pred, &proj)
    }

    /// Compacts a whole sequence, returning the new end.
    pub fn sequence<S, F>(&self, seq: S, mut pred: F) -> S::Cursor
    where
        S: Sequence,
        S::Cursor: ForwardCursor + Permutable,
        F: Predicate<<S::Cursor as Readable>::Item>,
    {
        let (first, last) = seq.into_bounds();
        remove_if_impl(first, &last, &mut pred, &Identity)
    }

    /// Compacts a whole sequence, testing projected elements.
    pub fn sequence_by_key<S, F, P>(&self, seq: S, mut pred: F, proj: P) -> S::Cursor
    where
        S: Sequence,
        S::Cursor: ForwardCursor + Permutable,
        P: Projection<<S::Cursor as Readable>::Item>,
        F: Predicate<P::Output>,
    {
        let (first, last) = seq.into_bounds();
        remove_if_impl(first, &last, &mut pred, &proj)
    }

    /// Captures the predicate and defers the sequence.
    ///
    /// ```
    /// use rangeforge_algorithm::REMOVE_IF;
    /// use rangeforge_core::cursor::Indexed;
    ///
    /// let mut drop_negative = REMOVE_IF.bind(|x: &i32| *x < 0);
    ///
    /// let mut a = vec![1, -2, 3];
    /// let mut b = vec![-1, 5];
    /// assert_eq!(drop_negative.apply(&mut a).index(), 2);
    /// assert_eq!(drop_negative.apply(&mut b).index(), 1);
    /// ```
    pub fn bind<F>(&self, pred: F) -> BoundRemoveIf<F, Identity> {
        BoundRemoveIf {
            pred,
            proj: Identity,
        }
    }

    /// Captures the predicate and projection and defers the sequence.
    pub fn bind_by_key<F, P>(&self, pred: F, proj: P) -> BoundRemoveIf<F, P> {
        BoundRemoveIf { pred, proj }
    }
}

/// `remove_if` with its predicate and projection already supplied.
///
/// The captured arguments live as long as the bound value and are lent to
/// every application, so a stateful predicate keeps its state across calls.
#[derive(Debug, Clone)]
pub struct BoundRemoveIf<F, P> {
    pred: F,
    proj: P,
}

impl<F, P> BoundRemoveIf<F, P> {
    /// Compacts `seq` exactly as `REMOVE_IF.sequence_by_key(seq, pred, proj)`
    /// would.
    pub fn apply<S>(&mut self, seq: S) -> S::Cursor
    where
        S: Sequence,
        S::Cursor: ForwardCursor + Permutable,
        P: Projection<<S::Cursor as Readable>::Item>,
        F: Predicate<P::Output>,
    {
        let (first, last) = seq.into_bounds();
        remove_if_impl(first, &last, &mut self.pred, &self.proj)
    }

    /// Returns the captured predicate.
    pub fn predicate(&self) -> &F {
        &self.pred
    }

    /// Releases the captured arguments.
    pub fn into_parts(self) -> (F, P) {
        (self.pred, self.proj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangeforge_core::cursor::{Indexed, SliceCursorMut};
    use rangeforge_core::functional::member;
    use rangeforge_test::employee::{employees, Employee};
    use rangeforge_test::projection::RecordingProjection;

    #[test]
    fn test_remove_even() {
        let mut values = vec![1, 2, 3, 4, 5];
        let end = REMOVE_IF.sequence(&mut values, |x: &i32| x % 2 == 0).index();
        assert_eq!(end, 3);
        assert_eq!(&values[..end], &[1, 3, 5]);

        let mut trash = values[end..].to_vec();
        trash.sort();
        assert_eq!(trash, vec![2, 4]);
    }

    #[test]
    fn test_nothing_removed() {
        let mut values = [1, 3, 5];
        let (first, last) = SliceCursorMut::bounds(&mut values[..]);
        let end = REMOVE_IF.call(first, last, |x: &i32| *x > 10);
        assert_eq!(end.index(), 3);
        assert_eq!(values, [1, 3, 5]);
    }

    #[test]
    fn test_everything_removed() {
        let mut values = vec![2, 4, 6];
        let end = REMOVE_IF.sequence(&mut values, |x: &i32| x % 2 == 0).index();
        assert_eq!(end, 0);
    }

    #[test]
    fn test_empty_sequence() {
        let mut values: Vec<i32> = Vec::new();
        let end = REMOVE_IF.sequence(&mut values, |_: &i32| true).index();
        assert_eq!(end, 0);
    }

    #[test]
    fn test_kept_elements_keep_their_order() {
        let mut staff = employees();
        let end = REMOVE_IF
            .sequence_by_key(&mut staff, |dept: &String| dept == "Eng", member(|e: &Employee| &e.department))
            .index();
        let kept: Vec<u32> = staff[..end].iter().map(|e| e.id).collect();
        assert_eq!(kept, vec![4, 5, 2]);
    }

    #[test]
    fn test_projection_called_once_per_element_in_order() {
        let mut values = vec![5, 6, 7, 8];
        let proj = RecordingProjection::new(|x: &i32| *x);
        let end = REMOVE_IF
            .sequence_by_key(&mut values, |x: &i32| *x == 6, rangeforge_core::by_ref(&proj))
            .index();
        assert_eq!(end, 3);
        assert_eq!(proj.seen(), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_bound_predicate_state_is_shared_across_calls() {
        let mut calls = 0;
        {
            let mut bound = REMOVE_IF.bind(|x: &i32| {
                calls += 1;
                *x == 0
            });
            let mut a = vec![0, 1];
            let mut b = vec![2, 0, 3];
            assert_eq!(bound.apply(&mut a).index(), 1);
            assert_eq!(bound.apply(&mut b).index(), 2);
            assert_eq!(a[0], 1);
            assert_eq!(&b[..2], &[2, 3]);
        }
        assert_eq!(calls, 5);
    }

    #[test]
    fn test_bound_matches_direct_call() {
        let input = vec![4, 7, 1, 8, 2, 9];
        let is_small = |x: &i32| *x < 5;

        let mut direct = input.clone();
        let direct_end = REMOVE_IF.sequence(&mut direct, is_small).index();

        let mut deferred = input;
        let deferred_end = REMOVE_IF.bind(is_small).apply(&mut deferred).index();

        assert_eq!(direct_end, deferred_end);
        assert_eq!(&direct[..direct_end], &deferred[..deferred_end]);
    }
}

//! Forward search for the first element satisfying a predicate.

use rangeforge_core::cursor::{Readable, Sentinel, Sequence};
use rangeforge_core::functional::{invoke_predicate, Identity, Predicate, Projection};

/// Finds the first position whose projected element satisfies a predicate.
///
/// Returns the position equal to the end when no element matches.
///
/// # Example
///
/// ```
/// use rangeforge_algorithm::FIND_IF;
/// use rangeforge_core::cursor::Indexed;
///
/// let values = [1, 4, 6];
/// let found = FIND_IF.sequence(&values, |x: &i32| x % 2 == 0);
/// assert_eq!(found.index(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindIf;

/// The `find_if` algorithm.
pub const FIND_IF: FindIf = FindIf;

pub(crate) fn find_if_impl<C, L, F, P>(mut first: C, last: &L, pred: &mut F, proj: &P) -> C
where
    C: Readable,
    L: Sentinel<C>,
    P: Projection<C::Item>,
    F: Predicate<P::Output> + ?Sized,
{
    while !last.is_end(&first) {
        if invoke_predicate(pred, proj, first.read()) {
            break;
        }
        first.advance();
    }
    first
}

impl FindIf {
    /// Searches `[first, last)`.
    pub fn call<C, L, F>(&self, first: C, last: L, mut pred: F) -> C
    where
        C: Readable,
        L: Sentinel<C>,
        F: Predicate<C::Item>,
    {
        find_if_impl(first, &last, &mut pred, &Identity)
    }

    /// Searches `[first, last)`, testing projected elements.
    pub fn call_by_key<C, L, F, P>(&self, first: C, last: L, mut pred: F, proj: P) -> C
    where
        C: Readable,
        L: Sentinel<C>,
        P: Projection<C::Item>,
        F: Predicate<P::Output>,
    {
        find_if_impl(first, &last, &mut pred, &proj)
    }

    /// Searches a whole sequence.
    pub fn sequence<S, F>(&self, seq: S, mut pred: F) -> S::Cursor
    where
        S: Sequence,
        S::Cursor: Readable,
        F: Predicate<<S::Cursor as Readable>::Item>,
    {
        let (first, last) = seq.into_bounds();
        find_if_impl(first, &last, &mut pred, &Identity)
    }

    /// Searches a whole sequence, testing projected elements.
    pub fn sequence_by_key<S, F, P>(&self, seq: S, mut pred: F, proj: P) -> S::Cursor
    where
        S: Sequence,
        S::Cursor: Readable,
        P: Projection<<S::Cursor as Readable>::Item>,
        F: Predicate<P::Output>,
    {
        let (first, last) = seq.into_bounds();
        find_if_impl(first, &last, &mut pred, &proj)
    }
}

//! Element-wise comparison of two sequences.
//!
//! `mismatch` walks two sequences in lock-step and stops at the first pair
//! whose projected elements are not related by the predicate, or as soon as
//! either side reaches its end. Every call shape funnels into the same loop;
//! the shapes with an unbounded second side pass [`Unreachable`] as its end,
//! so the first sequence alone decides when to stop.
//!
//! | Shape | Methods |
//! |-------|---------|
//! | two cursor/sentinel pairs | [`call`](Mismatch::call), [`call_by`](Mismatch::call_by), [`call_by_key`](Mismatch::call_by_key) |
//! | one pair plus an unbounded cursor | [`unbounded`](Mismatch::unbounded), [`unbounded_by`](Mismatch::unbounded_by), [`unbounded_by_key`](Mismatch::unbounded_by_key) |
//! | two sequences | [`sequences`](Mismatch::sequences), [`sequences_by`](Mismatch::sequences_by), [`sequences_by_key`](Mismatch::sequences_by_key) |
//! | a sequence plus an unbounded cursor | [`sequence_cursor`](Mismatch::sequence_cursor), [`sequence_cursor_by`](Mismatch::sequence_cursor_by), [`sequence_cursor_by_key`](Mismatch::sequence_cursor_by_key) |

use rangeforge_core::cursor::{Readable, Sentinel, Sequence, Unreachable};
use rangeforge_core::functional::{invoke_relation, EqualTo, Identity, Projection, Relation};
use rangeforge_core::result::InInResult;

/// Finds the first position where two sequences differ.
///
/// # Example
///
/// ```
/// use rangeforge_algorithm::MISMATCH;
/// use rangeforge_core::cursor::Indexed;
///
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 9, 4];
/// let result = MISMATCH.sequences(&a, &b);
/// assert_eq!((result.in1.index(), result.in2.index()), (2, 2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mismatch;

/// The `mismatch` algorithm.
pub const MISMATCH: Mismatch = Mismatch;

pub(crate) fn mismatch_impl<C1, L1, C2, L2, F, P1, P2>(
    mut first1: C1,
    last1: &L1,
    mut first2: C2,
    last2: &L2,
    pred: &mut F,
    proj1: &P1,
    proj2: &P2,
) -> InInResult<C1, C2>
where
    C1: Readable,
    L1: Sentinel<C1>,
    C2: Readable,
    L2: Sentinel<C2>,
    P1: Projection<C1::Item>,
    P2: Projection<C2::Item>,
    F: Relation<P1::Output, P2::Output> + ?Sized,
{
    while !last1.is_end(&first1) && !last2.is_end(&first2) {
        if !invoke_relation(pred, proj1, proj2, first1.read(), first2.read()) {
            break;
        }
        first1.advance();
        first2.advance();
    }
    InInResult::new(first1, first2)
}

impl Mismatch {
    /// Compares `[first1, last1)` with `[first2, last2)` using `==`.
    pub fn call<C1, L1, C2, L2>(
        &self,
        first1: C1,
        last1: L1,
        first2: C2,
        last2: L2,
    ) -> InInResult<C1, C2>
    where
        C1: Readable,
        L1: Sentinel<C1>,
        C2: Readable,
        L2: Sentinel<C2>,
        C1::Item: PartialEq<C2::Item>,
    {
        self.call_by(first1, last1, first2, last2, EqualTo)
    }

    /// Compares two ranges with a custom predicate.
    pub fn call_by<C1, L1, C2, L2, F>(
        &self,
        first1: C1,
        last1: L1,
        first2: C2,
        last2: L2,
        mut pred: F,
    ) -> InInResult<C1, C2>
    where
        C1: Readable,
        L1: Sentinel<C1>,
        C2: Readable,
        L2: Sentinel<C2>,
        F: Relation<C1::Item, C2::Item>,
    {
        mismatch_impl(first1, &last1, first2, &last2, &mut pred, &Identity, &Identity)
    }

    /// Compares two ranges with a custom predicate over projected elements.
    #[allow(clippy::too_many_arguments)]
    pub fn call_by_key<C1, L1, C2, L2, F, P1, P2>(
        &self,
        first1: C1,
        last1: L1,
        first2: C2,
        last2: L2,
        mut pred: F,
        proj1: P1,
        proj2: P2,
    ) -> InInResult<C1, C2>
    where
        C1: Readable,
        L1: Sentinel<C1>,
        C2: Readable,
        L2: Sentinel<C2>,
        P1: Projection<C1::Item>,
        P2: Projection<C2::Item>,
        F: Relation<P1::Output, P2::Output>,
    {
        mismatch_impl(first1, &last1, first2, &last2, &mut pred, &proj1, &proj2)
    }

    /// Compares `[first1, last1)` with the sequence starting at `first2`.
    ///
    /// Only the first range is bounded; the caller guarantees the second is
    /// at least as long.
    pub fn unbounded<C1, L1, C2>(&self, first1: C1, last1: L1, first2: C2) -> InInResult<C1, C2>
    where
        C1: Readable,
        L1: Sentinel<C1>,
        C2: Readable,
        C1::Item: PartialEq<C2::Item>,
    {
        self.unbounded_by(first1, last1, first2, EqualTo)
    }

    /// Like [`unbounded`](Self::unbounded) with a custom predicate.
    pub fn unbounded_by<C1, L1, C2, F>(
        &self,
        first1: C1,
        last1: L1,
        first2: C2,
        mut pred: F,
    ) -> InInResult<C1, C2>
    where
        C1: Readable,
        L1: Sentinel<C1>,
        C2: Readable,
        F: Relation<C1::Item, C2::Item>,
    {
        mismatch_impl(first1, &last1, first2, &Unreachable, &mut pred, &Identity, &Identity)
    }

    /// Like [`unbounded`](Self::unbounded) over projected elements.
    pub fn unbounded_by_key<C1, L1, C2, F, P1, P2>(
        &self,
        first1: C1,
        last1: L1,
        first2: C2,
        mut pred: F,
        proj1: P1,
        proj2: P2,
    ) -> InInResult<C1, C2>
    where
        C1: Readable,
        L1: Sentinel<C1>,
        C2: Readable,
        P1: Projection<C1::Item>,
        P2: Projection<C2::Item>,
        F: Relation<P1::Output, P2::Output>,
    {
        mismatch_impl(first1, &last1, first2, &Unreachable, &mut pred, &proj1, &proj2)
    }

    /// Compares two whole sequences using `==`.
    pub fn sequences<S1, S2>(&self, seq1: S1, seq2: S2) -> InInResult<S1::Cursor, S2::Cursor>
    where
        S1: Sequence,
        S2: Sequence,
        S1::Cursor: Readable,
        S2::Cursor: Readable,
        <S1::Cursor as Readable>::Item: PartialEq<<S2::Cursor as Readable>::Item>,
    {
        self.sequences_by(seq1, seq2, EqualTo)
    }

    /// Compares two whole sequences with a custom predicate.
    pub fn sequences_by<S1, S2, F>(
        &self,
        seq1: S1,
        seq2: S2,
        mut pred: F,
    ) -> InInResult<S1::Cursor, S2::Cursor>
    where
        S1: Sequence,
        S2: Sequence,
        S1::Cursor: Readable,
        S2::Cursor: Readable,
        F: Relation<<S1::Cursor as Readable>::Item, <S2::Cursor as Readable>::Item>,
    {
        let (first1, last1) = seq1.into_bounds();
        let (first2, last2) = seq2.into_bounds();
        mismatch_impl(first1, &last1, first2, &last2, &mut pred, &Identity, &Identity)
    }

    /// Compares two whole sequences over projected elements.
    pub fn sequences_by_key<S1, S2, F, P1, P2>(
        &self,
        seq1: S1,
        seq2: S2,
        mut pred: F,
        proj1: P1,
        proj2: P2,
    ) -> InInResult<S1::Cursor, S2::Cursor>
    where
        S1: Sequence,
        S2: Sequence,
        S1::Cursor: Readable,
        S2::Cursor: Readable,
        P1: Projection<<S1::Cursor as Readable>::Item>,
        P2: Projection<<S2::Cursor as Readable>::Item>,
        F: Relation<P1::Output, P2::Output>,
    {
        let (first1, last1) = seq1.into_bounds();
        let (first2, last2) = seq2.into_bounds();
        mismatch_impl(first1, &last1, first2, &last2, &mut pred, &proj1, &proj2)
    }

    /// Compares a whole sequence with the sequence starting at `first2`.
    ///
    /// The first sequence alone bounds the walk.
    pub fn sequence_cursor<S1, C2>(&self, seq1: S1, first2: C2) -> InInResult<S1::Cursor, C2>
    where
        S1: Sequence,
        S1::Cursor: Readable,
        C2: Readable,
        <S1::Cursor as Readable>::Item: PartialEq<C2::Item>,
    {
        self.sequence_cursor_by(seq1, first2, EqualTo)
    }

    /// Like [`sequence_cursor`](Self::sequence_cursor) with a custom
    /// predicate.
    pub fn sequence_cursor_by<S1, C2, F>(
        &self,
        seq1: S1,
        first2: C2,
        mut pred: F,
    ) -> InInResult<S1::Cursor, C2>
    where
        S1: Sequence,
        S1::Cursor: Readable,
        C2: Readable,
        F: Relation<<S1::Cursor as Readable>::Item, C2::Item>,
    {
        let (first1, last1) = seq1.into_bounds();
        mismatch_impl(first1, &last1, first2, &Unreachable, &mut pred, &Identity, &Identity)
    }

    /// Like [`sequence_cursor`](Self::sequence_cursor) over projected
    /// elements.
    pub fn sequence_cursor_by_key<S1, C2, F, P1, P2>(
        &self,
        seq1: S1,
        first2: C2,
        mut pred: F,
        proj1: P1,
        proj2: P2,
    ) -> InInResult<S1::Cursor, C2>
    where
        S1: Sequence,
        S1::Cursor: Readable,
        C2: Readable,
        P1: Projection<<S1::Cursor as Readable>::Item>,
        P2: Projection<C2::Item>,
        F: Relation<P1::Output, P2::Output>,
    {
        let (first1, last1) = seq1.into_bounds();
        mismatch_impl(first1, &last1, first2, &Unreachable, &mut pred, &proj1, &proj2)
    }
}

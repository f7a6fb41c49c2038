//! In-place unstable sort over forward cursors.
//!
//! Only forward traversal and element exchange are needed, so any sequence
//! that is forward-traversable and permutable can be sorted, not just
//! random-access ones.
//!
//! # Algorithm
//!
//! Quicksort with a Lomuto partition walked front to back. Pending ranges
//! live on an explicit stack; the smaller side of each partition is always
//! processed next, which keeps the stack logarithmic in the range length.
//! Ranges no longer than [`SortConfig::small_sort_threshold`] are finished
//! with a selection sort. Keys equal to the pivot alternate between the two
//! sides so runs of duplicates still split evenly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rangeforge_config::{PivotStrategy, SortConfig};
use rangeforge_core::cursor::{
    advanced_by, fork_next, measure, ForwardCursor, Permutable, Readable, Sentinel, Sequence,
};
use rangeforge_core::functional::{invoke_relation, Identity, Less, Projection, Relation};
use smallvec::SmallVec;
use tracing::trace;

/// Sorts a sequence in place by a strict weak ordering.
///
/// # Example
///
/// ```
/// use rangeforge_algorithm::SORT;
/// use rangeforge_core::Greater;
///
/// let mut values = vec![3, 1, 2];
/// SORT.sequence(&mut values);
/// assert_eq!(values, vec![1, 2, 3]);
///
/// SORT.sequence_by(&mut values, Greater);
/// assert_eq!(values, vec![3, 2, 1]);
/// ```
///
/// A mutable cursor cannot be duplicated to keep a read alive across the
/// sort:
///
/// ```compile_fail
/// use rangeforge_algorithm::SORT;
/// use rangeforge_core::cursor::{Readable, SliceCursorMut};
///
/// let mut values = [3, 1, 2];
/// let (first, last) = SliceCursorMut::bounds(&mut values[..]);
/// let held = first.read();
/// SORT.call(first.clone(), last);
/// assert_eq!(*held, 3);
/// ```
///
/// ```compile_fail
/// use rangeforge_algorithm::SORT;
/// use rangeforge_core::cursor::{Readable, SliceCursorMut};
///
/// let mut values = [3, 1, 2];
/// let (first, last) = SliceCursorMut::bounds(&mut values[..]);
/// let held = first.read();
/// SORT.call(first, last);
/// assert_eq!(*held, 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sort;

/// The `sort` algorithm.
pub const SORT: Sort = Sort;

/// Chooses the pivot offset for each partition step.
enum PivotPicker {
    First,
    Middle,
    Random(StdRng),
}

impl PivotPicker {
    fn new(config: &SortConfig) -> Self {
        match config.pivot {
            PivotStrategy::First => Self::First,
            PivotStrategy::Middle => Self::Middle,
            PivotStrategy::Random => Self::Random(match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            }),
        }
    }

    /// Returns an offset in `0..len`; `len` is non-zero.
    fn pick(&mut self, len: usize) -> usize {
        match self {
            Self::First => 0,
            Self::Middle => len / 2,
            Self::Random(rng) => rng.random_range(0..len),
        }
    }
}

pub(crate) fn sort_impl<C, L, F, P>(first: C, last: &L, cmp: &mut F, proj: &P, config: &SortConfig) -> C
where
    C: ForwardCursor + Permutable,
    L: Sentinel<C>,
    P: Projection<C::Item>,
    F: Relation<P::Output> + ?Sized,
{
    // SAFETY: every cursor into the range was moved into this call and forks
    // never leave it. Comparisons end their reads before any exchange.
    let (len, end) = measure(unsafe { first.fork() }, last);
    trace!(event = "sort_start", len, pivot = ?config.pivot);

    let threshold = config.small_sort_threshold.max(1);
    let mut picker = PivotPicker::new(config);
    let mut pending: SmallVec<[(C, usize); 32]> = SmallVec::new();
    pending.push((first, len));

    while let Some((lo, n)) = pending.pop() {
        if n <= threshold {
            selection_sort(lo, n, cmp, proj);
            continue;
        }

        let offset = picker.pick(n);
        // SAFETY: see above; `lo` is not read until `partition` returns.
        let (left_len, right) = partition(unsafe { lo.fork() }, n, offset, cmp, proj);
        let right_len = n - left_len - 1;

        if left_len < right_len {
            pending.push((right, right_len));
            pending.push((lo, left_len));
        } else {
            pending.push((lo, left_len));
            pending.push((right, right_len));
        }
    }

    end
}

/// Partitions the `n` elements starting at `lo` around the element at
/// `offset`.
///
/// Returns the number of elements placed before the pivot and the cursor
/// just past the pivot's final position.
fn partition<C, F, P>(lo: C, n: usize, offset: usize, cmp: &mut F, proj: &P) -> (usize, C)
where
    C: ForwardCursor + Permutable,
    P: Projection<C::Item>,
    F: Relation<P::Output> + ?Sized,
{
    if offset != 0 {
        // SAFETY: both cursors address elements of the same range and no
        // element reference is live.
        unsafe {
            let pivot = advanced_by(lo.fork(), offset);
            lo.swap_with(&pivot);
        }
    }

    // `store` sits on the last element known to belong left of the pivot.
    // SAFETY: forks stay inside this function; reads end before each swap.
    let (mut store, mut scan) = unsafe { (lo.fork(), fork_next(&lo)) };
    let mut left_len = 0;
    let mut tie = false;

    for _ in 1..n {
        let goes_left = if invoke_relation(cmp, proj, proj, scan.read(), lo.read()) {
            true
        } else if !invoke_relation(cmp, proj, proj, lo.read(), scan.read()) {
            tie = !tie;
            tie
        } else {
            false
        };

        if goes_left {
            store.advance();
            left_len += 1;
            // SAFETY: `store` never passes `scan`; both are in range.
            unsafe { store.swap_with(&scan) };
        }
        scan.advance();
    }

    // SAFETY: same range, no live element reference.
    unsafe { lo.swap_with(&store) };
    // SAFETY: as above.
    (left_len, unsafe { fork_next(&store) })
}

fn selection_sort<C, F, P>(lo: C, n: usize, cmp: &mut F, proj: &P)
where
    C: ForwardCursor + Permutable,
    P: Projection<C::Item>,
    F: Relation<P::Output> + ?Sized,
{
    let mut slot = lo;
    for remaining in (2..=n).rev() {
        // SAFETY: forks stay inside this loop; reads end before the swap.
        let (mut min, mut scan) = unsafe { (slot.fork(), fork_next(&slot)) };
        for _ in 1..remaining {
            if invoke_relation(cmp, proj, proj, scan.read(), min.read()) {
                // SAFETY: as above.
                min = unsafe { scan.fork() };
            }
            scan.advance();
        }
        if min != slot {
            // SAFETY: both cursors are inside the range being sorted.
            unsafe { slot.swap_with(&min) };
        }
        slot.advance();
    }
}

impl Sort {
    /// Sorts `[first, last)` ascending, returning the end position.
    pub fn call<C, L>(&self, first: C, last: L) -> C
    where
        C: ForwardCursor + Permutable,
        L: Sentinel<C>,
        C::Item: PartialOrd,
    {
        sort_impl(first, &last, &mut Less, &Identity, &SortConfig::default())
    }

    /// Sorts `[first, last)` by `cmp`.
    pub fn call_by<C, L, F>(&self, first: C, last: L, mut cmp: F) -> C
    where
        C: ForwardCursor + Permutable,
        L: Sentinel<C>,
        F: Relation<C::Item>,
    {
        sort_impl(first, &last, &mut cmp, &Identity, &SortConfig::default())
    }

    /// Sorts `[first, last)` by `cmp` over projected keys.
    pub fn call_by_key<C, L, F, P>(&self, first: C, last: L, mut cmp: F, proj: P) -> C
    where
        C: ForwardCursor + Permutable,
        L: Sentinel<C>,
        P: Projection<C::Item>,
        F: Relation<P::Output>,
    {
        sort_impl(first, &last, &mut cmp, &proj, &SortConfig::default())
    }

    /// Sorts `[first, last)` with explicit tuning.
    ///
    /// ```
    /// use rangeforge_algorithm::SORT;
    /// use rangeforge_config::{PivotStrategy, SortConfig};
    /// use rangeforge_core::{Identity, Less, SliceCursorMut};
    ///
    /// let config = SortConfig {
    ///     small_sort_threshold: 2,
    ///     pivot: PivotStrategy::Random,
    ///     seed: Some(7),
    /// };
    /// let mut values = [9, 4, 7, 1, 8, 2];
    /// let (first, last) = SliceCursorMut::bounds(&mut values[..]);
    /// SORT.call_tuned(first, last, Less, Identity, &config);
    /// assert_eq!(values, [1, 2, 4, 7, 8, 9]);
    /// ```
    pub fn call_tuned<C, L, F, P>(&self, first: C, last: L, mut cmp: F, proj: P, config: &SortConfig) -> C
    where
        C: ForwardCursor + Permutable,
        L: Sentinel<C>,
        P: Projection<C::Item>,
        F: Relation<P::Output>,
    {
        sort_impl(first, &last, &mut cmp, &proj, config)
    }

    /// Sorts a whole sequence ascending.
    pub fn sequence<S>(&self, seq: S) -> S::Cursor
    where
        S: Sequence,
        S::Cursor: ForwardCursor + Permutable,
        <S::Cursor as Readable>::Item: PartialOrd,
    {
        let (first, last) = seq.into_bounds();
        sort_impl(first, &last, &mut Less, &Identity, &SortConfig::default())
    }

    /// Sorts a whole sequence by `cmp`.
    pub fn sequence_by<S, F>(&self, seq: S, mut cmp: F) -> S::Cursor
    where
        S: Sequence,
        S::Cursor: ForwardCursor + Permutable,
        F: Relation<<S::Cursor as Readable>::Item>,
    {
        let (first, last) = seq.into_bounds();
        sort_impl(first, &last, &mut cmp, &Identity, &SortConfig::default())
    }

    /// Sorts a whole sequence by `cmp` over projected keys.
    pub fn sequence_by_key<S, F, P>(&self, seq: S, mut cmp: F, proj: P) -> S::Cursor
    where
        S: Sequence,
        S::Cursor: ForwardCursor + Permutable,
        P: Projection<<S::Cursor as Readable>::Item>,
        F: Relation<P::Output>,
    {
        let (first, last) = seq.into_bounds();
        sort_impl(first, &last, &mut cmp, &proj, &SortConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rangeforge_core::cursor::{Indexed, SliceCursorMut};
    use rangeforge_core::functional::{member, Greater};
    use rangeforge_test::employee::{employees, Employee};

    fn is_sorted<T: PartialOrd>(values: &[T]) -> bool {
        values.windows(2).all(|pair| !(pair[1] < pair[0]))
    }

    fn shuffled(len: usize, seed: u64) -> Vec<i64> {
        let mut values: Vec<i64> = (0..len as i64).map(|x| (x * 7919) % 1000).collect();
        values.shuffle(&mut StdRng::seed_from_u64(seed));
        values
    }

    #[test]
    fn test_sort_small() {
        let mut values = vec![3, 1, 2];
        let end = SORT.sequence(&mut values).index();
        assert_eq!(end, 3);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<i32> = Vec::new();
        SORT.sequence(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42];
        SORT.sequence(&mut one);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn test_sort_descending() {
        let mut values = vec![1, 5, 2, 4, 3];
        SORT.sequence_by(&mut values, Greater);
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_with_closure_comparator() {
        let mut words = vec!["pear", "fig", "banana", "kiwi"];
        SORT.sequence_by(&mut words, |a: &&str, b: &&str| a.len() < b.len());
        let lengths: Vec<usize> = words.iter().map(|w| w.len()).collect();
        assert_eq!(lengths, vec![3, 4, 4, 6]);
    }

    #[test]
    fn test_sort_by_projected_key() {
        let mut staff = employees();
        SORT.sequence_by_key(&mut staff, Less, member(|e: &Employee| &e.name));
        let names: Vec<&str> = staff.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ari", "Bo", "Cy", "Dana", "Eve"]);
    }

    #[test]
    fn test_sort_large_input_above_threshold() {
        let mut values = shuffled(2_000, 11);
        let mut expected = values.clone();
        expected.sort();
        SORT.sequence(&mut values);
        assert_eq!(values, expected);
    }

    #[test]
    fn test_sort_all_duplicates() {
        let mut values = vec![7; 500];
        SORT.sequence(&mut values);
        assert_eq!(values, vec![7; 500]);
    }

    #[test]
    fn test_sort_few_distinct_keys() {
        let mut values: Vec<u8> = (0..1_000).map(|i| (i % 3) as u8).collect();
        SORT.sequence(&mut values);
        assert!(is_sorted(&values));
        assert_eq!(values.iter().filter(|&&v| v == 0).count(), 334);
    }

    #[test]
    fn test_sort_already_sorted_and_reversed() {
        let mut ascending: Vec<i32> = (0..300).collect();
        SORT.sequence(&mut ascending);
        assert!(is_sorted(&ascending));

        let mut descending: Vec<i32> = (0..300).rev().collect();
        SORT.sequence(&mut descending);
        assert_eq!(descending, (0..300).collect::<Vec<_>>());
    }

    #[test]
    fn test_every_pivot_strategy_sorts() {
        for pivot in [PivotStrategy::First, PivotStrategy::Middle, PivotStrategy::Random] {
            let config = SortConfig {
                small_sort_threshold: 4,
                pivot,
                seed: None,
            };
            let mut values = shuffled(257, 3);
            let (first, last) = SliceCursorMut::bounds(values.as_mut_slice());
            SORT.call_tuned(first, last, Less, Identity, &config);
            assert!(is_sorted(&values), "pivot {:?} left input unsorted", pivot);
        }
    }

    #[test]
    fn test_seeded_random_pivot_is_reproducible() {
        let config = SortConfig {
            small_sort_threshold: 1,
            pivot: PivotStrategy::Random,
            seed: Some(99),
        };

        let count_comparisons = || {
            let mut values = shuffled(128, 5);
            let mut comparisons = 0usize;
            let (first, last) = SliceCursorMut::bounds(values.as_mut_slice());
            SORT.call_tuned(
                first,
                last,
                |a: &i64, b: &i64| {
                    comparisons += 1;
                    a < b
                },
                Identity,
                &config,
            );
            assert!(is_sorted(&values));
            comparisons
        };

        assert_eq!(count_comparisons(), count_comparisons());
    }

    #[test]
    fn test_threshold_larger_than_input_uses_selection_sort() {
        let config = SortConfig {
            small_sort_threshold: 64,
            ..SortConfig::default()
        };
        let mut values = vec![5, 3, 9, 1, 1, 0];
        let (first, last) = SliceCursorMut::bounds(values.as_mut_slice());
        SORT.call_tuned(first, last, Less, Identity, &config);
        assert_eq!(values, vec![0, 1, 1, 3, 5, 9]);
    }

    #[test]
    fn test_sort_subrange_leaves_rest_untouched() {
        let mut values = [9, 8, 7, 6, 5];
        let (first, last) = SliceCursorMut::bounds(&mut values[..3]);
        let end = SORT.call(first, last);
        assert_eq!(end.index(), 3);
        assert_eq!(values, [7, 8, 9, 6, 5]);
    }

    #[test]
    fn test_sort_reads_after_the_call_see_sorted_values() {
        let mut values = [3, 1, 2];
        let (first, last) = SliceCursorMut::bounds(&mut values[..]);
        let end = SORT.call(first, last);
        assert_eq!(end.index(), 3);
        let (first, _) = SliceCursorMut::bounds(&mut values[..]);
        let held = first.read();
        assert_eq!(*held, 1);
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        let mut values = shuffled(100, 8);
        SORT.sequence(&mut values);
        let once = values.clone();
        SORT.sequence(&mut values);
        assert_eq!(values, once);
    }
}

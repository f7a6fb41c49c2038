//! Element-wise mapping into a destination or back into the source.

use std::cell::RefCell;

use rangeforge_core::cursor::{Cursor, Readable, Sentinel, Sequence, Writable};
use rangeforge_core::functional::{invoke_unary, Identity, Projection, UnaryFunction};
use rangeforge_core::result::InOutResult;

/// Applies a function to every projected element and writes the results.
///
/// The destination form writes to a separate output cursor and returns
/// where both cursors stopped. The in-place form writes each result back
/// over the element it was computed from and returns the end.
///
/// # Example
///
/// ```
/// use rangeforge_algorithm::TRANSFORM;
///
/// let mut values = vec![1, 2, 3];
/// TRANSFORM.sequence_in_place(&mut values, |x: &i32| x * 2);
/// assert_eq!(values, vec![2, 4, 6]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transform;

/// The `transform` algorithm.
pub const TRANSFORM: Transform = Transform;

pub(crate) fn transform_impl<C, L, O, F, P>(
    mut first: C,
    last: &L,
    mut out: O,
    fun: &mut F,
    proj: &P,
) -> InOutResult<C, O>
where
    C: Readable,
    L: Sentinel<C>,
    P: Projection<C::Item>,
    F: UnaryFunction<P::Output> + ?Sized,
    O: Writable<F::Output>,
{
    while !last.is_end(&first) {
        let value = invoke_unary(fun, proj, first.read());
        // SAFETY: `out` is a distinct destination cursor and no reference
        // into it is held.
        unsafe { out.write(value) };
        first.advance();
        out.advance();
    }
    InOutResult::new(first, out)
}

pub(crate) fn transform_in_place_impl<C, L, F, P>(mut cursor: C, last: &L, fun: &mut F, proj: &P) -> C
where
    C: Readable + Writable<F::Output>,
    L: Sentinel<C>,
    P: Projection<C::Item>,
    F: UnaryFunction<P::Output> + ?Sized,
{
    while !last.is_end(&cursor) {
        let value = invoke_unary(fun, proj, cursor.read());
        // SAFETY: the borrow from `read` ended when `value` was produced.
        unsafe { cursor.write(value) };
        cursor.advance();
    }
    cursor
}

impl Transform {
    /// Maps `[first, last)` into `out`.
    pub fn call<C, L, O, F>(&self, first: C, last: L, out: O, mut fun: F) -> InOutResult<C, O>
    where
        C: Readable,
        L: Sentinel<C>,
        F: UnaryFunction<C::Item>,
        O: Writable<F::Output>,
    {
        transform_impl(first, &last, out, &mut fun, &Identity)
    }

    /// Maps projected elements of `[first, last)` into `out`.
    pub fn call_by_key<C, L, O, F, P>(&self, first: C, last: L, out: O, mut fun: F, proj: P) -> InOutResult<C, O>
    where
        C: Readable,
        L: Sentinel<C>,
        P: Projection<C::Item>,
        F: UnaryFunction<P::Output>,
        O: Writable<F::Output>,
    {
        transform_impl(first, &last, out, &mut fun, &proj)
    }

    /// Maps a whole sequence into `out`.
    ///
    /// ```
    /// use rangeforge_algorithm::TRANSFORM;
    /// use rangeforge_core::cursor::{Indexed, SliceCursorMut};
    ///
    /// let input = [1, 2, 3];
    /// let mut squares = [0_i32; 3];
    /// let (out, _) = SliceCursorMut::bounds(&mut squares[..]);
    /// let result = TRANSFORM.sequence(&input, out, |x: &i32| x * x);
    /// assert_eq!(result.output.index(), 3);
    /// assert_eq!(squares, [1, 4, 9]);
    /// ```
    pub fn sequence<S, O, F>(&self, seq: S, out: O, mut fun: F) -> InOutResult<S::Cursor, O>
    where
        S: Sequence,
        S::Cursor: Readable,
        F: UnaryFunction<<S::Cursor as Readable>::Item>,
        O: Writable<F::Output>,
    {
        let (first, last) = seq.into_bounds();
        transform_impl(first, &last, out, &mut fun, &Identity)
    }

    /// Maps projected elements of a whole sequence into `out`.
    pub fn sequence_by_key<S, O, F, P>(&self, seq: S, out: O, mut fun: F, proj: P) -> InOutResult<S::Cursor, O>
    where
        S: Sequence,
        S::Cursor: Readable,
        P: Projection<<S::Cursor as Readable>::Item>,
        F: UnaryFunction<P::Output>,
        O: Writable<F::Output>,
    {
        let (first, last) = seq.into_bounds();
        transform_impl(first, &last, out, &mut fun, &proj)
    }

    /// Rewrites every element of `[first, last)` with `fun(element)`.
    pub fn in_place<C, L, F>(&self, first: C, last: L, mut fun: F) -> C
    where
        C: Readable + Writable<F::Output>,
        L: Sentinel<C>,
        F: UnaryFunction<C::Item>,
    {
        transform_in_place_impl(first, &last, &mut fun, &Identity)
    }

    /// Rewrites every element of `[first, last)` with `fun(proj(element))`.
    pub fn in_place_by_key<C, L, F, P>(&self, first: C, last: L, mut fun: F, proj: P) -> C
    where
        C: Readable + Writable<F::Output>,
        L: Sentinel<C>,
        P: Projection<C::Item>,
        F: UnaryFunction<P::Output>,
    {
        transform_in_place_impl(first, &last, &mut fun, &proj)
    }

    /// Rewrites every element of a whole sequence.
    pub fn sequence_in_place<S, F>(&self, seq: S, mut fun: F) -> S::Cursor
    where
        S: Sequence,
        S::Cursor: Readable + Writable<F::Output>,
        F: UnaryFunction<<S::Cursor as Readable>::Item>,
    {
        let (first, last) = seq.into_bounds();
        transform_in_place_impl(first, &last, &mut fun, &Identity)
    }

    /// Rewrites every element of a whole sequence from its projection.
    pub fn sequence_in_place_by_key<S, F, P>(&self, seq: S, mut fun: F, proj: P) -> S::Cursor
    where
        S: Sequence,
        S::Cursor: Readable + Writable<F::Output>,
        P: Projection<<S::Cursor as Readable>::Item>,
        F: UnaryFunction<P::Output>,
    {
        let (first, last) = seq.into_bounds();
        transform_in_place_impl(first, &last, &mut fun, &proj)
    }
}

/// Output cursor that appends every written value to a vector.
///
/// Lets the destination form of [`TRANSFORM`] collect results without
/// sizing a buffer up front.
///
/// ```
/// use rangeforge_algorithm::{Collect, TRANSFORM};
///
/// let mut names: Vec<String> = Vec::new();
/// TRANSFORM.sequence(&[3, 1], Collect::new(&mut names), |x: &i32| x.to_string());
/// assert_eq!(names, vec!["3".to_string(), "1".to_string()]);
/// ```
#[derive(Debug)]
pub struct Collect<'a, T> {
    target: RefCell<&'a mut Vec<T>>,
}

impl<'a, T> Collect<'a, T> {
    /// Appends to `target`.
    pub fn new(target: &'a mut Vec<T>) -> Self {
        Self {
            target: RefCell::new(target),
        }
    }
}

impl<T> Cursor for Collect<'_, T> {
    #[inline]
    fn advance(&mut self) {}
}

impl<T, V: Into<T>> Writable<V> for Collect<'_, T> {
    unsafe fn write(&self, value: V) {
        self.target.borrow_mut().push(value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangeforge_core::cursor::{Indexed, InputSequence, Iota, SliceCursorMut};
    use rangeforge_core::functional::member;
    use rangeforge_test::container::SinglePassVec;
    use rangeforge_test::employee::{employees, Employee};

    #[test]
    fn test_in_place_doubling() {
        let mut values = vec![1, 2, 3];
        let end = TRANSFORM.sequence_in_place(&mut values, |x: &i32| x * 2).index();
        assert_eq!(end, 3);
        assert_eq!(values, vec![2, 4, 6]);
    }

    #[test]
    fn test_in_place_by_key() {
        let mut staff = employees();
        TRANSFORM.sequence_in_place_by_key(
            &mut staff,
            |age: &u32| Employee::new(0, "anon", "none", *age),
            member(|e: &Employee| &e.age),
        );
        let ages: Vec<u32> = staff.iter().map(|e| e.age).collect();
        assert_eq!(ages, vec![41, 29, 35, 29, 52]);
        assert!(staff.iter().all(|e| e.name == "anon"));
    }

    #[test]
    fn test_in_place_on_single_pass_container() {
        let mut values = SinglePassVec::new(vec![1_i32, 2, 3]);
        TRANSFORM.sequence_in_place(&mut values, |x: &i32| x + 10);
        assert_eq!(values.as_slice(), &[11, 12, 13]);
    }

    #[test]
    fn test_into_separate_buffer() {
        let input = vec![1, 2, 3, 4];
        let mut output = vec![0u64; 4];
        let (out, _) = SliceCursorMut::bounds(output.as_mut_slice());
        let result = TRANSFORM.sequence(&input, out, |x: &i32| (*x as u64) * 100);
        assert_eq!(result.input.index(), 4);
        assert_eq!(result.output.index(), 4);
        assert_eq!(output, vec![100, 200, 300, 400]);
    }

    #[test]
    fn test_into_collect_changes_type() {
        let staff = employees();
        let mut names: Vec<String> = Vec::new();
        TRANSFORM.sequence_by_key(&staff, Collect::new(&mut names), |name: &String| name.to_uppercase(), member(|e: &Employee| &e.name));
        assert_eq!(names, vec!["DANA", "ARI", "CY", "EVE", "BO"]);
    }

    #[test]
    fn test_from_single_pass_input() {
        let mut out: Vec<i32> = Vec::new();
        let source = InputSequence::new(vec![5, 6].into_iter());
        TRANSFORM.sequence(source, Collect::new(&mut out), |x: &i32| x - 5);
        assert_eq!(out, vec![0, 1]);
    }

    #[test]
    fn test_bounded_prefix_of_unbounded_input() {
        let mut squares = [0u64; 4];
        let (out, _) = SliceCursorMut::bounds(&mut squares[..]);
        let result = TRANSFORM.call(Iota::new(1u64), Iota::new(5u64), out, |x: &u64| x * x);
        assert_eq!(result.input.value(), 5);
        assert_eq!(squares, [1, 4, 9, 16]);
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let input: Vec<i32> = Vec::new();
        let mut out: Vec<i32> = Vec::new();
        TRANSFORM.sequence(&input, Collect::new(&mut out), |x: &i32| *x);
        assert!(out.is_empty());
    }

    #[test]
    fn test_function_called_in_order() {
        let mut values = vec![3, 1, 2];
        let mut seen = Vec::new();
        TRANSFORM.sequence_in_place(&mut values, |x: &i32| {
            seen.push(*x);
            -x
        });
        assert_eq!(seen, vec![3, 1, 2]);
        assert_eq!(values, vec![-3, -1, -2]);
    }
}

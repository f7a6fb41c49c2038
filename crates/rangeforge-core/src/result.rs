//! Named aggregates for algorithms returning more than one cursor.
//!
//! Field order follows the argument order of the producing algorithm.

/// Final positions of a two-sequence scan such as `mismatch`.
///
/// # Example
///
/// ```
/// use rangeforge_core::InInResult;
///
/// let result = InInResult::new(2usize, 2usize);
/// let (in1, in2) = result.into_tuple();
/// assert_eq!(in1, in2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InInResult<I1, I2> {
    /// Position reached in the first sequence.
    pub in1: I1,
    /// Position reached in the second sequence.
    pub in2: I2,
}

impl<I1, I2> InInResult<I1, I2> {
    #[inline]
    pub fn new(in1: I1, in2: I2) -> Self {
        Self { in1, in2 }
    }

    #[inline]
    pub fn into_tuple(self) -> (I1, I2) {
        (self.in1, self.in2)
    }
}

impl<I1, I2> From<InInResult<I1, I2>> for (I1, I2) {
    fn from(result: InInResult<I1, I2>) -> Self {
        result.into_tuple()
    }
}

/// Final positions of a read-then-write pass such as `transform` into a
/// separate destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InOutResult<I, O> {
    /// Position reached in the input sequence.
    pub input: I,
    /// Position one past the last element written.
    pub output: O,
}

impl<I, O> InOutResult<I, O> {
    #[inline]
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    #[inline]
    pub fn into_tuple(self) -> (I, O) {
        (self.input, self.output)
    }
}

impl<I, O> From<InOutResult<I, O>> for (I, O) {
    fn from(result: InOutResult<I, O>) -> Self {
        result.into_tuple()
    }
}

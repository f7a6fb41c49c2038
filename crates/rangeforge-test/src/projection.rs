//! Projections that record how they were called.
//!
//! # Example
//!
//! ```ignore
//! use rangeforge_core::functional::Projection;
//! use rangeforge_test::projection::RecordingProjection;
//!
//! let proj = RecordingProjection::new(|x: &i32| x * 10);
//! proj.project(&1, |_| ());
//! proj.project(&2, |_| ());
//! assert_eq!(proj.seen(), vec![10, 20]);
//! ```

use std::cell::RefCell;
use std::fmt;

use rangeforge_core::functional::Projection;

/// Wraps a projection and logs every projected value, in call order.
pub struct RecordingProjection<F, U> {
    f: F,
    seen: RefCell<Vec<U>>,
}

impl<F, U> RecordingProjection<F, U> {
    /// Wraps `f`.
    pub fn new(f: F) -> Self {
        Self {
            f,
            seen: RefCell::new(Vec::new()),
        }
    }

    /// Returns the number of calls so far.
    pub fn calls(&self) -> usize {
        self.seen.borrow().len()
    }

    /// Clears the log.
    pub fn reset(&self) {
        self.seen.borrow_mut().clear();
    }
}

impl<F, U: Clone> RecordingProjection<F, U> {
    /// Returns the projected values in call order.
    pub fn seen(&self) -> Vec<U> {
        self.seen.borrow().clone()
    }
}

impl<F, U: fmt::Debug> fmt::Debug for RecordingProjection<F, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingProjection")
            .field("seen", &self.seen.borrow())
            .finish_non_exhaustive()
    }
}

impl<T, F, U> Projection<T> for RecordingProjection<F, U>
where
    T: ?Sized,
    F: Fn(&T) -> U,
    U: Clone,
{
    type Output = U;

    fn project<R>(&self, value: &T, then: impl FnOnce(&U) -> R) -> R {
        let projected = (self.f)(value);
        self.seen.borrow_mut().push(projected.clone());
        then(&projected)
    }
}

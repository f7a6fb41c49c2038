//! Capability requirements and their diagnostic path.
//!
//! Every algorithm and action states its requirements as trait bounds on
//! its real entry points. The capability traits carry fixed messages, so a
//! call that fails to type-check names the requirement that was not met.
//!
//! Alongside the real path, this module offers a diagnostic path that looks
//! at each requirement independently:
//!
//! - `diagnose_*!` macros evaluate every requirement for concrete argument
//!   types and return a [`RequirementReport`] listing all unmet ones.
//! - `require_*!` macros assert every requirement at compile time, producing
//!   one error per unmet requirement.
//!
//! The two paths are never merged: the diagnostic macros perform no
//! traversal and have no effect on their arguments.
//!
//! # Example
//!
//! ```
//! use rangeforge_core::{diagnose_transform, Requirement};
//!
//! let values = vec![1_i32, 2, 3];
//! assert!(diagnose_transform!(values, |x: &i32| x * 2).is_satisfied());
//!
//! let report = diagnose_transform!(values, |x: &i32| x.to_string());
//! assert_eq!(report.unmet(), &[Requirement::ResultWritable]);
//! assert_eq!(
//!     report.messages().collect::<Vec<_>>(),
//!     vec!["function result must be writable back into the sequence"],
//! );
//! ```

#[doc(hidden)]
pub mod probe;
mod requirement;


pub use requirement::{Requirement, RequirementReport};

/// Reports which requirements of the sort action are unmet.
///
/// Takes the container, and optionally a comparator (default
/// [`Less`](crate::functional::Less)) and projection (default
/// [`Identity`](crate::functional::Identity)). Closure arguments need
/// annotated parameter types.
///
/// Checks, in order: forward traversal, projection, comparator, permutable.
///
/// # Example
///
/// ```
/// use rangeforge_core::{diagnose_sort, Requirement};
///
/// let values = vec![3, 1, 2];
/// assert!(diagnose_sort!(values).is_satisfied());
///
/// let names = vec![String::from("b")];
/// let report = diagnose_sort!(names, |a: &usize, b: &usize| a < b);
/// assert_eq!(report.unmet(), &[Requirement::ComparatorAcceptsProjected]);
/// ```
#[macro_export]
macro_rules! diagnose_sort {
    ($seq:expr $(,)?) => {
        $crate::diagnose_sort!($seq, $crate::functional::Less, $crate::functional::Identity)
    };
    ($seq:expr, $cmp:expr $(,)?) => {
        $crate::diagnose_sort!($seq, $cmp, $crate::functional::Identity)
    };
    ($seq:expr, $cmp:expr, $proj:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::concept::probe::{
            ComparatorHit, ComparatorMiss, ForwardTraversableHit, ForwardTraversableMiss,
            PermutableHit, PermutableMiss, ProjectionHit, ProjectionMiss,
        };
        use $crate::concept::Requirement;
        let probe = $crate::concept::probe::Probe::new(&$seq, &$cmp, &$proj);
        $crate::concept::RequirementReport::new("sort")
            .check(Requirement::ForwardTraversable, (&&probe).forward_traversable())
            .check(Requirement::ProjectionAcceptsElement, (&&probe).projection_accepts_element())
            .check(Requirement::ComparatorAcceptsProjected, (&&probe).comparator_accepts_projected())
            .check(Requirement::Permutable, (&&probe).permutable())
    }};
}

/// Reports which requirements of the transform action are unmet.
///
/// Takes the container, the function and optionally a projection.
///
/// Checks, in order: traversal, projection, function, writable result.
#[macro_export]
macro_rules! diagnose_transform {
    ($seq:expr, $fun:expr $(,)?) => {
        $crate::diagnose_transform!($seq, $fun, $crate::functional::Identity)
    };
    ($seq:expr, $fun:expr, $proj:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::concept::probe::{
            FunctionHit, FunctionMiss, ProjectionHit, ProjectionMiss, TraversableHit,
            TraversableMiss, WritableHit, WritableMiss,
        };
        use $crate::concept::Requirement;
        let probe = $crate::concept::probe::Probe::new(&$seq, &$fun, &$proj);
        $crate::concept::RequirementReport::new("transform")
            .check(Requirement::Traversable, (&&probe).traversable())
            .check(Requirement::ProjectionAcceptsElement, (&&probe).projection_accepts_element())
            .check(Requirement::FunctionAcceptsProjected, (&&probe).function_accepts_projected())
            .check(Requirement::ResultWritable, (&&probe).result_writable())
    }};
}

/// Reports which requirements of the remove-if action are unmet.
///
/// Takes the container, the predicate and optionally a projection.
///
/// Checks, in order: forward traversal, projection, predicate, permutable,
/// truncatable.
#[macro_export]
macro_rules! diagnose_remove_if {
    ($seq:expr, $pred:expr $(,)?) => {
        $crate::diagnose_remove_if!($seq, $pred, $crate::functional::Identity)
    };
    ($seq:expr, $pred:expr, $proj:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::concept::probe::{
            ForwardTraversableHit, ForwardTraversableMiss, PermutableHit, PermutableMiss,
            PredicateHit, PredicateMiss, ProjectionHit, ProjectionMiss, TruncatableHit,
            TruncatableMiss,
        };
        use $crate::concept::Requirement;
        let probe = $crate::concept::probe::Probe::new(&$seq, &$pred, &$proj);
        $crate::concept::RequirementReport::new("remove_if")
            .check(Requirement::ForwardTraversable, (&&probe).forward_traversable())
            .check(Requirement::ProjectionAcceptsElement, (&&probe).projection_accepts_element())
            .check(Requirement::PredicateAcceptsProjected, (&&probe).predicate_accepts_projected())
            .check(Requirement::Permutable, (&&probe).permutable())
            .check(Requirement::Truncatable, (&&probe).truncatable())
    }};
}

/// Reports which requirements of `mismatch` are unmet for two sequences.
///
/// Takes two sequences (such as `&values`), and optionally a predicate
/// (default [`EqualTo`](crate::functional::EqualTo)) and two projections.
///
/// # Example
///
/// ```
/// use rangeforge_core::{diagnose_mismatch, member, Identity, Requirement};
///
/// struct Row { id: u32 }
///
/// let rows = vec![Row { id: 1 }];
/// let ids = vec![1u32];
/// let by_id = member(|r: &Row| &r.id);
///
/// assert!(diagnose_mismatch!(&rows, &ids, |a: &u32, b: &u32| a == b, by_id, Identity).is_satisfied());
///
/// let report = diagnose_mismatch!(&rows, &ids);
/// assert_eq!(report.unmet(), &[Requirement::ComparatorAcceptsProjected]);
/// ```
#[macro_export]
macro_rules! diagnose_mismatch {
    ($s1:expr, $s2:expr $(,)?) => {
        $crate::diagnose_mismatch!(
            $s1,
            $s2,
            $crate::functional::EqualTo,
            $crate::functional::Identity,
            $crate::functional::Identity
        )
    };
    ($s1:expr, $s2:expr, $pred:expr $(,)?) => {
        $crate::diagnose_mismatch!(
            $s1,
            $s2,
            $pred,
            $crate::functional::Identity,
            $crate::functional::Identity
        )
    };
    ($s1:expr, $s2:expr, $pred:expr, $proj1:expr, $proj2:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::concept::probe::{
            PairComparatorHit, PairComparatorMiss, PairProjectionHit, PairProjectionMiss,
            PairTraversableHit, PairTraversableMiss,
        };
        use $crate::concept::Requirement;
        let probe =
            $crate::concept::probe::PairProbe::new(&$s1, &$s2, &$pred, &$proj1, &$proj2);
        $crate::concept::RequirementReport::new("mismatch")
            .check(Requirement::Traversable, (&&probe).sequences_traversable())
            .check(Requirement::ProjectionAcceptsElement, (&&probe).projections_accept_elements())
            .check(Requirement::ComparatorAcceptsProjected, (&&probe).comparator_accepts_both())
    }};
}

/// Asserts at compile time that the sort action accepts these arguments.
///
/// Each unmet requirement is reported as its own error.
///
/// ```
/// use rangeforge_core::require_sort;
///
/// let values = vec![2, 1];
/// require_sort!(values);
/// require_sort!(values, |a: &i32, b: &i32| a > b);
/// ```
///
/// ```compile_fail
/// use rangeforge_core::require_sort;
///
/// struct Opaque;
/// let values = vec![Opaque];
/// require_sort!(values); // comparator must accept the projected values
/// ```
#[macro_export]
macro_rules! require_sort {
    ($seq:expr $(,)?) => {
        $crate::require_sort!($seq, $crate::functional::Less, $crate::functional::Identity)
    };
    ($seq:expr, $cmp:expr $(,)?) => {
        $crate::require_sort!($seq, $cmp, $crate::functional::Identity)
    };
    ($seq:expr, $cmp:expr, $proj:expr $(,)?) => {{
        let _ = || {
            $crate::concept::probe::assert_forward_traversable(&$seq);
            $crate::concept::probe::assert_projection_accepts_element(&$seq, &$proj);
            $crate::concept::probe::assert_comparator_accepts_projected(&$seq, &$cmp, &$proj);
            $crate::concept::probe::assert_permutable(&$seq);
        };
    }};
}

/// Asserts at compile time that the transform action accepts these
/// arguments.
///
/// ```compile_fail
/// use rangeforge_core::require_transform;
///
/// let values = vec![1, 2, 3];
/// require_transform!(values, |x: &i32| x.to_string()); // result must be writable
/// ```
#[macro_export]
macro_rules! require_transform {
    ($seq:expr, $fun:expr $(,)?) => {
        $crate::require_transform!($seq, $fun, $crate::functional::Identity)
    };
    ($seq:expr, $fun:expr, $proj:expr $(,)?) => {{
        let _ = || {
            $crate::concept::probe::assert_traversable(&$seq);
            $crate::concept::probe::assert_projection_accepts_element(&$seq, &$proj);
            $crate::concept::probe::assert_function_accepts_projected(&$seq, &$fun, &$proj);
            $crate::concept::probe::assert_result_writable(&$seq, &$fun, &$proj);
        };
    }};
}

/// Asserts at compile time that the remove-if action accepts these
/// arguments.
///
/// ```compile_fail
/// use rangeforge_core::require_remove_if;
///
/// let values = [1, 2, 3];
/// require_remove_if!(values, |x: &i32| x % 2 == 0); // container must be truncatable
/// ```
#[macro_export]
macro_rules! require_remove_if {
    ($seq:expr, $pred:expr $(,)?) => {
        $crate::require_remove_if!($seq, $pred, $crate::functional::Identity)
    };
    ($seq:expr, $pred:expr, $proj:expr $(,)?) => {{
        let _ = || {
            $crate::concept::probe::assert_forward_traversable(&$seq);
            $crate::concept::probe::assert_projection_accepts_element(&$seq, &$proj);
            $crate::concept::probe::assert_predicate_accepts_projected(&$seq, &$pred, &$proj);
            $crate::concept::probe::assert_permutable(&$seq);
            $crate::concept::probe::assert_truncatable(&$seq);
        };
    }};
}

/// Asserts at compile time that `mismatch` accepts these two sequences.
///
/// ```compile_fail
/// use rangeforge_core::require_mismatch;
///
/// let numbers = vec![1, 2];
/// let words = vec!["one", "two"];
/// require_mismatch!(&numbers, &words); // comparator must accept the projected values
/// ```
#[macro_export]
macro_rules! require_mismatch {
    ($s1:expr, $s2:expr $(,)?) => {
        $crate::require_mismatch!(
            $s1,
            $s2,
            $crate::functional::EqualTo,
            $crate::functional::Identity,
            $crate::functional::Identity
        )
    };
    ($s1:expr, $s2:expr, $pred:expr $(,)?) => {
        $crate::require_mismatch!(
            $s1,
            $s2,
            $pred,
            $crate::functional::Identity,
            $crate::functional::Identity
        )
    };
    ($s1:expr, $s2:expr, $pred:expr, $proj1:expr, $proj2:expr $(,)?) => {{
        let _ = || {
            $crate::concept::probe::assert_sequence_traversable(&$s1);
            $crate::concept::probe::assert_sequence_traversable(&$s2);
            $crate::concept::probe::assert_projection_accepts_item(&$s1, &$proj1);
            $crate::concept::probe::assert_projection_accepts_item(&$s2, &$proj2);
            $crate::concept::probe::assert_comparator_accepts_both(
                &$s1, &$s2, &$pred, &$proj1, &$proj2,
            );
        };
    }};
}

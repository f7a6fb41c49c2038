//! RangeForge - Generic Sequence Algorithms in Rust
//!
//! Algorithms over cursor/sentinel pairs and whole sequences, actions that
//! take a container by value and hand it back, and diagnostics that list
//! every capability a call is missing.
//!
//! # Example
//!
//! ```rust
//! use rangeforge::prelude::*;
//!
//! let mut values = vec![3, 1, 2];
//! SORT.sequence(&mut values);
//! assert_eq!(values, vec![1, 2, 3]);
//!
//! let odd = vec![1, 2, 3, 4, 5].act(action::REMOVE_IF.bind(|x: &i32| x % 2 == 0));
//! assert_eq!(odd, vec![1, 3, 5]);
//!
//! let report = diagnose_sort!(vec![String::new()], |a: &u8, b: &u8| a < b);
//! assert_eq!(report.unmet(), &[Requirement::ComparatorAcceptsProjected]);
//! ```

pub mod logging;

// Derive macro
pub use rangeforge_macros::Sequence;

// Cursors, callables, requirements and results
pub use rangeforge_core::{concept, cursor, error, functional, result};
pub use rangeforge_core::{
    by_mut, by_ref, member, EqualTo, Greater, Identity, InInResult, InOutResult, Less,
    RangeForgeError, Requirement, RequirementReport,
};

// Diagnostic and static-assertion macros
pub use rangeforge_core::{
    diagnose_mismatch, diagnose_remove_if, diagnose_sort, diagnose_transform, require_mismatch,
    require_remove_if, require_sort, require_transform,
};

// Algorithms and actions
pub use rangeforge_algorithm::action;
pub use rangeforge_algorithm::{
    BoundRemoveIf, Collect, FindIf, Mismatch, RemoveIf, Sort, Transform, FIND_IF, MISMATCH,
    REMOVE_IF, SORT, TRANSFORM,
};

// Tuning
pub use rangeforge_config::{AlgorithmConfig, ConfigError, PivotStrategy, SortConfig};

pub mod prelude {
    pub use super::action::{self, ActionExt, BoundAction, UnaryAction};
    pub use super::cursor::{
        Container, Cursor, ForwardContainer, ForwardCursor, Indexed, Permutable,
        PermutableContainer, Readable, Sentinel, Sequence, Truncate, Unreachable, Writable,
        WritableContainer,
    };
    pub use super::functional::{Predicate, Projection, Relation, UnaryFunction};
    pub use super::Sequence;
    pub use super::{by_mut, by_ref, member, EqualTo, Greater, Identity, Less};
    pub use super::{
        diagnose_mismatch, diagnose_remove_if, diagnose_sort, diagnose_transform, require_mismatch,
        require_remove_if, require_sort, require_transform,
    };
    pub use super::{Requirement, RequirementReport};
    pub use super::{FIND_IF, MISMATCH, REMOVE_IF, SORT, TRANSFORM};
}

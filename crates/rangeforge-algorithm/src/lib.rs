//! RangeForge Algorithms
//!
//! This crate provides the algorithm and action functors:
//! - `mismatch`, `find_if`, `remove_if`, `sort` and `transform` over
//!   cursor/sentinel pairs and whole sequences
//! - Actions that take a container by value, mutate it and return it
//! - Binding of secondary arguments and action pipelines
//!
//! Every algorithm is a stateless unit struct with a `const` instance, so
//! `SORT.sequence(&mut v)` and `SORT.call(first, last)` share one body.
//!
//! # Example
//!
//! ```
//! use rangeforge_algorithm::{MISMATCH, REMOVE_IF, SORT};
//! use rangeforge_core::cursor::Indexed;
//!
//! let mut values = vec![5, 2, 8, 3];
//! SORT.sequence(&mut values);
//! assert_eq!(values, vec![2, 3, 5, 8]);
//!
//! let end = REMOVE_IF.sequence(&mut values, |x: &i32| *x > 4).index();
//! assert_eq!(&values[..end], &[2, 3]);
//!
//! let found = MISMATCH.sequences(&[1, 2, 3], &[1, 2, 4]);
//! assert_eq!(found.in1.index(), 2);
//! ```

pub mod action;
mod find_if;
mod mismatch;
mod remove_if;
mod sort;
mod transform;

pub use action::{ActionExt, BoundAction, Pipeline, UnaryAction};
pub use find_if::{FindIf, FIND_IF};
pub use mismatch::{Mismatch, MISMATCH};
pub use remove_if::{BoundRemoveIf, RemoveIf, REMOVE_IF};
pub use sort::{Sort, SORT};
pub use transform::{Collect, Transform, TRANSFORM};

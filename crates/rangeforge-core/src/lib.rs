//! RangeForge Core - Cursors, projections and capability traits
//!
//! This crate provides the fundamental abstractions for RangeForge:
//! - Cursor and sentinel traits for walking arbitrary sequences
//! - Projection, predicate and relation traits with uniform invocation
//! - Capability requirements with structured diagnostics
//! - Result aggregates for algorithms returning several cursors

pub mod concept;
pub mod cursor;
pub mod error;
pub mod functional;
pub mod result;

pub use concept::{Requirement, RequirementReport};
pub use cursor::{
    Container, Cursor, ForwardContainer, ForwardCursor, Indexed, InputCursor, InputEnd,
    InputSequence, Iota, Permutable, PermutableContainer, Readable, Sentinel, Sequence,
    SliceCursor, SliceCursorMut, Truncate, Unreachable, Writable, WritableContainer,
};
pub use error::RangeForgeError;
pub use functional::{
    by_mut, by_ref, member, EqualTo, Greater, Identity, Less, Member, Predicate, Projection, Ref,
    RefMut, Relation, UnaryFunction,
};
pub use result::{InInResult, InOutResult};

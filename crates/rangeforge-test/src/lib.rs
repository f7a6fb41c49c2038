//! Shared test fixtures for RangeForge crates.
//!
//! This crate provides containers, records and instrumented callables for
//! testing algorithms and their diagnostics.
//!
//! - [`container`] - Containers with deliberately limited capabilities
//! - [`employee`] - Record type for projection tests
//! - [`projection`] - Projections that record how they were called
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! rangeforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use rangeforge_test::container::{FrozenVec, SinglePassVec};
//! use rangeforge_test::employee::{employees, Employee};
//! ```

pub mod container;
pub mod employee;
pub mod projection;

// Re-export commonly used types at crate root for convenience
pub use container::{FrozenVec, SinglePassCursor, SinglePassEnd, SinglePassVec};
pub use employee::{employees, Employee};
pub use projection::RecordingProjection;

//! Named capability requirements and the report listing the unmet ones.

use std::fmt;

use tracing::debug;

use crate::error::RangeForgeError;

/// A single capability an algorithm or action needs from its arguments.
///
/// Each requirement carries the fixed message shown to callers when it is
/// not met. The same text is attached to the corresponding capability trait,
/// so a failed bound on the real path and an entry in a
/// [`RequirementReport`] read the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Cursors of the sequence can be cloned and revisited.
    ForwardTraversable,
    /// Cursors of the sequence can be advanced and read.
    Traversable,
    /// The projection accepts the element type.
    ProjectionAcceptsElement,
    /// The comparator accepts two projected values.
    ComparatorAcceptsProjected,
    /// The predicate accepts a projected value.
    PredicateAcceptsProjected,
    /// The function accepts a projected value.
    FunctionAcceptsProjected,
    /// The function result can be stored back through the cursor.
    ResultWritable,
    /// Elements can be exchanged in place through the cursor.
    Permutable,
    /// The container can drop its trailing elements.
    Truncatable,
}

impl Requirement {
    /// Returns the message shown when the requirement is not met.
    pub const fn message(self) -> &'static str {
        match self {
            Requirement::ForwardTraversable => "sequence must be forward-traversable",
            Requirement::Traversable => "sequence must be traversable",
            Requirement::ProjectionAcceptsElement => "projection must accept the element type",
            Requirement::ComparatorAcceptsProjected => {
                "comparator must accept the projected values"
            }
            Requirement::PredicateAcceptsProjected => "predicate must accept the projected value",
            Requirement::FunctionAcceptsProjected => "function must accept the projected value",
            Requirement::ResultWritable => {
                "function result must be writable back into the sequence"
            }
            Requirement::Permutable => "elements must be permutable",
            Requirement::Truncatable => "container must be truncatable",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of checking every requirement of one operation.
///
/// Built by the `diagnose_*!` macros. Every requirement is evaluated on its
/// own, so the report lists all unmet requirements at once, in the order
/// they were checked.
///
/// # Example
///
/// ```
/// use rangeforge_core::concept::{Requirement, RequirementReport};
///
/// let report = RequirementReport::new("sort")
///     .check(Requirement::ForwardTraversable, true)
///     .check(Requirement::Permutable, false);
///
/// assert!(!report.is_satisfied());
/// assert_eq!(report.unmet(), &[Requirement::Permutable]);
/// assert_eq!(report.to_string(), "`sort` requirements not met: elements must be permutable");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementReport {
    operation: &'static str,
    checked: usize,
    unmet: Vec<Requirement>,
}

impl RequirementReport {
    /// Creates an empty report for `operation`.
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            checked: 0,
            unmet: Vec::new(),
        }
    }

    /// Records the outcome of one requirement.
    pub fn check(mut self, requirement: Requirement, holds: bool) -> Self {
        self.checked += 1;
        if !holds {
            self.unmet.push(requirement);
        }
        self
    }

    /// Returns the name of the checked operation.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Returns how many requirements were checked.
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Returns true if every checked requirement holds.
    pub fn is_satisfied(&self) -> bool {
        self.unmet.is_empty()
    }

    /// Returns the unmet requirements in check order.
    pub fn unmet(&self) -> &[Requirement] {
        &self.unmet
    }

    /// Returns true if `requirement` was checked and found unmet.
    pub fn is_unmet(&self, requirement: Requirement) -> bool {
        self.unmet.contains(&requirement)
    }

    /// Returns the messages of the unmet requirements.
    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.unmet.iter().map(|r| r.message())
    }

    /// Converts the report into a `Result`, failing if anything is unmet.
    ///
    /// # Errors
    ///
    /// Returns [`RangeForgeError::UnmetRequirements`] carrying the report.
    pub fn into_result(self) -> Result<(), RangeForgeError> {
        if self.is_satisfied() {
            return Ok(());
        }
        debug!(
            operation = self.operation,
            unmet = self.unmet.len(),
            checked = self.checked,
            "Capability requirements not met"
        );
        Err(RangeForgeError::UnmetRequirements(self))
    }
}

impl fmt::Display for RequirementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_satisfied() {
            return write!(f, "`{}` requirements met", self.operation);
        }
        write!(f, "`{}` requirements not met: ", self.operation)?;
        for (i, requirement) in self.unmet.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(requirement.message())?;
        }
        Ok(())
    }
}

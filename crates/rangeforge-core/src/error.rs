//! Error types for RangeForge

use thiserror::Error;

use crate::concept::RequirementReport;

/// Main error type for RangeForge operations
#[derive(Debug, Error)]
pub enum RangeForgeError {
    /// One or more capability requirements are not met by the argument types
    #[error("{0}")]
    UnmetRequirements(RequirementReport),

    /// Algorithm tuning rejected during validation
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}

impl From<RequirementReport> for RangeForgeError {
    fn from(report: RequirementReport) -> Self {
        RangeForgeError::UnmetRequirements(report)
    }
}

/// Result type alias for RangeForge operations
pub type Result<T> = std::result::Result<T, RangeForgeError>;

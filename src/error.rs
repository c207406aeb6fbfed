//! Error types for NACHA file construction.

use thiserror::Error;

/// Result type alias for setter and builder operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A rejected field value.
///
/// Every setter validates before storing, so a returned error means the
/// model was left unchanged. The `field` names the NACHA field as it appears
/// in the format specification; `constraint` describes what was violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    /// NACHA field name, e.g. "ServiceClassCode"
    pub field: &'static str,

    /// Human-readable constraint, e.g. "must be 200, 220, or 225"
    pub constraint: String,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, constraint: impl Into<String>) -> Self {
        ValidationError {
            field,
            constraint: constraint.into(),
        }
    }
}

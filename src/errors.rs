//! Error types for fabric model operations

use thiserror::Error;

/// Errors that can occur while constructing or validating fabric entities
///
/// Every kind is recoverable by the caller; none are fatal to the process.
/// Validation failures are raised synchronously to the immediate caller and
/// are never logged or swallowed inside the model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FabricError {
    /// A field's value (or an element of a list-valued field) is outside
    /// its closed set
    #[error("{field}('{value}') must be one of [{allowed}]")]
    InvalidEnumValue {
        field: String,
        value: String,
        allowed: String,
    },

    /// One or more required pod fields are absent; every missing field is
    /// named in a single aggregated report
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequiredField(Vec<String>),

    /// One or more prefix fields failed CIDR parsing, aggregated by field name
    #[error("invalid IP prefix format: {}", .0.join(", "))]
    InvalidAddressFormat(Vec<String>),

    /// A numeric field is outside its permitted range
    #[error("{field}({value}) must be between {min} and {max}")]
    InvalidRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The persistence layer would duplicate an existing row
    #[error("unique constraint violation: {0}")]
    UniqueConstraintViolation(String),

    /// The credential cipher could not encrypt, decrypt or hash its input
    #[error("cipher failure: {0}")]
    CipherFailure(String),
}

/// Result type for fabric model operations
pub type FabricResult<T> = Result<T, FabricError>;

// models/src/errors.rs

use std::io;
pub use thiserror::Error;

use crate::identifiers::Identifier;
use crate::medical::EntityKind;

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no {kind} found with ID: {id}")]
    NotFound { kind: EntityKind, id: String },

    // Referential integrity failure on prescription insert.
    #[error("{kind} with ID {id} does not exist")]
    MissingReference { kind: EntityKind, id: Identifier },

    #[error("{kind} {id} is still referenced by {references} record(s)")]
    InUse { kind: EntityKind, id: Identifier, references: usize },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl TrackingError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        TrackingError::NotFound { kind, id: id.into() }
    }

    /// True for outcomes the caller should report rather than treat as fatal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackingError::NotFound { .. })
    }
}

/// A validation error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty or whitespace only.
    #[error("{entity} {field} cannot be empty")]
    EmptyField { entity: EntityKind, field: &'static str },
    /// A numeric field that must be strictly positive was zero or negative.
    #[error("{entity} {field} must be a positive value (got {value})")]
    NotPositive { entity: EntityKind, field: &'static str, value: i64 },
    /// A numeric field that must not be negative was negative.
    #[error("{entity} {field} cannot be negative (got {value})")]
    Negative { entity: EntityKind, field: &'static str, value: i64 },
    /// A numeric field does not fit the stored representation.
    #[error("{entity} {field} is out of range (got {value})")]
    OutOfRange { entity: EntityKind, field: &'static str, value: i64 },
    /// An identifier is empty or whitespace only.
    #[error("identifier cannot be empty")]
    InvalidIdentifier,
    /// An invalid date format was provided.
    #[error("invalid date format: {0} (expected yyyy-MM-dd)")]
    InvalidDateFormat(String),
}

/// A type alias for a `Result` that returns a `TrackingError` on failure.
pub type TrackingResult<T> = Result<T, TrackingError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;

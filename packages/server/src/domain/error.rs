//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Identifier is not a decimal integer
    #[error("{kind} must be a decimal integer (got: {raw:?})")]
    IdInvalidFormat { kind: &'static str, raw: String },

    /// Identifier is zero or negative
    #[error("{kind} must be positive (got: {value})")]
    IdNotPositive { kind: &'static str, value: i64 },
}

/// Errors raised by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A referenced row does not exist
    #[error("{entity} references missing {referenced} {id}")]
    ForeignKeyViolation {
        entity: &'static str,
        referenced: &'static str,
        id: i32,
    },

    /// A one-to-one relation already has a row
    #[error("{entity} already exists for {owner} {id}")]
    UniqueViolation {
        entity: &'static str,
        owner: &'static str,
        id: i32,
    },

    /// Identifier sequence ran out of positive values
    #[error("identifier sequence for {0} is exhausted")]
    SequenceExhausted(&'static str),

    /// The backing store could not serve the request
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures (malformed identity,
/// guarded mutation). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. empty or blank).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A resolved field name has no backing field on the target type.
    ///
    /// This is a programming error at the call site (unsupported accessor),
    /// not a user-input error.
    #[error("no field named `{0}`")]
    FieldNotFound(String),

    /// The field exists but is declared immutable (e.g. identity).
    #[error("field `{0}` is immutable")]
    ImmutableField(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn field_not_found(name: impl Into<String>) -> Self {
        Self::FieldNotFound(name.into())
    }

    pub fn immutable_field(name: impl Into<String>) -> Self {
        Self::ImmutableField(name.into())
    }
}

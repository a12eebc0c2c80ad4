//! Value object error model.

use thiserror::Error;

/// Result type used across the value object layer.
pub type ValueObjectResult<T> = Result<T, ValueObjectError>;

/// Value object error.
///
/// Both kinds are deterministic: retrying the same call yields the same error,
/// and a failed call leaves the instance table untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// A raw input was not an acceptable scalar, or a refinement rejected it.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// An operation the value object layer does not support.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

impl ValueObjectError {
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }
}

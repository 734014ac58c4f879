//! Error type shared by every fallible quantity operation.

use thiserror::Error;

/// Errors raised when a precondition of a quantity or unit operation is violated.
///
/// There is a single kind: every failure in this crate is an invalid argument
/// detected synchronously at the call site. Floating point edge cases such as
/// division by zero are not errors and propagate as `inf`/`NaN`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// An argument violated the documented precondition of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl QuantityError {
    /// Create an [`QuantityError::InvalidArgument`] from any message.
    ///
    /// # Arguments
    /// * `message` - Description of the violated precondition
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Human-readable message without the error kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) => msg,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, QuantityError>;

//! Small argument-checking helpers used by the unit constructors.

use crate::error::{QuantityError, Result};

/// Unwrap a required value or fail with [`QuantityError::InvalidArgument`].
///
/// # Errors
/// Returns `InvalidArgument(message)` when `value` is `None`.
#[inline]
pub fn require<T>(value: Option<T>, message: &str) -> Result<T> {
    require_with(value, || QuantityError::invalid_argument(message))
}

/// Unwrap a required value or fail with an error built by `err`.
///
/// # Errors
/// Returns the error produced by `err` when `value` is `None`.
#[inline]
pub fn require_with<T, E, F>(value: Option<T>, err: F) -> std::result::Result<T, E>
where
    F: FnOnce() -> E,
{
    value.ok_or_else(err)
}

/// True when `text` contains at least one non-whitespace character.
#[inline]
pub fn has_text(text: &str) -> bool {
    !text.trim().is_empty()
}

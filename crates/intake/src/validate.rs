//! Reusable field predicates.
//!
//! Each form composes these into one explicit validation function, checking
//! fields in declaration order so the first reported violation is stable.

use crate::error::{FieldError, FieldErrorKind};

/// Require a non-blank value.
///
/// # Errors
///
/// Returns [`FieldErrorKind::Missing`] when `value` is empty or whitespace.
pub fn required(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError {
            field,
            kind: FieldErrorKind::Missing,
        });
    }
    Ok(())
}

/// Require a plausible email shape: `local@domain`, with a dot in the domain.
///
/// This is deliberately shallow - deliverability is not an intake concern.
///
/// # Errors
///
/// Returns [`FieldErrorKind::InvalidEmail`] when the shape does not hold.
pub fn email(field: &'static str, value: &str) -> Result<(), FieldError> {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(FieldError {
            field,
            kind: FieldErrorKind::InvalidEmail,
        });
    }
    Ok(())
}

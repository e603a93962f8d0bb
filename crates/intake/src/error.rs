//! Intake error types.
//!
//! Every rejection is a typed variant carrying the context a caller needs to
//! point the user at the problem. Errors surface on first occurrence; the
//! pipeline never aggregates violations or retries.

use paloma_core::ObjectIdError;
use thiserror::Error;

/// Errors produced while validating and binding an order submission.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// A product reference is not a well-formed object id.
    #[error("product id `{submitted}` is not a valid object id")]
    InvalidProductId {
        /// The value as submitted.
        submitted: String,
        /// What the identifier parser rejected.
        #[source]
        source: ObjectIdError,
    },

    /// A required or formatted field failed validation.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// The submitted state/city pair is not a recognized combination.
    #[error("unknown location: {city}, {state}")]
    UnknownLocation {
        /// Submitted state.
        state: String,
        /// Submitted city.
        city: String,
    },

    /// The payment selection could not be parsed or is not available.
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

/// A single field-level validation failure.
#[derive(Debug, Error)]
#[error("field `{field}` {kind}")]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: &'static str,
    /// What rule the value broke.
    pub kind: FieldErrorKind,
}

/// The rule a field value violated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The field is required but empty or missing.
    #[error("is required")]
    Missing,
    /// The value is not a plausible email address.
    #[error("must be a valid email address")]
    InvalidEmail,
}

/// Errors from decoding and validating a payment selection.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The embedded payment payload could not be decoded.
    #[error("payment parameter error: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Online payment was chosen but the store has it disabled.
    #[error("online payment is not enabled for this store")]
    OnlineDisabled,

    /// Online payment was chosen without a gateway reference.
    #[error("online payment requires a gateway reference")]
    MissingGateway,

    /// A manually settled method was chosen but the store has it disabled.
    #[error("coordinated payment is not enabled for this store")]
    CoordinatedDisabled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FieldError {
            field: "postal_code",
            kind: FieldErrorKind::Missing,
        };
        assert_eq!(err.to_string(), "field `postal_code` is required");

        let err = FieldError {
            field: "email",
            kind: FieldErrorKind::InvalidEmail,
        };
        assert_eq!(
            err.to_string(),
            "field `email` must be a valid email address"
        );
    }

    #[test]
    fn test_intake_error_display() {
        let err = IntakeError::UnknownLocation {
            state: "Bavaria".to_string(),
            city: "Atlantis".to_string(),
        };
        assert_eq!(err.to_string(), "unknown location: Atlantis, Bavaria");
    }

    #[test]
    fn test_payment_error_wraps_into_intake_error() {
        let err = IntakeError::from(PaymentError::MissingGateway);
        assert_eq!(
            err.to_string(),
            "online payment requires a gateway reference"
        );
    }
}

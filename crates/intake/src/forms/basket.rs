//! Basket mutation intake.

use paloma_core::ObjectId;
use serde::Deserialize;

use crate::error::IntakeError;
use crate::validate;

/// A single basket mutation posted from product or basket pages.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BasketItemSubmission {
    /// Product reference as submitted.
    pub product: String,
    pub count: u32,
    /// Remove the line instead of adding to it.
    pub delete: bool,
    pub in_basket: bool,
    /// Raw variant selection, passed through to the basket layer.
    pub variants: String,
    pub email: String,
}

impl BasketItemSubmission {
    /// Check required fields, then the product reference.
    ///
    /// The email is optional on basket mutations; its shape is only checked
    /// when one was submitted.
    ///
    /// # Errors
    ///
    /// Returns the first field violation, or
    /// [`IntakeError::InvalidProductId`] when the reference is malformed.
    pub fn validate(&self) -> Result<(), IntakeError> {
        validate::required("product", &self.product)?;
        if !self.email.is_empty() {
            validate::email("email", &self.email)?;
        }
        ObjectId::parse(&self.product).map_err(|source| IntakeError::InvalidProductId {
            submitted: self.product.clone(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FieldErrorKind;

    #[test]
    fn test_valid_submission_passes() {
        let submission = BasketItemSubmission {
            product: "5a0c96d2ab3f1b0001e4c0f2".to_string(),
            count: 2,
            ..BasketItemSubmission::default()
        };
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_missing_product_is_reported_before_id_check() {
        let err = BasketItemSubmission::default().validate().unwrap_err();
        match err {
            IntakeError::Field(field) => {
                assert_eq!(field.field, "product");
                assert_eq!(field.kind, FieldErrorKind::Missing);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_submitted_email_must_be_well_formed() {
        let submission = BasketItemSubmission {
            product: "5a0c96d2ab3f1b0001e4c0f2".to_string(),
            email: "not-an-email".to_string(),
            ..BasketItemSubmission::default()
        };
        match submission.validate().unwrap_err() {
            IntakeError::Field(field) => {
                assert_eq!(field.field, "email");
                assert_eq!(field.kind, FieldErrorKind::InvalidEmail);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_product_reference_is_rejected() {
        let submission = BasketItemSubmission {
            product: "shiny-mug".to_string(),
            ..BasketItemSubmission::default()
        };
        assert!(matches!(
            submission.validate(),
            Err(IntakeError::InvalidProductId { .. })
        ));
    }
}

//! Payment selection intake.

use chrono::Utc;
use paloma_core::PaymentKind;
use serde::Deserialize;
use tracing::warn;

use crate::config::PaymentCapabilities;
use crate::error::PaymentError;
use crate::models::Payment;

/// The payment selection embedded in a checkout submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaymentSubmission {
    /// Numeric method code; see [`PaymentKind::from_code`].
    #[serde(rename = "type")]
    pub type_code: u8,
    /// Settlement note for manually settled methods.
    pub description: String,
    /// Gateway reference; required for online payments.
    pub webgate: String,
    /// Discount code, if the customer applied one.
    #[serde(rename = "code")]
    pub discount_code: String,
}

impl PaymentSubmission {
    /// Decode a payment payload posted as an embedded JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::Malformed`] when the payload does not decode.
    pub fn load(raw: &str) -> Result<Self, PaymentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Check the selection against what the store has enabled.
    ///
    /// Online payments require the online capability and a gateway
    /// reference; every other method requires the coordinated capability.
    /// Description and gateway text are only checked for presence.
    ///
    /// # Errors
    ///
    /// Returns the matching [`PaymentError`] variant on the first failed check.
    pub fn validate(&self, capabilities: &PaymentCapabilities) -> Result<(), PaymentError> {
        match PaymentKind::from_code(self.type_code) {
            PaymentKind::Online => {
                if !capabilities.online_enabled {
                    return Err(PaymentError::OnlineDisabled);
                }
                if self.webgate.is_empty() {
                    return Err(PaymentError::MissingGateway);
                }
                Ok(())
            }
            PaymentKind::Courier | PaymentKind::Coordinated => {
                if capabilities.coordinated_enabled {
                    Ok(())
                } else {
                    Err(PaymentError::CoordinatedDisabled)
                }
            }
        }
    }

    /// Decode and validate in one step.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Self::load`] or [`Self::validate`].
    pub fn load_and_validate(
        raw: &str,
        capabilities: &PaymentCapabilities,
    ) -> Result<Self, PaymentError> {
        let submission = Self::load(raw)?;
        if let Err(err) = submission.validate(capabilities) {
            warn!(code = submission.type_code, error = %err, "payment selection rejected");
            return Err(err);
        }
        Ok(submission)
    }

    /// Build the payment block selected by the submitted type code.
    ///
    /// Codes 2 and 3 select online and courier payment; anything else falls
    /// through to coordinated settlement. The creation timestamp is taken
    /// from the wall clock here, at bind time.
    #[must_use]
    pub fn to_payment(&self) -> Payment {
        let created_at = Utc::now();
        match PaymentKind::from_code(self.type_code) {
            PaymentKind::Online => Payment::Online {
                webgate: self.webgate.clone(),
                created_at,
            },
            PaymentKind::Courier => Payment::Courier {
                description: self.description.clone(),
                created_at,
            },
            PaymentKind::Coordinated => Payment::Coordinated {
                description: self.description.clone(),
                created_at,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn online(webgate: &str) -> PaymentSubmission {
        PaymentSubmission {
            type_code: 2,
            webgate: webgate.to_string(),
            ..PaymentSubmission::default()
        }
    }

    #[test]
    fn test_load_decodes_payload() {
        let submission =
            PaymentSubmission::load(r#"{"type": 2, "webgate": "gw-1", "code": "SUMMER"}"#).unwrap();
        assert_eq!(submission.type_code, 2);
        assert_eq!(submission.webgate, "gw-1");
        assert_eq!(submission.discount_code, "SUMMER");
    }

    #[test]
    fn test_load_rejects_malformed_payload() {
        let err = PaymentSubmission::load("{not json").unwrap_err();
        assert!(matches!(err, PaymentError::Malformed(_)));
    }

    #[test]
    fn test_online_requires_gateway_reference() {
        // Store has online payment enabled but the reference is missing.
        let err = online("").validate(&PaymentCapabilities::all()).unwrap_err();
        assert!(matches!(err, PaymentError::MissingGateway));
    }

    #[test]
    fn test_online_requires_store_capability() {
        let capabilities = PaymentCapabilities {
            online_enabled: false,
            coordinated_enabled: true,
        };
        let err = online("gw-1").validate(&capabilities).unwrap_err();
        assert!(matches!(err, PaymentError::OnlineDisabled));
    }

    #[test]
    fn test_online_accepted_when_enabled_with_gateway() {
        assert!(online("gw-1").validate(&PaymentCapabilities::all()).is_ok());
    }

    #[test]
    fn test_courier_and_default_require_coordinated_capability() {
        let disabled = PaymentCapabilities {
            online_enabled: true,
            coordinated_enabled: false,
        };
        for code in [0, 1, 3, 99] {
            let submission = PaymentSubmission {
                type_code: code,
                ..PaymentSubmission::default()
            };
            assert!(matches!(
                submission.validate(&disabled),
                Err(PaymentError::CoordinatedDisabled)
            ));
            assert!(submission.validate(&PaymentCapabilities::all()).is_ok());
        }
    }

    #[test]
    fn test_load_and_validate_combines_both_steps() {
        let capabilities = PaymentCapabilities::all();
        assert!(PaymentSubmission::load_and_validate(
            r#"{"type": 2, "webgate": "gw-1"}"#,
            &capabilities
        )
        .is_ok());
        assert!(matches!(
            PaymentSubmission::load_and_validate(r#"{"type": 2}"#, &capabilities),
            Err(PaymentError::MissingGateway)
        ));
        assert!(matches!(
            PaymentSubmission::load_and_validate("{not json", &capabilities),
            Err(PaymentError::Malformed(_))
        ));
    }

    #[test]
    fn test_to_payment_dispatches_on_code() {
        let online = online("gw-1").to_payment();
        assert!(matches!(online, Payment::Online { ref webgate, .. } if webgate == "gw-1"));

        let courier = PaymentSubmission {
            type_code: 3,
            description: "leave at door".to_string(),
            ..PaymentSubmission::default()
        }
        .to_payment();
        assert!(
            matches!(courier, Payment::Courier { ref description, .. } if description == "leave at door")
        );

        // Unrecognized positive codes fall through to coordinated settlement.
        let fallback = PaymentSubmission {
            type_code: 99,
            ..PaymentSubmission::default()
        }
        .to_payment();
        assert!(matches!(fallback, Payment::Coordinated { .. }));
    }
}

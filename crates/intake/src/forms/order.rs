//! Order submission intake: line items and the binding orchestrator.

use paloma_core::ObjectId;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::IntakeError;
use crate::forms::{AddressSubmission, PaymentSubmission};
use crate::models::{BillingInfo, LineItem, Order, ShippingInfo};

/// A single requested order line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LineItemSubmission {
    /// Product reference as submitted.
    #[serde(rename = "id")]
    pub product: String,
    pub count: u32,
    /// Chosen option variants, in submission order.
    #[serde(rename = "variant")]
    pub variants: Vec<String>,
}

impl LineItemSubmission {
    /// Validate the product reference and normalize the count.
    ///
    /// A submitted count of zero means "unspecified" and becomes 1; any
    /// other count passes through unchanged. The submission is left
    /// untouched; the accepted line comes back as a fresh value, so
    /// normalizing an already-normalized line is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidProductId`] when the product reference
    /// is not a well-formed object id.
    pub fn normalize(&self) -> Result<LineItem, IntakeError> {
        let product =
            ObjectId::parse(&self.product).map_err(|source| IntakeError::InvalidProductId {
                submitted: self.product.clone(),
                source,
            })?;

        Ok(LineItem {
            product,
            count: if self.count == 0 { 1 } else { self.count },
            variants: self.variants.clone(),
        })
    }
}

/// A complete order submission as posted at checkout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderSubmission {
    pub items: Vec<LineItemSubmission>,
    pub billing_info: AddressSubmission,
    pub shipping_info: AddressSubmission,
    pub payment: PaymentSubmission,
    /// Store credit the customer chose to apply; consumed by the pricing
    /// layer, not by intake.
    pub credit: f32,
    /// Saved-address reference, resolved by the caller.
    pub address: String,
}

impl OrderSubmission {
    /// Bind the submission into a domain [`Order`].
    ///
    /// Items are taken one at a time and intake stops at the first invalid
    /// one, so no partially accepted order escapes. Billing info is always
    /// populated; shipping info only when the billing address says the
    /// order ships. The payment block is chosen by the submitted type code.
    ///
    /// Payment availability and address field rules are not re-checked
    /// here; they are validated upstream by [`PaymentSubmission`] and the
    /// billing/shipping form validators.
    ///
    /// # Errors
    ///
    /// Returns the first line-item validation failure.
    #[instrument(skip(self), fields(item_count = self.items.len()))]
    pub fn bind(&self) -> Result<Order, IntakeError> {
        let items = self
            .items
            .iter()
            .map(LineItemSubmission::normalize)
            .collect::<Result<Vec<_>, _>>()?;

        let billing = BillingInfo {
            address: self.billing_info.bind(),
        };
        let shipping = billing.address.shipping.then(|| ShippingInfo {
            address: self.shipping_info.bind(),
        });
        let payment = self.payment.to_payment();

        debug!(
            payment = %payment.kind(),
            ships = shipping.is_some(),
            "order submission bound"
        );
        Ok(Order {
            items,
            billing,
            shipping,
            payment,
        })
    }
}

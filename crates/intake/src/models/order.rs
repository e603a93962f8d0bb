//! The domain order assembled from a validated submission.

use chrono::{DateTime, Utc};
use paloma_core::{ObjectId, PaymentKind};
use serde::{Deserialize, Serialize};

/// An accepted order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product reference, already identifier-validated.
    pub product: ObjectId,
    /// Ordered count, normalized to at least 1.
    pub count: u32,
    /// Chosen option variants, in submission order.
    pub variants: Vec<String>,
}

/// A postal address with delivery metadata.
///
/// Required fields are enforced by the form validators before an address is
/// bound; this shape itself performs no validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    pub state: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Free-text delivery note ("call on arrival").
    pub call: String,
    pub receiver_name: String,
    /// Whether the order ships to this address rather than being picked up.
    pub shipping: bool,
}

/// Billing block; always present on a bound order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingInfo {
    pub address: Address,
}

/// Shipping block; present only when the billing address says the order ships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub address: Address,
}

/// How the order will be paid.
///
/// Exactly one method applies to an order; the enum makes the other two
/// unrepresentable. Creation timestamps are taken when the order is bound,
/// so binding the same submission twice yields distinct payment attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Payment {
    /// Paid through an online gateway.
    Online {
        /// Gateway reference handed back by the payment provider.
        webgate: String,
        created_at: DateTime<Utc>,
    },
    /// Cash handed to the courier on delivery.
    Courier {
        description: String,
        created_at: DateTime<Utc>,
    },
    /// Settled manually with the store.
    Coordinated {
        description: String,
        created_at: DateTime<Utc>,
    },
}

impl Payment {
    /// The method family of this payment block.
    #[must_use]
    pub const fn kind(&self) -> PaymentKind {
        match self {
            Self::Online { .. } => PaymentKind::Online,
            Self::Courier { .. } => PaymentKind::Courier,
            Self::Coordinated { .. } => PaymentKind::Coordinated,
        }
    }
}

/// A fully bound order, ready for the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub items: Vec<LineItem>,
    pub billing: BillingInfo,
    pub shipping: Option<ShippingInfo>,
    pub payment: Payment,
}

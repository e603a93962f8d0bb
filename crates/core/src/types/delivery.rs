//! Delivery method selection.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How an order leaves the store.
///
/// Checkout forms select the method by numeric code. Codes 2 and 4 are the
/// postal-service tiers; every other code, including an unset 0, resolves to
/// courier dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    Postal,
    #[default]
    Courier,
}

impl DeliveryMethod {
    /// Resolve a submitted send-way code to a delivery method.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            2 | 4 => Self::Postal,
            _ => Self::Courier,
        }
    }

    /// Human-readable label shown on checkout forms and receipts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Postal => "postal",
            Self::Courier => "courier",
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

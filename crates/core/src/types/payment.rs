//! Payment method selection.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Payment method families supported at checkout.
///
/// Selected by numeric code: 2 is an online gateway payment, 3 is
/// cash-to-courier on delivery, and any other code, including an unset 0,
/// resolves to coordinated (manual) settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Online,
    Courier,
    #[default]
    Coordinated,
}

impl PaymentKind {
    /// Resolve a submitted payment-type code.
    ///
    /// Unrecognized codes deliberately fall through to [`Self::Coordinated`];
    /// whether a method is actually available for a store is checked
    /// separately against its payment capabilities.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            2 => Self::Online,
            3 => Self::Courier,
            _ => Self::Coordinated,
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Courier => write!(f, "courier"),
            Self::Coordinated => write!(f, "coordinated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(PaymentKind::from_code(2), PaymentKind::Online);
        assert_eq!(PaymentKind::from_code(3), PaymentKind::Courier);
    }

    #[test]
    fn test_unrecognized_codes_fall_through() {
        assert_eq!(PaymentKind::from_code(0), PaymentKind::Coordinated);
        assert_eq!(PaymentKind::from_code(1), PaymentKind::Coordinated);
        assert_eq!(PaymentKind::from_code(99), PaymentKind::Coordinated);
    }

    #[test]
    fn test_display() {
        assert_eq!(PaymentKind::Online.to_string(), "online");
        assert_eq!(PaymentKind::Courier.to_string(), "courier");
        assert_eq!(PaymentKind::Coordinated.to_string(), "coordinated");
    }
}

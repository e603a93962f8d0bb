//! Store payment configuration.

/// Payment methods a store has enabled.
///
/// Read-only, supplied by the caller from store configuration for each
/// intake call; this crate never performs the lookup itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentCapabilities {
    /// Whether the store accepts online gateway payments.
    pub online_enabled: bool,
    /// Whether the store settles payments manually (coordinated or courier).
    pub coordinated_enabled: bool,
}

impl PaymentCapabilities {
    /// Capabilities with every payment method enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            online_enabled: true,
            coordinated_enabled: true,
        }
    }
}

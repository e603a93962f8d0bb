//! Domain models produced by intake.

pub mod order;

pub use order::{Address, BillingInfo, LineItem, Order, Payment, ShippingInfo};

//! Untrusted submission shapes and their intake rules.
//!
//! Field names mirror the wire format the storefront posts, so each shape
//! deserializes straight from a form-encoded or JSON body. Validation never
//! mutates a submission; normalizing steps return a fresh copy.

pub mod address;
pub mod basket;
pub mod order;
pub mod payment;

pub use address::{AddressSubmission, BillingSubmission, ShippingSubmission};
pub use basket::BasketItemSubmission;
pub use order::{LineItemSubmission, OrderSubmission};
pub use payment::PaymentSubmission;

//! Core types for Paloma.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod delivery;
pub mod id;
pub mod payment;

pub use delivery::DeliveryMethod;
pub use id::{ObjectId, ObjectIdError};
pub use payment::PaymentKind;

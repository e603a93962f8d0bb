//! Paloma Core - Shared domain types.
//!
//! This crate provides the primitive domain types used by the Paloma
//! order-intake components:
//! - `intake` - Validation and binding of checkout submissions
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Content identifiers and the delivery/payment method enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

//! Paloma order intake library.
//!
//! Converts untrusted checkout submissions (form fields or JSON payloads)
//! into validated domain orders. HTTP routing, persistence, and store
//! configuration lookup live in the host application; this crate only
//! validates shape and assembles the order with the payment and shipping
//! branches correctly selected.
//!
//! # Pipeline
//!
//! 1. The transport layer decodes a submission shape from [`forms`].
//! 2. The payment selection is decoded and checked against the store's
//!    [`config::PaymentCapabilities`].
//! 3. Shipping/billing forms run field and location validation against a
//!    [`geo::GeoDirectory`].
//! 4. [`forms::OrderSubmission::bind`] assembles the domain
//!    [`models::Order`], failing fast on the first invalid line item.
//!
//! Every step is synchronous and stateless; the only ambient effect is
//! reading the wall clock when a payment block is stamped.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod forms;
pub mod geo;
pub mod models;
pub mod validate;

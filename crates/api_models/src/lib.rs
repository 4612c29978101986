#![forbid(unsafe_code)]

//! Wire types for the storefront HTTP surface.
//!
//! Field names follow the checkout form the frontend already submits, so the
//! serde renames here are the contract.

pub mod enums;
pub mod errors;
pub mod orders;
pub mod payments;
pub mod previews;

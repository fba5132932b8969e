//! SBOS Core - Shared types library.
//!
//! This crate provides common types used across all SBOS Store components:
//! - `storefront` - Catalog, cart, and checkout logic
//! - `integration-tests` - End-to-end checkout flow tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, quantities, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

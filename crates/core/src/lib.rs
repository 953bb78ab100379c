//! Makh Market Core - Shared types library.
//!
//! This crate provides common types used across all Makh Market components:
//! - `checkout` - Cart and delivery-scheduling domain logic
//! - the storefront and admin shells built on top of them
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and languages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

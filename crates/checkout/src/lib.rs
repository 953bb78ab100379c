//! Makh Market checkout library.
//!
//! Domain logic shared by the storefront and admin shells:
//!
//! - [`delivery`] - Next-delivery-date scheduling from the order cutoff,
//!   processing days, and the non-delivery calendar, plus localized
//!   formatting of the computed date.
//! - [`cart`] - The cart state object, per-package pricing, and the durable
//!   cart slot that carries a visitor's cart across sessions.
//!
//! The hosted backend (catalog, orders, users) and the web shells around it
//! are deliberately not here; this crate owns only the pure computations and
//! the thin persistence boundary they need.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod delivery;

//! Cart state and derived totals.
//!
//! The cart is a plain value: mutation methods consume the cart and return
//! the new state, so callers hold and pass it explicitly instead of reaching
//! into ambient shared state. [`session::CartSession`] wraps a cart together
//! with its durable slot and persists after every mutation.

use std::num::NonZeroU32;

use makh_market_core::{Price, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod session;
pub mod store;

pub use session::CartSession;
pub use store::{CartParseError, CartSlot, CartStoreError, FileCartSlot, MemoryCartSlot};

const fn default_unit_size() -> NonZeroU32 {
    NonZeroU32::MIN
}

/// A single cart line.
///
/// `quantity` is tracked in the base sales unit (kilograms for meat).
/// `unit_size` is the number of base units one `price` buys: 1 for ordinary
/// products, 4 for the 4 kg package SKU whose stored price is per package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    #[serde(default = "default_unit_size")]
    pub unit_size: NonZeroU32,
}

impl CartItem {
    /// This line's contribution to the cart total:
    /// `price × quantity / unit_size`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        let packages = Decimal::from(self.quantity) / Decimal::from(self.unit_size.get());
        Price::new(self.price.amount() * packages)
    }
}

/// The cart: at most one line per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Build a cart from already-validated lines.
    #[must_use]
    pub const fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Add a line. If the product is already in the cart, its quantity
    /// accumulates and the existing line's other fields are kept.
    #[must_use]
    pub fn add_item(mut self, item: CartItem) -> Self {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
        self
    }

    /// Set a line's quantity directly. Minimum-quantity rules live in the
    /// UI layer, not here. No-op if the product is absent.
    #[must_use]
    pub fn update_quantity(mut self, product_id: ProductId, quantity: u32) -> Self {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity;
        }
        self
    }

    /// Drop a line. No-op if the product is absent.
    #[must_use]
    pub fn remove_item(mut self, product_id: ProductId) -> Self {
        self.items.retain(|line| line.product_id != product_id);
        self
    }

    /// Empty the cart.
    #[must_use]
    pub fn clear(self) -> Self {
        Self::default()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

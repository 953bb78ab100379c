//! A cart bound to its durable slot.

use makh_market_core::{Price, ProductId};

use super::store::{CartSlot, CartStoreError, parse_cart_items};
use super::{Cart, CartItem};

/// A visitor's cart together with the slot it persists to.
///
/// Opening a session reads the slot once and rehydrates the cart; payloads
/// that fail validation are discarded and the cart starts empty, never a
/// user-facing error. Every mutation writes the full line array back.
pub struct CartSession<S: CartSlot> {
    cart: Cart,
    slot: S,
}

impl<S: CartSlot> CartSession<S> {
    /// Open a session, rehydrating the cart from the slot.
    pub fn open(slot: S) -> Self {
        let cart = match slot.read() {
            Ok(Some(raw)) => match parse_cart_items(&raw) {
                Ok(items) => Cart::from_items(items),
                Err(err) => {
                    tracing::warn!(error = %err, "discarding invalid persisted cart");
                    Cart::default()
                }
            },
            Ok(None) => Cart::default(),
            Err(err) => {
                tracing::warn!(error = %err, "cart slot unreadable, starting empty");
                Cart::default()
            }
        };

        Self { cart, slot }
    }

    /// Add a line and persist.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError`] if the slot write fails; the in-memory
    /// cart keeps the mutation either way.
    pub fn add_item(&mut self, item: CartItem) -> Result<(), CartStoreError> {
        self.apply(|cart| cart.add_item(item))
    }

    /// Set a line's quantity and persist.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError`] if the slot write fails.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), CartStoreError> {
        self.apply(|cart| cart.update_quantity(product_id, quantity))
    }

    /// Drop a line and persist.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError`] if the slot write fails.
    pub fn remove_item(&mut self, product_id: ProductId) -> Result<(), CartStoreError> {
        self.apply(|cart| cart.remove_item(product_id))
    }

    /// Empty the cart and persist.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError`] if the slot write fails.
    pub fn clear(&mut self) -> Result<(), CartStoreError> {
        self.apply(Cart::clear)
    }

    /// The current cart state.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Derived total over all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.total_price()
    }

    fn apply(
        &mut self,
        mutate: impl FnOnce(Cart) -> Cart,
    ) -> Result<(), CartStoreError> {
        self.cart = mutate(std::mem::take(&mut self.cart));
        let raw = serde_json::to_string(self.cart.items())?;
        self.slot.write(&raw)
    }
}

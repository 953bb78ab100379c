//! Durable cart persistence.
//!
//! The cart lives in a single key-value slot holding the serialized line
//! array. The slot is written on every mutation and read once when a session
//! opens; whatever comes back is validated by [`parse_cart_items`] before it
//! is trusted.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use makh_market_core::ProductId;
use thiserror::Error;

use super::CartItem;

/// Errors reading or writing the cart slot.
#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("cart storage I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("cart serialization: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Validation failures for persisted cart data.
#[derive(Debug, Error)]
pub enum CartParseError {
    #[error("invalid cart JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate cart line for product {0}")]
    DuplicateProduct(ProductId),
    #[error("negative price on product {0}")]
    NegativePrice(ProductId),
}

/// Parse and validate a persisted cart payload.
///
/// Beyond the `CartItem` shape itself, enforces the cart invariants a
/// tampered or stale payload could violate: one line per product and
/// non-negative prices. (`unit_size` is a `NonZeroU32`, so a zero package
/// size is already rejected during deserialization.)
///
/// # Errors
///
/// Returns [`CartParseError`] describing the first violation found.
pub fn parse_cart_items(raw: &str) -> Result<Vec<CartItem>, CartParseError> {
    let items: Vec<CartItem> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.product_id) {
            return Err(CartParseError::DuplicateProduct(item.product_id));
        }
        if item.price.is_negative() {
            return Err(CartParseError::NegativePrice(item.product_id));
        }
    }

    Ok(items)
}

/// A durable key-value slot for the serialized cart.
pub trait CartSlot: Send {
    /// Read the stored payload, `None` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Io`] if the backing store is unreadable.
    fn read(&self) -> Result<Option<String>, CartStoreError>;

    /// Replace the stored payload.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Io`] if the write fails.
    fn write(&mut self, raw: &str) -> Result<(), CartStoreError>;
}

/// Cart slot backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileCartSlot {
    path: PathBuf,
}

impl FileCartSlot {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartSlot for FileCartSlot {
    fn read(&self) -> Result<Option<String>, CartStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, raw: &str) -> Result<(), CartStoreError> {
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory cart slot for tests and embedding shells that manage their own
/// durability.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartSlot {
    value: Option<String>,
}

impl MemoryCartSlot {
    /// A slot pre-seeded with a payload, as if a previous session wrote it.
    #[must_use]
    pub const fn seeded(raw: String) -> Self {
        Self { value: Some(raw) }
    }
}

impl CartSlot for MemoryCartSlot {
    fn read(&self) -> Result<Option<String>, CartStoreError> {
        Ok(self.value.clone())
    }

    fn write(&mut self, raw: &str) -> Result<(), CartStoreError> {
        self.value = Some(raw.to_string());
        Ok(())
    }
}

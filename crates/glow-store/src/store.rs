//! Cart persistence and mutation entry points.

use crate::backend::StorageBackend;
use crate::error::StoreError;
use glow_commerce::cart::{Cart, CartLine};
use glow_commerce::ProductId;
use tracing::{debug, warn};

/// Storage key carts persist under.
pub const DEFAULT_CART_KEY: &str = "cart";

/// A cart mutation, keyed by product id.
///
/// Consumers map user events to actions and push them through
/// [`CartStore::apply`]: one dispatch point instead of a separate handler
/// wired up per rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a product.
    Add(ProductId),
    /// Apply a signed quantity delta.
    Change(ProductId, i32),
    /// Set the quantity directly.
    Set(ProductId, i64),
    /// Set the quantity from free-form input text.
    SetFromInput(ProductId, String),
    /// Remove the line.
    Remove(ProductId),
    /// Empty the cart.
    Clear,
}

/// Persistent cart store.
///
/// Every mutation is load, mutate, save: the persisted line records are the
/// source of truth and the in-memory cart lives only for the duration of one
/// operation. Rejected mutations (cap exceeded, unknown id) return before the
/// save, leaving the persisted state untouched.
pub struct CartStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> CartStore<B> {
    /// Create a store over a backend, using [`DEFAULT_CART_KEY`].
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_CART_KEY)
    }

    /// Create a store with an explicit storage key.
    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// The storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted cart.
    ///
    /// A missing key is an empty cart. Unparseable contents are recovered as
    /// an empty cart with a warning; a damaged cart must not brick the
    /// storefront. Only a failing medium is an error.
    pub fn load(&self) -> Result<Cart, StoreError> {
        let bytes = self
            .backend
            .read(&self.key)
            .map_err(|e| StoreError::StorageUnavailable(e.to_string()))?;
        let Some(bytes) = bytes else {
            return Ok(Cart::new());
        };
        match serde_json::from_slice::<Vec<CartLine>>(&bytes) {
            Ok(lines) => Ok(Cart::from_lines(lines)),
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored cart is malformed, starting empty");
                Ok(Cart::new())
            }
        }
    }

    /// Persist the cart, replacing any previous state.
    pub fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(cart.lines())?;
        self.backend
            .write(&self.key, &bytes)
            .map_err(|e| StoreError::StorageUnavailable(e.to_string()))
    }

    /// Add one unit of a product, persisting the result.
    pub fn add_or_increment(&self, product_id: ProductId) -> Result<Cart, StoreError> {
        let mut cart = self.load()?;
        cart.add_or_increment(product_id)?;
        self.save(&cart)?;
        Ok(cart)
    }

    /// Apply a signed quantity delta to a line, persisting the result.
    pub fn change_quantity(&self, product_id: ProductId, delta: i32) -> Result<Cart, StoreError> {
        let mut cart = self.load()?;
        cart.change_quantity(product_id, delta)?;
        self.save(&cart)?;
        Ok(cart)
    }

    /// Set a line's quantity, persisting the result.
    pub fn set_quantity(&self, product_id: ProductId, quantity: i64) -> Result<Cart, StoreError> {
        let mut cart = self.load()?;
        cart.set_quantity(product_id, quantity)?;
        self.save(&cart)?;
        Ok(cart)
    }

    /// Set a line's quantity from free-form input text.
    ///
    /// The leading integer wins and trailing text is dropped, so "3.5" sets
    /// 3 and "12abc" sets 12. Input with no leading integer counts as 0 and
    /// removes the line, same as typing 0 or clearing the quantity box.
    pub fn set_quantity_from_input(
        &self,
        product_id: ProductId,
        raw: &str,
    ) -> Result<Cart, StoreError> {
        match leading_integer(raw) {
            Some(value) => self.set_quantity(product_id, value),
            None => {
                debug!(%product_id, input = raw, "no leading integer in quantity input, removing line");
                self.remove(product_id)
            }
        }
    }

    /// Remove a line if present. Removing an absent id is a no-op.
    pub fn remove(&self, product_id: ProductId) -> Result<Cart, StoreError> {
        let mut cart = self.load()?;
        if cart.remove(product_id) {
            self.save(&cart)?;
        } else {
            debug!(%product_id, "remove requested for product not in cart");
        }
        Ok(cart)
    }

    /// Remove all persisted cart state.
    ///
    /// Clearing an absent or empty store is a no-op.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend
            .delete(&self.key)
            .map_err(|e| StoreError::StorageUnavailable(e.to_string()))
    }

    /// Total units in the persisted cart (the badge number).
    pub fn item_count(&self) -> Result<u32, StoreError> {
        Ok(self.load()?.item_count())
    }

    /// Apply an action and return the resulting cart.
    pub fn apply(&self, action: CartAction) -> Result<Cart, StoreError> {
        match action {
            CartAction::Add(id) => self.add_or_increment(id),
            CartAction::Change(id, delta) => self.change_quantity(id, delta),
            CartAction::Set(id, quantity) => self.set_quantity(id, quantity),
            CartAction::SetFromInput(id, raw) => self.set_quantity_from_input(id, &raw),
            CartAction::Remove(id) => self.remove(id),
            CartAction::Clear => {
                self.clear()?;
                Ok(Cart::new())
            }
        }
    }
}

/// Leading optionally-signed integer of a quantity input, if any.
///
/// Trailing text, including a fractional part, is dropped: "3.5" is 3 and
/// "12abc" is 12. A digit run past i64 saturates to i64::MAX.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // digit-only by construction, so a parse error can only be overflow
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

//! Cart container and mutation rules.

use crate::cart::line::{CartLine, MAX_LINE_QUANTITY};
use crate::cart::pricing::{CartPricing, LinePricing};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::product::ProductLookup;
use serde::Serialize;

/// Outcome of a quantity mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    /// The line exists with this quantity after the mutation.
    Updated(u32),
    /// The mutation drove the quantity below 1 and the line was removed.
    Removed,
}

/// An ordered shopping cart keyed by product id.
///
/// Insertion order is display order. The container owns its invariants: at
/// most one line per product id, every quantity in `1..=MAX_LINE_QUANTITY`.
/// Lines are only reachable through the mutation methods, so an in-memory
/// cart can never hold an out-of-bounds line.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuild a cart from stored lines, restoring the invariants.
    ///
    /// Older writers could persist duplicate ids, zero quantities, or
    /// quantities above the cap. Duplicates merge into the first occurrence
    /// with saturating, capped addition; oversized quantities clamp to the
    /// cap; zero-quantity and zero-id records drop.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if !line.product_id.is_valid() || line.quantity == 0 {
                continue;
            }
            let quantity = line.quantity.min(MAX_LINE_QUANTITY);
            match cart.position(line.product_id) {
                Some(idx) => {
                    let existing = &mut cart.lines[idx];
                    existing.quantity = existing
                        .quantity
                        .saturating_add(quantity)
                        .min(MAX_LINE_QUANTITY);
                }
                None => cart.lines.push(CartLine::new(line.product_id, quantity)),
            }
        }
        cart
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines (the cart badge number).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Get the line for a product, if present.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Get the quantity for a product, if present.
    pub fn quantity(&self, product_id: ProductId) -> Option<u32> {
        self.get(product_id).map(|l| l.quantity)
    }

    /// Add one unit of a product.
    ///
    /// A line already at the cap is left unchanged and the call reports
    /// `QuantityCapped`; otherwise the quantity increments, or a new line
    /// with quantity 1 is appended. Returns the resulting quantity.
    pub fn add_or_increment(&mut self, product_id: ProductId) -> Result<u32, CommerceError> {
        match self.position(product_id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                if line.quantity >= MAX_LINE_QUANTITY {
                    return Err(CommerceError::QuantityCapped {
                        product_id,
                        max: MAX_LINE_QUANTITY,
                    });
                }
                line.quantity += 1;
                Ok(line.quantity)
            }
            None => {
                self.lines.push(CartLine::new(product_id, 1));
                Ok(1)
            }
        }
    }

    /// Apply a signed quantity delta to an existing line.
    ///
    /// A result below 1 removes the line. A result above the cap is
    /// rejected with the prior quantity intact. An absent id is
    /// `NotInCart`.
    pub fn change_quantity(
        &mut self,
        product_id: ProductId,
        delta: i32,
    ) -> Result<LineChange, CommerceError> {
        let idx = self
            .position(product_id)
            .ok_or(CommerceError::NotInCart(product_id))?;
        let next = i64::from(self.lines[idx].quantity) + i64::from(delta);
        self.apply_quantity(idx, product_id, next)
    }

    /// Set a line's quantity directly.
    ///
    /// A value below 1 removes the line (the user meant to delete it). A
    /// value above the cap is rejected with the prior quantity intact. An
    /// absent id is `NotInCart`.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<LineChange, CommerceError> {
        let idx = self
            .position(product_id)
            .ok_or(CommerceError::NotInCart(product_id))?;
        self.apply_quantity(idx, product_id, quantity)
    }

    /// Remove a line if present. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() < before
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Price the cart against a product lookup.
    ///
    /// Lines whose product the lookup cannot resolve contribute nothing to
    /// the subtotal and are reported in `unresolved` so the caller can log
    /// the data gap; an unresolvable line is a catalog problem, not a cart
    /// error. Fails when a line total overflows or the lookup hands back a
    /// price in another currency.
    pub fn pricing(&self, products: &dyn ProductLookup) -> Result<CartPricing, CommerceError> {
        let mut lines = Vec::new();
        let mut unresolved = Vec::new();
        let mut subtotal = Money::zero(Currency::USD);

        for line in &self.lines {
            let Some(product) = products.product(line.product_id) else {
                unresolved.push(line.product_id);
                continue;
            };
            let line_total = product.unit_price.try_multiply(i64::from(line.quantity))?;
            subtotal = subtotal.try_add(&line_total)?;
            lines.push(LinePricing {
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price: product.unit_price,
                line_total,
            });
        }

        Ok(CartPricing {
            subtotal,
            lines,
            unresolved,
        })
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.product_id == product_id)
    }

    fn apply_quantity(
        &mut self,
        idx: usize,
        product_id: ProductId,
        next: i64,
    ) -> Result<LineChange, CommerceError> {
        if next < 1 {
            self.lines.remove(idx);
            return Ok(LineChange::Removed);
        }
        if next > i64::from(MAX_LINE_QUANTITY) {
            return Err(CommerceError::QuantityCapped {
                product_id,
                max: MAX_LINE_QUANTITY,
            });
        }
        let next = next as u32;
        self.lines[idx].quantity = next;
        Ok(LineChange::Updated(next))
    }
}

//! Cart line items and quantity bounds.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// One product's presence in the cart.
///
/// This record is also the persisted representation:
/// `{"productId": 1, "quantity": 2}`. A stored record missing `quantity`
/// deserializes as 0 and is dropped when the cart is rebuilt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Units of the product. Live lines hold `1..=MAX_LINE_QUANTITY`.
    #[serde(default)]
    pub quantity: u32,
}

impl CartLine {
    /// Create a line.
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }

    /// Whether the line satisfies the cart invariants.
    pub fn in_bounds(&self) -> bool {
        self.product_id.is_valid() && (1..=MAX_LINE_QUANTITY).contains(&self.quantity)
    }
}

//! Cart pricing: the join of cart lines against catalog products.

use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Pricing breakdown for a cart.
///
/// Produced by [`Cart::pricing`](crate::cart::Cart::pricing). Shipping is
/// always free in this store, so the subtotal is also the order total.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartPricing {
    /// Sum of line totals over resolvable lines.
    pub subtotal: Money,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LinePricing>,
    /// Ids the lookup could not resolve; these lines are skipped.
    pub unresolved: Vec<ProductId>,
}

impl CartPricing {
    /// Whether every line priced.
    pub fn fully_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinePricing {
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Units priced.
    pub quantity: u32,
    /// Unit price from the catalog.
    pub unit_price: Money,
    /// unit_price * quantity.
    pub line_total: Money,
}

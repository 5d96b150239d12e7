//! Cart view model.
//!
//! The join of cart lines against a catalog snapshot, as plain data.
//! Rendering (terminal tables here, JSON in `--json` mode) consumes this
//! description instead of reaching into live cart or catalog state.

use glow_catalog::Catalog;
use glow_commerce::cart::Cart;
use glow_commerce::product::{Product, ProductLookup};
use glow_commerce::{CommerceError, Currency, Money, ProductId};
use serde::Serialize;

/// A renderable description of the cart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// One entry per line, in cart order.
    pub lines: Vec<LineView>,

    /// Subtotal over the priced lines.
    pub subtotal: Money,

    /// Total units across all lines (the badge number).
    pub item_count: u32,

    /// Ids the catalog could not resolve. Their lines are unpriced and
    /// excluded from the subtotal.
    pub unresolved: Vec<ProductId>,

    /// True when the catalog behind this view is the embedded fallback.
    pub degraded: bool,
}

/// One cart line joined with its product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineView {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,

    /// True when the product is a synthesized stand-in rather than
    /// catalog data.
    pub synthetic: bool,
}

impl CartView {
    /// Join `cart` against `catalog`.
    ///
    /// Ids the catalog cannot resolve are reported in `unresolved`, except
    /// in degraded mode where every line gets a placeholder product so the
    /// whole cart stays priced.
    pub fn build(cart: &Cart, catalog: &Catalog) -> Result<Self, CommerceError> {
        let degraded = catalog.origin().is_degraded();
        let mut lines = Vec::new();
        let mut unresolved = Vec::new();
        let mut subtotal = Money::zero(Currency::USD);

        for line in cart.lines() {
            let product = match catalog.product(line.product_id) {
                Some(product) => product.clone(),
                None if degraded => Product::placeholder(line.product_id),
                None => {
                    unresolved.push(line.product_id);
                    continue;
                }
            };

            let line_total = product.unit_price.try_multiply(i64::from(line.quantity))?;
            subtotal = subtotal.try_add(&line_total)?;

            lines.push(LineView {
                product_id: line.product_id,
                name: product.name,
                brand: product.brand,
                quantity: line.quantity,
                unit_price: product.unit_price,
                line_total,
                synthetic: product.synthetic,
            });
        }

        Ok(Self {
            lines,
            subtotal,
            item_count: cart.item_count(),
            unresolved,
            degraded,
        })
    }
}

//! Product records and by-id lookup.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed price for placeholder products, in cents.
pub const PLACEHOLDER_PRICE_CENTS: i64 = 999;

/// A product in the catalog.
///
/// Read-only reference data from the cart's perspective: carts keep only
/// product ids and join against the catalog when a view or total is needed,
/// so price corrections apply to existing carts automatically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Brand name (e.g., "COSRX").
    pub brand: String,
    /// Unit price.
    pub unit_price: Money,
    /// Merchandising category (e.g., "serum").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Reference to the product image asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Short marketing description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Featured in the storefront hero slot.
    #[serde(default)]
    pub featured: bool,
    /// True only for placeholders synthesized when the catalog is degraded.
    #[serde(default)]
    pub synthetic: bool,
}

impl Product {
    /// Placeholder for an id the degraded catalog cannot resolve.
    ///
    /// Carries a fixed non-zero price so totals over the cart stay defined;
    /// the `synthetic` flag marks the record so callers can tell the user
    /// the data is provisional.
    pub fn placeholder(id: ProductId) -> Self {
        Self {
            id,
            name: format!("Product #{}", id),
            brand: "Unknown".to_string(),
            unit_price: Money::new(PLACEHOLDER_PRICE_CENTS, Currency::USD),
            category: None,
            image_ref: None,
            description: None,
            featured: false,
            synthetic: true,
        }
    }
}

/// By-id access to product records.
///
/// Implemented by catalog snapshots. Pricing joins cart lines through this
/// trait so it works against whatever product data is loaded, without
/// depending on how it was loaded.
pub trait ProductLookup {
    /// Look up a product by id.
    fn product(&self, id: ProductId) -> Option<&Product>;
}

impl ProductLookup for HashMap<ProductId, Product> {
    fn product(&self, id: ProductId) -> Option<&Product> {
        self.get(&id)
    }
}

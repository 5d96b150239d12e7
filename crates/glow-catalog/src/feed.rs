//! Catalog feed document format.

use crate::error::CatalogError;
use glow_commerce::product::Product;
use glow_commerce::{Currency, Money, ProductId};
use serde::{Deserialize, Serialize};

/// Top-level catalog feed document: `{"products": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogFeed {
    /// Product records in merchandising order.
    #[serde(default)]
    pub products: Vec<FeedProduct>,
}

impl CatalogFeed {
    /// Parse a feed document from raw JSON bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self, CatalogError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// One product record as it appears in the feed.
///
/// Feed prices are decimal USD amounts; conversion turns them into
/// cents-based [`Money`] so no float flows through arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedProduct {
    /// Positive integer id, stable across feed updates.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Unit price as a decimal amount.
    pub price: f64,
    /// Merchandising category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Product image asset reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Short marketing description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Featured in the storefront hero slot.
    #[serde(default)]
    pub featured: bool,
}

impl FeedProduct {
    /// Convert into a domain product.
    pub fn into_product(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            brand: self.brand,
            unit_price: Money::from_decimal(self.price, Currency::USD),
            category: self.category,
            image_ref: self.image_ref,
            description: self.description,
            featured: self.featured,
            synthetic: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_record() {
        let feed = CatalogFeed::parse(
            br#"{"products":[{"id":1,"name":"Glow Serum","brand":"Beauty of Joseon","price":16.17}]}"#,
        )
        .unwrap();
        assert_eq!(feed.products.len(), 1);

        let p = feed.products[0].clone().into_product();
        assert_eq!(p.id, ProductId::new(1));
        assert_eq!(p.unit_price.amount_cents, 1617);
        assert!(!p.featured);
        assert!(!p.synthetic);
    }

    #[test]
    fn test_parse_full_record() {
        let feed = CatalogFeed::parse(
            br#"{"products":[{"id":2,"name":"Relief Cream","brand":"Dr. Althea","price":21.38,"category":"Moisturizers","imageRef":"althea.jpg","description":"Soothing.","featured":true}]}"#,
        )
        .unwrap();
        let p = &feed.products[0];
        assert_eq!(p.category.as_deref(), Some("Moisturizers"));
        assert_eq!(p.image_ref.as_deref(), Some("althea.jpg"));
        assert!(p.featured);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            CatalogFeed::parse(b"<html>404</html>"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_missing_products_key_is_empty_feed() {
        let feed = CatalogFeed::parse(b"{}").unwrap();
        assert!(feed.products.is_empty());
    }
}

//! Embedded emergency dataset.
//!
//! Served when every configured source is exhausted, so the storefront can
//! still show and sell the core range instead of a broken page.

use crate::feed::{CatalogFeed, FeedProduct};

/// Build the emergency feed.
///
/// Five core products with stable ids. Prices match the live feed, so a
/// cart built in degraded mode totals the same once the real catalog is
/// back.
pub fn emergency_feed() -> CatalogFeed {
    CatalogFeed {
        products: vec![
            FeedProduct {
                id: 1,
                name: "Beauty of Joseon - Glow Serum Jumbo".to_string(),
                brand: "Beauty of Joseon".to_string(),
                price: 16.17,
                category: Some("Facial Serums".to_string()),
                image_ref: None,
                description: Some(
                    "Propolis and niacinamide serum that calms inflammation, balances sebum, \
                     and brightens dull skin without a sticky finish."
                        .to_string(),
                ),
                featured: true,
            },
            FeedProduct {
                id: 2,
                name: "celimax - The Vita-A Retinal Shot Tightening Booster".to_string(),
                brand: "celimax".to_string(),
                price: 11.88,
                category: Some("Facial Serums".to_string()),
                image_ref: None,
                description: Some(
                    "Retinal booster serum that firms the skin and softens the look of fine lines."
                        .to_string(),
                ),
                featured: false,
            },
            FeedProduct {
                id: 3,
                name: "Dr. Althea - 345 Relief Cream".to_string(),
                brand: "Dr. Althea".to_string(),
                price: 21.38,
                category: Some("Moisturizers".to_string()),
                image_ref: None,
                description: Some(
                    "Soothing moisturizer for sensitive skin, hydrating deeply while calming \
                     redness and irritation."
                        .to_string(),
                ),
                featured: false,
            },
            FeedProduct {
                id: 4,
                name: "Punto SEOUL - Mighty Bamboo Panthenol Cream".to_string(),
                brand: "Punto SEOUL".to_string(),
                price: 12.71,
                category: Some("Moisturizers".to_string()),
                image_ref: None,
                description: Some(
                    "Panthenol cream for deep, long-lasting hydration on dry skin.".to_string(),
                ),
                featured: false,
            },
            FeedProduct {
                id: 5,
                name: "AP LB - Glutathione Niacinamide Sheet Mask".to_string(),
                brand: "AP LB".to_string(),
                price: 0.98,
                category: Some("Sheet Masks".to_string()),
                image_ref: None,
                description: Some(
                    "Brightening sheet mask with glutathione and niacinamide to even skin tone."
                        .to_string(),
                ),
                featured: false,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emergency_feed_shape() {
        let feed = emergency_feed();
        assert_eq!(feed.products.len(), 5);

        let ids: Vec<u64> = feed.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        // exactly one hero product
        assert_eq!(feed.products.iter().filter(|p| p.featured).count(), 1);
        assert!(feed.products[0].featured);
    }

    #[test]
    fn test_emergency_prices_convert_cleanly() {
        let feed = emergency_feed();
        let cents: Vec<i64> = feed
            .products
            .iter()
            .map(|p| p.clone().into_product().unit_price.amount_cents)
            .collect();
        assert_eq!(cents, vec![1617, 1188, 2138, 1271, 98]);
    }
}

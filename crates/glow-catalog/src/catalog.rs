//! Immutable catalog snapshots.

use crate::feed::CatalogFeed;
use glow_commerce::product::{Product, ProductLookup};
use glow_commerce::ProductId;
use std::collections::HashMap;

/// Where a catalog snapshot came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Loaded from a configured source; carries the source label.
    Source(String),
    /// Built from the embedded emergency dataset after source exhaustion.
    Embedded,
}

impl CatalogOrigin {
    /// Whether the catalog is running on emergency data.
    pub fn is_degraded(&self) -> bool {
        matches!(self, CatalogOrigin::Embedded)
    }
}

impl std::fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogOrigin::Source(label) => write!(f, "{}", label),
            CatalogOrigin::Embedded => write!(f, "embedded"),
        }
    }
}

/// An immutable snapshot of the product catalog.
///
/// Order is feed order (the merchandiser's order); an id index backs the
/// lookups. Snapshots never change after construction, so they can be
/// shared freely behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
    origin: CatalogOrigin,
}

impl Catalog {
    /// Build a snapshot from a feed document.
    pub fn from_feed(feed: CatalogFeed, origin: CatalogOrigin) -> Self {
        let products: Vec<Product> = feed
            .products
            .into_iter()
            .map(|p| p.into_product())
            .collect();
        let by_id = products
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id, idx))
            .collect();
        Self {
            products,
            by_id,
            origin,
        }
    }

    /// Products in feed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Where this snapshot came from.
    pub fn origin(&self) -> &CatalogOrigin {
        &self.origin
    }

    /// The hero product.
    ///
    /// The first record flagged featured; when nothing is flagged, the
    /// first record stands in so the hero slot is never blank.
    pub fn featured(&self) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.featured)
            .or_else(|| self.products.first())
    }

    /// Up to `n` recommended products.
    ///
    /// Prefers non-featured records. When fewer than `n` of those exist,
    /// the slots fill from the front of the catalog instead, featured
    /// included.
    pub fn recommended(&self, n: usize) -> Vec<&Product> {
        let non_featured: Vec<&Product> = self.products.iter().filter(|p| !p.featured).collect();
        if non_featured.len() < n {
            self.products.iter().take(n).collect()
        } else {
            non_featured.into_iter().take(n).collect()
        }
    }
}

impl ProductLookup for Catalog {
    fn product(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).map(|&idx| &self.products[idx])
    }
}

//! Product resolution over an ordered source chain with a session cache.

use crate::catalog::{Catalog, CatalogOrigin};
use crate::embedded::emergency_feed;
use crate::source::{default_sources, CatalogSource};
use glow_commerce::product::{Product, ProductLookup};
use glow_commerce::ProductId;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Resolves product ids against a session-cached catalog.
///
/// The catalog loads once, on first use: sources are tried in order and the
/// first usable document wins. When every source fails the resolver degrades
/// to the embedded emergency dataset instead of erroring, so the storefront
/// keeps working on provisional data. [`refresh`](Self::refresh) repopulates
/// the cache explicitly.
pub struct ProductResolver {
    sources: Vec<Box<dyn CatalogSource>>,
    cache: RwLock<Option<Arc<Catalog>>>,
}

impl ProductResolver {
    /// Resolver over the default candidate paths.
    pub fn new() -> Self {
        Self::with_sources(default_sources())
    }

    /// Resolver over an explicit source chain.
    pub fn with_sources(sources: Vec<Box<dyn CatalogSource>>) -> Self {
        Self {
            sources,
            cache: RwLock::new(None),
        }
    }

    /// The session catalog, loading it on first use.
    pub async fn catalog(&self) -> Arc<Catalog> {
        if let Some(catalog) = self.cache.read().await.as_ref() {
            return Arc::clone(catalog);
        }
        let mut cache = self.cache.write().await;
        // another task may have populated the cache while we waited
        if let Some(catalog) = cache.as_ref() {
            return Arc::clone(catalog);
        }
        let catalog = Arc::new(self.load_catalog().await);
        *cache = Some(Arc::clone(&catalog));
        catalog
    }

    /// Drop the cached catalog and load a fresh one.
    pub async fn refresh(&self) -> Arc<Catalog> {
        let mut cache = self.cache.write().await;
        let catalog = Arc::new(self.load_catalog().await);
        *cache = Some(Arc::clone(&catalog));
        catalog
    }

    /// Resolve a product id to its catalog record.
    ///
    /// In degraded mode unknown ids resolve to a synthetic placeholder so
    /// totals over the cart stay defined; with a real catalog loaded an
    /// unknown id is a plain miss.
    pub async fn resolve(&self, id: ProductId) -> Option<Product> {
        let catalog = self.catalog().await;
        match catalog.product(id) {
            Some(product) => Some(product.clone()),
            None if catalog.origin().is_degraded() => {
                debug!(%id, "unknown id in degraded mode, synthesizing placeholder");
                Some(Product::placeholder(id))
            }
            None => None,
        }
    }

    async fn load_catalog(&self) -> Catalog {
        for source in &self.sources {
            match source.load().await {
                Ok(feed) => {
                    info!(
                        source = %source.describe(),
                        products = feed.products.len(),
                        "catalog loaded"
                    );
                    return Catalog::from_feed(feed, CatalogOrigin::Source(source.describe()));
                }
                Err(e) => {
                    debug!(
                        source = %source.describe(),
                        error = %e,
                        "catalog source failed, trying next"
                    );
                }
            }
        }
        warn!("all catalog sources failed, using embedded emergency data");
        Catalog::from_feed(emergency_feed(), CatalogOrigin::Embedded)
    }
}

impl Default for ProductResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::feed::{CatalogFeed, FeedProduct};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticSource {
        feed: CatalogFeed,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CatalogSource for StaticSource {
        fn describe(&self) -> String {
            "static".to_string()
        }

        async fn load(&self) -> Result<CatalogFeed, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.feed.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        async fn load(&self) -> Result<CatalogFeed, CatalogError> {
            Err(CatalogError::Unavailable("no such source".to_string()))
        }
    }

    fn one_product_feed() -> CatalogFeed {
        CatalogFeed {
            products: vec![FeedProduct {
                id: 9,
                name: "Water Bank Cream".to_string(),
                brand: "LANEIGE".to_string(),
                price: 25.0,
                category: None,
                image_ref: None,
                description: None,
                featured: false,
            }],
        }
    }

    #[tokio::test]
    async fn test_catalog_loads_once_per_session() {
        let calls = Arc::new(AtomicUsize::new(0));
        let resolver = ProductResolver::with_sources(vec![Box::new(StaticSource {
            feed: one_product_feed(),
            calls: Arc::clone(&calls),
        })]);

        resolver.catalog().await;
        resolver.catalog().await;
        resolver.resolve(ProductId::new(9)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refresh_reloads() {
        let calls = Arc::new(AtomicUsize::new(0));
        let resolver = ProductResolver::with_sources(vec![Box::new(StaticSource {
            feed: one_product_feed(),
            calls: Arc::clone(&calls),
        })]);

        resolver.catalog().await;
        resolver.refresh().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_first_usable_source_wins() {
        let calls = Arc::new(AtomicUsize::new(0));
        let resolver = ProductResolver::with_sources(vec![
            Box::new(FailingSource),
            Box::new(StaticSource {
                feed: one_product_feed(),
                calls: Arc::clone(&calls),
            }),
        ]);

        let catalog = resolver.catalog().await;
        assert_eq!(catalog.origin(), &CatalogOrigin::Source("static".to_string()));
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_exhaustion_degrades_to_embedded() {
        let resolver = ProductResolver::with_sources(vec![Box::new(FailingSource)]);
        let catalog = resolver.catalog().await;
        assert!(catalog.origin().is_degraded());
        assert_eq!(catalog.len(), 5);
    }

    #[tokio::test]
    async fn test_degraded_unknown_id_gets_placeholder() {
        let resolver = ProductResolver::with_sources(vec![Box::new(FailingSource)]);

        let known = resolver.resolve(ProductId::new(1)).await.unwrap();
        assert!(!known.synthetic);
        assert_eq!(known.brand, "Beauty of Joseon");

        let placeholder = resolver.resolve(ProductId::new(42)).await.unwrap();
        assert!(placeholder.synthetic);
        assert!(!placeholder.unit_price.is_zero());
    }

    #[tokio::test]
    async fn test_live_catalog_unknown_id_is_miss() {
        let resolver = ProductResolver::with_sources(vec![Box::new(StaticSource {
            feed: one_product_feed(),
            calls: Arc::new(AtomicUsize::new(0)),
        })]);

        assert!(resolver.resolve(ProductId::new(9)).await.is_some());
        assert!(resolver.resolve(ProductId::new(42)).await.is_none());
    }
}

//! Catalog loading and product resolution for the Glow storefront.
//!
//! Products live in a JSON feed whose location varies by deployment. This
//! crate walks an ordered chain of [`CatalogSource`]s, caches the first
//! usable document as an immutable [`Catalog`] snapshot for the session, and
//! resolves product ids against it. Source exhaustion degrades to a small
//! embedded dataset instead of failing, so carts keep pricing.
//!
//! # Example
//!
//! ```rust,ignore
//! use glow_catalog::ProductResolver;
//! use glow_commerce::ProductId;
//!
//! let resolver = ProductResolver::new();
//! let catalog = resolver.catalog().await;
//! if catalog.origin().is_degraded() {
//!     // every source failed; running on embedded data
//! }
//! let product = resolver.resolve(ProductId::new(1)).await;
//! ```

mod catalog;
mod embedded;
mod error;
mod feed;
mod resolver;
mod source;

pub use catalog::{Catalog, CatalogOrigin};
pub use embedded::emergency_feed;
pub use error::CatalogError;
pub use feed::{CatalogFeed, FeedProduct};
pub use resolver::ProductResolver;
pub use source::{default_sources, CatalogSource, FileSource, DEFAULT_FEED_PATHS};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Catalog, CatalogError, CatalogFeed, CatalogOrigin, CatalogSource, FeedProduct, FileSource,
        ProductResolver,
    };
}

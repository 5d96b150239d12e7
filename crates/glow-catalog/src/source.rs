//! Catalog sources: where feed documents come from.

use crate::error::CatalogError;
use crate::feed::CatalogFeed;
use async_trait::async_trait;
use std::path::PathBuf;

/// Default candidate locations for the feed, in priority order.
///
/// Deployments have shipped the feed at slightly different locations over
/// time; the chain tries each in turn.
pub const DEFAULT_FEED_PATHS: &[&str] = &["./products.json", "products.json", "/products.json"];

/// A candidate location for the catalog feed.
///
/// The resolver walks an ordered list of sources and takes the first one
/// that yields a usable document, so implementations report failure freely;
/// failing just hands the attempt to the next candidate.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable label for logs.
    fn describe(&self) -> String;

    /// Load and parse the feed from this source.
    ///
    /// A usable document parses as a feed and contains at least one
    /// product; blank or productless documents are [`CatalogError::EmptyDocument`].
    async fn load(&self) -> Result<CatalogFeed, CatalogError>;
}

/// Feed document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<CatalogFeed, CatalogError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(CatalogError::EmptyDocument);
        }
        let feed = CatalogFeed::parse(&bytes)?;
        if feed.products.is_empty() {
            return Err(CatalogError::EmptyDocument);
        }
        Ok(feed)
    }
}

/// Build the default source chain over [`DEFAULT_FEED_PATHS`].
pub fn default_sources() -> Vec<Box<dyn CatalogSource>> {
    DEFAULT_FEED_PATHS
        .iter()
        .map(|p| Box::new(FileSource::new(p)) as Box<dyn CatalogSource>)
        .collect()
}

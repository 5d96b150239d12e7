//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when loading a catalog source.
///
/// These stay inside the resolver's source chain: a failing source just
/// means the next candidate is tried, and exhaustion degrades to the
/// embedded dataset instead of surfacing an error.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The source could not be read.
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),

    /// The document was not a valid catalog feed.
    #[error("Malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The source produced a blank document or one with no products.
    #[error("Catalog document is empty")]
    EmptyDocument,
}

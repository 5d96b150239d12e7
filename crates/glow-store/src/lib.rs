//! Persistent cart storage for the Glow storefront.
//!
//! Wraps [`Cart`](glow_commerce::cart::Cart) in a load/mutate/save store over
//! a pluggable byte backend. The persisted representation is a JSON array of
//! line records under a single storage key, and it is the source of truth:
//! every mutation reloads, applies the change, and writes the result back.
//!
//! # Example
//!
//! ```rust
//! use glow_commerce::ProductId;
//! use glow_store::{CartStore, MemoryBackend};
//!
//! let store = CartStore::new(MemoryBackend::new());
//! store.add_or_increment(ProductId::new(1)).unwrap();
//! store.add_or_increment(ProductId::new(1)).unwrap();
//!
//! let cart = store.load().unwrap();
//! assert_eq!(cart.quantity(ProductId::new(1)), Some(2));
//! ```

mod backend;
mod error;
mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use store::{CartAction, CartStore, DEFAULT_CART_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartAction, CartStore, FileBackend, MemoryBackend, StorageBackend, StoreError,
        DEFAULT_CART_KEY,
    };
}

//! Store error types.

use thiserror::Error;

/// Errors that can occur when persisting carts.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The persistence medium rejected a read or write.
    ///
    /// Always surfaced to the caller, never recovered: a dropped cart
    /// mutation must be reported to the user.
    #[error("Cart storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Failed to serialize the cart.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A cart rule rejected the mutation.
    ///
    /// Carries the quantity-cap and not-in-cart signals; the persisted
    /// state is untouched when this is returned.
    #[error(transparent)]
    Commerce(#[from] glow_commerce::CommerceError),
}

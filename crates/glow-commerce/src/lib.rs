//! Domain types and cart logic for the Glow storefront.
//!
//! This crate provides the storefront's core domain model:
//!
//! - **Products**: catalog records with brand, price, and merchandising flags
//! - **Cart**: an ordered, id-keyed cart with per-line quantity bounds
//! - **Pricing**: the cart x catalog join producing line totals and a subtotal
//!
//! Carts store product ids and quantities only; product attributes are joined
//! in from a [`ProductLookup`](product::ProductLookup) when a view or total is
//! needed.
//!
//! # Example
//!
//! ```rust
//! use glow_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add_or_increment(ProductId::new(1)).unwrap();
//! cart.add_or_increment(ProductId::new(1)).unwrap();
//! cart.change_quantity(ProductId::new(1), 5).unwrap();
//! assert_eq!(cart.item_count(), 7);
//! ```

pub mod cart;
pub mod error;
pub mod ids;
pub mod money;
pub mod product;

pub use error::{CommerceError, MoneyError};
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, MoneyError};
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{
        Cart, CartLine, CartPricing, LineChange, LinePricing, MAX_LINE_QUANTITY,
    };

    pub use crate::product::{Product, ProductLookup, PLACEHOLDER_PRICE_CENTS};
}

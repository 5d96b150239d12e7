//! Commerce error types.

use crate::ids::ProductId;
use crate::money::Currency;
use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Mutation would push a line past the per-line quantity cap.
    ///
    /// The cart is left untouched; callers show feedback and move on.
    #[error("Quantity for product {product_id} is capped at {max}")]
    QuantityCapped { product_id: ProductId, max: u32 },

    /// Mutation targeted a product with no line in the cart.
    #[error("Product not in cart: {0}")]
    NotInCart(ProductId),

    /// Money arithmetic failed while pricing.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Errors from fallible money arithmetic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyError {
    /// Operands carry different currencies.
    #[error("Cannot combine {left} and {right} amounts")]
    CurrencyMismatch { left: Currency, right: Currency },

    /// Amount left the representable range.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

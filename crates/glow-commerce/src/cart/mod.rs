//! Shopping cart module.
//!
//! Contains the cart container, line items, and the pricing join.

mod cart;
mod line;
mod pricing;

pub use cart::{Cart, LineChange};
pub use line::{CartLine, MAX_LINE_QUANTITY};
pub use pricing::{CartPricing, LinePricing};

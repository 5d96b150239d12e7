//! Newtype IDs for type-safe identifiers.
//!
//! Catalog feeds address products by positive integer id; the newtype keeps
//! those ids from being mixed up with quantities or other plain integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a product in the catalog.
///
/// Serializes as the bare integer, matching the feed and the persisted cart
/// representation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an ID from its integer value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the integer value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Whether the ID refers to a real product.
    ///
    /// Feeds use positive ids; 0 only shows up in damaged persisted records
    /// and is treated as absent.
    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

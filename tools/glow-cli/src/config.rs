//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration, usually loaded from `glow.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlowConfig {
    /// Cart persistence settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Catalog feed settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl GlowConfig {
    /// Load config from a file (TOML by default, JSON by extension).
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Where and under what key the cart persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory cart state is written under.
    #[serde(default = "default_store_dir")]
    pub dir: String,

    /// Storage key for the cart record.
    #[serde(default = "default_cart_key")]
    pub key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
            key: default_cart_key(),
        }
    }
}

fn default_store_dir() -> String {
    ".glow".to_string()
}

fn default_cart_key() -> String {
    glow_store::DEFAULT_CART_KEY.to_string()
}

/// Which feeds the catalog loads from and how many products to recommend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Candidate feed locations, tried in order.
    #[serde(default = "default_feed_paths")]
    pub feed_paths: Vec<String>,

    /// How many products the recommendation grid shows.
    #[serde(default = "default_recommended")]
    pub recommended: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            feed_paths: default_feed_paths(),
            recommended: default_recommended(),
        }
    }
}

fn default_feed_paths() -> Vec<String> {
    glow_catalog::DEFAULT_FEED_PATHS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn default_recommended() -> usize {
    5
}

/// Generate a default glow.toml config file.
pub fn generate_default_config() -> String {
    r#"# Glow storefront configuration

[store]
# Directory the cart persists under.
dir = ".glow"
# Storage key for the cart record.
key = "cart"

[catalog]
# Candidate feed locations, tried in order.
feed_paths = ["./products.json", "products.json", "/products.json"]
# How many products the recommendation grid shows.
recommended = 5
"#
    .to_string()
}

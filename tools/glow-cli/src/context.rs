//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use glow_catalog::{CatalogSource, FileSource, ProductResolver};
use glow_store::{CartStore, FileBackend};

use crate::config::GlowConfig;
use crate::output::Output;

/// Execution context shared by all CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: GlowConfig,

    /// Output handler.
    pub output: Output,

    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, reading config from `config_path` when given, otherwise
    /// searching the directory tree.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            GlowConfig::load(path)?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Find a config file walking up the directory tree.
    fn find_config(start: &Path) -> Option<GlowConfig> {
        let config_names = ["glow.toml", ".glow.toml", "glow.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let candidate = current.join(name);
                if candidate.exists() {
                    if let Ok(config) = GlowConfig::load(candidate.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Open the cart store configured for this session.
    pub fn cart_store(&self) -> Result<CartStore<FileBackend>> {
        let dir = self.resolve_path(&self.config.store.dir);
        let backend = FileBackend::new(&dir)
            .with_context(|| format!("Failed to open cart storage at {}", dir.display()))?;
        Ok(CartStore::with_key(backend, self.config.store.key.clone()))
    }

    /// Build a product resolver over the configured feed paths.
    pub fn resolver(&self) -> ProductResolver {
        let sources: Vec<Box<dyn CatalogSource>> = self
            .config
            .catalog
            .feed_paths
            .iter()
            .map(|p| Box::new(FileSource::new(self.resolve_path(p))) as Box<dyn CatalogSource>)
            .collect();
        ProductResolver::with_sources(sources)
    }

    /// Resolve a configured path relative to the working directory.
    fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

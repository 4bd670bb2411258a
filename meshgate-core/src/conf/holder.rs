use crate::conf::error::ConfigError;
use crate::conf::loader::load_config;
use crate::conf::types::MeshgateConfig;

use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One successfully loaded descriptor plus the absolute path it came from.
///
/// The tree is immutable after load; a reload produces a whole new holder.
/// Components receive the holder by reference or behind [`SharedConfig`]
/// instead of reaching into ambient global state.
#[derive(Debug, Clone)]
pub struct ConfigHolder {
    pub config: MeshgateConfig,
    pub path: PathBuf,
}

impl ConfigHolder {
    pub fn new(config: MeshgateConfig, path: PathBuf) -> Self {
        Self { config, path }
    }

    /// Re-serializes the held tree, e.g. for a debug endpoint. The opaque
    /// resource sections are emitted byte-for-byte as they were read; the
    /// source file itself is never written back.
    pub fn dump(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(&self.config).map_err(|e| ConfigError::dump(&self.path, e))
    }
}

/// Atomically swappable publication point for the loaded descriptor.
///
/// Readers take a cheap [`Arc`] snapshot via [`current`](Self::current);
/// [`reload`](Self::reload) builds the new tree offline and swaps it in one
/// atomic store, so reloading while other components read is safe.
#[derive(Debug)]
pub struct SharedConfig {
    inner: ArcSwap<ConfigHolder>,
}

impl SharedConfig {
    pub fn new(holder: ConfigHolder) -> Self {
        Self {
            inner: ArcSwap::from_pointee(holder),
        }
    }

    /// Loads the initial descriptor from `path` and publishes it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        load_config(path).map(Self::new)
    }

    pub fn current(&self) -> Arc<ConfigHolder> {
        self.inner.load_full()
    }

    /// Replaces the published tree with a fresh load of `path`. On failure
    /// the previous tree stays published untouched.
    pub fn reload(&self, path: &Path) -> Result<(), ConfigError> {
        let holder = load_config(path)?;

        let old = self.inner.load();
        tracing::info!(
            old_servers = old.config.servers.len(),
            new_servers = holder.config.servers.len(),
            old_clusters = old.config.cluster_manager.clusters.len(),
            new_clusters = holder.config.cluster_manager.clusters.len(),
            "config reloaded"
        );

        // Atomic swap (point of no return).
        self.inner.store(Arc::new(holder));

        Ok(())
    }
}

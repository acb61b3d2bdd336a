//! Thread-safe configuration storage.
//!
//! Provides a simple in-memory config container with interior mutability.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Replace the backend base URL, e.g. from a CLI override.
    pub fn set_base_url(&self, base_url: impl Into<String>) {
        self.inner.write().api.base_url = base_url.into();
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

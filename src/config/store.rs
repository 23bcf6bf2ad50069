//! Thread-safe configuration storage.
//!
//! Provides a simple in-memory config container with interior mutability.
//! CLI overrides are applied once through [`ConfigStore::update`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
///
/// Allows multiple readers to access config concurrently while
/// supporting atomic updates when needed.
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

    /// Load the config at `path` and wrap it in a store.
    pub fn open(path: PathBuf) -> Result<Self, ConfigError> {
        let config = Config::load_from(&path)?;
        Ok(Self::new(config, path))
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply an in-place edit and re-validate.
    ///
    /// On validation failure the previous config is kept.
    pub fn update<F>(&self, edit: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut Config),
    {
        let mut next = self.get();
        edit(&mut next);
        next.validate()?;
        *self.inner.write() = next;
        Ok(())
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

//! Configuration for Stockroom
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{InventoryError, Result};

/// Main configuration for a Stockroom inventory
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Backing File Configuration
    // -------------------------------------------------------------------------
    /// Path of the delimited inventory file
    /// Layout:
    ///   country,code,product,cost,quantity   (header)
    ///   South Africa,SKU12345,Air Max,99.99,40
    pub inventory_path: PathBuf,

    /// Create the file (header only) when it does not exist yet
    pub create_if_missing: bool,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// How hard to push appends and rewrites to disk
    pub sync_strategy: SyncStrategy,
}

/// Sync strategy for writes to the backing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync the file (and its directory after a replace) on every write
    EveryWrite,

    /// Leave flushing to the OS page cache
    OsBuffered,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from("inventory.txt"),
            create_if_missing: false,
            sync_strategy: SyncStrategy::EveryWrite,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject configurations that cannot name a backing file
    pub fn validate(&self) -> Result<()> {
        if self.inventory_path.as_os_str().is_empty() {
            return Err(InventoryError::Config(
                "inventory_path must not be empty".to_string(),
            ));
        }
        if self.inventory_path.file_name().is_none() {
            return Err(InventoryError::Config(format!(
                "inventory_path {} does not name a file",
                self.inventory_path.display()
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the inventory file path
    pub fn inventory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.inventory_path = path.into();
        self
    }

    /// Create a header-only file when the path does not exist
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.config.create_if_missing = create;
        self
    }

    /// Set the write sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

//! File Backend
//!
//! Flat-file medium with atomic whole-file replacement.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::{Config, SyncStrategy};
use crate::error::{InventoryError, Result};
use crate::record::HEADER;

use super::Backend;

/// Backend over a single text file on disk
///
/// `replace` writes a sibling `<name>.tmp`, syncs it, and renames it over
/// the original, so a crash mid-write leaves the old file intact.
#[derive(Debug, Clone)]
pub struct FileBackend {
    /// The inventory file
    path: PathBuf,

    /// fsync policy for appends and replaces
    sync_strategy: SyncStrategy,
}

impl FileBackend {
    /// Open an existing inventory file
    ///
    /// Fails with `FileNotFound` when the path does not exist.
    pub fn open(path: impl Into<PathBuf>, sync_strategy: SyncStrategy) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(InventoryError::FileNotFound(path));
        }
        Ok(Self {
            path,
            sync_strategy,
        })
    }

    /// Open the file, creating it with just the header if missing
    pub fn open_or_create(path: impl Into<PathBuf>, sync_strategy: SyncStrategy) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let mut file = File::create(&path)?;
            file.write_all(HEADER.as_bytes())?;
            if sync_strategy == SyncStrategy::EveryWrite {
                file.sync_all()?;
            }
            tracing::info!(path = %path.display(), "created inventory file");
        }
        Self::open(path, sync_strategy)
    }

    /// Open according to a Config
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.create_if_missing {
            Self::open_or_create(&config.inventory_path, config.sync_strategy)
        } else {
            Self::open(&config.inventory_path, config.sync_strategy)
        }
    }

    /// Get the inventory file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// "inventory.txt" → "inventory.txt.tmp" in the same directory
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Directory holding the file ("" becomes ".")
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_temp(&self, temp_path: &Path, content: &str) -> Result<()> {
        let mut file = File::create(temp_path)?;
        file.write_all(content.as_bytes())?;
        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_all()?;
        }
        Ok(())
    }

    /// fsync the directory so the rename itself is durable
    #[cfg(unix)]
    fn sync_dir(&self) -> Result<()> {
        let dir = File::open(self.parent_dir())?;
        dir.sync_all()?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn sync_dir(&self) -> Result<()> {
        Ok(())
    }

    fn not_found_as_missing(&self, err: std::io::Error) -> InventoryError {
        if err.kind() == ErrorKind::NotFound {
            InventoryError::FileNotFound(self.path.clone())
        } else {
            InventoryError::Io(err)
        }
    }
}

impl Backend for FileBackend {
    fn read_content(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| self.not_found_as_missing(e))
    }

    fn append(&self, chunk: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| self.not_found_as_missing(e))?;

        file.write_all(chunk.as_bytes())?;
        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_all()?;
        }
        Ok(())
    }

    fn replace(&self, content: &str) -> Result<()> {
        let temp_path = self.temp_path();

        let written = self
            .write_temp(&temp_path, content)
            .and_then(|()| fs::rename(&temp_path, &self.path).map_err(InventoryError::from));

        if let Err(e) = written {
            // The original is untouched; drop the partial temp file
            let _ = fs::remove_file(&temp_path);
            tracing::warn!(path = %self.path.display(), error = %e, "replace aborted");
            return Err(e);
        }

        if self.sync_strategy == SyncStrategy::EveryWrite {
            self.sync_dir()?;
        }
        Ok(())
    }
}

//! Engine Module
//!
//! The inventory engine that coordinates the Store and the Gateway.
//!
//! ## Responsibilities
//! - Load (and reload) the Store from the backing medium
//! - Serve lookups and min/max queries
//! - Capture new records: medium first, then memory
//! - Restock: rewrite the medium, then update memory
//!
//! ## Restock Flow
//! ```text
//!   Idle ─► target (lowest / by code) ─► new quantity = old + delta
//!        ─► Gateway::rewrite_quantity_at_position ─► Store::set_quantity ─► Idle
//! ```
//! Memory only changes after the medium write returned Ok, so a failed
//! rewrite leaves both sides at the old quantity.

use std::path::Path;

use parking_lot::{Mutex, RwLock};

use crate::config::Config;
use crate::error::{InventoryError, Result};
use crate::gateway::{Backend, FileBackend, Gateway};
use crate::record::Record;
use crate::store::Store;

/// Outcome of a quantity update
#[derive(Debug, Clone, PartialEq)]
pub struct Restock {
    /// Store index of the updated record
    pub position: usize,

    /// Quantity before the update
    pub previous_quantity: i64,

    /// The record as it is now
    pub record: Record,
}

/// The inventory engine
///
/// ## Concurrency Model: Single Writer
///
/// - **Writes** (reload/add/restock): serialized by `write_lock`
///   - Must acquire: write_lock → Gateway (medium) → store (write)
/// - **Reads** (lookups, scans): take the store read lock only
///
/// Nothing coordinates with other processes editing the same file.
pub struct Inventory<B: Backend = FileBackend> {
    /// Line-level access to the backing medium
    gateway: Gateway<B>,

    /// Records as of the last successful load, plus later writes
    store: RwLock<Store>,

    /// Serializes read-modify-write cycles against the medium
    write_lock: Mutex<()>,
}

impl Inventory<FileBackend> {
    /// Open the inventory file named by `config` and load it
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        let backend = FileBackend::from_config(&config)?;
        tracing::debug!(path = %backend.path().display(), "opening inventory");
        Self::with_backend(backend)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified inventory file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().inventory_path(path).build();
        Self::open(config)
    }
}

impl<B: Backend> Inventory<B> {
    /// Wrap a backend and load it
    pub fn with_backend(backend: B) -> Result<Self> {
        let inventory = Self {
            gateway: Gateway::new(backend),
            store: RwLock::new(Store::new()),
            write_lock: Mutex::new(()),
        };
        inventory.reload()?;
        Ok(inventory)
    }

    /// Discard the Store and rebuild it from the medium
    ///
    /// All-or-nothing: on a parse error the previous records stay in place.
    pub fn reload(&self) -> Result<usize> {
        let _write_guard = self.write_lock.lock();
        self.reload_locked()
    }

    /// Reload body (called with write lock held)
    fn reload_locked(&self) -> Result<usize> {
        let lines = self.gateway.read_all()?;
        let mut store = self.store.write();
        match store.load(&lines) {
            Ok(count) => {
                tracing::debug!(records = count, "loaded inventory");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected inventory load");
                Err(e)
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Every record in file order
    pub fn records(&self) -> Vec<Record> {
        self.store.read().iter().cloned().collect()
    }

    /// Last record carrying `code`
    pub fn by_code(&self, code: &str) -> Option<Record> {
        self.store.read().by_code(code).cloned()
    }

    /// Lowest quantity, first on ties
    pub fn lowest(&self) -> Result<(usize, Record)> {
        let store = self.store.read();
        let (pos, record) = store.lowest()?;
        Ok((pos, record.clone()))
    }

    /// Highest quantity, first on ties
    pub fn highest(&self) -> Result<(usize, Record)> {
        let store = self.store.read();
        let (pos, record) = store.highest()?;
        Ok((pos, record.clone()))
    }

    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Append a new record to the medium, then to the Store
    ///
    /// Returns the record's store index. If the medium gained or lost lines
    /// behind our back, the Store is rebuilt from the medium instead of
    /// pushing the record at an index that no longer matches its line.
    pub fn add(&self, record: Record) -> Result<usize> {
        let _write_guard = self.write_lock.lock();

        let line_position = self.gateway.append_record(&record)?;

        {
            let mut store = self.store.write();
            if line_position == store.len() {
                store.push(record);
                return Ok(line_position);
            }
            tracing::warn!(
                line_position,
                store_len = store.len(),
                "medium and store disagree on record count; reloading"
            );
        }

        self.reload_locked()?;
        Ok(line_position)
    }

    /// Add `delta` to the lowest-quantity record
    pub fn restock_lowest(&self, delta: i64) -> Result<Restock> {
        let _write_guard = self.write_lock.lock();

        let (pos, quantity) = {
            let store = self.store.read();
            let (pos, record) = store.lowest()?;
            (pos, record.quantity())
        };

        self.commit_quantity(pos, checked_restock(quantity, delta)?)
    }

    /// Add `delta` to the last record carrying `code`
    pub fn restock_code(&self, code: &str, delta: i64) -> Result<Restock> {
        let _write_guard = self.write_lock.lock();

        let (pos, quantity) = {
            let store = self.store.read();
            store
                .position_of(code)
                .and_then(|pos| store.get(pos).map(|r| (pos, r.quantity())))
                .ok_or_else(|| InventoryError::RecordNotFound(code.to_string()))?
        };

        self.commit_quantity(pos, checked_restock(quantity, delta)?)
    }

    /// Overwrite the quantity of the record at store index `pos`
    pub fn set_quantity(&self, pos: usize, quantity: i64) -> Result<Restock> {
        let _write_guard = self.write_lock.lock();
        self.commit_quantity(pos, quantity)
    }

    /// Rewrite the medium, then memory (called with write lock held)
    fn commit_quantity(&self, pos: usize, quantity: i64) -> Result<Restock> {
        let previous_quantity = {
            let store = self.store.read();
            store
                .get(pos)
                .map(Record::quantity)
                .ok_or(InventoryError::PositionOutOfRange {
                    position: pos,
                    line_count: store.len() + 1,
                })?
        };

        self.gateway.rewrite_quantity_at_position(pos, quantity)?;

        let mut store = self.store.write();
        store.set_quantity(pos, quantity)?;
        let record = store
            .get(pos)
            .cloned()
            .ok_or(InventoryError::PositionOutOfRange {
                position: pos,
                line_count: store.len() + 1,
            })?;

        Ok(Restock {
            position: pos,
            previous_quantity,
            record,
        })
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the backend
    pub fn backend(&self) -> &B {
        self.gateway.backend()
    }
}

fn checked_restock(quantity: i64, delta: i64) -> Result<i64> {
    quantity
        .checked_add(delta)
        .ok_or(InventoryError::QuantityOverflow { quantity, delta })
}

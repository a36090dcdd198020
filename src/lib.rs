//! # Stockroom
//!
//! A flat-file inventory record store with:
//! - Whole-batch, fail-fast loading of a delimited text file
//! - Lookup by product code and min/max-by-quantity queries
//! - Appending new records
//! - Positional in-place quantity rewrites that leave every other line intact
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 CLI / Reports (stockroom)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Inventory                              │
//! │                   (Single Writer)                            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Store    │          │   Gateway   │
//!   │  (RwLock)   │          │ (positional)│
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          ▼                        ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Parser    │          │   Backend   │
//!   │  (Record)   │          │ (file/mem)  │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod gateway;
pub mod engine;
pub mod report;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{InventoryError, Result};
pub use config::{Config, SyncStrategy};
pub use record::Record;
pub use store::Store;
pub use gateway::{Backend, FileBackend, Gateway, MemoryBackend};
pub use engine::{Inventory, Restock};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Stockroom
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Error types for Stockroom
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using InventoryError
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Unified error type for Stockroom operations
#[derive(Debug, Error)]
pub enum InventoryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Inventory file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    // -------------------------------------------------------------------------
    // Parse Errors (fatal to the load that hit them)
    // -------------------------------------------------------------------------
    #[error("Malformed record on line {line}: {content:?} (expected country,code,product,cost,quantity)")]
    MalformedRecord { line: usize, content: String },

    #[error("Invalid {field} on line {line}: {content:?}")]
    InvalidNumber {
        field: &'static str,
        line: usize,
        content: String,
    },

    // -------------------------------------------------------------------------
    // Query Errors
    // -------------------------------------------------------------------------
    #[error("Inventory is empty")]
    EmptyStore,

    #[error("No record with product code {0}")]
    RecordNotFound(String),

    // -------------------------------------------------------------------------
    // Update Errors
    // -------------------------------------------------------------------------
    #[error("Position {position} is out of range for backing content with {line_count} lines")]
    PositionOutOfRange { position: usize, line_count: usize },

    #[error("Restocking quantity {quantity} by {delta} overflows")]
    QuantityOverflow { quantity: i64, delta: i64 },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid product code {0:?}: expected SKU followed by 5 digits")]
    InvalidProductCode(String),

    #[error("Invalid {field} {value:?}: must not contain a comma or line break")]
    InvalidField { field: &'static str, value: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl InventoryError {
    /// Attach a 1-based line number to a parse error
    ///
    /// Other variants pass through untouched.
    pub(crate) fn at_line(self, number: usize) -> Self {
        match self {
            InventoryError::MalformedRecord { content, .. } => InventoryError::MalformedRecord {
                line: number,
                content,
            },
            InventoryError::InvalidNumber { field, content, .. } => InventoryError::InvalidNumber {
                field,
                line: number,
                content,
            },
            other => other,
        }
    }
}

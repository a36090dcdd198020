//! Product code normalization for capture and search input.
//!
//! The store itself never enforces this format; only user-facing entry
//! points normalize codes before handing them to the store.

use crate::error::{InventoryError, Result};

/// Literal prefix of every product code
pub const PREFIX: &str = "SKU";

/// Number of digits after the prefix
pub const DIGITS: usize = 5;

/// Uppercase, drop all whitespace, and check for `SKU#####`
pub fn normalize(input: &str) -> Result<String> {
    let code: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();

    if is_valid(&code) {
        Ok(code)
    } else {
        Err(InventoryError::InvalidProductCode(code))
    }
}

/// Exact format check, case-sensitive
pub fn is_valid(code: &str) -> bool {
    match code.strip_prefix(PREFIX) {
        Some(digits) => digits.len() == DIGITS && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

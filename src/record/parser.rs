//! Record Parser
//!
//! Turns one delimited line into a Record.

use crate::error::{InventoryError, Result};

use super::{Record, DELIMITER, FIELD_COUNT};

/// Parse a single line (without its terminator) into a Record
///
/// Positional: the first five fields are used, anything after the fifth is
/// ignored. Text fields are taken verbatim, no trimming or case folding;
/// surrounding whitespace around cost and quantity is tolerated.
///
/// Errors carry line number 0; `Store::load` fills in the real one.
pub fn parse_line(line: &str) -> Result<Record> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < FIELD_COUNT {
        return Err(InventoryError::MalformedRecord {
            line: 0,
            content: line.to_string(),
        });
    }

    let cost: f64 = fields[3].trim().parse().map_err(|_| InventoryError::InvalidNumber {
        field: "cost",
        line: 0,
        content: line.to_string(),
    })?;

    let quantity: i64 = fields[4].trim().parse().map_err(|_| InventoryError::InvalidNumber {
        field: "quantity",
        line: 0,
        content: line.to_string(),
    })?;

    Ok(Record::new(fields[0], fields[1], fields[2], cost, quantity))
}

//! Record Module
//!
//! The value type for one product entry and its line codec.
//!
//! ## Line Format
//! ```text
//! ┌─────────┬──────┬─────────┬──────┬──────────┐
//! │ country │ code │ product │ cost │ quantity │   (comma separated)
//! └─────────┴──────┴─────────┴──────┴──────────┘
//! ```
//! No quoting or escaping: a comma inside a field shifts every later field.

pub mod code;
mod parser;

use std::fmt;

use crate::error::{InventoryError, Result};

pub use parser::parse_line;

/// Field delimiter of the backing file
pub const DELIMITER: char = ',';

/// Number of positional fields in a record line
pub const FIELD_COUNT: usize = 5;

/// Index of the quantity field within a split line
pub const QUANTITY_FIELD: usize = 4;

/// Header line written at the top of a fresh backing file
pub const HEADER: &str = "country,code,product,cost,quantity";

/// One product entry
///
/// Everything except `quantity` is fixed once constructed; quantity changes
/// only through the restock path so the file stays in step with memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    country: String,
    code: String,
    product: String,
    cost: f64,
    quantity: i64,
}

impl Record {
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: f64,
        quantity: i64,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Stock value of this entry (cost * quantity)
    pub fn value(&self) -> f64 {
        self.cost * self.quantity as f64
    }

    /// Serialize back to the 5-field delimited form (no line terminator)
    pub fn to_line(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}{d}{}",
            self.country,
            self.code,
            self.product,
            self.cost,
            self.quantity,
            d = DELIMITER
        )
    }

    /// Check that every text field survives a trip through `to_line`
    ///
    /// A delimiter or line break inside a field would split into extra
    /// fields or lines on the next load.
    pub fn check_fields(&self) -> Result<()> {
        let fields = [
            ("country", &self.country),
            ("code", &self.code),
            ("product", &self.product),
        ];
        for (field, value) in fields {
            if value.contains([DELIMITER, '\n', '\r']) {
                return Err(InventoryError::InvalidField {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Country:  {}", self.country)?;
        writeln!(f, "Code:     {}", self.code)?;
        writeln!(f, "Product:  {}", self.product)?;
        writeln!(f, "Cost:     {}", self.cost)?;
        writeln!(f, "Quantity: {}", self.quantity)
    }
}

//! Store Module
//!
//! Ordered in-memory collection of Records loaded from the backing content.
//!
//! ## Position Contract
//! ```text
//!   backing line 0   header (discarded)
//!   backing line 1 ↔ store index 0
//!   backing line 2 ↔ store index 1
//!   ...
//! ```
//! Store index `i` always maps to backing line `i + 1`. The gateway relies on
//! this to rewrite a record in place, so the store never reorders, filters,
//! or merges records.
//!
//! ## Tie-breaks
//! - `by_code`: last matching record wins (later lines override earlier ones)
//! - `lowest` / `highest`: first record with the extreme quantity wins

use std::slice;

use crate::error::{InventoryError, Result};
use crate::record::{parse_line, Record};

/// In-memory record index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from backing lines (header first)
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        store.load(lines)?;
        Ok(store)
    }

    /// Replace the contents with freshly parsed lines
    ///
    /// The first line is the header and is skipped. Parsing is fail-fast:
    /// the first bad line aborts the load and the store keeps its previous
    /// records untouched.
    pub fn load<I, S>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();

        // Line numbers are 1-based with the header as line 1
        for (index, line) in lines.into_iter().enumerate().skip(1) {
            let record = parse_line(line.as_ref()).map_err(|e| e.at_line(index + 1))?;
            records.push(record);
        }

        self.records = records;
        Ok(self.records.len())
    }

    /// Last record whose code matches exactly
    pub fn by_code(&self, code: &str) -> Option<&Record> {
        self.position_of(code).map(|pos| &self.records[pos])
    }

    /// Index of the last record whose code matches exactly
    pub fn position_of(&self, code: &str) -> Option<usize> {
        self.records.iter().rposition(|r| r.code() == code)
    }

    /// Record with the smallest quantity, first occurrence on ties
    pub fn lowest(&self) -> Result<(usize, &Record)> {
        self.first_extreme(|candidate, best| candidate < best)
    }

    /// Record with the largest quantity, first occurrence on ties
    pub fn highest(&self) -> Result<(usize, &Record)> {
        self.first_extreme(|candidate, best| candidate > best)
    }

    /// Scan keeping the current best; only a strictly better quantity
    /// replaces it, which makes ties resolve to the earliest position.
    fn first_extreme(&self, better: impl Fn(i64, i64) -> bool) -> Result<(usize, &Record)> {
        let mut iter = self.records.iter().enumerate();
        let mut best = iter.next().ok_or(InventoryError::EmptyStore)?;

        for (pos, record) in iter {
            if better(record.quantity(), best.1.quantity()) {
                best = (pos, record);
            }
        }

        Ok(best)
    }

    /// Record at a store index
    pub fn get(&self, pos: usize) -> Option<&Record> {
        self.records.get(pos)
    }

    /// Full scan in backing-file order; call again to restart
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record (caller has already appended it to the medium)
    pub(crate) fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Overwrite a quantity (caller has already rewritten the medium)
    pub(crate) fn set_quantity(&mut self, pos: usize, quantity: i64) -> Result<()> {
        let line_count = self.records.len() + 1;
        let record = self
            .records
            .get_mut(pos)
            .ok_or(InventoryError::PositionOutOfRange {
                position: pos,
                line_count,
            })?;
        record.set_quantity(quantity);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

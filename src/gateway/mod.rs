//! Persistence Gateway Module
//!
//! Moves records between the Store and the backing medium.
//!
//! ## Responsibilities
//! - Read the whole medium as lines (`\n` and `\r\n` both accepted)
//! - Append one serialized record as a new trailing line
//! - Rewrite one record's quantity by position, leaving every other byte alone
//!
//! ## Positional Rewrite
//! ```text
//!   read content ──► split into lines (terminators kept)
//!                        │
//!                        ▼
//!              line[pos + 1] ──► split fields ──► replace field 4 ──► join
//!                        │
//!                        ▼
//!   concat all lines ──► Backend::replace (whole content, atomic)
//! ```
//! There is no version check between the read and the replace: if something
//! else edits the medium after the Store was loaded, `pos` may now point at a
//! different record. A shrunken medium is caught as `PositionOutOfRange`.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::{InventoryError, Result};
use crate::record::{Record, DELIMITER, FIELD_COUNT, HEADER, QUANTITY_FIELD};

/// The medium holding the delimited inventory text
///
/// Implementations must make `replace` all-or-nothing: a reader sees either
/// the old content or the new content, never a mix or a truncated file.
pub trait Backend: Send + Sync {
    /// Read the entire content
    fn read_content(&self) -> Result<String>;

    /// Append raw text at the end
    fn append(&self, chunk: &str) -> Result<()>;

    /// Swap the entire content for `content`
    fn replace(&self, content: &str) -> Result<()>;
}

/// Line-oriented access to a Backend
pub struct Gateway<B: Backend> {
    backend: B,
}

impl<B: Backend> Gateway<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read every line of the medium, terminators stripped
    ///
    /// A trailing newline does not produce an extra empty line.
    pub fn read_all(&self) -> Result<Vec<String>> {
        let content = self.backend.read_content()?;
        let lines: Vec<String> = split_lines(&content)
            .into_iter()
            .map(|(body, _)| body.to_string())
            .collect();

        tracing::debug!(lines = lines.len(), "read backing content");
        Ok(lines)
    }

    /// Append a record as the new last line
    ///
    /// Returns the store index the record now occupies (its line number
    /// minus the header). An empty medium gets the header written first.
    /// Records whose text fields would not read back intact are refused
    /// before the medium is touched.
    pub fn append_record(&self, record: &Record) -> Result<usize> {
        record.check_fields()?;

        let content = self.backend.read_content()?;
        let mut line_count = split_lines(&content).len();

        let mut chunk = String::new();
        if content.is_empty() {
            chunk.push_str(HEADER);
            line_count += 1;
        }
        // Only separate when the last line is still open
        if !chunk.is_empty() || !content.ends_with('\n') {
            chunk.push('\n');
        }
        chunk.push_str(&record.to_line());

        self.backend.append(&chunk)?;

        let position = line_count - 1;
        tracing::info!(code = record.code(), position, "appended record");
        Ok(position)
    }

    /// Replace the quantity field of the record at store index `pos`
    ///
    /// Re-reads the medium, edits line `pos + 1` only, and writes everything
    /// back through a single `Backend::replace`.
    pub fn rewrite_quantity_at_position(&self, pos: usize, quantity: i64) -> Result<()> {
        let content = self.backend.read_content()?;
        let lines = split_lines(&content);

        let target = match pos.checked_add(1) {
            Some(target) if target < lines.len() => target,
            _ => {
                tracing::warn!(pos, line_count = lines.len(), "stale position for rewrite");
                return Err(InventoryError::PositionOutOfRange {
                    position: pos,
                    line_count: lines.len(),
                });
            }
        };

        let quantity_text = quantity.to_string();
        let separator = DELIMITER.to_string();

        let (body, _) = lines[target];
        let mut fields: Vec<&str> = body.split(DELIMITER).collect();
        if fields.len() < FIELD_COUNT {
            return Err(InventoryError::MalformedRecord {
                line: target + 1,
                content: body.to_string(),
            });
        }

        fields[QUANTITY_FIELD] = &quantity_text;
        let replaced = fields.join(separator.as_str());

        let mut rewritten = String::with_capacity(content.len() + quantity_text.len());
        for (index, (line, ending)) in lines.iter().enumerate() {
            if index == target {
                rewritten.push_str(&replaced);
            } else {
                rewritten.push_str(line);
            }
            rewritten.push_str(ending);
        }

        self.backend.replace(&rewritten)?;

        tracing::info!(pos, line = target + 1, quantity, "rewrote quantity");
        Ok(())
    }

    /// Get the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Split content into `(body, terminator)` pairs
///
/// The terminator is `"\r\n"`, `"\n"`, or `""` for an unterminated last line.
/// Concatenating every pair reproduces the input byte for byte.
fn split_lines(content: &str) -> Vec<(&str, &str)> {
    content
        .split_inclusive('\n')
        .map(|segment| match segment.strip_suffix("\r\n") {
            Some(body) => (body, "\r\n"),
            None => match segment.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (segment, ""),
            },
        })
        .collect()
}

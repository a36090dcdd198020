//! In-memory backend for tests, benchmarks, and embedding.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;

use super::Backend;

/// Backend holding the content in a shared String
///
/// Clones share the same content, so a test can keep a handle and edit the
/// "medium" underneath an Inventory.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    content: Arc<Mutex<String>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend seeded with `content`
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Arc::new(Mutex::new(content.into())),
        }
    }

    /// Snapshot of the current content
    pub fn content(&self) -> String {
        self.content.lock().clone()
    }

    /// Overwrite the content out of band
    pub fn set_content(&self, content: impl Into<String>) {
        *self.content.lock() = content.into();
    }
}

impl Backend for MemoryBackend {
    fn read_content(&self) -> Result<String> {
        Ok(self.content.lock().clone())
    }

    fn append(&self, chunk: &str) -> Result<()> {
        self.content.lock().push_str(chunk);
        Ok(())
    }

    fn replace(&self, content: &str) -> Result<()> {
        *self.content.lock() = content.to_string();
        Ok(())
    }
}

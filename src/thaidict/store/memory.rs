use super::backend::StorageBackend;
use super::{DictionaryStore, LoadStatus, EMPTY_DOCUMENT};
use crate::error::{DictError, Result};
use crate::model::Document;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

pub type InMemoryDictionary = DictionaryStore<MemBackend>;

impl Default for InMemoryDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDictionary {
    pub fn new() -> Self {
        DictionaryStore::from_parts(
            MemBackend::with_contents(EMPTY_DOCUMENT),
            Document::new(),
            LoadStatus::Created,
        )
    }
}

/// In-memory storage backend for testing.
///
/// Keeps the serialized document exactly as the filesystem backend would
/// write it, so tests can assert on the persisted form.
#[derive(Default)]
pub struct MemBackend {
    contents: Mutex<Option<String>>,
    simulate_write_error: AtomicBool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: Mutex::new(Some(contents.to_string())),
            simulate_write_error: AtomicBool::new(false),
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// The last document written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl StorageBackend for MemBackend {
    fn read_document(&self) -> Result<Option<String>> {
        Ok(self.contents())
    }

    fn write_document(&self, contents: &str) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(DictError::Store("Simulated write error".to_string()));
        }
        *self
            .contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://dictionary.json")
    }
}

// --- Test Fixtures ---

//! # Storage Layer
//!
//! [`DictionaryStore`] owns the dictionary document: an ordered mapping from
//! normalized english key to `{thai, category}`. Raw I/O is delegated to a
//! [`StorageBackend`], so the same store logic runs against a JSON file in
//! production and an in-memory buffer in tests.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: Production file-based storage
//!   - One pretty-printed JSON document (4-space indent, UTF-8, Thai kept literal)
//!   - Atomic replace through a temporary sibling file
//!
//! - [`memory::MemBackend`]: In-memory storage for testing
//!
//! ## Write-through
//!
//! Every mutation builds the next snapshot of the document, writes the whole
//! snapshot through the backend, and only then makes it the in-memory state.
//! Memory and storage therefore never disagree after a call returns, and a
//! failed write leaves the previous state in place.
//!
//! All operations take `&self` and run under one mutex, so a store can be
//! shared between threads behind an `Arc`.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "dog": {
//!         "thai": "สุนัข",
//!         "category": "animals"
//!     },
//!     "hello world": {
//!         "thai": "สวัสดีชาวโลก",
//!         "category": null
//!     }
//! }
//! ```

use crate::error::{DictError, Result};
use crate::messages;
use crate::model::{Document, Entry, SortField, TranslationCheck, WordData};
use crate::normalize::{normalize_key, normalize_optional, normalize_text};
use crate::validation::{Field, ValidationError};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

pub mod backend;
pub mod fs;
pub mod memory;

pub use backend::StorageBackend;

pub(crate) const EMPTY_DOCUMENT: &str = "{}";

/// How the document was obtained when the store was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// An existing document was read.
    Loaded,
    /// No document existed; an empty one was written.
    Created,
    /// The stored document could not be parsed and the store started empty.
    /// The stored bytes are left untouched until the next mutation.
    Recovered { reason: String },
    /// The document was read, but some stored entries were unusable (blank
    /// after normalization, or colliding with an earlier key) and were left
    /// out. `dropped` holds their keys as stored. The next mutation rewrites
    /// the document without them.
    Repaired { dropped: Vec<String> },
}

pub struct DictionaryStore<B: StorageBackend> {
    backend: B,
    document: Mutex<Document>,
    load_status: LoadStatus,
}

impl<B: StorageBackend> DictionaryStore<B> {
    /// Load the document from `backend`, creating an empty one if none exists.
    pub fn open(backend: B) -> Result<Self> {
        let (document, load_status) = match backend.read_document()? {
            None => {
                let document = Document::new();
                backend.write_document(&render_document(&document)?)?;
                info!(location = %backend.location().display(), "created empty dictionary");
                (document, LoadStatus::Created)
            }
            Some(raw) => match parse_document(&raw) {
                Ok((document, dropped)) if dropped.is_empty() => {
                    debug!(entries = document.len(), "loaded dictionary");
                    (document, LoadStatus::Loaded)
                }
                Ok((document, dropped)) => {
                    warn!(
                        location = %backend.location().display(),
                        dropped = dropped.len(),
                        "loaded dictionary without unusable entries"
                    );
                    (document, LoadStatus::Repaired { dropped })
                }
                Err(e) => {
                    warn!(
                        location = %backend.location().display(),
                        error = %e,
                        "dictionary document is unreadable, starting with an empty dictionary"
                    );
                    (
                        Document::new(),
                        LoadStatus::Recovered {
                            reason: e.to_string(),
                        },
                    )
                }
            },
        };

        Ok(Self::from_parts(backend, document, load_status))
    }

    pub(crate) fn from_parts(backend: B, document: Document, load_status: LoadStatus) -> Self {
        Self {
            backend,
            document: Mutex::new(document),
            load_status,
        }
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Add a new word. Fails with `DuplicateKey` if its normalized key exists.
    pub fn add(&self, entry: &Entry) -> Result<()> {
        let key = normalize_key(&entry.english);
        if key.is_empty() {
            return Err(ValidationError::EmptyField(Field::English).into());
        }
        let data = stored_data(entry)?;

        self.mutate(|doc| {
            if doc.contains_key(&key) {
                return Err(DictError::DuplicateKey(key.clone()));
            }
            doc.insert(key.clone(), data);
            Ok(())
        })?;

        info!(key = %key, "added word");
        Ok(())
    }

    /// Look a word up. The returned `english` is the normalized key.
    pub fn get(&self, english: &str) -> Result<Entry> {
        let key = normalize_key(english);
        let doc = self.lock();
        doc.get(&key)
            .map(|data| Entry::from_stored(&key, data))
            .ok_or(DictError::NotFound(key))
    }

    /// All entries in document order.
    pub fn get_all(&self) -> Vec<Entry> {
        self.collect(|_, _| true)
    }

    /// Overwrite the translation and category of an existing word in place.
    pub fn update(&self, entry: &Entry) -> Result<()> {
        let key = normalize_key(&entry.english);
        let data = stored_data(entry)?;

        self.mutate(|doc| match doc.get_mut(&key) {
            Some(slot) => {
                *slot = data;
                Ok(())
            }
            None => Err(DictError::NotFound(key.clone())),
        })?;

        info!(key = %key, "updated word");
        Ok(())
    }

    pub fn delete(&self, english: &str) -> Result<()> {
        let key = normalize_key(english);

        self.mutate(|doc| match doc.shift_remove(&key) {
            Some(_) => Ok(()),
            None => Err(DictError::NotFound(key.clone())),
        })?;

        info!(key = %key, "deleted word");
        Ok(())
    }

    pub fn delete_all(&self) -> Result<()> {
        let removed = self.mutate(|doc| {
            let removed = doc.len();
            doc.clear();
            Ok(removed)
        })?;

        info!(removed, "deleted all words");
        Ok(())
    }

    /// Entries whose category equals the normalized `category` exactly.
    pub fn get_by_category(&self, category: &str) -> Vec<Entry> {
        let wanted = normalize_text(category);
        self.collect(|_, data| data.category.as_deref() == Some(wanted.as_str()))
    }

    /// Case-insensitive substring match over english, thai and category.
    pub fn search(&self, term: &str) -> Vec<Entry> {
        let term_lower = term.to_lowercase();
        self.collect(|key, data| {
            key.to_lowercase().contains(&term_lower)
                || data.thai.to_lowercase().contains(&term_lower)
                || data
                    .category
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&term_lower))
        })
    }

    /// Compare a Thai attempt against the stored translation.
    pub fn check_translation(&self, english: &str, thai_attempt: &str) -> TranslationCheck {
        let key = normalize_key(english);
        let doc = self.lock();

        match doc.get(&key) {
            None => TranslationCheck {
                correct: false,
                message: messages::WORD_NOT_IN_SYSTEM.to_string(),
            },
            Some(data) if data.thai == normalize_text(thai_attempt) => TranslationCheck {
                correct: true,
                message: messages::CORRECT.to_string(),
            },
            Some(data) => TranslationCheck {
                correct: false,
                message: messages::incorrect(&data.thai),
            },
        }
    }

    /// Reorder the document by `field` (stable, ascending) and persist the new order.
    pub fn sort(&self, field: SortField) -> Result<Vec<Entry>> {
        let sorted = self.mutate(|doc| {
            doc.sort_by(|k1, v1, k2, v2| field.key_of(k1, v1).cmp(field.key_of(k2, v2)));
            Ok(doc
                .iter()
                .map(|(key, data)| Entry::from_stored(key, data))
                .collect::<Vec<_>>())
        })?;

        info!(%field, "sorted dictionary");
        Ok(sorted)
    }

    fn lock(&self) -> MutexGuard<'_, Document> {
        // The document is only replaced after a successful write, so a
        // poisoned guard still holds a consistent snapshot.
        self.document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn collect<F>(&self, mut keep: F) -> Vec<Entry>
    where
        F: FnMut(&str, &WordData) -> bool,
    {
        self.lock()
            .iter()
            .filter(|(key, data)| keep(key.as_str(), data))
            .map(|(key, data)| Entry::from_stored(key, data))
            .collect()
    }

    /// Apply `change` to a copy of the document, persist the copy, then commit it.
    fn mutate<T, F>(&self, change: F) -> Result<T>
    where
        F: FnOnce(&mut Document) -> Result<T>,
    {
        let mut current = self.lock();
        let mut next = current.clone();
        let out = change(&mut next)?;

        self.backend.write_document(&render_document(&next)?)?;
        debug!(entries = next.len(), "persisted dictionary");

        *current = next;
        Ok(out)
    }
}

fn stored_data(entry: &Entry) -> Result<WordData> {
    let thai = normalize_text(&entry.thai);
    if thai.is_empty() {
        return Err(ValidationError::EmptyField(Field::Thai).into());
    }
    Ok(WordData {
        thai,
        category: normalize_optional(entry.category.as_deref()),
    })
}

/// Serialize with 4-space indentation; non-ASCII text is written literally.
pub fn render_document(document: &Document) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| DictError::Store(e.to_string()))
}

/// Parse a stored document, bringing keys and values into normalized form.
///
/// Documents written by older versions only lowercased their keys. When two
/// stored keys normalize to the same key, the first one wins. Entries whose
/// key or thai is blank after normalization are left out. The keys of every
/// entry left out are returned alongside the document, as they were stored.
pub fn parse_document(raw: &str) -> Result<(Document, Vec<String>)> {
    let stored: Document = serde_json::from_str(raw)?;
    let mut document = Document::with_capacity(stored.len());
    let mut dropped = Vec::new();

    for (raw_key, data) in stored {
        let key = normalize_key(&raw_key);
        let thai = normalize_text(&data.thai);
        if key.is_empty() || thai.is_empty() {
            warn!(stored_as = %raw_key, "dropping entry with a blank key or translation");
            dropped.push(raw_key);
            continue;
        }
        if document.contains_key(&key) {
            warn!(key = %key, stored_as = %raw_key, "dropping entry whose key collides after normalization");
            dropped.push(raw_key);
            continue;
        }
        document.insert(
            key,
            WordData {
                thai,
                category: normalize_optional(data.category.as_deref()),
            },
        );
    }

    Ok((document, dropped))
}

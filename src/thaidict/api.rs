//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every dictionary operation, whichever client drives it (the
//! bundled CLI, or a web transport built on top of the library).
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and no status-code mapping; transports use
//! [`DictError::status_code`](crate::error::DictError::status_code) for that.
//!
//! Every method takes `&self`: the store serializes access internally, so a
//! `DictApi` can sit behind an `Arc` and serve concurrent requests.

use crate::commands;
use crate::error::Result;
use crate::model::Entry;
use crate::store::{DictionaryStore, StorageBackend};
use std::path::Path;

/// The main API facade for dictionary operations.
///
/// Generic over `StorageBackend` to allow different storage backends.
pub struct DictApi<B: StorageBackend> {
    store: DictionaryStore<B>,
}

impl<B: StorageBackend> DictApi<B> {
    pub fn new(store: DictionaryStore<B>) -> Self {
        Self { store }
    }

    pub fn add_word(
        &self,
        english: &str,
        thai: &str,
        category: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, english, thai, category)
    }

    pub fn list_words(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, None)
    }

    pub fn words_by_category(&self, category: &str) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, Some(category))
    }

    pub fn get_word(&self, english: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, english)
    }

    /// Update the word addressed by `target` with the given values.
    pub fn update_word(
        &self,
        target: &str,
        english: &str,
        thai: &str,
        category: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&self.store, target, english, thai, category)
    }

    pub fn delete_word(&self, english: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, english)
    }

    pub fn delete_all_words(&self) -> Result<commands::CmdResult> {
        commands::delete::run_all(&self.store)
    }

    pub fn search_words(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn check_translation(
        &self,
        english: &str,
        thai_attempt: &str,
    ) -> Result<commands::CmdResult> {
        commands::check::run(&self.store, english, thai_attempt)
    }

    pub fn sort_words(&self, sort_by: &str) -> Result<commands::CmdResult> {
        commands::sort::run(&self.store, sort_by)
    }

    pub fn import_words(&self, entries: &[Entry]) -> Result<commands::CmdResult> {
        commands::import::run(&self.store, entries)
    }

    pub fn import_csv(&self, path: &Path) -> Result<commands::CmdResult> {
        let entries = commands::import::read_csv(path)?;
        commands::import::run(&self.store, &entries)
    }

    pub fn store(&self) -> &DictionaryStore<B> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ImportSummary, MessageLevel};

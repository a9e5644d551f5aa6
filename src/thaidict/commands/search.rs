use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{DictionaryStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &DictionaryStore<B>, term: &str) -> Result<CmdResult> {
    Ok(CmdResult::default().with_entries(store.search(term)))
}

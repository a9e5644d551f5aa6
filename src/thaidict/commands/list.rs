use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{DictionaryStore, StorageBackend};

/// List every word, or only those in `category` when given.
pub fn run<B: StorageBackend>(
    store: &DictionaryStore<B>,
    category: Option<&str>,
) -> Result<CmdResult> {
    let entries = match category {
        Some(category) => store.get_by_category(category),
        None => store.get_all(),
    };
    Ok(CmdResult::default().with_entries(entries))
}

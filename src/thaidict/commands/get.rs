use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{DictionaryStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &DictionaryStore<B>, english: &str) -> Result<CmdResult> {
    let entry = store.get(english)?;
    Ok(CmdResult::default().with_entries(vec![entry]))
}

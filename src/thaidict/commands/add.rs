use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::messages;
use crate::store::{DictionaryStore, StorageBackend};
use crate::validation::validate_entry;

pub fn run<B: StorageBackend>(
    store: &DictionaryStore<B>,
    english: &str,
    thai: &str,
    category: Option<&str>,
) -> Result<CmdResult> {
    let entry = validate_entry(english, thai, category)?;
    store.add(&entry)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(messages::added(&entry.english)))
        .with_entries(vec![entry]))
}

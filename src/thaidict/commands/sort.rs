use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::messages;
use crate::model::SortField;
use crate::store::{DictionaryStore, StorageBackend};

/// Sort the dictionary by `sort_by` and persist the new order.
pub fn run<B: StorageBackend>(store: &DictionaryStore<B>, sort_by: &str) -> Result<CmdResult> {
    let field: SortField = sort_by.parse()?;
    let sorted = store.sort(field)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(messages::sorted(&field.to_string())))
        .with_entries(sorted))
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DictError, Result};
use crate::messages;
use crate::normalize::normalize_key;
use crate::store::{DictionaryStore, StorageBackend};
use crate::validation::validate_entry;

/// Update the word addressed by `target`.
///
/// The entry's own english must name the same word as `target`; the key of
/// an entry never changes through an update.
pub fn run<B: StorageBackend>(
    store: &DictionaryStore<B>,
    target: &str,
    english: &str,
    thai: &str,
    category: Option<&str>,
) -> Result<CmdResult> {
    if normalize_key(target) != normalize_key(english) {
        return Err(DictError::KeyMismatch {
            path: target.to_string(),
            body: english.to_string(),
        });
    }

    let entry = validate_entry(english, thai, category)?;
    store.update(&entry)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(messages::updated(&entry.english)))
        .with_entries(vec![entry]))
}

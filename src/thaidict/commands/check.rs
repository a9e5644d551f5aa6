use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DictionaryStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &DictionaryStore<B>,
    english: &str,
    thai_attempt: &str,
) -> Result<CmdResult> {
    let check = store.check_translation(english, thai_attempt);
    let message = if check.correct {
        CmdMessage::success(&check.message)
    } else {
        CmdMessage::error(&check.message)
    };
    Ok(CmdResult::default().with_message(message).with_check(check))
}

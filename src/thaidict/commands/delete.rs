use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::messages;
use crate::store::{DictionaryStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &DictionaryStore<B>, english: &str) -> Result<CmdResult> {
    store.delete(english)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(messages::deleted(english.trim()))))
}

pub fn run_all<B: StorageBackend>(store: &DictionaryStore<B>) -> Result<CmdResult> {
    store.delete_all()?;
    Ok(CmdResult::default().with_message(CmdMessage::success(messages::ALL_DELETED)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::DictFixture;

    #[test]
    fn deletes_one_word() {
        let store = DictFixture::new().with_animals_and_food().store;
        let result = run(&store, "Rice").unwrap();
        assert!(result.messages[0].content.contains("Rice"));
        assert!(store.get("rice").is_err());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn deletes_everything() {
        let store = DictFixture::new().with_animals_and_food().store;
        run_all(&store).unwrap();
        assert!(store.is_empty());
    }
}

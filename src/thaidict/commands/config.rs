use crate::commands::{CmdMessage, CmdResult};
use crate::config::DictConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(home: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = DictConfig::load(home)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!(
                "{} = {}",
                key,
                value.as_deref().unwrap_or("(unset)")
            )));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(home)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

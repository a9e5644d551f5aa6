use crate::error::{DictError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DICTIONARY_FILENAME: &str = "dictionary.json";

/// Configuration for thaidict, stored as config.json in the thaidict home.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictConfig {
    /// Location of the dictionary document. Relative paths resolve against the home dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary_path: Option<PathBuf>,

    /// Default log filter (e.g. "info", "thaidict=debug")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl DictConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DictError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            DictError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DictError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DictError::Serialization)?;
        fs::write(config_path, content).map_err(DictError::Io)?;
        Ok(())
    }

    /// The dictionary document to open, given the home directory.
    pub fn dictionary_path_in(&self, home: &Path) -> PathBuf {
        match &self.dictionary_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => home.join(path),
            None => home.join(DEFAULT_DICTIONARY_FILENAME),
        }
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "dictionary-path" => Ok(self
                .dictionary_path
                .as_ref()
                .map(|p| p.display().to_string())),
            "log-level" => Ok(self.log_level.clone()),
            other => Err(DictError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let value = (!value.is_empty()).then(|| value.to_string());
        match key {
            "dictionary-path" => self.dictionary_path = value.map(PathBuf::from),
            "log-level" => self.log_level = value,
            other => return Err(DictError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["dictionary-path", "log-level"]
    }
}

use crate::config::DictConfig;
use crate::model::{Entry, TranslationCheck};

pub mod add;
pub mod check;
pub mod config;
pub mod delete;
pub mod get;
pub mod import;
pub mod list;
pub mod search;
pub mod sort;
pub mod update;

pub use import::ImportSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub entries: Vec<Entry>,
    pub check: Option<TranslationCheck>,
    pub import: Option<ImportSummary>,
    pub config: Option<DictConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_check(mut self, check: TranslationCheck) -> Self {
        self.check = Some(check);
        self
    }

    pub fn with_import(mut self, summary: ImportSummary) -> Self {
        self.import = Some(summary);
        self
    }

    pub fn with_config(mut self, config: DictConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

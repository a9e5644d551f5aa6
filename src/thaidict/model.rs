use crate::error::DictError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One dictionary record as seen by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub english: String,
    pub thai: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Entry {
    pub fn new(english: impl Into<String>, thai: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            thai: thai.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub(crate) fn from_stored(key: &str, data: &WordData) -> Self {
        Self {
            english: key.to_string(),
            thai: data.thai.clone(),
            category: data.category.clone(),
        }
    }
}

/// The value stored under a normalized key in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordData {
    pub thai: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// The full persisted mapping, in document order.
pub type Document = IndexMap<String, WordData>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    English,
    Thai,
    Category,
}

impl SortField {
    /// The value an entry is ordered by. Absent categories sort as "".
    pub fn key_of<'a>(&self, english: &'a str, data: &'a WordData) -> &'a str {
        match self {
            SortField::English => english,
            SortField::Thai => &data.thai,
            SortField::Category => data.category.as_deref().unwrap_or(""),
        }
    }
}

impl FromStr for SortField {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "english" => Ok(SortField::English),
            "thai" => Ok(SortField::Thai),
            "category" => Ok(SortField::Category),
            other => Err(DictError::InvalidSortField(other.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::English => write!(f, "english"),
            SortField::Thai => write!(f, "thai"),
            SortField::Category => write!(f, "category"),
        }
    }
}

/// Outcome of checking a translation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationCheck {
    #[serde(rename = "is_correct")]
    pub correct: bool,
    pub message: String,
}

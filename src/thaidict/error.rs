use crate::messages;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictError {
    #[error("Invalid entry: {0}")]
    Validation(#[from] ValidationError),

    #[error("Word already exists: {0}")]
    DuplicateKey(String),

    #[error("{}: {}", messages::WORD_NOT_FOUND, .0)]
    NotFound(String),

    #[error("Invalid sort field '{0}' (expected english, thai or category)")]
    InvalidSortField(String),

    #[error("{}: '{}' != '{}'", messages::KEY_MISMATCH, .body, .path)]
    KeyMismatch { path: String, body: String },

    #[error("{}: {}", messages::NO_VALID_ROWS, .0)]
    NoValidRows(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Coarse classification of a [`DictError`], stable across variants that
/// share the same meaning for a calling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyField,
    InvalidCharacters,
    DuplicateKey,
    NotFound,
    InvalidSortField,
    KeyMismatch,
    NoValidRows,
    PersistenceFailure,
    Config,
}

impl DictError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DictError::Validation(ValidationError::EmptyField(_)) => ErrorKind::EmptyField,
            DictError::Validation(ValidationError::InvalidCharacters(_)) => {
                ErrorKind::InvalidCharacters
            }
            DictError::DuplicateKey(_) => ErrorKind::DuplicateKey,
            DictError::NotFound(_) => ErrorKind::NotFound,
            DictError::InvalidSortField(_) => ErrorKind::InvalidSortField,
            DictError::KeyMismatch { .. } => ErrorKind::KeyMismatch,
            DictError::NoValidRows(_) => ErrorKind::NoValidRows,
            DictError::Io(_)
            | DictError::Serialization(_)
            | DictError::Csv(_)
            | DictError::Store(_) => ErrorKind::PersistenceFailure,
            DictError::Config(_) => ErrorKind::Config,
        }
    }

    /// HTTP-style status code a transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::EmptyField
            | ErrorKind::InvalidCharacters
            | ErrorKind::InvalidSortField
            | ErrorKind::KeyMismatch
            | ErrorKind::NoValidRows => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::DuplicateKey => 409,
            ErrorKind::PersistenceFailure | ErrorKind::Config => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, DictError>;

//! Entry validation.
//!
//! Valid english headwords:
//! - Non-empty after trimming
//! - ASCII letters, digits, spaces, hyphens (`-`) and ampersands (`&`) only
//!
//! Thai translations only need to be non-empty. Categories are optional.

use crate::model::Entry;
use crate::normalize::{normalize_optional, normalize_text};

/// Validates and normalizes a raw entry.
///
/// The character check runs on the trimmed english text before whitespace is
/// collapsed, so a tab inside a headword is rejected rather than folded.
///
/// # Examples
/// ```
/// use thaidict::validation::validate_entry;
///
/// let entry = validate_entry("  e-mail  &  fax ", " อีเมล ", None).unwrap();
/// assert_eq!(entry.english, "e-mail & fax");
/// assert_eq!(entry.thai, "อีเมล");
///
/// assert!(validate_entry("cat!", "แมว", None).is_err());
/// assert!(validate_entry("   ", "แมว", None).is_err());
/// ```
pub fn validate_entry(
    english: &str,
    thai: &str,
    category: Option<&str>,
) -> Result<Entry, ValidationError> {
    let english = validate_english(english)?;

    let thai = normalize_text(thai);
    if thai.is_empty() {
        return Err(ValidationError::EmptyField(Field::Thai));
    }

    Ok(Entry {
        english,
        thai,
        category: normalize_optional(category),
    })
}

/// Validates an english headword, returning its display form.
pub fn validate_english(english: &str) -> Result<String, ValidationError> {
    let trimmed = english.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(Field::English));
    }

    if let Some(ch) = trimmed.chars().find(|&ch| !is_valid_english_char(ch)) {
        return Err(ValidationError::InvalidCharacters(ch));
    }

    Ok(normalize_text(trimmed))
}

fn is_valid_english_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == ' ' || ch == '-' || ch == '&'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    English,
    Thai,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::English => write!(f, "english"),
            Field::Thai => write!(f, "thai"),
        }
    }
}

/// Error type for entry validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty after trimming
    EmptyField(Field),
    /// The english headword contains a character outside the allowed set
    InvalidCharacters(char),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyField(field) => write!(f, "{} cannot be empty", field),
            ValidationError::InvalidCharacters(ch) => write!(
                f,
                "english contains invalid character '{}' (only letters, digits, spaces, '-' and '&' allowed)",
                ch
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

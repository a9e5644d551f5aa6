//! Text normalization shared by validation and the store.
//!
//! Every key in a dictionary document is produced by [`normalize_key`], so two
//! headwords that differ only in casing or spacing are the same entry.

/// Trims, collapses whitespace runs to a single space, and lowercases.
pub fn normalize_key(text: &str) -> String {
    normalize_text(text).to_lowercase()
}

/// Trims and collapses whitespace runs to a single space, keeping casing.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Like [`normalize_text`], but an empty result becomes `None`.
pub fn normalize_optional(text: Option<&str>) -> Option<String> {
    text.map(normalize_text).filter(|s| !s.is_empty())
}

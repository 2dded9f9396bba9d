//! Error types for kotoba-core.

use thiserror::Error;

/// Result type alias using DictionaryError.
pub type Result<T> = std::result::Result<T, DictionaryError>;

/// Errors that can occur while turning a dictionary source into entries.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("entry has an empty surface form")]
    EmptySurface,

    #[error("entry {surface} has an empty gloss")]
    EmptyGloss { surface: String },

    #[error("no reading could be derived for {surface}")]
    NoReading { surface: String },

    #[error("invalid dictionary source: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors in the dictionary catalog configuration.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog lists no dictionaries")]
    Empty,

    #[error("default dictionary {0} is not listed in the catalog")]
    UnknownDefault(String),

    #[error("invalid catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reported by a transliterator for a single input.
#[derive(Debug, Error)]
#[error("transliteration failed for {input:?}: {reason}")]
pub struct TransliterationError {
    pub input: String,
    pub reason: String,
}

impl TransliterationError {
    pub fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

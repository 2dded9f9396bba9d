//! Dictionary construction from a glossary source.
//!
//! # Source format
//! ```json
//! {
//!   "猫": "cat",
//!   "確定申告": "(かくていしんこく) tax return"
//! }
//! ```
//!
//! Readings and romanizations are derived once, here, and never change for
//! the lifetime of the dictionary.

use std::collections::BTreeMap;

use crate::error::{DictionaryError, Result};
use crate::transliterate::Transliterator;
use crate::types::WordEntry;

/// Built-in entries used when no dictionary source is available.
const BUILTIN: &[(&str, &str)] = &[("私", "I; me"), ("猫", "cat")];

/// Drop a parenthetical annotation from a gloss for display.
///
/// When the gloss contains both `(` and `)`, only the text after the first
/// `)` is kept.
pub fn strip_annotation(gloss: &str) -> String {
    match (gloss.find('('), gloss.find(')')) {
        (Some(_), Some(close)) => gloss[close + 1..].trim().to_string(),
        _ => gloss.trim().to_string(),
    }
}

/// Parse a dictionary source into `(surface, gloss)` pairs.
pub fn parse_glossary(json: &str) -> Result<Vec<(String, String)>> {
    let map: BTreeMap<String, String> = serde_json::from_str(json)?;
    Ok(map.into_iter().collect())
}

impl WordEntry {
    /// Derive an entry from its surface form and gloss.
    pub fn derive(surface: &str, gloss: &str, transliterator: &dyn Transliterator) -> Result<Self> {
        if surface.trim().is_empty() {
            return Err(DictionaryError::EmptySurface);
        }
        if gloss.trim().is_empty() {
            return Err(DictionaryError::EmptyGloss {
                surface: surface.to_string(),
            });
        }

        let no_reading = || DictionaryError::NoReading {
            surface: surface.to_string(),
        };

        let tokens = transliterator.convert(surface).map_err(|_| no_reading())?;
        let reading = tokens
            .iter()
            .map(|t| t.reading.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let romanization = tokens
            .iter()
            .map(|t| t.romanization.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        if reading.trim().is_empty() || romanization.trim().is_empty() {
            return Err(no_reading());
        }

        Ok(Self {
            surface: surface.to_string(),
            reading,
            meaning: strip_annotation(gloss),
            romanization,
        })
    }
}

/// Immutable mapping from surface form to entry.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: BTreeMap<String, WordEntry>,
}

impl Dictionary {
    /// Build a dictionary, skipping malformed entries.
    ///
    /// Returns the dictionary together with the errors for every skipped
    /// entry so the caller can decide whether to fall back.
    pub fn build<I, S, G>(glossary: I, transliterator: &dyn Transliterator) -> (Self, Vec<DictionaryError>)
    where
        I: IntoIterator<Item = (S, G)>,
        S: AsRef<str>,
        G: AsRef<str>,
    {
        let mut entries = BTreeMap::new();
        let mut rejected = Vec::new();

        for (surface, gloss) in glossary {
            match WordEntry::derive(surface.as_ref(), gloss.as_ref(), transliterator) {
                Ok(entry) => {
                    entries.insert(entry.surface.clone(), entry);
                }
                Err(e) => rejected.push(e),
            }
        }

        (Self { entries }, rejected)
    }

    /// The minimal built-in dictionary.
    pub fn builtin(transliterator: &dyn Transliterator) -> Self {
        Self::build(BUILTIN.iter().copied(), transliterator).0
    }

    pub fn get(&self, surface: &str) -> Option<&WordEntry> {
        self.entries.get(surface)
    }

    /// Entries in surface order.
    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

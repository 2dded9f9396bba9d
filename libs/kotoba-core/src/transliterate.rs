//! Script conversion capability.
//!
//! A [`Transliterator`] turns mixed-script text into an ordered sequence of
//! [`Token`]s, each carrying a hiragana reading and a Hepburn romanization.
//! Matching and dictionary loading only ever see this trait, so the real
//! dictionary-backed converter can be swapped for a fixed table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::TransliterationError;

/// One converted span of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The original text of the span.
    pub orig: String,
    /// Phonetic reading in hiragana.
    pub reading: String,
    /// Latin transliteration (Hepburn).
    pub romanization: String,
}

impl Token {
    pub fn new(orig: &str, reading: &str, romanization: &str) -> Self {
        Self {
            orig: orig.to_string(),
            reading: reading.to_string(),
            romanization: romanization.to_string(),
        }
    }

    /// Whether a presentation layer should annotate this span with its reading.
    ///
    /// Kanji always get a reading; katakana only when `include_katakana` is set.
    pub fn needs_reading(&self, include_katakana: bool) -> bool {
        self.orig.chars().any(is_kanji) || (include_katakana && self.orig.chars().any(is_katakana))
    }
}

/// Converts text into reading/romanization tokens.
///
/// Implementations must be deterministic for identical input.
pub trait Transliterator: Send + Sync {
    fn convert(&self, text: &str) -> Result<Vec<Token>, TransliterationError>;
}

pub fn is_kanji(c: char) -> bool {
    matches!(c as u32, 0x4E00..=0x9FFF | 0x3400..=0x4DBF) || c == '々'
}

pub fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3041..=0x309F)
}

pub fn is_katakana(c: char) -> bool {
    matches!(c as u32, 0x30A0..=0x30FF)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    Kanji,
    /// Kanji followed by trailing hiragana.
    Okurigana,
    Hiragana,
    Katakana,
    Other,
}

impl Run {
    fn of(c: char) -> Self {
        if is_kanji(c) {
            Self::Kanji
        } else if is_hiragana(c) {
            Self::Hiragana
        } else if is_katakana(c) {
            Self::Katakana
        } else {
            Self::Other
        }
    }

    /// The run kind after appending `next`, or `None` if `next` starts a new run.
    fn extend(self, next: Run) -> Option<Run> {
        match (self, next) {
            (Self::Kanji, Self::Hiragana) => Some(Self::Okurigana),
            (Self::Okurigana, Self::Hiragana) => Some(Self::Okurigana),
            (a, b) if a == b => Some(a),
            _ => None,
        }
    }
}

/// Split text into script runs. Whitespace separates runs and is dropped.
fn split_runs(text: &str) -> Vec<(&str, Run)> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, Run)> = None;

    for (idx, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some((start, kind)) = current.take() {
                runs.push((&text[start..idx], kind));
            }
            continue;
        }

        let kind = Run::of(c);
        current = match current {
            None => Some((idx, kind)),
            Some((start, prev)) => match prev.extend(kind) {
                Some(extended) => Some((start, extended)),
                None => {
                    runs.push((&text[start..idx], prev));
                    Some((idx, kind))
                }
            },
        };
    }

    if let Some((start, kind)) = current {
        runs.push((&text[start..], kind));
    }
    runs
}

/// Dictionary-backed converter using the `kakasi` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct KakasiTransliterator;

impl KakasiTransliterator {
    pub fn new() -> Self {
        Self
    }
}

impl Transliterator for KakasiTransliterator {
    fn convert(&self, text: &str) -> Result<Vec<Token>, TransliterationError> {
        let mut tokens = Vec::new();

        for (run, kind) in split_runs(text) {
            if kind == Run::Other {
                tokens.push(Token::new(run, run, run));
                continue;
            }

            let converted = kakasi::convert(run);
            let romanization = converted.romaji.trim();
            if romanization.is_empty() {
                return Err(TransliterationError::new(run, "empty romanization"));
            }
            tokens.push(Token::new(run, converted.hiragana.trim(), romanization));
        }

        Ok(tokens)
    }
}

/// Table-driven converter for fixed vocabularies.
///
/// Inputs found in the table convert to their recorded tokens; pure ASCII
/// input passes through unchanged; anything else converts to nothing.
#[derive(Debug, Default, Clone)]
pub struct StaticTransliterator {
    table: HashMap<String, Vec<Token>>,
}

impl StaticTransliterator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tokens for an input as `(orig, reading, romanization)` triples.
    pub fn with(mut self, input: &str, tokens: &[(&str, &str, &str)]) -> Self {
        let tokens = tokens
            .iter()
            .map(|(orig, reading, romanization)| Token::new(orig, reading, romanization))
            .collect();
        self.table.insert(input.to_string(), tokens);
        self
    }
}

impl Transliterator for StaticTransliterator {
    fn convert(&self, text: &str) -> Result<Vec<Token>, TransliterationError> {
        if let Some(tokens) = self.table.get(text) {
            return Ok(tokens.clone());
        }
        if text.is_ascii() && !text.trim().is_empty() {
            return Ok(vec![Token::new(text, text, text)]);
        }
        Ok(Vec::new())
    }
}

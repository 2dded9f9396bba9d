//! Answer matching for typed answers.
//!
//! A learner may answer in the original script, in its reading, or in Latin
//! letters. Every form is reduced to a canonical string (whitespace removed,
//! transliterated, lower-cased) and the answer is correct when it equals any
//! canonical form of the reference entry.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::transliterate::Transliterator;
use crate::types::WordEntry;

/// Result of checking a typed answer against an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Canonical form of the typed answer, if one could be produced.
    pub candidate_canonical: Option<String>,
}

/// Decides whether free-text answers are equivalent to dictionary entries.
#[derive(Clone)]
pub struct AnswerMatcher {
    transliterator: Arc<dyn Transliterator>,
}

impl AnswerMatcher {
    pub fn new(transliterator: Arc<dyn Transliterator>) -> Self {
        Self { transliterator }
    }

    pub fn transliterator(&self) -> &dyn Transliterator {
        self.transliterator.as_ref()
    }

    /// Canonical comparable form of arbitrary text.
    ///
    /// Returns `None` when the text is blank, when conversion fails, or when
    /// conversion yields nothing.
    pub fn canonical_form(&self, text: &str) -> Option<String> {
        let stripped = strip_whitespace(text);
        if stripped.is_empty() {
            return None;
        }

        let tokens = self.transliterator.convert(&stripped).ok()?;
        let romanized: String = tokens.iter().map(|t| t.romanization.as_str()).collect();
        let canonical = strip_whitespace(&romanized).to_lowercase();

        (!canonical.is_empty()).then_some(canonical)
    }

    /// Whether `candidate` is an acceptable answer for `reference`.
    pub fn is_equivalent(&self, candidate: &str, reference: &WordEntry) -> bool {
        self.check(candidate, reference).is_correct
    }

    /// Check an answer, keeping the candidate's canonical form for display.
    pub fn check(&self, candidate: &str, reference: &WordEntry) -> MatchResult {
        let candidate_canonical = self.canonical_form(candidate);

        let is_correct = match candidate_canonical.as_deref() {
            Some(canonical) => {
                let matches = |form: Option<String>| form.as_deref() == Some(canonical);
                matches(self.canonical_form(&reference.surface))
                    || matches(self.canonical_form(&reference.reading))
                    || matches(canonical_romanization(&reference.romanization))
            }
            None => false,
        };

        MatchResult {
            is_correct,
            candidate_canonical,
        }
    }
}

/// A stored romanization is already Latin; it only needs normalizing.
fn canonical_romanization(romanization: &str) -> Option<String> {
    let canonical = strip_whitespace(romanization).to_lowercase();
    (!canonical.is_empty()).then_some(canonical)
}

/// Remove every whitespace character.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

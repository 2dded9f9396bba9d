//! Core library for the kotoba vocabulary drill.
//!
//! Provides:
//! - Transliteration capability (kanji/kana to reading and romanization)
//! - Dictionary construction with derived readings
//! - Answer matching across scripts (surface, reading, romanization)
//! - Presence tracking for active study sessions
//! - Dictionary catalog configuration

pub mod catalog;
pub mod dictionary;
pub mod error;
pub mod matching;
pub mod presence;
pub mod session;
pub mod transliterate;
pub mod types;

pub use catalog::{DictionaryCatalog, DictionarySource};
pub use dictionary::{parse_glossary, strip_annotation, Dictionary};
pub use error::{CatalogError, DictionaryError, Result, TransliterationError};
pub use matching::{strip_whitespace, AnswerMatcher, MatchResult};
pub use presence::{Heartbeat, PresenceTracker, LIVENESS_WINDOW};
pub use session::{SessionFingerprint, SessionId, Sha256Fingerprint};
pub use transliterate::{KakasiTransliterator, StaticTransliterator, Token, Transliterator};
pub use types::{StudyStats, WordEntry};

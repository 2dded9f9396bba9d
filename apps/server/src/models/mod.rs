//! API request and response types

use serde::{Deserialize, Serialize};

pub use kotoba_core::{SessionId, WordEntry};

/// One selectable dictionary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryInfo {
    pub name: String,
    pub file: String,
    pub is_default: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryListResponse {
    pub default: String,
    pub dictionaries: Vec<DictionaryInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NextWordQuery {
    pub dict: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NextWordResponse {
    pub dictionary: String,
    #[serde(flatten)]
    pub entry: WordEntry,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub dict: Option<String>,
    pub surface: String,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub correct: bool,
    /// Canonical form of the submitted answer
    pub candidate: Option<String>,
    pub entry: WordEntry,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PresenceResponse {
    pub active: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HeartbeatResponse {
    pub session_id: SessionId,
    pub active: usize,
}

//! Test fixtures and factory functions for request bodies.

use serde_json::json;

/// Catalog with one real dictionary and one whose file does not exist.
pub const CATALOG: &str = r#"{
    "dictionaries": [
        { "path": "animals.json", "name": "Animals" },
        { "path": "missing.json", "name": "Missing" }
    ],
    "default_dictionary": "animals.json"
}"#;

pub const ANIMALS: &str = r#"{
    "猫": "(ねこ) cat",
    "犬": "dog"
}"#;

/// Create an answer request body.
pub fn answer_request(dict: Option<&str>, surface: &str, answer: &str) -> serde_json::Value {
    json!({
        "dict": dict,
        "surface": surface,
        "answer": answer
    })
}

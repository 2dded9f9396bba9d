//! Dictionary catalog endpoint

use axum::{extract::State, Json};

use crate::models::{DictionaryInfo, DictionaryListResponse};
use crate::AppState;

/// GET /api/dictionaries
pub async fn list(State(state): State<AppState>) -> Json<DictionaryListResponse> {
    let catalog = state.dictionaries.catalog();
    let default = catalog.default_source();

    let dictionaries = catalog
        .sources()
        .iter()
        .map(|source| DictionaryInfo {
            name: source.name.clone(),
            file: source.file_name().to_string(),
            is_default: source == default,
        })
        .collect();

    Json(DictionaryListResponse {
        default: default.name.clone(),
        dictionaries,
    })
}

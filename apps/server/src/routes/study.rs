//! Study endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use rand::seq::IteratorRandom;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/study/next
/// Picks a random word from the requested dictionary
pub async fn next(
    State(state): State<AppState>,
    Query(query): Query<NextWordQuery>,
) -> Result<Json<NextWordResponse>> {
    let loaded = state.dictionaries.load(query.dict.as_deref()).await?;

    let entry = loaded
        .dictionary
        .entries()
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Dictionary {} has no words", loaded.name)))?;

    Ok(Json(NextWordResponse {
        dictionary: loaded.name,
        entry,
    }))
}

/// POST /api/study/answer
/// Checks a typed answer against a dictionary word
pub async fn answer(
    State(state): State<AppState>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>> {
    if payload.surface.trim().is_empty() {
        return Err(ApiError::BadRequest("surface must not be empty".to_string()));
    }

    let loaded = state.dictionaries.load(payload.dict.as_deref()).await?;
    let entry = loaded
        .dictionary
        .get(&payload.surface)
        .ok_or_else(|| ApiError::NotFound(format!("Word {} not in {}", payload.surface, loaded.name)))?;

    let result = state.matcher.check(&payload.answer, entry);
    tracing::debug!(
        "Answer for {} in {}: correct={}",
        entry.surface,
        loaded.name,
        result.is_correct
    );

    Ok(Json(AnswerResponse {
        correct: result.is_correct,
        candidate: result.candidate_canonical,
        entry: entry.clone(),
    }))
}

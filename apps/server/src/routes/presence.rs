//! Presence endpoints
//!
//! The caller's session is derived from its origin (first `X-Forwarded-For`
//! hop, else the peer address) and its user agent.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    Json,
};

use crate::models::{HeartbeatResponse, PresenceResponse, SessionId};
use crate::AppState;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Session id for the calling client
fn caller_session(
    state: &AppState,
    headers: &HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> SessionId {
    let forwarded = headers
        .get(FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    let origin = forwarded
        .or_else(|| peer.map(|ConnectInfo(addr)| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string());

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    state.fingerprint.session_id(&origin, user_agent)
}

/// GET /api/presence
pub async fn count(State(state): State<AppState>) -> Json<PresenceResponse> {
    Json(PresenceResponse {
        active: state.presence.active_count(),
    })
}

/// POST /api/presence/heartbeat
pub async fn heartbeat(
    State(state): State<AppState>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> Json<HeartbeatResponse> {
    let session_id = caller_session(&state, &headers, peer);
    state.presence.touch(&session_id);

    Json(HeartbeatResponse {
        active: state.presence.active_count(),
        session_id,
    })
}

/// POST /api/presence/leave
pub async fn leave(
    State(state): State<AppState>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> StatusCode {
    let session_id = caller_session(&state, &headers, peer);
    state.presence.remove(&session_id);
    tracing::debug!("Session {} left", session_id);

    StatusCode::NO_CONTENT
}

//! Presence API tests.

mod common;

use axum::http::header::USER_AGENT;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use pretty_assertions::assert_eq;

use common::TestContext;

const FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

fn server() -> (TestContext, TestServer) {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();
    (ctx, server)
}

async fn heartbeat(server: &TestServer, origin: &'static str, agent: &'static str) -> serde_json::Value {
    let response = server
        .post("/api/presence/heartbeat")
        .add_header(FORWARDED_FOR, HeaderValue::from_static(origin))
        .add_header(USER_AGENT, HeaderValue::from_static(agent))
        .await;
    response.assert_status_ok();
    response.json()
}

async fn active(server: &TestServer) -> u64 {
    let response = server.get("/api/presence").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    body["active"].as_u64().unwrap()
}

#[tokio::test]
async fn test_no_sessions_initially() {
    let (_ctx, server) = server();
    assert_eq!(active(&server).await, 0);
}

#[tokio::test]
async fn test_heartbeat_registers_session() {
    let (_ctx, server) = server();

    let body = heartbeat(&server, "10.0.0.1", "Mozilla/5.0").await;
    assert_eq!(body["active"], 1);
    assert!(body["session_id"].as_str().unwrap().starts_with("10.0.0.1-"));
    assert_eq!(active(&server).await, 1);
}

#[tokio::test]
async fn test_repeated_heartbeats_count_once() {
    let (_ctx, server) = server();

    let first = heartbeat(&server, "10.0.0.1", "Mozilla/5.0").await;
    let second = heartbeat(&server, "10.0.0.1", "Mozilla/5.0").await;

    assert_eq!(first["session_id"], second["session_id"]);
    assert_eq!(active(&server).await, 1);
}

#[tokio::test]
async fn test_distinct_clients_are_counted_separately() {
    let (_ctx, server) = server();

    heartbeat(&server, "10.0.0.1", "Mozilla/5.0").await;
    heartbeat(&server, "10.0.0.1", "curl/8.0").await;
    heartbeat(&server, "10.0.0.2, 172.16.0.1", "Mozilla/5.0").await;

    assert_eq!(active(&server).await, 3);
}

#[tokio::test]
async fn test_leave_removes_session() {
    let (ctx, server) = server();

    heartbeat(&server, "10.0.0.1", "Mozilla/5.0").await;
    heartbeat(&server, "10.0.0.2", "Mozilla/5.0").await;

    let response = server
        .post("/api/presence/leave")
        .add_header(FORWARDED_FOR, HeaderValue::from_static("10.0.0.1"))
        .add_header(USER_AGENT, HeaderValue::from_static("Mozilla/5.0"))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    assert_eq!(active(&server).await, 1);
    assert_eq!(ctx.state.presence.tracked_count(), 1);
}

#[tokio::test]
async fn test_leave_without_heartbeat_is_harmless() {
    let (_ctx, server) = server();

    let response = server.post("/api/presence/leave").await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(active(&server).await, 0);
}

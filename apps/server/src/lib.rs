pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use kotoba_core::{
    AnswerMatcher, KakasiTransliterator, PresenceTracker, SessionFingerprint, Sha256Fingerprint,
    Transliterator,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::services::dictionary_store::DictionaryStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub presence: Arc<PresenceTracker>,
    pub matcher: Arc<AnswerMatcher>,
    pub dictionaries: Arc<DictionaryStore>,
    pub fingerprint: Arc<dyn SessionFingerprint>,
}

impl AppState {
    /// Wire the state around a single transliterator.
    pub fn new(config: &ServerConfig, transliterator: Arc<dyn Transliterator>) -> Self {
        let catalog = config.load_catalog();
        Self {
            presence: Arc::new(PresenceTracker::new()),
            matcher: Arc::new(AnswerMatcher::new(transliterator.clone())),
            dictionaries: Arc::new(DictionaryStore::new(
                catalog,
                config.dictionary_dir.clone(),
                transliterator,
            )),
            fingerprint: Arc::new(Sha256Fingerprint),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/dictionaries", get(routes::dictionaries::list))
        .route("/api/study/next", get(routes::study::next))
        .route("/api/study/answer", post(routes::study::answer))
        .route("/api/presence", get(routes::presence::count))
        .route("/api/presence/heartbeat", post(routes::presence::heartbeat))
        .route("/api/presence/leave", post(routes::presence::leave))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    tracing::info!("Loading dictionary catalog from {}", config.catalog_path.display());
    let state = AppState::new(&config, Arc::new(KakasiTransliterator::new()));

    tracing::info!("Warming default dictionary...");
    let default = state.dictionaries.load(None).await?;
    tracing::info!("Default dictionary {} ready with {} words", default.name, default.dictionary.len());

    services::sweeper::spawn(state.presence.clone());

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

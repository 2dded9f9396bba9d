//! Common test utilities for API integration tests.
//!
//! Each TestContext gets its own temporary dictionary directory and catalog,
//! and a fixed-table transliterator so results do not depend on the
//! system dictionary.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use tempfile::TempDir;

use kotoba_core::{StaticTransliterator, Transliterator};
use kotoba_server::config::ServerConfig;
use kotoba_server::{router, AppState};

/// Test context holding the app state and its temporary files.
pub struct TestContext {
    pub state: AppState,
    _dir: TempDir,
}

impl TestContext {
    /// Create a context with the fixture catalog and dictionaries.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        std::fs::write(dir.path().join("config.json"), fixtures::CATALOG)
            .expect("Failed to write catalog");
        std::fs::write(dir.path().join("animals.json"), fixtures::ANIMALS)
            .expect("Failed to write dictionary");

        let config = ServerConfig {
            catalog_path: dir.path().join("config.json"),
            dictionary_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };

        let state = AppState::new(&config, transliterator());

        Self { state, _dir: dir }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }
}

/// Transliterator covering every fixture word.
pub fn transliterator() -> Arc<dyn Transliterator> {
    Arc::new(
        StaticTransliterator::new()
            .with("猫", &[("猫", "ねこ", "neko")])
            .with("ねこ", &[("ねこ", "ねこ", "neko")])
            .with("犬", &[("犬", "いぬ", "inu")])
            .with("いぬ", &[("いぬ", "いぬ", "inu")])
            .with("私", &[("私", "わたし", "watashi")])
            .with("わたし", &[("わたし", "わたし", "watashi")]),
    )
}

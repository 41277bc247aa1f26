//! Shared helpers for the integration tests

use acton_styleguide::prelude::*;
use axum::Router;

/// State backed by a fresh in-memory database
pub async fn memory_state() -> AppState {
    let pool = records::connect("sqlite::memory:").await.unwrap();
    records::migrate(&pool).await.unwrap();
    AppState::new(StyleguideConfig::default(), pool)
}

/// Module router backed by a fresh in-memory database
pub async fn test_app() -> Router {
    handlers::router(memory_state().await)
}

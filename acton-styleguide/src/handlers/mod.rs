//! HTTP handlers of the styleguide module
//!
//! - [`backend`]: the showcase pages, one per [`BackendAction`](crate::template::BackendAction)
//! - [`demo`]: create/delete endpoints for the demo content sets
//! - [`schema`]: JSON view of the declared demo tables
//!
//! # Example
//!
//! ```rust,no_run
//! use acton_styleguide::{config::StyleguideConfig, handlers, records, state::AppState};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let pool = records::connect("sqlite::memory:").await?;
//! records::migrate(&pool).await?;
//!
//! let app = handlers::router(AppState::new(StyleguideConfig::default(), pool));
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod backend;
pub mod demo;
pub mod schema;

/// Build the module router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(backend::index))
        .route("/styleguide", get(backend::index))
        .route("/styleguide/{action}", get(backend::show_action))
        .route("/styleguide/{kind}/create", post(demo::create))
        .route("/styleguide/{kind}/delete", post(demo::delete))
        .route("/styleguide/schema/{table}", get(schema::show_table))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

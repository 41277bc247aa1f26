//! Application state management
//!
//! Every collaborator a handler needs is built once at startup and shared
//! through [`AppState`]; nothing is looked up by type name at request time.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::config::StyleguideConfig;
use crate::demo::{ContentGenerator, ExistenceGuard, RecordFinder};
use crate::icons::{IconRegistry, StaticIconRegistry};
use crate::records::{FrontendDemoGenerator, SqlRecordFinder, TcaDemoGenerator};

/// Application state for the styleguide module
///
/// Cheap to clone: all members are reference counted.
///
/// # Example
///
/// ```rust,no_run
/// use acton_styleguide::{config::StyleguideConfig, records, state::AppState};
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = records::connect("sqlite::memory:").await?;
/// let state = AppState::new(StyleguideConfig::default(), pool);
///
/// let app: axum::Router = axum::Router::new()
///     .route("/", axum::routing::get(|| async { "Hello!" }))
///     .with_state(state);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AppState {
    config: Arc<StyleguideConfig>,
    guard: ExistenceGuard,
    icons: Arc<dyn IconRegistry>,
}

impl AppState {
    /// Create state backed by the SQLite record store
    #[must_use]
    pub fn new(config: StyleguideConfig, pool: SqlitePool) -> Self {
        Self::with_collaborators(
            config,
            Arc::new(SqlRecordFinder::new(pool.clone())),
            Arc::new(TcaDemoGenerator::new(pool.clone())),
            Arc::new(FrontendDemoGenerator::new(pool)),
            Arc::new(StaticIconRegistry),
        )
    }

    /// Create state from explicit collaborators
    #[must_use]
    pub fn with_collaborators(
        config: StyleguideConfig,
        finder: Arc<dyn RecordFinder>,
        tca_generator: Arc<dyn ContentGenerator>,
        frontend_generator: Arc<dyn ContentGenerator>,
        icons: Arc<dyn IconRegistry>,
    ) -> Self {
        let guard = ExistenceGuard::new(finder, tca_generator, frontend_generator);
        Self {
            config: Arc::new(config),
            guard,
            icons,
        }
    }

    /// Get configuration reference
    #[must_use]
    pub fn config(&self) -> &StyleguideConfig {
        &self.config
    }

    /// Guard for demo content create/delete requests
    #[must_use]
    pub const fn guard(&self) -> &ExistenceGuard {
        &self.guard
    }

    /// Registered icons
    #[must_use]
    pub fn icons(&self) -> &dyn IconRegistry {
        self.icons.as_ref()
    }
}

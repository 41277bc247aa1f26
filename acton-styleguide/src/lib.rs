//! acton-styleguide: backend styleguide module for HTMX applications
//!
//! Serves a set of showcase pages (typography, icons, modals, pagination, ...)
//! that document the look of backend components, and manages two sets of
//! generated demo content:
//!
//! - **TCA demo records**: an entry page, one page per demo table and a few
//!   records in every table declared in [`schema`]
//! - **Frontend demo pages**: a root page with one child page per showcased
//!   content type
//!
//! Creating demo content is guarded: a set that already exists is never
//! created twice, see [`demo::ExistenceGuard`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use acton_styleguide::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = StyleguideConfig::load()?;
//!     observability::init(&config.logging)?;
//!
//!     let pool = records::connect(&config.database.url).await?;
//!     records::migrate(&pool).await?;
//!
//!     let state = AppState::new(config.clone(), pool);
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()?).await?;
//!     axum::serve(listener, handlers::router(state)).await?;
//!     Ok(())
//! }
//! ```

#![allow(clippy::missing_errors_doc)]

pub mod commands;
pub mod config;
pub mod context;
pub mod demo;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod icons;
pub mod kauderwelsch;
pub mod labels;
pub mod observability;
pub mod pagination;
pub mod records;
pub mod schema;
pub mod state;
pub mod template;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! ```rust
    //! use acton_styleguide::prelude::*;
    //! ```

    pub use crate::config::StyleguideConfig;
    pub use crate::context::{BackendUser, CurrentBackendUser};
    pub use crate::demo::{
        ContentGenerator, ContentState, DemoContentKind, DemoContentSet, DemoError,
        ExistenceGuard, FailureReason, Notification, Outcome, RecordFinder, Severity,
    };
    pub use crate::error::StyleguideError;
    pub use crate::flash::{FlashMessage, FlashMessageQueue, FlashMessageService};
    pub use crate::pagination::{ArrayPaginator, SimplePagination};
    pub use crate::schema::TableSchema;
    pub use crate::state::AppState;
    pub use crate::template::{BackendAction, HxTemplate, ModuleChrome};
    pub use crate::{handlers, observability, records};

    pub use askama;
    pub use axum;
}

//! SQLite record store
//!
//! Stores the page tree and every table declared in [`crate::schema`], and
//! implements the demo content collaborators on top of it:
//!
//! - [`SqlRecordFinder`]: counts demo pages by their marker column
//! - [`TcaDemoGenerator`]: TCA demo pages and records
//! - [`FrontendDemoGenerator`]: frontend demo page tree
//!
//! Generated pages carry a marker in `pages.tx_styleguide_containsdemo`; that
//! marker is the only thing that identifies demo content.

mod finder;
mod generator;

pub use finder::SqlRecordFinder;
pub use generator::{FrontendDemoGenerator, TcaDemoGenerator, FRONTEND_CONTENT_TYPES};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;

use crate::schema::{self, SchemaError};

/// Marker of TCA demo pages
pub const MARKER_TCA: &str = "tx_styleguide";

/// Marker of the frontend demo root page
pub const MARKER_FRONTEND_ROOT: &str = "tx_styleguide_frontend_root";

/// Marker of frontend demo child pages
pub const MARKER_FRONTEND: &str = "tx_styleguide_frontend";

const CREATE_PAGES: &str = "CREATE TABLE IF NOT EXISTS pages (\
    uid INTEGER PRIMARY KEY AUTOINCREMENT, \
    pid INTEGER NOT NULL DEFAULT 0, \
    title TEXT NOT NULL DEFAULT '', \
    tx_styleguide_containsdemo TEXT NOT NULL DEFAULT '')";

const CREATE_PAGES_MARKER_INDEX: &str = "CREATE INDEX IF NOT EXISTS pages_containsdemo \
    ON pages (tx_styleguide_containsdemo, pid)";

/// Errors raised while preparing the database
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// A table declaration is invalid
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Executing DDL failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Open a connection pool
///
/// The database file is created if missing. In-memory databases are limited
/// to a single connection that is never recycled, since every connection
/// would otherwise see its own empty database.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    let pool_options = if url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::debug!(url, "Connected to database");
    Ok(pool)
}

/// Create `pages` and every declared table if they do not exist yet
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrationError> {
    sqlx::query(CREATE_PAGES).execute(pool).await?;
    sqlx::query(CREATE_PAGES_MARKER_INDEX).execute(pool).await?;

    for table in schema::registry() {
        let ddl = table.create_table_sql()?;
        sqlx::query(&ddl).execute(pool).await?;
        tracing::debug!(table = %table.table, "Table ready");
    }

    Ok(())
}

/// Number of rows in a declared table
///
/// Returns `None` for a table that is not declared in [`crate::schema`].
pub async fn count_records(pool: &SqlitePool, table: &str) -> Result<Option<i64>, sqlx::Error> {
    let Some(schema) = schema::find(table) else {
        return Ok(None);
    };
    let sql = format!("SELECT COUNT(*) FROM {}", schema.table);
    let count = sqlx::query_scalar(&sql).fetch_one(pool).await?;
    Ok(Some(count))
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:").await.expect("in-memory pool");
    migrate(&pool).await.expect("migrations");
    pool
}

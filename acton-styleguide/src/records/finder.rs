//! Demo page lookup

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{MARKER_FRONTEND, MARKER_FRONTEND_ROOT, MARKER_TCA};
use crate::demo::{DemoError, RecordFinder};

/// [`RecordFinder`] over the `pages` table
#[derive(Debug, Clone)]
pub struct SqlRecordFinder {
    pool: SqlitePool,
}

impl SqlRecordFinder {
    /// Create a finder on the given pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordFinder for SqlRecordFinder {
    async fn find_uids_of_styleguide_entry_pages(&self) -> Result<Vec<i64>, DemoError> {
        let uids = sqlx::query_scalar(
            "SELECT uid FROM pages WHERE pid = 0 AND tx_styleguide_containsdemo = ? ORDER BY uid",
        )
        .bind(MARKER_TCA)
        .fetch_all(&self.pool)
        .await?;
        Ok(uids)
    }

    async fn find_uids_of_frontend_pages(&self) -> Result<Vec<i64>, DemoError> {
        let uids = sqlx::query_scalar(
            "SELECT uid FROM pages WHERE tx_styleguide_containsdemo IN (?, ?) ORDER BY uid",
        )
        .bind(MARKER_FRONTEND_ROOT)
        .bind(MARKER_FRONTEND)
        .fetch_all(&self.pool)
        .await?;
        Ok(uids)
    }
}

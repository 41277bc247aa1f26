//! Demo content generators

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use super::{MARKER_FRONTEND, MARKER_FRONTEND_ROOT, MARKER_TCA};
use crate::demo::{ContentGenerator, DemoError};
use crate::{kauderwelsch, schema};

/// Records generated per demo table
const RECORDS_PER_TABLE: usize = 3;

/// Content types that get a page in the frontend demo
pub const FRONTEND_CONTENT_TYPES: &[&str] = &[
    "Header",
    "Text",
    "Text & Media",
    "Bullet list",
    "Table",
    "File links",
    "Menu",
];

async fn insert_page(
    conn: &mut SqliteConnection,
    pid: i64,
    title: &str,
    marker: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO pages (pid, title, tx_styleguide_containsdemo) VALUES (?, ?, ?)",
    )
    .bind(pid)
    .bind(title)
    .bind(marker)
    .execute(&mut *conn)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Entry page, one page per declared table, and records in every table
#[derive(Debug, Clone)]
pub struct TcaDemoGenerator {
    pool: SqlitePool,
}

impl TcaDemoGenerator {
    /// Create a generator on the given pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentGenerator for TcaDemoGenerator {
    async fn create(&self) -> Result<(), DemoError> {
        let mut tx = self.pool.begin().await?;

        let entry_uid = insert_page(&mut tx, 0, "styleguide TCA demo", MARKER_TCA).await?;
        let mut records = 0;

        for table in schema::registry() {
            let page_uid = insert_page(&mut tx, entry_uid, &table.title(), MARKER_TCA).await?;

            // The label field is the one text every record type has
            let sql = format!(
                "INSERT INTO {} (pid, {}) VALUES (?, ?)",
                table.table, table.ctrl.label
            );
            for index in 0..RECORDS_PER_TABLE {
                sqlx::query(&sql)
                    .bind(page_uid)
                    .bind(kauderwelsch::title(index * 2, 2))
                    .execute(&mut *tx)
                    .await?;
                records += 1;
            }
        }

        tx.commit().await?;
        tracing::info!(entry_uid, records, "Created TCA demo pages and records");
        Ok(())
    }

    async fn delete(&self) -> Result<(), DemoError> {
        let mut tx = self.pool.begin().await?;

        for table in schema::registry() {
            let sql = format!(
                "DELETE FROM {} WHERE pid IN \
                 (SELECT uid FROM pages WHERE tx_styleguide_containsdemo = ?)",
                table.table
            );
            sqlx::query(&sql).bind(MARKER_TCA).execute(&mut *tx).await?;
        }

        let pages = sqlx::query("DELETE FROM pages WHERE tx_styleguide_containsdemo = ?")
            .bind(MARKER_TCA)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        tracing::info!(pages, "Deleted TCA demo pages and records");
        Ok(())
    }
}

/// Root page with one child page per showcased content type
#[derive(Debug, Clone)]
pub struct FrontendDemoGenerator {
    pool: SqlitePool,
}

impl FrontendDemoGenerator {
    /// Create a generator on the given pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentGenerator for FrontendDemoGenerator {
    async fn create(&self) -> Result<(), DemoError> {
        let mut tx = self.pool.begin().await?;

        let root_uid =
            insert_page(&mut tx, 0, "styleguide frontend demo", MARKER_FRONTEND_ROOT).await?;
        for content_type in FRONTEND_CONTENT_TYPES {
            insert_page(&mut tx, root_uid, content_type, MARKER_FRONTEND).await?;
        }

        tx.commit().await?;
        tracing::info!(
            root_uid,
            pages = FRONTEND_CONTENT_TYPES.len() + 1,
            "Created frontend demo pages"
        );
        Ok(())
    }

    async fn delete(&self) -> Result<(), DemoError> {
        let pages = sqlx::query("DELETE FROM pages WHERE tx_styleguide_containsdemo IN (?, ?)")
            .bind(MARKER_FRONTEND_ROOT)
            .bind(MARKER_FRONTEND)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(pages, "Deleted frontend demo pages");
        Ok(())
    }
}

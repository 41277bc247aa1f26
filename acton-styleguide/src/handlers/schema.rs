//! JSON view of the declared demo tables

use axum::{extract::Path, Json};

use crate::error::StyleguideError;
use crate::schema::{self, TableSchema};

/// `GET /styleguide/schema/{table}`
pub async fn show_table(
    Path(table): Path<String>,
) -> Result<Json<&'static TableSchema>, StyleguideError> {
    schema::find(&table)
        .map(Json)
        .ok_or_else(|| StyleguideError::NotFound(format!("table \"{table}\"")))
}

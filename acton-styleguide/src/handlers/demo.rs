//! Create/delete endpoints for the demo content sets
//!
//! Both answer with a [`Notification`] whose `status` tells the page script
//! which severity to show. A refused create is a regular `200` answer with
//! status `2`.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::demo::{DemoContentKind, Notification};
use crate::error::StyleguideError;
use crate::state::AppState;

fn parse_kind(kind: &str) -> Result<DemoContentKind, StyleguideError> {
    kind.parse::<DemoContentKind>()
        .map_err(|err| StyleguideError::NotFound(err.to_string()))
}

/// `POST /styleguide/{kind}/create`
pub async fn create(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Notification>, StyleguideError> {
    let kind = parse_kind(&kind)?;
    let outcome = state.guard().request_create(kind).await?;
    Ok(Json(Notification::for_create(kind, outcome)))
}

/// `POST /styleguide/{kind}/delete`
pub async fn delete(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Notification>, StyleguideError> {
    let kind = parse_kind(&kind)?;
    state.guard().request_delete(kind).await?;
    Ok(Json(Notification::for_delete(kind)))
}

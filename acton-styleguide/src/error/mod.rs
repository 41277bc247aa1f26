//! Error types and error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::demo::DemoError;

/// Error type for the HTTP and CLI boundary
///
/// Anything that is not a client mistake is reported as a generic
/// `500 Internal Server Error`; the detail only goes to the log.
#[derive(Debug, Error)]
pub enum StyleguideError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad request error
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Not Found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Demo content storage or generation failed
    #[error(transparent)]
    Demo(#[from] DemoError),
}

impl StyleguideError {
    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Template(_) | Self::Demo(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for StyleguideError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            return (status, "Internal server error").into_response();
        }

        tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        (status, self.to_string()).into_response()
    }
}

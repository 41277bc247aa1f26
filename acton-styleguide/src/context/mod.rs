//! Request context: the backend user
//!
//! Handlers never look the user up from global state. Upstream middleware
//! (authentication, a reverse proxy adapter, a test harness) may insert a
//! [`BackendUser`] into the request extensions; otherwise the user configured
//! in `[backend_user]` is used.
//!
//! ```rust,no_run
//! use acton_styleguide::context::CurrentBackendUser;
//!
//! async fn whoami(CurrentBackendUser(user): CurrentBackendUser) -> String {
//!     user.username
//! }
//! ```

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

use crate::state::AppState;

/// A backend user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendUser {
    /// Record id
    pub uid: i64,
    /// Login name
    pub username: String,
    /// Display name
    pub real_name: String,
    /// Email address
    pub email: String,
    /// Whether the user has admin rights
    pub admin: bool,
}

impl Default for BackendUser {
    fn default() -> Self {
        Self {
            uid: 1,
            username: "admin".to_string(),
            real_name: "Styleguide Admin".to_string(),
            email: "admin@example.com".to_string(),
            admin: true,
        }
    }
}

impl BackendUser {
    /// Name to show: the real name if set, the username otherwise
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.real_name.trim().is_empty() {
            &self.username
        } else {
            &self.real_name
        }
    }

    /// Up to two uppercase initials of the display name, for the avatar
    #[must_use]
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Extractor for the backend user of the current request
pub struct CurrentBackendUser(pub BackendUser);

impl<S> FromRequestParts<S> for CurrentBackendUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<BackendUser>() {
            return Ok(Self(user.clone()));
        }

        let app_state = AppState::from_ref(state);
        Ok(Self(app_state.config().backend_user.clone()))
    }
}

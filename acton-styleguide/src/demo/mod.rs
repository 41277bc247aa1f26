//! Demo content lifecycle
//!
//! Two sets of demo content can be generated and removed from the backend:
//! TCA demo records and frontend demo pages. Each set is observed through a
//! [`RecordFinder`] and changed through a [`ContentGenerator`]; the
//! [`ExistenceGuard`] combines the two so that a set which already exists is
//! never created a second time.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use acton_styleguide::demo::{DemoContentKind, ExistenceGuard, Outcome};
//! use acton_styleguide::records::{self, FrontendDemoGenerator, SqlRecordFinder, TcaDemoGenerator};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let pool = records::connect("sqlite::memory:").await?;
//! records::migrate(&pool).await?;
//!
//! let guard = ExistenceGuard::new(
//!     Arc::new(SqlRecordFinder::new(pool.clone())),
//!     Arc::new(TcaDemoGenerator::new(pool.clone())),
//!     Arc::new(FrontendDemoGenerator::new(pool)),
//! );
//!
//! assert_eq!(guard.request_create(DemoContentKind::Tca).await?, Outcome::Ok);
//! # Ok(())
//! # }
//! ```

mod guard;
mod notification;

pub use guard::{ContentState, DemoContentSet, ExistenceGuard, FailureReason, Outcome};
pub use notification::{Notification, Severity, UnknownSeverity};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors raised while looking up or generating demo content
///
/// None of these are recoverable at the guard level; they travel up to the
/// request boundary unchanged.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Storage failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Generator failed for a reason other than storage
    #[error("Generator error: {0}")]
    Generator(String),
}

/// The named sets of demo content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoContentKind {
    /// Pages and records for every demo table
    Tca,
    /// Frontend page tree showcasing content types
    Frontend,
}

impl DemoContentKind {
    /// All demo content sets
    pub const ALL: [Self; 2] = [Self::Tca, Self::Frontend];

    /// Identifier used in routes and on the command line
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Tca => "tca",
            Self::Frontend => "frontend",
        }
    }
}

impl fmt::Display for DemoContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Error returned when parsing an unknown demo content identifier
#[derive(Debug, Error)]
#[error("unknown demo content set \"{0}\" (expected \"tca\" or \"frontend\")")]
pub struct UnknownDemoContentKind(pub String);

impl FromStr for DemoContentKind {
    type Err = UnknownDemoContentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.identifier().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDemoContentKind(s.to_string()))
    }
}

/// Looks up the stored records that make up each demo content set
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordFinder: Send + Sync {
    /// Uids of the root pages of the TCA demo
    async fn find_uids_of_styleguide_entry_pages(&self) -> Result<Vec<i64>, DemoError>;

    /// Uids of all pages belonging to the frontend demo
    async fn find_uids_of_frontend_pages(&self) -> Result<Vec<i64>, DemoError>;
}

/// Creates and removes one set of demo content
///
/// `delete` must succeed when there is nothing to delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate the complete set
    async fn create(&self) -> Result<(), DemoError>;

    /// Remove everything belonging to the set
    async fn delete(&self) -> Result<(), DemoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!("tca".parse::<DemoContentKind>().unwrap(), DemoContentKind::Tca);
        assert_eq!(
            "Frontend".parse::<DemoContentKind>().unwrap(),
            DemoContentKind::Frontend
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = "pages".parse::<DemoContentKind>().unwrap_err();
        assert!(err.to_string().contains("\"pages\""));
    }

    #[test]
    fn test_kind_serializes_as_identifier() {
        let json = serde_json::to_string(&DemoContentKind::Frontend).unwrap();
        assert_eq!(json, "\"frontend\"");
        assert_eq!(DemoContentKind::Tca.to_string(), "tca");
    }
}

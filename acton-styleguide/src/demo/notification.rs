//! JSON notifications returned by the create/delete actions

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{DemoContentKind, Outcome};
use crate::labels;

/// Message severity
///
/// Serialized as the integer codes the backend notification JavaScript
/// understands: `-2` notice, `-1` info, `0` ok, `1` warning, `2` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Severity {
    /// Notice (grey)
    Notice,
    /// Informational (blue)
    Info,
    /// Success (green)
    Ok,
    /// Warning (yellow)
    Warning,
    /// Error (red)
    Error,
}

impl Severity {
    /// Integer code of this severity
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::Notice => -2,
            Self::Info => -1,
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Error => 2,
        }
    }

    /// Lowercase name, used for CSS classes and log fields
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Ok => "success",
            Self::Warning => "warning",
            Self::Error => "danger",
        }
    }

    /// CSS class for callouts of this severity
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Notice => "callout-notice",
            Self::Info => "callout-info",
            Self::Ok => "callout-success",
            Self::Warning => "callout-warning",
            Self::Error => "callout-danger",
        }
    }
}

impl From<Severity> for i8 {
    fn from(severity: Severity) -> Self {
        severity.code()
    }
}

/// Integer that is not a severity code
#[derive(Debug, Error)]
#[error("unknown severity code {0}")]
pub struct UnknownSeverity(pub i8);

impl TryFrom<i8> for Severity {
    type Error = UnknownSeverity;

    // `Self::Error` would name the associated error type here
    #[allow(clippy::use_self)]
    fn try_from(code: i8) -> Result<Self, UnknownSeverity> {
        match code {
            -2 => Ok(Severity::Notice),
            -1 => Ok(Severity::Info),
            0 => Ok(Severity::Ok),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(UnknownSeverity(other)),
        }
    }
}

/// Result of a create or delete action, shown to the user as a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Short headline
    pub title: String,
    /// Explanation
    pub body: String,
    /// Severity tag
    pub status: Severity,
}

impl Notification {
    /// Notification for a guarded create request
    #[must_use]
    pub fn for_create(kind: DemoContentKind, outcome: Outcome) -> Self {
        let (suffix, status) = match outcome {
            Outcome::Ok => ("Ok", Severity::Ok),
            Outcome::Failed(_) => ("Failed", Severity::Error),
        };
        Self::from_labels(&format!("{kind}CreateAction{suffix}"), status)
    }

    /// Notification for a delete request
    #[must_use]
    pub fn for_delete(kind: DemoContentKind) -> Self {
        Self::from_labels(&format!("{kind}DeleteActionOk"), Severity::Ok)
    }

    fn from_labels(prefix: &str, status: Severity) -> Self {
        Self {
            title: labels::translate_or_key(&format!("{prefix}Title")),
            body: labels::translate_or_key(&format!("{prefix}Body")),
            status,
        }
    }
}

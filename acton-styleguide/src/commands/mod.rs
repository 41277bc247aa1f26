//! Maintenance commands of the `acton-styleguide` binary
//!
//! Each command returns its exit status together with what it prints, so the
//! binary only does the printing.

use std::process::ExitCode;

use crate::demo::{DemoContentKind, Notification};
use crate::error::StyleguideError;
use crate::schema;
use crate::state::AppState;

/// Result of a demo content command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the command did what was asked
    pub success: bool,
    /// Notification printed as JSON
    pub notification: Notification,
}

impl CommandOutput {
    /// Process exit code
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Create a demo content set unless it exists already
pub async fn create(
    state: &AppState,
    kind: DemoContentKind,
) -> Result<CommandOutput, StyleguideError> {
    let outcome = state.guard().request_create(kind).await?;
    Ok(CommandOutput {
        success: outcome.is_ok(),
        notification: Notification::for_create(kind, outcome),
    })
}

/// Delete a demo content set
pub async fn delete(
    state: &AppState,
    kind: DemoContentKind,
) -> Result<CommandOutput, StyleguideError> {
    state.guard().request_delete(kind).await?;
    Ok(CommandOutput {
        success: true,
        notification: Notification::for_delete(kind),
    })
}

/// Pretty JSON schema of one declared table, or of all of them
pub fn schema_json(table: Option<&str>) -> Result<String, StyleguideError> {
    let json = match table {
        Some(table) => {
            let table_schema = schema::find(table)
                .ok_or_else(|| StyleguideError::NotFound(format!("table \"{table}\"")))?;
            serde_json::to_string_pretty(table_schema)
        }
        None => serde_json::to_string_pretty(schema::registry()),
    };
    json.map_err(|err| StyleguideError::Config(format!("schema is not serializable: {err}")))
}

//! Table schema declarations (TCA)
//!
//! A [`TableSchema`] describes one record type: its control section (title,
//! label field, icon), its columns and the field layout of each record type.
//! Declarations are static data; the record store creates tables from them
//! and the generic record editor reads them to build forms.
//!
//! ```rust
//! use acton_styleguide::schema;
//!
//! let minimal = schema::find("tx_styleguide_ctrl_minimal").unwrap();
//! assert_eq!(minimal.ctrl.label, "title");
//! assert!(minimal.validate().is_ok());
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::labels;

/// Name of the minimal demo table
pub const CTRL_MINIMAL_TABLE: &str = "tx_styleguide_ctrl_minimal";

static REGISTRY: Lazy<Vec<TableSchema>> = Lazy::new(|| vec![ctrl_minimal()]);

/// All declared tables
#[must_use]
pub fn registry() -> &'static [TableSchema] {
    &REGISTRY
}

/// Declaration of a table by name
#[must_use]
pub fn find(table: &str) -> Option<&'static TableSchema> {
    registry().iter().find(|schema| schema.table == table)
}

/// Schema validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Table or column name is not a plain identifier
    #[error("invalid identifier \"{0}\"")]
    InvalidIdentifier(String),

    /// `ctrl.label` names a column that is not declared
    #[error("table {table}: label field \"{field}\" is not a declared column")]
    UnknownLabelField {
        /// Table name
        table: String,
        /// Referenced field
        field: String,
    },

    /// A `showitem` list names a column that is not declared
    #[error("table {table}, type {type_name}: showitem field \"{field}\" is not a declared column")]
    UnknownShowitemField {
        /// Table name
        table: String,
        /// Record type
        type_name: String,
        /// Referenced field
        field: String,
    },
}

/// Declaration of one record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name
    pub table: String,
    /// Control section
    pub ctrl: Ctrl,
    /// Columns by field name
    pub columns: BTreeMap<String, Column>,
    /// Field layout by record type
    pub types: BTreeMap<String, TypeDefinition>,
}

/// Control section of a table declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ctrl {
    /// Label key of the table title
    pub title: String,
    /// Field used as record label in lists
    pub label: String,
    /// Icon shown next to records
    pub iconfile: String,
}

/// One column of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Label key of the field
    pub label: String,
    /// Field kind
    pub config: FieldConfig,
}

/// Field kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldConfig {
    /// Single-line text
    Input,
}

impl FieldConfig {
    /// SQLite column definition for this field kind
    #[must_use]
    pub const fn sql_definition(self) -> &'static str {
        match self {
            Self::Input => "TEXT NOT NULL DEFAULT ''",
        }
    }
}

/// Field layout of one record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Comma-separated list of fields shown in the editing form
    pub showitem: String,
}

impl TypeDefinition {
    /// Field names in `showitem`, without tab dividers and palettes
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.showitem
            .split(',')
            .map(|item| item.split(';').next().unwrap_or_default().trim())
            .filter(|field| !field.is_empty() && !field.starts_with("--"))
    }
}

impl TableSchema {
    /// Translated table title
    #[must_use]
    pub fn title(&self) -> String {
        labels::translate_or_key(&self.ctrl.title)
    }

    /// Check that every field reference points at a declared column
    pub fn validate(&self) -> Result<(), SchemaError> {
        check_identifier(&self.table)?;
        for field in self.columns.keys() {
            check_identifier(field)?;
        }

        if !self.columns.contains_key(&self.ctrl.label) {
            return Err(SchemaError::UnknownLabelField {
                table: self.table.clone(),
                field: self.ctrl.label.clone(),
            });
        }

        for (type_name, definition) in &self.types {
            if let Some(field) = definition
                .fields()
                .find(|field| !self.columns.contains_key(*field))
            {
                return Err(SchemaError::UnknownShowitemField {
                    table: self.table.clone(),
                    type_name: type_name.clone(),
                    field: field.to_string(),
                });
            }
        }

        Ok(())
    }

    /// `CREATE TABLE IF NOT EXISTS` statement for this table
    ///
    /// Every table gets `uid` and `pid` in addition to its declared columns.
    pub fn create_table_sql(&self) -> Result<String, SchemaError> {
        self.validate()?;

        let mut definitions = vec![
            "uid INTEGER PRIMARY KEY AUTOINCREMENT".to_string(),
            "pid INTEGER NOT NULL DEFAULT 0".to_string(),
        ];
        definitions.extend(
            self.columns
                .iter()
                .map(|(field, column)| format!("{field} {}", column.config.sql_definition())),
        );

        Ok(format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.table,
            definitions.join(", ")
        ))
    }
}

fn check_identifier(name: &str) -> Result<(), SchemaError> {
    let valid = name
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(SchemaError::InvalidIdentifier(name.to_string()))
    }
}

/// The minimal record type: one single-line text field
fn ctrl_minimal() -> TableSchema {
    TableSchema {
        table: CTRL_MINIMAL_TABLE.to_string(),
        ctrl: Ctrl {
            title: "minimalTableTitle".to_string(),
            label: "title".to_string(),
            iconfile: "/styleguide/icons/tx_styleguide.svg".to_string(),
        },
        columns: BTreeMap::from([(
            "title".to_string(),
            Column {
                label: "minimalTableTitleField".to_string(),
                config: FieldConfig::Input,
            },
        )]),
        types: BTreeMap::from([(
            "0".to_string(),
            TypeDefinition {
                showitem: "title".to_string(),
            },
        )]),
    }
}

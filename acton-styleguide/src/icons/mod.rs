//! Icon registry
//!
//! The icon showcase lists every registered identifier, the deprecated ones
//! with their replacements, and the overlay icons on their own.

use serde::{Deserialize, Serialize};

/// Identifier prefix shared by all overlay icons
pub const OVERLAY_PREFIX: &str = "overlay";

/// A deprecated icon and the identifier to use instead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecatedIcon {
    /// Deprecated identifier
    pub identifier: String,
    /// Replacement identifier, if there is one
    pub replacement: Option<String>,
}

/// Source of registered icon identifiers
#[cfg_attr(test, mockall::automock)]
pub trait IconRegistry: Send + Sync {
    /// Every registered identifier, sorted
    fn all_registered_icon_identifiers(&self) -> Vec<String>;

    /// Identifiers that are still registered but scheduled for removal
    fn deprecated_icons(&self) -> Vec<DeprecatedIcon>;
}

/// Identifiers starting with [`OVERLAY_PREFIX`]
#[must_use]
pub fn overlays(identifiers: &[String]) -> Vec<String> {
    identifiers
        .iter()
        .filter(|identifier| identifier.starts_with(OVERLAY_PREFIX))
        .cloned()
        .collect()
}

const CORE_ICONS: &[&str] = &[
    "actions-add",
    "actions-close",
    "actions-delete",
    "actions-document-edit",
    "actions-document-new",
    "actions-document-save",
    "actions-download",
    "actions-edit-hide",
    "actions-edit-unhide",
    "actions-filter",
    "actions-refresh",
    "actions-search",
    "actions-system-shortcut-new",
    "actions-upload",
    "apps-pagetree-page-default",
    "apps-pagetree-root",
    "apps-toolbar-menu-search",
    "avatar-default",
    "content-accordion",
    "content-bullets",
    "content-table",
    "content-text",
    "content-textpic",
    "mimetypes-pdf",
    "mimetypes-text-html",
    "overlay-deleted",
    "overlay-endtime",
    "overlay-hidden",
    "overlay-locked",
    "overlay-readonly",
    "overlay-scheduled",
    "status-dialog-error",
    "status-dialog-information",
    "status-dialog-notification",
    "status-dialog-ok",
    "status-dialog-warning",
    "tcarecords-tx_styleguide_ctrl_minimal-default",
];

const DEPRECATED_ICONS: &[(&str, Option<&str>)] = &[
    ("actions-document-close", Some("actions-close")),
    ("actions-edit-delete", Some("actions-delete")),
    ("status-status-locked", Some("overlay-locked")),
];

/// Registry backed by a built-in identifier list
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticIconRegistry;

impl IconRegistry for StaticIconRegistry {
    fn all_registered_icon_identifiers(&self) -> Vec<String> {
        let mut identifiers: Vec<String> = CORE_ICONS
            .iter()
            .chain(DEPRECATED_ICONS.iter().map(|(identifier, _)| identifier))
            .map(|identifier| (*identifier).to_string())
            .collect();
        identifiers.sort();
        identifiers
    }

    fn deprecated_icons(&self) -> Vec<DeprecatedIcon> {
        DEPRECATED_ICONS
            .iter()
            .map(|(identifier, replacement)| DeprecatedIcon {
                identifier: (*identifier).to_string(),
                replacement: replacement.map(str::to_string),
            })
            .collect()
    }
}

//! User-facing labels
//!
//! A flat key → text table holding every string the module shows. Keys are
//! camelCase and stable; templates, notifications and the table schema refer
//! to labels by key only.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("styleguide", "Styleguide"),
        // Module menu
        ("index", "Index"),
        ("typography", "Typography"),
        ("tca", "TCA / Records / Frontend"),
        ("trees", "Trees"),
        ("tab", "Tabs"),
        ("tables", "Tables"),
        ("avatar", "Avatar"),
        ("buttons", "Buttons"),
        ("infobox", "Infobox"),
        ("flashMessages", "Flash messages"),
        ("icons", "Icons"),
        ("debug", "Debug"),
        ("modal", "Modal"),
        ("accordion", "Accordion"),
        ("pagination", "Pagination"),
        // TCA demo records
        ("tcaCreateActionOkTitle", "TCA demo records created"),
        (
            "tcaCreateActionOkBody",
            "The styleguide demo page tree and a set of records for every demo table have been created.",
        ),
        ("tcaCreateActionFailedTitle", "TCA demo records not created"),
        (
            "tcaCreateActionFailedBody",
            "The styleguide demo page tree exists already. Delete it first to create it again.",
        ),
        ("tcaDeleteActionOkTitle", "TCA demo records deleted"),
        (
            "tcaDeleteActionOkBody",
            "All styleguide demo pages and their records have been removed.",
        ),
        // Frontend demo pages
        ("frontendCreateActionOkTitle", "Frontend demo pages created"),
        (
            "frontendCreateActionOkBody",
            "A frontend page tree showing all content types has been created.",
        ),
        ("frontendCreateActionFailedTitle", "Frontend demo pages not created"),
        (
            "frontendCreateActionFailedBody",
            "The frontend demo page tree exists already. Delete it first to create it again.",
        ),
        ("frontendDeleteActionOkTitle", "Frontend demo pages deleted"),
        (
            "frontendDeleteActionOkBody",
            "The frontend demo page tree has been removed.",
        ),
        // tx_styleguide_ctrl_minimal
        ("minimalTableTitle", "Styleguide: ctrl minimal"),
        ("minimalTableTitleField", "Title"),
    ])
});

/// Look up the text for a label key
#[must_use]
pub fn translate(key: &str) -> Option<&'static str> {
    LABELS.get(key).copied()
}

/// Look up the text for a label key, falling back to the key itself
#[must_use]
pub fn translate_or_key(key: &str) -> String {
    translate(key).map_or_else(
        || {
            tracing::warn!(key, "Missing label");
            key.to_string()
        },
        str::to_string,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key() {
        assert_eq!(translate("styleguide"), Some("Styleguide"));
    }

    #[test]
    fn test_missing_key_falls_back() {
        assert_eq!(translate("noSuchLabel"), None);
        assert_eq!(translate_or_key("noSuchLabel"), "noSuchLabel");
    }

    #[test]
    fn test_every_demo_notification_is_labelled() {
        for set in ["tca", "frontend"] {
            for action in ["CreateActionOk", "CreateActionFailed", "DeleteActionOk"] {
                for part in ["Title", "Body"] {
                    let key = format!("{set}{action}{part}");
                    assert!(translate(&key).is_some(), "missing label {key}");
                }
            }
        }
    }
}

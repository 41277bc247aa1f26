//! Module menu and page frame

use std::{fmt, str::FromStr};

use crate::error::StyleguideError;
use crate::flash::FlashMessage;
use crate::labels;

const STYLESHEETS: &[&str] = &["/styleguide/css/backend.css"];
const BASE_SCRIPTS: &[&str] = &["/styleguide/js/prism.js"];

/// Showcase pages of the module, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendAction {
    /// Landing page
    Index,
    /// Headings, text and code styles
    Typography,
    /// Demo content management
    Tca,
    /// Tree components
    Trees,
    /// Tab panels
    Tab,
    /// Table styles
    Tables,
    /// Backend user avatar
    Avatar,
    /// Button variants
    Buttons,
    /// Infobox variants
    Infobox,
    /// Flash message severities
    FlashMessages,
    /// Registered icons
    Icons,
    /// Debug output
    Debug,
    /// Modal dialogs
    Modal,
    /// Accordion panels
    Accordion,
    /// Pagination widget
    Pagination,
}

impl BackendAction {
    /// All actions in menu order
    pub const ALL: [Self; 15] = [
        Self::Index,
        Self::Typography,
        Self::Tca,
        Self::Trees,
        Self::Tab,
        Self::Tables,
        Self::Avatar,
        Self::Buttons,
        Self::Infobox,
        Self::FlashMessages,
        Self::Icons,
        Self::Debug,
        Self::Modal,
        Self::Accordion,
        Self::Pagination,
    ];

    /// URL segment and label key
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Typography => "typography",
            Self::Tca => "tca",
            Self::Trees => "trees",
            Self::Tab => "tab",
            Self::Tables => "tables",
            Self::Avatar => "avatar",
            Self::Buttons => "buttons",
            Self::Infobox => "infobox",
            Self::FlashMessages => "flashMessages",
            Self::Icons => "icons",
            Self::Debug => "debug",
            Self::Modal => "modal",
            Self::Accordion => "accordion",
            Self::Pagination => "pagination",
        }
    }

    /// Menu label
    #[must_use]
    pub fn label(self) -> String {
        labels::translate_or_key(self.slug())
    }

    /// Page URL
    #[must_use]
    pub fn path(self) -> String {
        format!("/styleguide/{}", self.slug())
    }

    /// Script module the page needs besides the shared scripts
    #[must_use]
    pub const fn script_module(self) -> Option<&'static str> {
        match self {
            Self::Tca => Some("/styleguide/js/ProcessingIndicator.js"),
            Self::Icons => Some("/styleguide/js/FindIcons.js"),
            Self::FlashMessages => Some("/styleguide/js/RenderNotifications.js"),
            Self::Pagination => Some("/styleguide/js/Pagination.js"),
            _ => None,
        }
    }
}

impl fmt::Display for BackendAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for BackendAction {
    type Err = StyleguideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.slug() == s)
            .ok_or_else(|| StyleguideError::NotFound(format!("styleguide action \"{s}\"")))
    }
}

/// Entry of the module menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Link target
    pub href: String,
    /// Link text
    pub label: String,
    /// Whether this is the current page
    pub active: bool,
}

/// Page frame shared by all showcase pages
#[derive(Debug, Clone)]
pub struct ModuleChrome {
    /// Module title
    pub module_title: String,
    /// Current page
    pub current_action: BackendAction,
    /// Page title, also used by the shortcut button
    pub shortcut_title: String,
    /// Module menu
    pub menu: Vec<MenuItem>,
    /// Stylesheets to link
    pub stylesheets: Vec<String>,
    /// Scripts to load
    pub scripts: Vec<String>,
    /// Messages of the module queue
    pub flash_messages: Vec<FlashMessage>,
}

impl ModuleChrome {
    /// Frame for `action`, rendering the given module queue messages
    #[must_use]
    pub fn for_action(action: BackendAction, flash_messages: Vec<FlashMessage>) -> Self {
        let module_title = labels::translate_or_key("styleguide");
        let shortcut_title = format!("{module_title} - {}", action.label());

        let menu = BackendAction::ALL
            .into_iter()
            .map(|item| MenuItem {
                href: item.path(),
                label: item.label(),
                active: item == action,
            })
            .collect();

        let scripts = BASE_SCRIPTS
            .iter()
            .copied()
            .chain(action.script_module())
            .map(str::to_string)
            .collect();

        Self {
            module_title,
            current_action: action,
            shortcut_title,
            menu,
            stylesheets: STYLESHEETS.iter().map(|s| (*s).to_string()).collect(),
            scripts,
            flash_messages,
        }
    }

    /// URL segment of the current page
    #[must_use]
    pub const fn current_slug(&self) -> &'static str {
        self.current_action.slug()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_round_trip() {
        for action in BackendAction::ALL {
            assert_eq!(action.slug().parse::<BackendAction>().unwrap(), action);
        }
    }

    #[test]
    fn test_unknown_action() {
        let err = "flashmessages".parse::<BackendAction>().unwrap_err();
        assert!(matches!(err, StyleguideError::NotFound(_)));
    }

    #[test]
    fn test_shortcut_title() {
        let chrome = ModuleChrome::for_action(BackendAction::FlashMessages, Vec::new());
        assert_eq!(chrome.shortcut_title, "Styleguide - Flash messages");
    }

    #[test]
    fn test_menu_marks_current_action() {
        let chrome = ModuleChrome::for_action(BackendAction::Modal, Vec::new());

        assert_eq!(chrome.menu.len(), BackendAction::ALL.len());
        let active: Vec<_> = chrome.menu.iter().filter(|item| item.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, "/styleguide/modal");
    }

    #[test]
    fn test_page_scripts() {
        let icons = ModuleChrome::for_action(BackendAction::Icons, Vec::new());
        assert_eq!(
            icons.scripts,
            vec!["/styleguide/js/prism.js", "/styleguide/js/FindIcons.js"]
        );

        let tables = ModuleChrome::for_action(BackendAction::Tables, Vec::new());
        assert_eq!(tables.scripts, vec!["/styleguide/js/prism.js"]);
        assert_eq!(tables.stylesheets, vec!["/styleguide/css/backend.css"]);
    }
}

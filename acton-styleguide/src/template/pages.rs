//! Showcase page templates
//!
//! Every page extends `layout.html` and carries the [`ModuleChrome`].

use askama::Template;

use super::ModuleChrome;
use crate::context::BackendUser;
use crate::flash::FlashMessage;
use crate::icons::DeprecatedIcon;
use crate::pagination::SimplePagination;

/// Landing page with a card per showcase
#[derive(Template)]
#[template(path = "backend/index.html")]
pub struct IndexPage {
    /// Page frame
    pub chrome: ModuleChrome,
}

/// Headings, body copy, code and lists
#[derive(Template)]
#[template(path = "backend/typography.html")]
pub struct TypographyPage {
    /// Page frame
    pub chrome: ModuleChrome,
}

/// Demo content management
#[derive(Template)]
#[template(path = "backend/tca.html")]
pub struct TcaPage {
    /// Page frame
    pub chrome: ModuleChrome,
    /// Number of TCA demo entry pages
    pub demo_exists: usize,
    /// Number of frontend demo pages
    pub demo_frontend_exists: usize,
}

/// Page tree
#[derive(Template)]
#[template(path = "backend/trees.html")]
pub struct TreesPage {
    /// Page frame
    pub chrome: ModuleChrome,
}

/// Tab panels
#[derive(Template)]
#[template(path = "backend/tab.html")]
pub struct TabPage {
    /// Page frame
    pub chrome: ModuleChrome,
}

/// Table styles
#[derive(Template)]
#[template(path = "backend/tables.html")]
pub struct TablesPage {
    /// Page frame
    pub chrome: ModuleChrome,
}

/// Avatar of the current backend user
#[derive(Template)]
#[template(path = "backend/avatar.html")]
pub struct AvatarPage {
    /// Page frame
    pub chrome: ModuleChrome,
    /// User whose avatar is shown
    pub backend_user: BackendUser,
}

/// Button variants
#[derive(Template)]
#[template(path = "backend/buttons.html")]
pub struct ButtonsPage {
    /// Page frame
    pub chrome: ModuleChrome,
}

/// Callouts of every severity
#[derive(Template)]
#[template(path = "backend/infobox.html")]
pub struct InfoboxPage {
    /// Page frame
    pub chrome: ModuleChrome,
}

/// Flash messages of every severity, rendered inside the page body
#[derive(Template)]
#[template(path = "backend/flash_messages.html")]
pub struct FlashMessagesPage {
    /// Page frame
    pub chrome: ModuleChrome,
    /// Messages of the demo queue
    pub demo_messages: Vec<FlashMessage>,
}

/// Registered icons
#[derive(Template)]
#[template(path = "backend/icons.html")]
pub struct IconsPage {
    /// Page frame
    pub chrome: ModuleChrome,
    /// Every registered identifier
    pub all_icons: Vec<String>,
    /// Deprecated identifiers and their replacements
    pub deprecated_icons: Vec<DeprecatedIcon>,
    /// Overlay identifiers
    pub overlays: Vec<String>,
}

/// Pretty-printed sample data
#[derive(Template)]
#[template(path = "backend/debug.html")]
pub struct DebugPage {
    /// Page frame
    pub chrome: ModuleChrome,
    /// JSON dump
    pub dump: String,
}

/// Modal dialogs
#[derive(Template)]
#[template(path = "backend/modal.html")]
pub struct ModalPage {
    /// Page frame
    pub chrome: ModuleChrome,
}

/// Accordion panels
#[derive(Template)]
#[template(path = "backend/accordion.html")]
pub struct AccordionPage {
    /// Page frame
    pub chrome: ModuleChrome,
}

/// One page of the release name list
#[derive(Template)]
#[template(path = "backend/pagination.html")]
pub struct PaginationPage {
    /// Page frame
    pub chrome: ModuleChrome,
    /// Release names on this page
    pub items: Vec<String>,
    /// Page navigation
    pub pagination: SimplePagination,
    /// 1-based number of the first item on this page
    pub first_item: usize,
    /// 1-based number of the last item on this page
    pub last_item: usize,
    /// Number of items across all pages
    pub total_items: usize,
    /// Dropdown options as `(value, label)`
    pub user_groups: Vec<(String, String)>,
    /// Date-time format shown next to the filter
    pub date_time_format: String,
}

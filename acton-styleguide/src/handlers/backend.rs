//! Showcase page handlers

use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use axum_htmx::HxRequest;
use serde::Deserialize;
use serde_json::json;

use crate::context::{BackendUser, CurrentBackendUser};
use crate::demo::DemoContentKind;
use crate::error::StyleguideError;
use crate::flash::{FlashMessage, FlashMessageService, DEMO_QUEUE};
use crate::icons;
use crate::kauderwelsch;
use crate::pagination::{ArrayPaginator, SimplePagination};
use crate::schema;
use crate::state::AppState;
use crate::template::pages::{
    AccordionPage, AvatarPage, ButtonsPage, DebugPage, FlashMessagesPage, IconsPage, IndexPage,
    InfoboxPage, ModalPage, PaginationPage, TabPage, TablesPage, TcaPage, TreesPage,
    TypographyPage,
};
use crate::template::{BackendAction, HxTemplate, ModuleChrome};

/// Items shown per pagination page
pub const ITEMS_PER_PAGE: usize = 10;

/// Date-time format shown next to the pagination filter
pub const DATE_TIME_FORMAT: &str = "h:m d-m-Y";

/// Sample data for the pagination showcase
pub const RELEASE_NAMES: [&str; 33] = [
    "Warty Warthog",
    "Hoary Hedgehog",
    "Breezy Badger",
    "Dapper Drake",
    "Edgy Eft",
    "Feisty Fawn",
    "Gutsy Gibbon",
    "Hardy Heron",
    "Intrepid Ibex",
    "Jaunty Jackalope",
    "Karmic Koala",
    "Lucid Lynx",
    "Maverick Meerkat",
    "Natty Narwhal",
    "Oneiric Ocelot",
    "Precise Pangolin",
    "Quantal Quetzal",
    "Raring Ringtail",
    "Saucy Salamander",
    "Trusty Tahr",
    "Utopic Unicorn",
    "Vivid Vervet",
    "Wily Werewolf",
    "Xenial Xerus",
    "Yakkety Yak",
    "Zesty Zapus",
    "Artful Aardvark",
    "Bionic Beaver",
    "Cosmic Cuttlefish",
    "Disco Dingo",
    "Eoan Ermine",
    "Focal Fossa",
    "Groovy Gorilla",
];

const USER_GROUPS: [(&str, &str); 8] = [
    ("0", "[All users]"),
    ("-1", "Self"),
    ("gr-7", "Group styleguide demo group 1"),
    ("gr-8", "Group styleguide demo group 2"),
    ("us-9", "User _cli_"),
    ("us-1", "User admin"),
    ("us-10", "User styleguide demo user 1"),
    ("us-11", "User styleguide demo user 2"),
];

/// Query string of the showcase pages
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Pagination page; missing or empty means the first page
    pub page: Option<String>,
}

impl PageQuery {
    fn page_number(&self) -> Result<usize, StyleguideError> {
        match self.page.as_deref().map(str::trim) {
            None | Some("") => Ok(1),
            Some(page) => page.parse().map_err(|_| {
                StyleguideError::BadRequest(format!("page \"{page}\" is not a number"))
            }),
        }
    }
}

/// `GET /` and `GET /styleguide`
pub async fn index(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    CurrentBackendUser(backend_user): CurrentBackendUser,
) -> Result<Response, StyleguideError> {
    render_action(&state, BackendAction::Index, 1, backend_user, is_htmx).await
}

/// `GET /styleguide/{action}`
pub async fn show_action(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Query(query): Query<PageQuery>,
    HxRequest(is_htmx): HxRequest,
    CurrentBackendUser(backend_user): CurrentBackendUser,
) -> Result<Response, StyleguideError> {
    let action: BackendAction = action.parse()?;
    let page = query.page_number()?;
    render_action(&state, action, page, backend_user, is_htmx).await
}

#[tracing::instrument(skip(state, backend_user), fields(user = %backend_user.username))]
async fn render_action(
    state: &AppState,
    action: BackendAction,
    page: usize,
    backend_user: BackendUser,
    is_htmx: bool,
) -> Result<Response, StyleguideError> {
    let mut flash = FlashMessageService::new();

    // The demo queue is rendered inside the page body, so fill it before the
    // module queue is flushed into the chrome.
    let demo_messages = if action == BackendAction::FlashMessages {
        enqueue_demo_messages(&mut flash);
        flash.queue_by_identifier(DEMO_QUEUE).get_all_and_flush()
    } else {
        Vec::new()
    };

    let chrome = ModuleChrome::for_action(action, flash.module_queue().get_all_and_flush());
    tracing::debug!(htmx = is_htmx, "rendering styleguide page");

    match action {
        BackendAction::Index => IndexPage { chrome }.render_htmx(is_htmx),
        BackendAction::Typography => TypographyPage { chrome }.render_htmx(is_htmx),
        BackendAction::Tca => {
            let demo_exists = state.guard().set(DemoContentKind::Tca).count().await?;
            let demo_frontend_exists = state.guard().set(DemoContentKind::Frontend).count().await?;
            TcaPage {
                chrome,
                demo_exists,
                demo_frontend_exists,
            }
            .render_htmx(is_htmx)
        }
        BackendAction::Trees => TreesPage { chrome }.render_htmx(is_htmx),
        BackendAction::Tab => TabPage { chrome }.render_htmx(is_htmx),
        BackendAction::Tables => TablesPage { chrome }.render_htmx(is_htmx),
        BackendAction::Avatar => AvatarPage {
            chrome,
            backend_user,
        }
        .render_htmx(is_htmx),
        BackendAction::Buttons => ButtonsPage { chrome }.render_htmx(is_htmx),
        BackendAction::Infobox => InfoboxPage { chrome }.render_htmx(is_htmx),
        BackendAction::FlashMessages => FlashMessagesPage {
            chrome,
            demo_messages,
        }
        .render_htmx(is_htmx),
        BackendAction::Icons => icons_page(state, chrome).render_htmx(is_htmx),
        BackendAction::Debug => debug_page(chrome, &backend_user).render_htmx(is_htmx),
        BackendAction::Modal => ModalPage { chrome }.render_htmx(is_htmx),
        BackendAction::Accordion => AccordionPage { chrome }.render_htmx(is_htmx),
        BackendAction::Pagination => pagination_page(chrome, page).render_htmx(is_htmx),
    }
}

fn enqueue_demo_messages(flash: &mut FlashMessageService) {
    let lorem_ipsum = kauderwelsch::lorem_ipsum();
    flash
        .queue_by_identifier(DEMO_QUEUE)
        .enqueue(
            FlashMessage::info(lorem_ipsum)
                .with_title("Info - Title for Info message")
                .in_session(),
        )
        .enqueue(
            FlashMessage::notice(lorem_ipsum)
                .with_title("Notice - Title for Notice message")
                .in_session(),
        )
        .enqueue(
            FlashMessage::error(lorem_ipsum)
                .with_title("Error - Title for Error message")
                .in_session(),
        )
        .enqueue(
            FlashMessage::ok(lorem_ipsum)
                .with_title("Ok - Title for OK message")
                .in_session(),
        )
        .enqueue(
            FlashMessage::warning(lorem_ipsum)
                .with_title("Warning - Title for Warning message")
                .in_session(),
        );
}

fn icons_page(state: &AppState, chrome: ModuleChrome) -> IconsPage {
    let all_icons = state.icons().all_registered_icon_identifiers();
    let overlays = icons::overlays(&all_icons);
    IconsPage {
        chrome,
        deprecated_icons: state.icons().deprecated_icons(),
        all_icons,
        overlays,
    }
}

fn debug_page(chrome: ModuleChrome, backend_user: &BackendUser) -> DebugPage {
    let sample = json!({
        "backendUser": backend_user,
        "tables": schema::registry(),
    });
    let dump = serde_json::to_string_pretty(&sample).unwrap_or_else(|err| err.to_string());
    DebugPage { chrome, dump }
}

fn pagination_page(chrome: ModuleChrome, page: usize) -> PaginationPage {
    let paginator = ArrayPaginator::new(&RELEASE_NAMES, page, ITEMS_PER_PAGE);
    PaginationPage {
        chrome,
        items: paginator
            .paginated_items()
            .iter()
            .map(|name| (*name).to_string())
            .collect(),
        pagination: SimplePagination::new(&paginator),
        first_item: paginator.first_item_number(),
        last_item: paginator.last_item_number(),
        total_items: paginator.total_items(),
        user_groups: USER_GROUPS
            .iter()
            .map(|(value, label)| ((*value).to_string(), (*label).to_string()))
            .collect(),
        date_time_format: DATE_TIME_FORMAT.to_string(),
    }
}

//! Integration tests for the showcase pages

mod common;

use acton_styleguide::prelude::*;
use axum::{body::Body, Extension};
use axum_test::TestServer;
use http::{Request, StatusCode};
use tower::ServiceExt;

#[tokio::test]
async fn test_every_action_renders() {
    let server = TestServer::new(common::test_app().await).unwrap();

    for action in BackendAction::ALL {
        let response = server.get(&action.path()).await;
        response.assert_status_ok();

        let html = response.text();
        assert!(html.contains("<!DOCTYPE html>"), "{action} is not a full page");
        assert!(
            html.contains(&format!("data-action=\"{}\"", action.slug())),
            "{action} does not mark the current action"
        );
    }
}

#[tokio::test]
async fn test_index_routes() {
    let server = TestServer::new(common::test_app().await).unwrap();

    for path in ["/", "/styleguide"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        assert!(response.text().contains("data-action=\"index\""));
    }
}

#[tokio::test]
async fn test_unknown_action_is_not_found() {
    let server = TestServer::new(common::test_app().await).unwrap();

    let response = server.get("/styleguide/colors").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_shortcut_title() {
    let server = TestServer::new(common::test_app().await).unwrap();

    let html = server.get("/styleguide/modal").await.text();
    assert!(html.contains("<title>Styleguide - Modal</title>"));
}

async fn htmx_get(uri: &str) -> (StatusCode, String) {
    let app = common::test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .header("HX-Request", "true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_htmx_request_gets_partial() {
    let (status, html) = htmx_get("/styleguide/typography").await;
    assert_eq!(status, StatusCode::OK);

    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(!html.contains("<head>"));
    assert!(html.starts_with("<header class=\"module-docheader\">"));
    assert!(html.contains("<div class=\"styleguide-page\" data-action=\"typography\">"));
    assert!(html.contains("<h1>Typography</h1>"));
}

#[tokio::test]
async fn test_htmx_partial_refreshes_menu_and_title() {
    let (status, html) = htmx_get("/styleguide/modal").await;
    assert_eq!(status, StatusCode::OK);

    assert!(html.ends_with("<title>Styleguide - Modal</title>"));
    assert!(html.contains("data-shortcut-title=\"Styleguide - Modal\""));

    let active = html.find("class=\"active\"").unwrap();
    let item_end = active + html[active..].find("</li>").unwrap();
    assert!(html[active..item_end].contains("href=\"/styleguide/modal\""));
    assert_eq!(html.matches("class=\"active\"").count(), 1);
}

#[tokio::test]
async fn test_flash_messages_in_page_body() {
    let server = TestServer::new(common::test_app().await).unwrap();

    let html = server.get("/styleguide/flashMessages").await.text();

    let positions: Vec<usize> = [
        "Info - Title for Info message",
        "Notice - Title for Notice message",
        "Error - Title for Error message",
        "Ok - Title for OK message",
        "Warning - Title for Warning message",
    ]
    .iter()
    .map(|title| html.find(title).unwrap())
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    assert!(html.contains("data-severity=\"2\""));
    assert!(html.contains(acton_styleguide::kauderwelsch::lorem_ipsum()));
}

#[tokio::test]
async fn test_pagination_pages() {
    let server = TestServer::new(common::test_app().await).unwrap();

    let first = server.get("/styleguide/pagination").await.text();
    assert!(first.contains("Warty Warthog"));
    assert!(first.contains("Jaunty Jackalope"));
    assert!(!first.contains("Karmic Koala"));
    assert!(first.contains("Records 1 - 10 of 33"));

    let second = server
        .get("/styleguide/pagination")
        .add_query_param("page", 2)
        .await
        .text();
    assert!(second.starts_with("<!DOCTYPE html>"));
    assert!(second.contains("Karmic Koala"));
    assert!(!second.contains("Warty Warthog"));

    let clamped = server
        .get("/styleguide/pagination")
        .add_query_param("page", 99)
        .await
        .text();
    assert!(clamped.contains("Groovy Gorilla"));
    assert!(clamped.contains("Records 31 - 33 of 33"));
    assert!(clamped.contains("User _cli_"));
    assert!(clamped.contains("h:m d-m-Y"));
}

#[tokio::test]
async fn test_malformed_page_is_bad_request() {
    let server = TestServer::new(common::test_app().await).unwrap();

    let response = server
        .get("/styleguide/pagination")
        .add_query_param("page", "abc")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("page \"abc\" is not a number"));

    server
        .get("/styleguide/pagination")
        .add_query_param("page", "")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_icons_page() {
    let server = TestServer::new(common::test_app().await).unwrap();

    let html = server.get("/styleguide/icons").await.text();
    assert!(html.contains("data-icon-identifier=\"actions-add\""));
    assert!(html.contains("overlay-"));
}

#[tokio::test]
async fn test_avatar_uses_request_user() {
    let state = common::memory_state().await;
    let app = handlers::router(state).layer(Extension(BackendUser {
        uid: 42,
        username: "ghopper".to_string(),
        real_name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        admin: false,
    }));
    let server = TestServer::new(app).unwrap();

    let html = server.get("/styleguide/avatar").await.text();
    assert!(html.contains("Grace Hopper"));
    assert!(html.contains(">GH<"));
    assert!(!html.contains("Styleguide Admin"));
}

#[tokio::test]
async fn test_avatar_falls_back_to_configured_user() {
    let server = TestServer::new(common::test_app().await).unwrap();

    let html = server.get("/styleguide/avatar").await.text();
    assert!(html.contains("Styleguide Admin"));
}

#[tokio::test]
async fn test_schema_endpoint() {
    let server = TestServer::new(common::test_app().await).unwrap();

    let response = server.get("/styleguide/schema/tx_styleguide_ctrl_minimal").await;
    response.assert_status_ok();
    let schema: serde_json::Value = response.json();
    assert_eq!(schema["ctrl"]["label"], "title");
    assert_eq!(schema["columns"]["title"]["config"]["type"], "input");

    server
        .get("/styleguide/schema/tx_styleguide_unknown")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

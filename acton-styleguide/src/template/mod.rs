//! Askama template integration with HTMX patterns
//!
//! This module provides:
//! - [`HxTemplate`] for partial/full page rendering depending on the request
//! - [`BackendAction`] and [`ModuleChrome`], the menu and page frame every
//!   showcase page shares
//! - One template struct per showcase page in [`pages`]
//!
//! # Examples
//!
//! ```rust
//! use askama::Template;
//! use acton_styleguide::template::HxTemplate;
//! use axum_htmx::HxRequest;
//!
//! #[derive(Template)]
//! #[template(source = "<h1>{{ title }}</h1>", ext = "html")]
//! struct HeadlineTemplate {
//!     title: String,
//! }
//!
//! async fn headline(HxRequest(is_htmx): HxRequest) -> impl axum::response::IntoResponse {
//!     HeadlineTemplate { title: "Typography".to_string() }.render_htmx(is_htmx)
//! }
//! ```

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::error::StyleguideError;

mod chrome;
pub mod extractor;
pub mod pages;

pub use chrome::{BackendAction, MenuItem, ModuleChrome};

/// Extension trait for Askama templates with HTMX support
///
/// HTMX requests get the content between the partial markers of the layout;
/// regular browser requests get the full page.
pub trait HxTemplate: Template {
    /// Render template based on HTMX request detection
    ///
    /// # Errors
    ///
    /// Returns [`StyleguideError::Template`] if rendering fails.
    fn render_htmx(&self, is_htmx: bool) -> Result<Response, StyleguideError> {
        let html = self.render()?;
        if is_htmx {
            Ok(Html(extractor::extract_partial(&html).into_owned()).into_response())
        } else {
            Ok(Html(html).into_response())
        }
    }
}

// Blanket implementation for all Askama templates
impl<T> HxTemplate for T where T: Template {}

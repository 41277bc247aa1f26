//! Partial content extraction from rendered templates
//!
//! The layout wraps the page body in `<!-- HTMX_PARTIAL_START -->` and
//! `<!-- HTMX_PARTIAL_END -->` so HTMX navigation can swap just the body.
//! The document `<title>` travels with the partial; htmx picks it up and
//! updates the browser title after the swap.

use std::borrow::Cow;

const START_MARKER: &str = "<!-- HTMX_PARTIAL_START -->";
const END_MARKER: &str = "<!-- HTMX_PARTIAL_END -->";
const TITLE_START: &str = "<title>";
const TITLE_END: &str = "</title>";

/// Extract content between the partial markers
///
/// Returns the full HTML if the markers are missing. A `<title>` element in
/// front of the start marker is appended to the extracted content.
///
/// # Examples
///
/// ```rust
/// use acton_styleguide::template::extractor::extract_partial;
///
/// let html = r#"
/// <html>
/// <!-- HTMX_PARTIAL_START -->
/// <div>Main content</div>
/// <!-- HTMX_PARTIAL_END -->
/// </html>
/// "#;
///
/// assert_eq!(extract_partial(html), "<div>Main content</div>");
/// ```
#[must_use]
pub fn extract_partial(html: &str) -> Cow<'_, str> {
    if let Some(start_pos) = html.find(START_MARKER) {
        let content_start = start_pos + START_MARKER.len();
        if let Some(end_pos) = html[content_start..].find(END_MARKER) {
            let content = html[content_start..content_start + end_pos].trim();
            return match document_title(&html[..start_pos]) {
                Some(title) => Cow::Owned(format!("{content}\n{title}")),
                None => Cow::Borrowed(content),
            };
        }
    }

    Cow::Borrowed(html)
}

fn document_title(head: &str) -> Option<&str> {
    let start = head.find(TITLE_START)?;
    let end = head[start..].find(TITLE_END)? + start + TITLE_END.len();
    Some(&head[start..end])
}

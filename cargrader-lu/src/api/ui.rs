//! UI serving routes
//!
//! Serves the embedded cascading-filter page

use axum::{http::StatusCode, response::Html};

const INDEX_HTML: &str = include_str!("../ui/index.html");

/// GET /
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /favicon.ico
///
/// No icon is shipped.
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

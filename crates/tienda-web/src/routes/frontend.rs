//! Front-end route handlers.
//!
//! Serves the embedded store page and its script.

use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../../../assets/web/index.html");
const APP_JS: &str = include_str!("../../../../assets/web/app.js");

/// GET / - Serve the store front end.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// GET /app.js - Front-end script.
pub async fn app_js() -> impl IntoResponse {
    ([("content-type", "application/javascript")], APP_JS)
}

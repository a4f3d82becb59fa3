//! Static asset serving.
//!
//! The two stylesheets are embedded at compile time so the binary
//! runs without any files next to it.

use axum::body::Body;
use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

const STYLES_CSS: &str = include_str!("../assets/styles.css");
const STYLES_DARK_CSS: &str = include_str!("../assets/styles-dark.css");

/// Look up an embedded asset by file name.
fn get(file: &str) -> Option<&'static str> {
    match file {
        "styles.css" => Some(STYLES_CSS),
        "styles-dark.css" => Some(STYLES_DARK_CSS),
        _ => None,
    }
}

/// Serve an embedded asset, or 404 for anything not embedded.
pub(crate) async fn serve_asset(Path(file): Path<String>) -> Response {
    match get(&file) {
        Some(content) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "text/css; charset=utf-8")
            .body(Body::from(content))
            .unwrap(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

//! Handlers for the `/api/links` endpoint
//!
//! The API is deliberately coarse: GET returns the whole collection, POST
//! replaces it wholesale. There is no per-item verb and no validation beyond
//! "the body is a JSON array of links".

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use launchdeck_core::{Link, LinkStore, StoreError};

/// GET /api/links - return the full collection
pub async fn get_links(State(store): State<LinkStore>) -> Response {
    match store.load().await {
        Ok(links) => Json(links).into_response(),
        Err(err) => store_error(err),
    }
}

/// POST /api/links - replace the full collection and echo it back
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that both malformed JSON and a well-formed non-array consistently yield
/// 400 with the parser's message as the body.
pub async fn replace_links(State(store): State<LinkStore>, body: Bytes) -> Response {
    let links: Vec<Link> = match serde_json::from_slice(&body) {
        Ok(links) => links,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };

    match store.save(&links).await {
        Ok(()) => Json(links).into_response(),
        Err(err) => store_error(err),
    }
}

/// Any other method on /api/links
pub async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
}

/// Surface a store failure as 500 with the raw error text
fn store_error(err: StoreError) -> Response {
    error!("store operation failed: {err}");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}

//! Route table
//!
//! Two routes only: the links API, and a fallback that serves the single
//! front-end entry file for every other path. The front end handles its own
//! internal navigation, so there is no further static routing.

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use launchdeck_core::{Config, LinkStore};

use crate::api;

/// Build the application router
pub fn build_router(config: &Config, store: LinkStore) -> Router {
    Router::new()
        .route(
            "/api/links",
            get(api::get_links)
                .post(api::replace_links)
                .fallback(api::method_not_allowed),
        )
        .fallback_service(ServeFile::new(&config.index_file))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

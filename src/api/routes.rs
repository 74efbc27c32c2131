//! API route configuration.

use crate::api::handlers::{full_url_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Link routes.
///
/// # Endpoints
///
/// - `GET /short?url=` - Shorten a URL
/// - `GET /full?url=`  - Resolve a short URL or code to its full URL
/// - `GET /?url=`      - 308 redirect to the full URL
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/short", get(shorten_handler))
        .route("/full", get(full_url_handler))
        .route("/", get(redirect_handler))
}

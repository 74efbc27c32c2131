//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::url::{ShortenQuery, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL, reusing the existing short URL if it was shortened before.
///
/// # Endpoint
///
/// `GET /short?url=<full url>`
///
/// # Response
///
/// ```json
/// { "url": "http://localhost:9000/0b1c2d3e-4f5" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with an empty body if `url` is not an accepted URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortenQuery>,
) -> Result<Json<UrlResponse>, AppError> {
    let short_url = state.link_service.shorten(&query.url)?;

    Ok(Json(UrlResponse::new(short_url)))
}

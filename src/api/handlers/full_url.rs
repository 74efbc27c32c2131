//! Handler for resolving a short URL back to its full URL.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::url::{LookupQuery, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full URL behind a short URL or short code.
///
/// # Endpoint
///
/// `GET /full?url=<short url or code>`
///
/// The code is taken from after the last `/` of `url`.
///
/// # Response
///
/// ```json
/// { "url": "https://www.example.com" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if no link is stored under the code.
pub async fn full_url_handler(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<UrlResponse>, AppError> {
    let full_url = state.link_service.resolve_full_url(&query.url)?;

    Ok(Json(UrlResponse::new(full_url)))
}

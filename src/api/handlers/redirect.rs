//! Handler for short URL redirect.

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::url::LookupQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short URL or short code to its full URL.
///
/// # Endpoint
///
/// `GET /?url=<short url or code>`
///
/// Responds with 308 Permanent Redirect, the full URL in `Location` and an
/// empty body.
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
/// Returns 400 Bad Request if the stored URL can't be used as a `Location`.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let location = state.link_service.redirect_target(&query.url)?;

    Ok((StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, location)]))
}

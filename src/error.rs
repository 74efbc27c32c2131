//! Application error type and its HTTP mapping.
//!
//! Every failure a request can hit is represented here and converted into a
//! bare status code at the handler boundary. Error responses carry no body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors produced by link operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// The URL submitted for shortening does not match the accepted syntax.
    #[error("invalid URL syntax: {url}")]
    InvalidUrlSyntax { url: String },

    /// No link is stored under the given short code.
    #[error("short code not found: {code}")]
    TokenNotFound { code: String },

    /// The stored URL cannot be placed in a `Location` header.
    #[error("stored URL is not a usable redirect target: {url}")]
    UnusableRedirectTarget { url: String },
}

impl AppError {
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrlSyntax { url: url.into() }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::TokenNotFound { code: code.into() }
    }

    pub fn unusable_redirect(url: impl Into<String>) -> Self {
        Self::UnusableRedirectTarget { url: url.into() }
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrlSyntax { .. } => StatusCode::BAD_REQUEST,
            AppError::TokenNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UnusableRedirectTarget { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(%status, "request failed: {}", self);
        status.into_response()
    }
}

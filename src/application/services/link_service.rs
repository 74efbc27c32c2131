//! Link shortening, resolution and redirect service.

use std::sync::Arc;

use axum::http::HeaderValue;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::redirect_target::location_header;
use crate::utils::short_url::{compose_short_url, extract_code};
use crate::utils::url_validator::is_valid_url;

/// Service for creating and looking up short links.
///
/// Each distinct full URL is shortened at most once: repeated requests return
/// the short URL issued the first time.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service issuing short URLs under `base_url`.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        Self {
            link_repository,
            base_url: base_url.into(),
        }
    }

    /// Number of links currently stored.
    pub fn link_count(&self) -> usize {
        self.link_repository.len()
    }

    /// Returns the short URL for `url`, creating it on first use.
    ///
    /// # Code Generation
    ///
    /// A fresh code is generated only when `url` has no mapping yet. The code
    /// is not checked against existing ones; a collision replaces the older
    /// mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrlSyntax`] if `url` fails validation.
    pub fn shorten(&self, url: &str) -> Result<String, AppError> {
        if !is_valid_url(url) {
            return Err(AppError::invalid_url(url));
        }

        if let Some(existing) = self.link_repository.find_short_url(url) {
            tracing::debug!(url, short_url = %existing, "Returning existing short URL");
            return Ok(existing);
        }

        let code = generate_code();
        let short_url = compose_short_url(&self.base_url, &code);

        let link = self
            .link_repository
            .insert_if_absent(url, &code, &short_url);
        tracing::debug!(url, code = %link.code, "Short URL issued");

        Ok(link.short_url)
    }

    /// Looks up the full URL behind a short URL or bare code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::TokenNotFound`] if no link is stored under the code.
    pub fn resolve_full_url(&self, short_url_or_code: &str) -> Result<String, AppError> {
        let code = extract_code(short_url_or_code);

        self.link_repository
            .find_full_url(code)
            .ok_or_else(|| AppError::not_found(code))
    }

    /// Resolves a short URL or bare code to a `Location` header value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::TokenNotFound`] if no link is stored under the code.
    /// Returns [`AppError::UnusableRedirectTarget`] if the stored URL is not a
    /// valid URI reference.
    pub fn redirect_target(&self, short_url_or_code: &str) -> Result<HeaderValue, AppError> {
        let full_url = self.resolve_full_url(short_url_or_code)?;

        location_header(&full_url).ok_or_else(|| AppError::unusable_redirect(full_url))
    }
}

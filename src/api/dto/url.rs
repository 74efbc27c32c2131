//! Query and response types of the shorten, resolve and redirect endpoints.

use serde::{Deserialize, Serialize};

/// Query string of `GET /short`.
///
/// `url` is checked against the accepted URL syntax by
/// [`crate::application::services::LinkService::shorten`].
#[derive(Debug, Deserialize)]
pub struct ShortenQuery {
    pub url: String,
}

/// Query string of `GET /full` and `GET /`.
///
/// `url` is either a short URL or a bare short code.
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub url: String,
}

/// Single-field response body: `{"url": "..."}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlResponse {
    pub url: String,
}

impl UrlResponse {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_query_keeps_url_verbatim() {
        let query: ShortenQuery =
            serde_json::from_value(serde_json::json!({ "url": "HTTP://Example.COM/ a" })).unwrap();
        assert_eq!(query.url, "HTTP://Example.COM/ a");
    }

    #[test]
    fn test_url_response_serialization() {
        let body = serde_json::to_value(UrlResponse::new("http://localhost:9000/abc")).unwrap();
        assert_eq!(body, serde_json::json!({ "url": "http://localhost:9000/abc" }));
    }
}

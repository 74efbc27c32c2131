//! Link entity representing a shortened URL mapping.

/// A stored mapping between a short code and the URL it stands for.
///
/// `short_url` is the externally visible form of `code` under the configured
/// base URL. `full_url` is kept byte-for-byte as it was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub full_url: String,
    pub short_url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: impl Into<String>,
        full_url: impl Into<String>,
        short_url: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            full_url: full_url.into(),
            short_url: short_url.into(),
        }
    }
}

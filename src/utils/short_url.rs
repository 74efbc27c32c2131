//! Short URL composition and parsing.

/// Builds the externally visible short URL for `code` under `base_url`.
///
/// A trailing slash on the base is not doubled.
///
/// ```ignore
/// assert_eq!(
///     compose_short_url("http://localhost:9000/", "0b1c2d3e-4f5"),
///     "http://localhost:9000/0b1c2d3e-4f5"
/// );
/// ```
pub fn compose_short_url(base_url: &str, code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), code)
}

/// Extracts the short code from a short URL or a bare code.
///
/// The code is everything after the last `/`; input without a slash is taken
/// as the code itself. No other validation is done.
pub fn extract_code(short_url_or_code: &str) -> &str {
    match short_url_or_code.rfind('/') {
        Some(pos) => &short_url_or_code[pos + 1..],
        None => short_url_or_code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_with_trailing_slash() {
        assert_eq!(
            compose_short_url("http://localhost:9000/", "abc"),
            "http://localhost:9000/abc"
        );
    }

    #[test]
    fn test_compose_without_trailing_slash() {
        assert_eq!(
            compose_short_url("https://s.example.com", "abc"),
            "https://s.example.com/abc"
        );
    }

    #[test]
    fn test_extract_from_short_url() {
        assert_eq!(
            extract_code("http://localhost:9000/0b1c2d3e-4f5"),
            "0b1c2d3e-4f5"
        );
    }

    #[test]
    fn test_extract_bare_code() {
        assert_eq!(extract_code("0b1c2d3e-4f5"), "0b1c2d3e-4f5");
        assert_eq!(extract_code("not a url"), "not a url");
    }

    #[test]
    fn test_extract_trailing_slash_gives_empty_code() {
        assert_eq!(extract_code("http://localhost:9000/"), "");
    }

    #[test]
    fn test_extract_uses_last_slash() {
        assert_eq!(extract_code("https://www.example.com/a/b/c"), "c");
    }
}

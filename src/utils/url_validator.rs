//! Syntactic URL validation for links submitted for shortening.

use regex::Regex;
use std::sync::LazyLock;

/// Accepted URL shape: optional `http(s)://` (optionally followed by `www.`),
/// lowercase dot-separated host labels, a 2-5 letter top-level label, an
/// optional port and an optional `/`-prefixed suffix free of line terminators.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(http://www\.|https://www\.|http://|https://)?[a-z0-9]+([-.][a-z0-9]+)*\.[a-z]{2,5}(:[0-9]{1,5})?(/[^\n\r\u{85}\u{2028}\u{2029}]*)?$",
    )
    .expect("URL pattern is valid")
});

/// Returns `true` if `candidate` matches the accepted URL shape in full.
///
/// Matching is case-sensitive and purely syntactic: uppercase hosts, IPv6
/// literals and non-ASCII hostnames are all rejected, as is a path holding a
/// line terminator (`\n`, `\r`, U+0085, U+2028 or U+2029).
pub fn is_valid_url(candidate: &str) -> bool {
    URL_REGEX.is_match(candidate)
}

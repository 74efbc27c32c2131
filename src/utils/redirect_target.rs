//! Turns a stored URL into a `Location` header value.
//!
//! A stored URL is usable as a redirect target when it parses as a URI
//! reference under the RFC 2396 grammar (with the RFC 2732 bracket extension):
//!
//! ```text
//! uri       = [ scheme ":" ] ( "//" authority path | path | opaque ) [ "?" query ] [ "#" fragment ]
//! ```
//!
//! Each component admits its own character set. Besides ASCII, every
//! component except the scheme accepts `%XX` escapes and "other" characters:
//! non-ASCII characters that are neither controls nor whitespace. Those are
//! percent-encoded as UTF-8 when the header value is built.

use axum::http::HeaderValue;
use std::net::Ipv6Addr;

fn is_mark(c: char) -> bool {
    matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
}

fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_mark(c)
}

fn is_reserved(c: char) -> bool {
    matches!(
        c,
        ';' | '/' | '?' | ':' | '@' | '&' | '=' | '+' | '$' | ',' | '[' | ']'
    )
}

/// Query, fragment and opaque part characters.
fn is_uric(c: char) -> bool {
    is_reserved(c) || is_unreserved(c)
}

/// Path characters: segments joined by `/` with `;` parameters.
fn is_path_char(c: char) -> bool {
    is_unreserved(c) || matches!(c, ':' | '@' | '&' | '=' | '+' | '$' | ',' | ';' | '/')
}

/// Registry-based authority characters.
fn is_reg_name_char(c: char) -> bool {
    is_unreserved(c) || matches!(c, '$' | ',' | ';' | ':' | '@' | '&' | '=' | '+')
}

fn is_userinfo_char(c: char) -> bool {
    is_unreserved(c) || matches!(c, ';' | ':' | '&' | '=' | '+' | '$' | ',')
}

fn is_other(c: char) -> bool {
    !c.is_ascii() && !c.is_control() && !c.is_whitespace()
}

/// Checks that every character of `component` is allowed by `allowed`, is
/// an "other" character, or starts a well-formed `%XX` escape.
fn scan_component(component: &str, allowed: fn(char) -> bool) -> bool {
    let mut chars = component.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            let escaped = chars.next().zip(chars.next());
            if !escaped.is_some_and(|(hi, lo)| hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()) {
                return false;
            }
        } else if !allowed(c) && !is_other(c) {
            return false;
        }
    }
    true
}

fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// `[userinfo "@"] "[" IPv6 "]" [":" port]`
fn is_bracketed_server(authority: &str) -> bool {
    let host_port = match authority.split_once('@') {
        Some((userinfo, rest)) => {
            if !scan_component(userinfo, is_userinfo_char) {
                return false;
            }
            rest
        }
        None => authority,
    };

    let Some(literal) = host_port.strip_prefix('[') else {
        return false;
    };
    let Some((address, after)) = literal.split_once(']') else {
        return false;
    };
    let address = address.split_once('%').map_or(address, |(addr, _scope)| addr);
    if address.parse::<Ipv6Addr>().is_err() {
        return false;
    }

    match after.strip_prefix(':') {
        Some(port) => port.chars().all(|c| c.is_ascii_digit()),
        None => after.is_empty(),
    }
}

fn is_authority(authority: &str) -> bool {
    scan_component(authority, is_reg_name_char) || is_bracketed_server(authority)
}

/// Hierarchical part: `["//" authority] path ["?" query]`.
fn is_hierarchical(part: &str, has_fragment: bool) -> bool {
    let rest = match part.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?']).unwrap_or(after.len());
            let authority = &after[..end];
            if authority.is_empty() {
                // An empty authority needs something after it.
                if end == after.len() && !has_fragment {
                    return false;
                }
            } else if !is_authority(authority) {
                return false;
            }
            &after[end..]
        }
        None => part,
    };

    match rest.split_once('?') {
        Some((path, query)) => {
            scan_component(path, is_path_char) && scan_component(query, is_uric)
        }
        None => scan_component(rest, is_path_char),
    }
}

/// Returns `true` if `target` is a structurally valid URI reference.
///
/// Relative references such as `example.com/docs` are accepted. `[` and `]`
/// are only accepted around an IPv6 host and in the query or fragment, and a
/// fragment may not contain a second `#`.
pub fn is_valid_uri(target: &str) -> bool {
    let (before_fragment, fragment) = match target.split_once('#') {
        Some((before, fragment)) => (before, Some(fragment)),
        None => (target, None),
    };

    if fragment.is_some_and(|f| !scan_component(f, is_uric)) {
        return false;
    }

    let scheme_end = before_fragment.find([':', '/', '?']);
    match scheme_end {
        Some(pos) if before_fragment[pos..].starts_with(':') => {
            let (scheme, rest) = (&before_fragment[..pos], &before_fragment[pos + 1..]);
            if !is_scheme(scheme) {
                return false;
            }
            if rest.starts_with('/') {
                is_hierarchical(rest, fragment.is_some())
            } else {
                !rest.is_empty() && scan_component(rest, is_uric)
            }
        }
        _ => is_hierarchical(before_fragment, fragment.is_some()),
    }
}

/// Percent-encodes every non-ASCII character as UTF-8, leaving ASCII as is.
fn to_ascii(target: &str) -> String {
    let mut ascii = String::with_capacity(target.len());
    let mut buf = [0u8; 4];
    for c in target.chars() {
        if c.is_ascii() {
            ascii.push(c);
        } else {
            ascii.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    ascii
}

/// Converts a stored URL into a `Location` header value.
///
/// Returns `None` when the URL is not a valid URI reference.
pub fn location_header(target: &str) -> Option<HeaderValue> {
    if !is_valid_uri(target) {
        return None;
    }
    HeaderValue::from_str(&to_ascii(target)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_is_usable() {
        let value = location_header("https://www.example.com").unwrap();
        assert_eq!(value, "https://www.example.com");
    }

    #[test]
    fn test_scheme_less_url_is_usable() {
        assert!(is_valid_uri("example.com/path?q=1&r=2#frag"));
        assert!(is_valid_uri("www.example.com"));
    }

    #[test]
    fn test_host_with_port_without_scheme_is_opaque() {
        assert!(is_valid_uri("example.com:8080/x"));
    }

    #[test]
    fn test_percent_escapes() {
        assert!(is_valid_uri("https://example.com/a%20b"));
        assert!(!is_valid_uri("https://example.com/a%2"));
        assert!(!is_valid_uri("https://example.com/a%zz"));
        assert!(!is_valid_uri("https://example.com/%"));
    }

    #[test]
    fn test_space_is_unusable() {
        assert!(location_header("https://example.com/a b").is_none());
    }

    #[test]
    fn test_brackets_in_path_are_unusable() {
        assert!(!is_valid_uri("https://example.com/[x]"));
        assert!(!is_valid_uri("example.com/a]"));
    }

    #[test]
    fn test_brackets_in_query_and_fragment() {
        assert!(is_valid_uri("https://example.com/?q=[1]"));
        assert!(is_valid_uri("https://example.com/#[1]"));
    }

    #[test]
    fn test_ipv6_authority() {
        assert!(is_valid_uri("http://[::1]:8080/x"));
        assert!(is_valid_uri("http://user@[2001:db8::1]/"));
        assert!(!is_valid_uri("http://[not-an-address]/"));
        assert!(!is_valid_uri("http://[::1]x/"));
    }

    #[test]
    fn test_second_hash_is_unusable() {
        assert!(!is_valid_uri("https://example.com/a#b#c"));
        assert!(is_valid_uri("https://example.com/a#b"));
    }

    #[test]
    fn test_quotes_and_braces() {
        assert!(!is_valid_uri("https://example.com/\"x\""));
        assert!(!is_valid_uri("https://example.com/<x>"));
        assert!(!is_valid_uri("https://example.com/{x}"));
        assert!(!is_valid_uri("https://example.com/a|b"));
    }

    #[test]
    fn test_bad_scheme() {
        assert!(!is_valid_uri(":foo"));
        assert!(!is_valid_uri("1http://example.com"));
        assert!(!is_valid_uri("mailto:"));
    }

    #[test]
    fn test_non_ascii_is_encoded() {
        let value = location_header("https://example.com/café").unwrap();
        assert_eq!(value, "https://example.com/caf%C3%A9");
    }

    #[test]
    fn test_non_ascii_space_and_controls_are_unusable() {
        assert!(!is_valid_uri("https://example.com/a\u{3000}b"));
        assert!(!is_valid_uri("https://example.com/a\u{85}b"));
        assert!(!is_valid_uri("https://example.com/a\tb"));
    }
}

// src/utils/url.rs

//! URL helpers: origin extraction and relative-link resolution.

use url::Url;

/// Extract the origin (scheme + host + port) of a URL.
///
/// The origin is the grouping key for per-server rate limiting and for
/// title-based deduplication. URLs that do not parse fall back to the raw
/// string, so malformed URLs never share a bucket.
///
/// # Examples
/// ```
/// use newswire::utils::url::origin_of;
///
/// assert_eq!(origin_of("https://example.com/a/b?q=1"), "https://example.com");
/// assert_eq!(origin_of("http://example.com:8080/x"), "http://example.com:8080");
/// ```
pub fn origin_of(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) if parsed.has_host() => parsed.origin().ascii_serialization(),
        _ => url.to_string(),
    }
}

/// Resolve a potentially relative `href` against a base URL.
///
/// Feed entries occasionally carry relative article links; they are resolved
/// against the feed document's own URL. An unresolvable pair returns the
/// href unchanged.
pub fn resolve_link(base: &str, href: &str) -> String {
    match Url::parse(base) {
        Ok(base) => base
            .join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string()),
        Err(_) => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_strips_path_and_query() {
        assert_eq!(origin_of("https://news.example.com/a/b?x=1#f"), "https://news.example.com");
    }

    #[test]
    fn test_origin_keeps_explicit_port() {
        assert_eq!(origin_of("http://example.com:8080/x"), "http://example.com:8080");
    }

    #[test]
    fn test_origin_default_port_elided() {
        assert_eq!(origin_of("http://example.com:80/x"), "http://example.com");
    }

    #[test]
    fn test_unparseable_url_is_its_own_origin() {
        assert_eq!(origin_of("not a url"), "not a url");
        assert_ne!(origin_of("not a url"), origin_of("also not a url"));
    }

    #[test]
    fn test_resolve_relative_link() {
        assert_eq!(
            resolve_link("https://example.com/feeds/a.xml", "/stories/1.html"),
            "https://example.com/stories/1.html"
        );
    }

    #[test]
    fn test_resolve_absolute_link_passthrough() {
        assert_eq!(
            resolve_link("https://example.com/feeds/a.xml", "https://other.com/x"),
            "https://other.com/x"
        );
    }
}

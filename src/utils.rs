use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static UNSAFE_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("slug pattern is valid"));

/// Prefixes `https://` onto anything that does not already start with `http`
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}

/// Returns the last non-empty path segment of a URL
///
/// A trailing slash is ignored, so `/products/tool/` yields `tool`.
/// Returns `None` for unparseable URLs or an empty path.
pub fn last_path_segment(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .path_segments()?
        .rev()
        .find(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
}

/// Replaces every character outside `[A-Za-z0-9_-]` with `_`
pub fn sanitize_slug(name: &str) -> String {
    UNSAFE_SLUG_CHARS.replace_all(name, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("example.com/a"), "https://example.com/a");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        // Only the prefix is checked
        assert_eq!(normalize_url("httpbin.org"), "httpbin.org");
        assert_eq!(normalize_url("ftp://host/x"), "https://ftp://host/x");
    }

    #[test]
    fn test_last_path_segment() {
        assert_eq!(
            last_path_segment("https://brightdata.com/products/web-scraper/hotwire").as_deref(),
            Some("hotwire")
        );
        assert_eq!(
            last_path_segment("https://example.com/products/tool/").as_deref(),
            Some("tool")
        );
        assert_eq!(
            last_path_segment("https://cdn.example.com/img/hero.webp?v=3#x").as_deref(),
            Some("hero.webp")
        );
        assert_eq!(last_path_segment("https://example.com/"), None);
        assert_eq!(last_path_segment("https://example.com"), None);
        assert_eq!(last_path_segment("not a url"), None);
    }

    #[test]
    fn test_sanitize_slug() {
        assert_eq!(sanitize_slug("hotwire"), "hotwire");
        assert_eq!(sanitize_slug("web-scraper_v2"), "web-scraper_v2");
        assert_eq!(sanitize_slug("page.html"), "page_html");
        assert_eq!(sanitize_slug("a%20b"), "a_20b");
        assert_eq!(sanitize_slug("caf\u{e9}"), "caf_");
    }
}

use crate::parsers::non_empty_trimmed;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static OG_IMAGE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:image"]"#).expect("og:image selector is valid")
});

/// Returns the trimmed `content` of the first `og:image` meta tag
///
/// Later `og:image` tags are never consulted, even when the first one is empty.
pub fn locate(doc: &Html) -> Option<String> {
    let meta = doc.select(&OG_IMAGE).next()?;
    non_empty_trimmed(meta.value().attr("content"))
}

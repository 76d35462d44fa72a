pub mod hero;
pub mod og;


use scraper::Html;

pub use hero::{HeroImage, HeroStrategy};

/// Image URLs extracted from one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub hero: Option<HeroImage>,
    pub og_image: Option<String>,
}

impl Extraction {
    /// The hero image URL, regardless of which strategy found it
    pub fn hero_url(&self) -> Option<&str> {
        self.hero.as_ref().map(|hero| hero.src.as_str())
    }
}

/// Runs both image heuristics over a raw HTML body
///
/// Parsing is lenient: garbage input simply produces an empty `Extraction`.
pub fn extract(html: &str) -> Extraction {
    let doc = Html::parse_document(html);
    extract_from_document(&doc)
}

/// Runs both image heuristics over an already parsed document
pub fn extract_from_document(doc: &Html) -> Extraction {
    let hero = hero::locate(doc);
    let og_image = og::locate(doc);

    match &hero {
        Some(found) => ::log::debug!("Hero image via {:?} strategy: {}", found.strategy, found.src),
        None => ::log::debug!("No hero image markers found"),
    }
    if og_image.is_none() {
        ::log::debug!("No og:image meta tag found");
    }

    Extraction { hero, og_image }
}

/// Returns true when every token in `required` appears in the class list
pub(crate) fn has_all_classes(element: &scraper::node::Element, required: &[&str]) -> bool {
    required
        .iter()
        .all(|token| element.classes().any(|class| class == *token))
}

/// Trims an attribute value, treating whitespace-only as missing
pub(crate) fn non_empty_trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

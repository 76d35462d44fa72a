use crate::parsers::{has_all_classes, non_empty_trimmed};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Class tokens that identify the hero column in the current page layout
pub const CONTAINER_CLASSES: [&str; 5] = [
    "s_col",
    "col-md-6",
    "d-md-flex",
    "flex-column",
    "align-items-md-end",
];

/// Looser marker used when the layout has drifted
pub const FALLBACK_CLASS: &str = "s_col";

/// Class token carried by the hero `<img>`
pub const IMAGE_CLASS: &str = "no_lazy";

static DIV: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div").expect("div selector is valid"));
static IMG: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("img selector is valid"));

/// Which tier of the hero lookup matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroStrategy {
    /// The full five-class container
    Primary,
    /// Any `div.s_col`
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroImage {
    pub src: String,
    pub strategy: HeroStrategy,
}

/// Finds the hero image, trying the exact container first
pub fn locate(doc: &Html) -> Option<HeroImage> {
    if let Some(src) = primary(doc) {
        return Some(HeroImage {
            src,
            strategy: HeroStrategy::Primary,
        });
    }

    fallback(doc).map(|src| HeroImage {
        src,
        strategy: HeroStrategy::Fallback,
    })
}

/// Only the first matching container is inspected
fn primary(doc: &Html) -> Option<String> {
    let container = doc
        .select(&DIV)
        .find(|div| has_all_classes(div.value(), &CONTAINER_CLASSES))?;
    image_src(container)
}

fn fallback(doc: &Html) -> Option<String> {
    doc.select(&DIV)
        .filter(|div| has_all_classes(div.value(), &[FALLBACK_CLASS]))
        .find_map(image_src)
}

/// `src` of the first `img.no_lazy` below `container`
///
/// Later `img.no_lazy` elements in the same container are ignored even if the
/// first one has no usable `src`.
fn image_src(container: ElementRef<'_>) -> Option<String> {
    let img = container
        .select(&IMG)
        .find(|img| has_all_classes(img.value(), &[IMAGE_CLASS]))?;
    non_empty_trimmed(img.value().attr("src"))
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of fetching a single page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The page was fetched; extraction may still have found nothing
    Ok,
    /// The page fetch itself failed
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Images discovered on one input page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Normalized URL of the page
    pub url: String,

    /// Hero image URL, if the layout markers were found
    pub hero_image: Option<String>,

    /// `og:image` URL, if the meta tag was present and non-empty
    pub og_image: Option<String>,

    pub status: Status,
}

impl PageResult {
    /// Result for a page that was fetched and run through the extractor
    pub fn ok(url: String, hero_image: Option<String>, og_image: Option<String>) -> Self {
        Self {
            url,
            hero_image,
            og_image,
            status: Status::Ok,
        }
    }

    /// Result for a page whose fetch failed
    pub fn error(url: String) -> Self {
        Self {
            url,
            hero_image: None,
            og_image: None,
            status: Status::Error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

/// Which extraction produced an image URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Hero,
    Og,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Hero => "hero",
            ImageKind::Og => "og",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One image to download while packaging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTask<'a> {
    pub image_url: &'a str,
    pub page_url: &'a str,
    pub kind: ImageKind,
}

impl<'a> ImageTask<'a> {
    /// Builds the download list: per result, hero first, then OG
    pub fn collect(results: &'a [PageResult]) -> Vec<ImageTask<'a>> {
        let mut tasks = Vec::new();
        for result in results {
            if let Some(hero) = result.hero_image.as_deref() {
                tasks.push(ImageTask {
                    image_url: hero,
                    page_url: &result.url,
                    kind: ImageKind::Hero,
                });
            }
            if let Some(og) = result.og_image.as_deref() {
                tasks.push(ImageTask {
                    image_url: og,
                    page_url: &result.url,
                    kind: ImageKind::Og,
                });
            }
        }
        tasks
    }
}

use crate::results::PageResult;
use std::fmt;
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub const CSV_HEADER: &str = "Page URL,Hero Image,OG Image,Status";

/// Shown in the table for an image that was not found
pub const MISSING_PLACEHOLDER: &str = "\u{2014}";

/// Renders results as CSV
///
/// Every value is wrapped in double quotes; absent images become empty
/// strings. Quotes inside values are NOT escaped, so a URL containing `"`
/// produces a malformed row.
pub fn to_csv(results: &[PageResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for r in results {
        lines.push(format!(
            "\"{}\",\"{}\",\"{}\",\"{}\"",
            r.url,
            r.hero_image.as_deref().unwrap_or(""),
            r.og_image.as_deref().unwrap_or(""),
            r.status
        ));
    }
    lines.join("\n")
}

/// One display row with placeholders filled in
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct TableRow<'a> {
    #[tabled(rename = "Page URL")]
    pub page_url: &'a str,
    #[tabled(rename = "Hero Image")]
    pub hero_image: &'a str,
    #[tabled(rename = "OG Image")]
    pub og_image: &'a str,
    #[tabled(rename = "Status")]
    pub status: &'static str,
}

impl<'a> From<&'a PageResult> for TableRow<'a> {
    fn from(r: &'a PageResult) -> Self {
        Self {
            page_url: &r.url,
            hero_image: r.hero_image.as_deref().unwrap_or(MISSING_PLACEHOLDER),
            og_image: r.og_image.as_deref().unwrap_or(MISSING_PLACEHOLDER),
            status: if r.is_ok() { "\u{2705}" } else { "\u{274c}" },
        }
    }
}

/// Renders the results as a plain-text table
pub fn render_table(results: &[PageResult]) -> String {
    let mut table = Table::new(results.iter().map(TableRow::from));
    table.with(Style::psql());
    table.to_string()
}

/// Copy-friendly listing, one block per page
pub fn render_raw(results: &[PageResult]) -> String {
    let mut lines = Vec::new();
    for r in results {
        lines.push(format!("Page:  {}", r.url));
        lines.push(format!("  Hero:  {}", r.hero_image.as_deref().unwrap_or("N/A")));
        lines.push(format!("  OG:    {}", r.og_image.as_deref().unwrap_or("N/A")));
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Counts shown after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub ok: usize,
    pub total: usize,
    pub hero_images: usize,
    pub og_images: usize,
}

impl Summary {
    pub fn from_results(results: &[PageResult]) -> Self {
        Self {
            ok: results.iter().filter(|r| r.is_ok()).count(),
            total: results.len(),
            hero_images: results.iter().filter(|r| r.hero_image.is_some()).count(),
            og_images: results.iter().filter(|r| r.og_image.is_some()).count(),
        }
    }

    pub fn has_images(&self) -> bool {
        self.hero_images + self.og_images > 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} pages scraped \u{b7} {} hero images \u{b7} {} OG images found",
            self.ok, self.total, self.hero_images, self.og_images
        )
    }
}

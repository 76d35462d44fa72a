use clap::Parser;
use std::path::PathBuf;

pub const MIN_DELAY_SECS: f64 = 1.0;
pub const MAX_DELAY_SECS: f64 = 5.0;

#[derive(Parser, Debug)]
#[command(name = "page-images")]
#[command(about = "Extracts hero and og:image URLs from product pages and zips the images")]
#[command(version)]
pub struct Args {
    /// Page URLs to scrape; a missing scheme defaults to https://
    pub urls: Vec<String>,

    /// Read additional URLs from a file, one per line ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Delay between page requests in seconds (1.0 - 5.0)
    #[arg(short, long, value_parser = parse_delay)]
    pub delay: Option<f64>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the results table as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Where to write the image archive
    #[arg(long, default_value = "images.zip")]
    pub zip: PathBuf,

    /// Skip downloading images into a ZIP archive
    #[arg(long)]
    pub no_images: bool,
}

/// Accepts a number of seconds inside the supported delay range
pub fn parse_delay(value: &str) -> Result<f64, String> {
    let secs: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    check_delay(secs)
}

/// Range check shared by `--delay` and the delay loaded from `--config`
pub fn check_delay(secs: f64) -> Result<f64, String> {
    if !(MIN_DELAY_SECS..=MAX_DELAY_SECS).contains(&secs) {
        return Err(format!(
            "delay must be between {} and {} seconds, got {}",
            MIN_DELAY_SECS, MAX_DELAY_SECS, secs
        ));
    }
    Ok(secs)
}

/// Trims each line and drops blank ones
pub fn collect_urls<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

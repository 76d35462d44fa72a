// Re-export modules
pub mod config;
pub mod error;
pub mod fetcher;
pub mod package;
pub mod parsers;
pub mod progress;
pub mod report;
pub mod results;
pub mod scrape;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::{ConfigError, FetchError, PackageError};
pub use fetcher::Fetcher;
pub use progress::{LogProgress, Progress, ProgressEvent, Stage};
pub use results::{ImageKind, ImageTask, PageResult, Status};

use std::path::Path;

/// Builder for a scrape run: pages first, then optionally the image archive
#[derive(Debug, Clone)]
pub struct Scraper {
    config: ScraperConfig,
}

impl Default for Scraper {
    fn default() -> Self {
        Self::new(ScraperConfig::default())
    }
}

impl Scraper {
    /// Create a new Scraper with the given configuration
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a JSON file
    ///
    /// Values are checked by `build`, after any `with_*` overrides.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::new(ScraperConfig::read_file(path)?))
    }

    /// Load configuration from a JSON string
    pub fn from_config_str(json: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(ScraperConfig::parse_json(json)?))
    }

    /// Set the pause between page requests, in seconds
    pub fn with_delay_secs(mut self, seconds: f64) -> Self {
        self.config.page_delay_secs = seconds;
        self
    }

    /// Set the pause between image downloads, in seconds
    pub fn with_image_delay_secs(mut self, seconds: f64) -> Self {
        self.config.image_delay_secs = seconds;
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout_secs(mut self, seconds: u64) -> Self {
        self.config.timeout_secs = seconds;
        self
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Validate the configuration and build the HTTP client
    pub fn build(self) -> Result<Session, ConfigError> {
        self.config.validate()?;
        let fetcher = Fetcher::new(&self.config)?;
        Ok(Session {
            config: self.config,
            fetcher,
        })
    }
}

/// A validated configuration with its HTTP client, ready to run
#[derive(Debug, Clone)]
pub struct Session {
    config: ScraperConfig,
    fetcher: Fetcher,
}

impl Session {
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Scrape every URL in order with the configured page delay
    pub async fn scrape<S, P>(&self, urls: &[S], progress: &mut P) -> Vec<PageResult>
    where
        S: AsRef<str>,
        P: Progress + ?Sized,
    {
        scrape::scrape(&self.fetcher, urls, self.config.page_delay(), progress).await
    }

    /// Download every discovered image into an in-memory ZIP
    ///
    /// `Ok(None)` means there was nothing to download.
    pub async fn package<P>(
        &self,
        results: &[PageResult],
        progress: &mut P,
    ) -> Result<Option<Vec<u8>>, PackageError>
    where
        P: Progress + ?Sized,
    {
        package::package(&self.fetcher, results, self.config.image_delay(), progress).await
    }
}

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration shared by the page fetcher and the image packager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Accept header sent with every request
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Accept-Language header sent with every request
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pause between page fetches, in seconds
    #[serde(default = "default_page_delay_secs")]
    pub page_delay_secs: f64,

    /// Pause between image downloads, in seconds
    #[serde(default = "default_image_delay_secs")]
    pub image_delay_secs: f64,

    /// Honour HTTP_PROXY / HTTPS_PROXY from the environment
    #[serde(default = "default_use_system_proxy")]
    pub use_system_proxy: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            accept: default_accept(),
            accept_language: default_accept_language(),
            timeout_secs: default_timeout_secs(),
            page_delay_secs: default_page_delay_secs(),
            image_delay_secs: default_image_delay_secs(),
            use_system_proxy: default_use_system_proxy(),
        }
    }
}

impl ScraperConfig {
    /// Load and validate configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = Self::parse_json(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON file without validating it, so overrides can still apply
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::parse_json(&contents)
    }

    /// Parse JSON without validating it
    pub fn parse_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the numeric settings are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.page_delay_secs.is_finite() || self.page_delay_secs <= 0.0 {
            return Err(ConfigError::InvalidDelay {
                name: "page_delay_secs",
                expected: "a positive number of seconds",
                value: self.page_delay_secs,
            });
        }
        if !self.image_delay_secs.is_finite() || self.image_delay_secs < 0.0 {
            return Err(ConfigError::InvalidDelay {
                name: "image_delay_secs",
                expected: "zero or a positive number of seconds",
                value: self.image_delay_secs,
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Pause inserted between page fetches
    ///
    /// Only meaningful after `validate` has accepted the config; unusable
    /// values collapse to zero.
    pub fn page_delay(&self) -> Duration {
        secs_to_duration(self.page_delay_secs)
    }

    /// Pause inserted between image downloads
    pub fn image_delay(&self) -> Duration {
        secs_to_duration(self.image_delay_secs)
    }
}

fn secs_to_duration(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
}

/// Desktop Chrome on Windows
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0.0.0 Safari/537.36"
        .to_string()
}

fn default_accept() -> String {
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.9".to_string()
}

/// Default value for timeout_secs
fn default_timeout_secs() -> u64 {
    20
}

/// Default value for page_delay_secs
fn default_page_delay_secs() -> f64 {
    1.5
}

/// Default value for image_delay_secs
fn default_image_delay_secs() -> f64 {
    0.5
}

fn default_use_system_proxy() -> bool {
    true
}

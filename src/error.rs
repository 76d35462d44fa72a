use thiserror::Error;

/// Why a single page or image request did not produce a body
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, timeout or body read failure
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

impl FetchError {
    /// Whether the failure was caused by the request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Request { source, .. } if source.is_timeout())
    }
}

/// Problems with the scraper configuration; these are the only hard failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{name} must be {expected}, got {value}")]
    InvalidDelay {
        name: &'static str,
        expected: &'static str,
        value: f64,
    },

    #[error("timeout must be at least one second")]
    InvalidTimeout,

    #[error("invalid header value for {name}")]
    InvalidHeader { name: &'static str },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Failures while writing the image archive itself
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("failed to write zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to write zip entry: {0}")]
    Io(#[from] std::io::Error),
}

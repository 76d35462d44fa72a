use crate::config::ScraperConfig;
use crate::error::{ConfigError, FetchError};
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};

/// HTTP client carrying the fixed browser-like header set and timeout
///
/// Page and image requests go through the same instance so both share
/// identical headers.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("User-Agent", &config.user_agent)?);
        headers.insert(ACCEPT, header_value("Accept", &config.accept)?);
        headers.insert(
            ACCEPT_LANGUAGE,
            header_value("Accept-Language", &config.accept_language)?,
        );

        let mut builder = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(ConfigError::Client)?;

        Ok(Self { client })
    }

    /// GETs a page and returns its body as text
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self.get(url).await?;
        response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })
    }

    /// GETs an image and returns its raw bytes
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.get(url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;
        Ok(bytes.to_vec())
    }

    /// Sends the request; any non-2xx status counts as a failure
    async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        ::log::trace!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|_| ConfigError::InvalidHeader { name })
}

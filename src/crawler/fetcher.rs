//! HTTP fetcher implementation
//!
//! This module handles all network retrieval for the crawler:
//! - The `PageFetcher` seam the fetch workers call through
//! - Building HTTP clients with proper user agent strings and timeouts
//! - GET requests returning the raw body, with non-2xx statuses as errors

use crate::config::Config;
use crate::FetchError;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Retrieves the raw body of a page
///
/// Implementations return an error for transport failures and for any
/// non-success response status. Bounding how long a single fetch may take is
/// the implementation's responsibility.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawler configuration (user agent and HTTP sections)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use hostcrawl::config::Config;
/// use hostcrawl::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let redirect = match config.http.max_redirects {
        0 => Policy::none(),
        n => Policy::limited(n),
    };

    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.http.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.http.connect_timeout_secs))
        .redirect(redirect)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Page fetcher backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher with a client configured from `config`
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
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
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        Ok(body.to_vec())
    }
}

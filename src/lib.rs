//! hostcrawl: a single-host site crawler
//!
//! This crate crawls every page reachable from a seed URL without leaving the
//! seed's host, using a bounded pool of concurrent fetch workers driven by a
//! single coordinating loop. The result is a sorted inventory of pages and the
//! raw links found on each.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for crawl operations
///
/// Only setup failures surface here. Failures of individual pages are
/// recorded on their [`crawler::PageResult`] instead.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Invalid seed URL {url}: {reason}")]
    InvalidSeed { url: String, reason: String },

    #[error("Concurrency must be at least 1, got {0}")]
    InvalidConcurrency(usize),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Worker pool failed: {0}")]
    WorkerPool(String),
}

/// Errors produced while fetching a single page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GET {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("GET {url} returned bad status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Cannot resolve {href:?} against {base}: {reason}")]
    Resolve {
        href: String,
        base: String,
        reason: String,
    },

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Crawler, PageResult};
pub use crate::url::{extract_host, normalize_url, resolve_link};

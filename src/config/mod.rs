//! Configuration module for hostcrawl
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every section has defaults, so running without a file
//! is equivalent to `Config::default()`.
//!
//! # Example
//!
//! ```no_run
//! use hostcrawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("hostcrawl.toml")).unwrap();
//! println!("Crawler will run {} workers", config.crawler.concurrency);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, HttpConfig, UserAgentConfig, DEFAULT_CONCURRENCY};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, MAX_CONCURRENCY};

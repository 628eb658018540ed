//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `PageFetcher` seam
//! - HTML link extraction behind the `LinkExtractor` seam
//! - The frontier and visited set
//! - The fetch worker pool and the coordinating loop that drives it
//! - Final ordering of page results

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod results;
mod worker;

pub use coordinator::{crawl, CrawlState, Crawler};
pub use fetcher::{build_http_client, HttpFetcher, PageFetcher};
pub use frontier::Frontier;
pub use parser::{extract_links, HtmlLinkExtractor, LinkExtractor};
pub use results::{finalize_results, PageResult};

//! Page results and final ordering of crawl output

use serde::Serialize;
use std::fmt::Display;

/// The outcome of fetching a single page
///
/// `links` holds the raw `href` strings exactly as they appeared in the
/// document. Resolution and host filtering only decide what gets crawled next;
/// they never rewrite what a page reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult {
    /// The URL that was dispatched for this page
    pub url: String,

    /// Raw links found on the page
    pub links: Vec<String>,

    /// Fetch failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageResult {
    /// Creates a result for a successfully fetched page
    pub fn success(url: impl Into<String>, links: Vec<String>) -> Self {
        Self {
            url: url.into(),
            links,
            error: None,
        }
    }

    /// Creates a result for a page whose fetch failed
    pub fn failure(url: impl Into<String>, error: impl Display) -> Self {
        Self {
            url: url.into(),
            links: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    /// Returns true if the page could not be fetched
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Puts crawl output into its deterministic final order
///
/// Each page's links are sorted lexicographically (byte-wise) and the pages
/// are sorted by URL, so the output no longer depends on the order in which
/// concurrent fetches completed.
pub fn finalize_results(mut results: Vec<PageResult>) -> Vec<PageResult> {
    for page in &mut results {
        page.links.sort();
    }
    results.sort_by(|a, b| a.url.cmp(&b.url));
    results
}

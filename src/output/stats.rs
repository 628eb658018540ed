//! Statistics derived from a finished crawl
//!
//! This module summarizes crawl output and renders the summary for
//! display on stderr.

use crate::crawler::PageResult;
use std::collections::HashSet;
use std::fmt::Write;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of pages fetched (successfully or not)
    pub total_pages: usize,

    /// Number of pages whose fetch failed
    pub failed_pages: usize,

    /// Raw links across all pages, duplicates included
    pub total_links: usize,

    /// Distinct raw link strings across all pages
    pub unique_links: usize,
}

impl CrawlStatistics {
    /// Computes statistics from crawl output
    pub fn from_results(results: &[PageResult]) -> Self {
        let unique: HashSet<&str> = results
            .iter()
            .flat_map(|page| page.links.iter().map(String::as_str))
            .collect();

        Self {
            total_pages: results.len(),
            failed_pages: results.iter().filter(|page| page.is_error()).count(),
            total_links: results.iter().map(|page| page.links.len()).sum(),
            unique_links: unique.len(),
        }
    }

    /// Percentage of pages fetched without error
    pub fn success_rate(&self) -> f64 {
        if self.total_pages == 0 {
            return 0.0;
        }
        let succeeded = self.total_pages - self.failed_pages;
        (succeeded as f64 / self.total_pages as f64) * 100.0
    }
}

/// Formats statistics for display
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn format_statistics(stats: &CrawlStatistics) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Crawl Statistics ===");
    let _ = writeln!(out, "  Pages fetched: {}", stats.total_pages);
    let _ = writeln!(out, "  Pages failed: {}", stats.failed_pages);
    let _ = writeln!(out, "  Links found: {}", stats.total_links);
    let _ = writeln!(out, "  Unique links: {}", stats.unique_links);
    let _ = writeln!(
        out,
        "Success Rate: {:.1}% ({} / {} pages)",
        stats.success_rate(),
        stats.total_pages - stats.failed_pages,
        stats.total_pages
    );

    out
}

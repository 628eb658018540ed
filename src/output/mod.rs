//! Output module for rendering crawl results
//!
//! This module handles:
//! - Rendering results as plain text or JSON
//! - Summarizing a crawl into statistics

mod json;
pub mod stats;
mod text;

pub use json::render_json;
pub use stats::{format_statistics, CrawlStatistics};
pub use text::render_text;

use crate::crawler::PageResult;

/// Output format for crawl results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json { pretty: bool },
}

/// Renders results in the requested format
///
/// JSON rendering falls back to text if serialization fails.
pub fn render(results: &[PageResult], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(results),
        OutputFormat::Json { pretty } => match render_json(results, pretty) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(e) => {
                tracing::warn!("Failed to render results as JSON, falling back to text: {}", e);
                render_text(results)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dispatches_on_format() {
        let results = vec![PageResult::success("https://x.test", vec!["/".into()])];

        assert_eq!(render(&results, OutputFormat::Text), "https://x.test, [/]\n");
        assert_eq!(
            render(&results, OutputFormat::Json { pretty: false }),
            "[{\"url\":\"https://x.test\",\"links\":[\"/\"]}]\n"
        );
    }
}

use crate::crawler::PageResult;

/// Renders crawl results as a JSON array
///
/// Each element is `{"url": ..., "links": [...]}`, plus `"error"` when the
/// page could not be fetched.
pub fn render_json(results: &[PageResult], pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(results)
    } else {
        serde_json::to_string(results)
    }
}

//! HTML link extraction
//!
//! Pulls the raw `href` of every anchor out of a document, in document order.
//! Nothing is resolved or filtered here; that is the coordinator's job.

use scraper::{Html, Selector};

/// Extracts raw link strings from a fetched document body
///
/// Extraction is best effort and never fails: malformed input yields a
/// partial or empty list.
pub trait LinkExtractor: Send + Sync {
    fn extract_links(&self, body: &[u8]) -> Vec<String>;
}

/// Link extractor backed by `scraper`'s HTML5 parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_links(&self, body: &[u8]) -> Vec<String> {
        extract_links(&String::from_utf8_lossy(body))
    }
}

/// Extracts the `href` of every `<a>` element in the document
///
/// # Link Extraction Rules
///
/// - Anchors are visited in document order of their opening tags
/// - Only the first `href` attribute of an anchor is used
/// - Values are returned verbatim, duplicates included
/// - Malformed markup is repaired by the HTML5 parser: an unterminated tag at
///   the end of input is dropped, and nested anchors become siblings
///
/// # Example
///
/// ```
/// use hostcrawl::crawler::extract_links;
///
/// let links = extract_links(r#"<a href="/foo">bar</a>"#);
/// assert_eq!(links, vec!["/foo".to_string()]);
/// ```
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

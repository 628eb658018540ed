use crate::crawler::PageResult;

/// Renders crawl results as plain text, one page per line
///
/// Format: `<url>, [<link>, <link>]`, with ` (error: <message>)` appended
/// for pages that could not be fetched.
pub fn render_text(results: &[PageResult]) -> String {
    let mut out = String::new();
    for page in results {
        out.push_str(&format_page(page));
        out.push('\n');
    }
    out
}

fn format_page(page: &PageResult) -> String {
    let line = format!("{}, [{}]", page.url, page.links.join(", "));
    match &page.error {
        Some(error) => format!("{} (error: {})", line, error),
        None => line,
    }
}

use crate::{UrlError, UrlResult};
use url::Url;

/// Normalizes a URL into its dedup key form
///
/// # Normalization Steps
///
/// 1. Remove fragment (everything after #)
/// 2. Remove query string (everything after ?)
///
/// Scheme and host case, default ports and dot segments are already
/// canonicalized by the URL parser, so two links naming the same page compare
/// equal once both steps are applied.
///
/// # Examples
///
/// ```
/// use hostcrawl::url::normalize_url;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/page?utm_source=x#top").unwrap();
/// assert_eq!(normalize_url(url).as_str(), "https://example.com/page");
/// ```
pub fn normalize_url(mut url: Url) -> Url {
    url.set_fragment(None);
    url.set_query(None);
    url
}

/// Resolves a raw href against the page it was found on
///
/// Relative references are resolved per standard URL resolution rules and the
/// result is normalized with [`normalize_url`].
///
/// # Arguments
///
/// * `base` - The URL of the page the link was found on
/// * `href` - The raw, unresolved `href` value
///
/// # Returns
///
/// * `Ok(Url)` - Absolute, normalized URL
/// * `Err(UrlError)` - The href cannot be resolved against the base
pub fn resolve_link(base: &Url, href: &str) -> UrlResult<Url> {
    base.join(href)
        .map(normalize_url)
        .map_err(|e| UrlError::Resolve {
            href: href.to_string(),
            base: base.to_string(),
            reason: e.to_string(),
        })
}

/// Parses an absolute URL that must carry a host
///
/// Used for the crawl seed, whose host defines the crawl scope.
pub fn parse_absolute(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost(url_str.to_string()));
    }

    Ok(url)
}

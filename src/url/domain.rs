use url::Url;

/// Extracts the host scope key from a URL
///
/// The key is the lowercase host, followed by `:port` when the URL names a
/// non-default port. Two URLs are on the same host iff their keys are equal.
///
/// # Arguments
///
/// * `url` - The URL to extract the host from
///
/// # Returns
///
/// * `Some(String)` - The host key
/// * `None` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use hostcrawl::url::extract_host;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(extract_host(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host),
    }
}

/// Returns true if `url` shares the given host scope key
pub fn is_same_host(url: &Url, host: &str) -> bool {
    extract_host(url).as_deref() == Some(host)
}

//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! crawl cycle end-to-end over real HTTP.

use hostcrawl::config::{Config, UserAgentConfig};
use hostcrawl::crawler::{Crawler, HttpFetcher, PageFetcher};
use hostcrawl::FetchError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds an HTML page holding one anchor per link
fn html(links: &[&str]) -> String {
    let anchors: String = links
        .iter()
        .map(|link| format!(r#"<a href="{}">link</a>"#, link))
        .collect();
    format!("<html><head><title>Test</title></head><body>{}</body></html>", anchors)
}

/// Mounts a GET handler serving `body` that must be hit exactly once
async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn test_config(concurrency: usize) -> Config {
    let mut config = Config::default();
    config.crawler.concurrency = concurrency;
    config.http.request_timeout_secs = 5;
    config.http.connect_timeout_secs = 2;
    config
}

#[tokio::test]
async fn test_full_crawl_single_host() {
    // Start a mock server
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let absolute_page2 = format!("{}/page2", base_url);
    mount_page(
        &mock_server,
        "/",
        html(&[
            "/page1",
            absolute_page2.as_str(),
            "https://other.test/elsewhere",
            "/page1#section",
            "/page1?utm_source=x",
        ]),
    )
    .await;
    mount_page(&mock_server, "/page1", html(&["/", "page2"])).await;
    mount_page(&mock_server, "/page2", html(&[])).await;

    let crawler = Crawler::from_config(&test_config(4)).expect("Failed to create crawler");
    let results = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    let urls: Vec<String> = results.iter().map(|p| p.url.clone()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/", base_url),
            format!("{}/page1", base_url),
            format!("{}/page2", base_url),
        ]
    );
    assert!(results.iter().all(|p| p.error.is_none()));

    // Links are reported raw and sorted
    assert_eq!(
        results[0].links,
        vec![
            "/page1".to_string(),
            "/page1#section".to_string(),
            "/page1?utm_source=x".to_string(),
            absolute_page2.clone(),
            "https://other.test/elsewhere".to_string(),
        ]
    );
    assert_eq!(results[1].links, vec!["/", "page2"]);

    // Wiremock verifies each page was requested exactly once when mock_server drops
}

#[tokio::test]
async fn test_seed_is_fetched_as_given() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // "http://host:port" and "http://host:port/" are different entries, but
    // both are served from "/"
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html(&["/"])))
        .expect(2)
        .mount(&mock_server)
        .await;

    let results = hostcrawl::crawl(&base_url, 2).await.expect("Crawl failed");

    let urls: Vec<String> = results.iter().map(|p| p.url.clone()).collect();
    assert_eq!(urls, vec![base_url.clone(), format!("{}/", base_url)]);
}

#[tokio::test]
async fn test_http_errors_recorded_per_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html(&["/ok", "/broken", "/gone"])).await;
    mount_page(&mock_server, "/ok", html(&[])).await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string(html(&["/hidden"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hidden"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    // "/gone" is unmatched, so wiremock answers 404

    let crawler = Crawler::from_config(&test_config(3)).expect("Failed to create crawler");
    let results = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(results.len(), 4);

    let broken = results
        .iter()
        .find(|p| p.url.ends_with("/broken"))
        .expect("broken page missing from results");
    assert!(broken.links.is_empty());
    assert!(broken.error.as_deref().unwrap_or_default().contains("500"));

    let gone = results
        .iter()
        .find(|p| p.url.ends_with("/gone"))
        .expect("gone page missing from results");
    assert!(gone.error.as_deref().unwrap_or_default().contains("404"));

    let ok = results
        .iter()
        .find(|p| p.url.ends_with("/ok"))
        .expect("ok page missing from results");
    assert!(ok.error.is_none());
}

#[tokio::test]
async fn test_redirect_followed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html(&["/old"])).await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/new", html(&["/after"])).await;
    mount_page(&mock_server, "/after", html(&[])).await;

    let crawler = Crawler::from_config(&test_config(2)).expect("Failed to create crawler");
    let results = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    // The redirected page is reported under the URL that was dispatched
    let urls: Vec<String> = results.iter().map(|p| p.url.clone()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/", base_url),
            format!("{}/after", base_url),
            format!("{}/old", base_url),
        ]
    );
    assert_eq!(results[2].links, vec!["/after"]);
}

#[tokio::test]
async fn test_fetcher_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestBot/1.0 (+https://example.com/bot)"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = test_config(1);
    config.user_agent = UserAgentConfig {
        crawler_name: "TestBot".to_string(),
        crawler_version: "1.0".to_string(),
        contact_url: Some("https://example.com/bot".to_string()),
    };

    let fetcher = HttpFetcher::from_config(&config).expect("Failed to build fetcher");
    let body = fetcher
        .fetch(&format!("{}/", mock_server.uri()))
        .await
        .expect("Fetch failed");

    assert_eq!(body, b"hello".to_vec());
}

#[tokio::test]
async fn test_fetcher_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teapot"))
        .respond_with(ResponseTemplate::new(418))
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::from_config(&test_config(1)).expect("Failed to build fetcher");
    let result = fetcher
        .fetch(&format!("{}/teapot", mock_server.uri()))
        .await;

    assert!(matches!(
        result,
        Err(FetchError::Status { status: 418, .. })
    ));
}

#[tokio::test]
async fn test_invalid_seed_rejected() {
    let result = hostcrawl::crawl("not a url", 2).await;
    assert!(matches!(
        result,
        Err(hostcrawl::CrawlError::InvalidSeed { .. })
    ));
}

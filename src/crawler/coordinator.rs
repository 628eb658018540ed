//! Crawler coordinator - main crawl orchestration logic
//!
//! The coordinator is the only owner of the frontier, the visited set and the
//! in-flight count. It runs a single loop that, on every iteration, either
//! hands the next frontier URL to an idle worker or accepts one page result
//! from the pool. Both events are offered to `tokio::select!` together, so a
//! full intake can never stop results from being drained. Dispatch is only
//! offered while the frontier has work.
//!
//! The crawl is finished when the frontier is empty *and* nothing is in
//! flight. Checking only the frontier would stop early, since a pending fetch
//! may still discover new pages.

use crate::config::{validate, Config};
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::{HtmlLinkExtractor, LinkExtractor};
use crate::crawler::results::{finalize_results, PageResult};
use crate::crawler::worker::{run_worker, SharedIntake};
use crate::url::{extract_host, is_same_host, parse_absolute, resolve_link};
use crate::{CrawlError, Result};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use url::Url;

/// Phase of the coordinator loop, derived from the frontier and in-flight count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlState {
    /// Frontier has URLs to hand out
    Dispatching,
    /// Frontier is empty but fetches are outstanding
    Draining,
    /// Frontier is empty and nothing is in flight
    Done,
}

impl CrawlState {
    pub fn from_counts(pending: usize, in_flight: usize) -> Self {
        match (pending, in_flight) {
            (0, 0) => Self::Done,
            (0, _) => Self::Draining,
            _ => Self::Dispatching,
        }
    }
}

/// Single-host crawler
///
/// Owns the worker pool size and the two collaborators every worker shares.
/// The defaults fetch over HTTP with `reqwest` and extract links with
/// `scraper`; tests swap in their own.
pub struct Crawler<F = HttpFetcher, E = HtmlLinkExtractor> {
    concurrency: usize,
    fetcher: Arc<F>,
    extractor: Arc<E>,
}

impl Crawler {
    /// Creates an HTTP crawler with default settings and `concurrency` workers
    pub fn new(concurrency: usize) -> Result<Self> {
        if concurrency == 0 {
            return Err(CrawlError::InvalidConcurrency(concurrency));
        }
        let mut config = Config::default();
        config.crawler.concurrency = concurrency;
        Self::from_config(&config)
    }

    /// Creates an HTTP crawler from a configuration, validating it first
    pub fn from_config(config: &Config) -> Result<Self> {
        validate(config)?;
        let fetcher = HttpFetcher::from_config(config)?;
        Ok(Self::with_collaborators(
            config.crawler.concurrency,
            fetcher,
            HtmlLinkExtractor,
        ))
    }
}

impl<F, E> Crawler<F, E>
where
    F: PageFetcher + 'static,
    E: LinkExtractor + 'static,
{
    /// Creates a crawler around the given page fetcher and link extractor
    pub fn with_collaborators(concurrency: usize, fetcher: F, extractor: E) -> Self {
        Self {
            concurrency,
            fetcher: Arc::new(fetcher),
            extractor: Arc::new(extractor),
        }
    }

    /// Crawls every same-host page reachable from `seed`
    ///
    /// # Arguments
    ///
    /// * `seed` - Absolute URL to start from; its host bounds the crawl
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<PageResult>)` - One entry per dispatched URL, links sorted,
    ///   pages sorted by URL. Failed fetches are included with their error.
    /// * `Err(CrawlError)` - The seed is invalid, the concurrency is zero, or
    ///   the worker pool died mid-crawl
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hostcrawl::crawler::Crawler;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let crawler = Crawler::new(25)?;
    /// for page in crawler.crawl("https://example.com").await? {
    ///     println!("{} -> {:?}", page.url, page.links);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn crawl(&self, seed: &str) -> Result<Vec<PageResult>> {
        let root = parse_absolute(seed).map_err(|e| CrawlError::InvalidSeed {
            url: seed.to_string(),
            reason: e.to_string(),
        })?;
        let scope = extract_host(&root).ok_or_else(|| CrawlError::InvalidSeed {
            url: seed.to_string(),
            reason: "URL has no host".to_string(),
        })?;

        if self.concurrency == 0 {
            return Err(CrawlError::InvalidConcurrency(self.concurrency));
        }

        tracing::info!(
            "Starting crawl of {} (host {}) with {} workers",
            seed,
            scope,
            self.concurrency
        );
        let start_time = Instant::now();

        let (intake_tx, intake_rx) = mpsc::channel::<String>(self.concurrency);
        let (results_tx, mut results_rx) = mpsc::channel::<PageResult>(self.concurrency);
        let intake: SharedIntake = Arc::new(Mutex::new(intake_rx));

        let mut workers = JoinSet::new();
        for id in 0..self.concurrency {
            workers.spawn(run_worker(
                id,
                Arc::clone(&self.fetcher),
                Arc::clone(&self.extractor),
                Arc::clone(&intake),
                results_tx.clone(),
            ));
        }
        // Workers hold the only result senders from here on
        drop(results_tx);
        drop(intake);

        // The seed is dispatched as given; discovered links are normalized
        let mut frontier = Frontier::with_seed(seed);
        let mut in_flight: usize = 0;
        let mut results = Vec::new();

        loop {
            let state = CrawlState::from_counts(frontier.len(), in_flight);
            if state == CrawlState::Done {
                break;
            }

            // Never hand out more URLs than there are workers to take them
            let can_dispatch = state == CrawlState::Dispatching && in_flight < self.concurrency;

            tokio::select! {
                permit = intake_tx.reserve(), if can_dispatch => {
                    let permit = permit.map_err(|_| {
                        CrawlError::WorkerPool("intake closed before crawl finished".to_string())
                    })?;
                    if let Some(next) = frontier.pop() {
                        tracing::debug!("Dispatching {}", next);
                        permit.send(next);
                        in_flight += 1;
                    }
                }
                received = results_rx.recv() => {
                    let page = received.ok_or_else(|| {
                        CrawlError::WorkerPool(format!(
                            "result stream closed with {} fetches in flight",
                            in_flight
                        ))
                    })?;
                    in_flight -= 1;

                    let enqueued = enqueue_discovered(&mut frontier, &scope, &page);
                    tracing::trace!(
                        "{}: {} new URLs, {} pending, {} in flight",
                        page.url,
                        enqueued,
                        frontier.len(),
                        in_flight
                    );
                    results.push(page);
                }
                Some(joined) = workers.join_next() => {
                    // Workers only return after the intake closes
                    let reason = match joined {
                        Err(e) if e.is_panic() => "a fetch worker panicked".to_string(),
                        Err(e) => format!("a fetch worker was cancelled: {}", e),
                        Ok(()) => "a fetch worker exited early".to_string(),
                    };
                    return Err(CrawlError::WorkerPool(reason));
                }
            }
        }

        // Closing the intake tells every worker to stop
        drop(intake_tx);
        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Fetch worker failed during shutdown: {}", e);
            }
        }

        tracing::info!(
            "Crawl completed: {} pages fetched in {:?}",
            results.len(),
            start_time.elapsed()
        );

        Ok(finalize_results(results))
    }
}

/// Runs an HTTP crawl with default settings
///
/// Convenience wrapper around [`Crawler::new`] and [`Crawler::crawl`].
pub async fn crawl(seed: &str, concurrency: usize) -> Result<Vec<PageResult>> {
    Crawler::new(concurrency)?.crawl(seed).await
}

/// Resolves, filters and dedups the links of a fetched page
///
/// For each raw link:
/// 1. Resolve against the page URL, dropping the link if that fails
/// 2. Strip fragment and query
/// 3. Drop it unless it is `http` or `https`
/// 4. Drop it if its host differs from `scope`
/// 5. Enqueue it unless it was ever enqueued before
///
/// Returns the number of URLs newly added to the frontier.
fn enqueue_discovered(frontier: &mut Frontier, scope: &str, page: &PageResult) -> usize {
    if page.links.is_empty() {
        return 0;
    }

    let base = match Url::parse(&page.url) {
        Ok(base) => base,
        Err(e) => {
            tracing::warn!("Cannot resolve links of {}: {}", page.url, e);
            return 0;
        }
    };

    let mut enqueued = 0;
    for raw in &page.links {
        let link = match resolve_link(&base, raw) {
            Ok(link) => link,
            Err(e) => {
                tracing::warn!("Skipping link: {}", e);
                continue;
            }
        };

        if !matches!(link.scheme(), "http" | "https") {
            tracing::trace!("Skipping non-HTTP link {}", link);
            continue;
        }

        if !is_same_host(&link, scope) {
            tracing::trace!("Skipping off-host link {}", link);
            continue;
        }

        if frontier.push(link.as_str()) {
            enqueued += 1;
        } else {
            tracing::trace!("Already scheduled {}", link);
        }
    }

    enqueued
}

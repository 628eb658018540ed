//! Fetch workers
//!
//! A worker pulls one URL at a time from the shared intake, fetches it,
//! extracts its links and sends the resulting `PageResult` back to the
//! coordinator. Workers never see the frontier or the visited set.

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::LinkExtractor;
use crate::crawler::results::PageResult;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Intake receiver shared by every worker in the pool
pub(crate) type SharedIntake = Arc<Mutex<mpsc::Receiver<String>>>;

/// Runs a worker until the intake is closed
///
/// Closing the intake (dropping its sender) is the only normal way for a
/// worker to stop.
pub(crate) async fn run_worker<F, E>(
    id: usize,
    fetcher: Arc<F>,
    extractor: Arc<E>,
    intake: SharedIntake,
    results: mpsc::Sender<PageResult>,
) where
    F: PageFetcher,
    E: LinkExtractor,
{
    loop {
        // Only one idle worker waits on the receiver at a time; the rest
        // queue on the lock.
        let next = {
            let mut receiver = intake.lock().await;
            receiver.recv().await
        };

        let url = match next {
            Some(url) => url,
            None => break,
        };

        let page = fetch_page(fetcher.as_ref(), extractor.as_ref(), url).await;

        if results.send(page).await.is_err() {
            tracing::debug!(worker = id, "Result stream closed, stopping");
            return;
        }
    }

    tracing::trace!(worker = id, "Intake closed, worker exiting");
}

/// Fetches one page and extracts its links
///
/// Extraction only runs on a successful fetch, so the fetch error is the
/// only error a result can carry.
pub(crate) async fn fetch_page<F, E>(fetcher: &F, extractor: &E, url: String) -> PageResult
where
    F: PageFetcher + ?Sized,
    E: LinkExtractor + ?Sized,
{
    match fetcher.fetch(&url).await {
        Ok(body) => {
            let links = extractor.extract_links(&body);
            tracing::debug!("Fetched {} ({} links)", url, links.len());
            PageResult::success(url, links)
        }
        Err(e) => {
            tracing::warn!("{}", e);
            PageResult::failure(url, e)
        }
    }
}

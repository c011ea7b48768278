//! Bounded-parallelism fan-out over the configured sources.
//!
//! A fixed pool of workers shares one cursor into the source list. Each
//! worker claims the next index, fetches it, and sends the result down a
//! channel; the single receiver is the only place results are collected.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::config::Source;
use crate::fetcher::SourceFetcher;
use crate::model::FetchResult;

pub const DEFAULT_CONCURRENCY: usize = 3;

/// Start fetching every source and return the stream of results in completion order.
///
/// The receiver yields exactly one result per source and closes once all
/// workers are done.
pub fn spawn_fetch_all<F>(
    fetcher: Arc<F>,
    sources: Arc<[Source]>,
    concurrency: usize,
) -> mpsc::Receiver<FetchResult>
where
    F: SourceFetcher + ?Sized + 'static,
{
    let (tx, rx) = mpsc::channel(sources.len().max(1));
    let workers = concurrency.max(1).min(sources.len());
    let cursor = Arc::new(AtomicUsize::new(0));

    debug!("Starting {} workers for {} sources", workers, sources.len());

    for worker_id in 0..workers {
        let fetcher = fetcher.clone();
        let sources = sources.clone();
        let cursor = cursor.clone();
        let tx = tx.clone();

        tokio::spawn(async move {
            loop {
                let idx = cursor.fetch_add(1, Ordering::SeqCst);
                let Some(source) = sources.get(idx) else {
                    break;
                };
                debug!("Worker {} claimed source '{}'", worker_id, source.id);
                let result = fetcher.fetch(source).await;
                if tx.send(result).await.is_err() {
                    // Receiver dropped; nobody is listening any more
                    break;
                }
            }
        });
    }

    rx
}

/// Fetch every source with at most `concurrency` requests in flight, calling
/// `on_result` once per source as each completes. Returns the number of results.
pub async fn fetch_all_with_concurrency<F, C>(
    fetcher: Arc<F>,
    sources: Arc<[Source]>,
    concurrency: usize,
    mut on_result: C,
) -> usize
where
    F: SourceFetcher + ?Sized + 'static,
    C: FnMut(FetchResult),
{
    let mut rx = spawn_fetch_all(fetcher, sources, concurrency);
    let mut delivered = 0;
    while let Some(result) = rx.recv().await {
        delivered += 1;
        on_result(result);
    }
    delivered
}

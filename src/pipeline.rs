use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::aggregator::{Aggregator, ContentFilter};
use crate::cache::Clock;
use crate::config::Source;
use crate::fetcher::SourceFetcher;
use crate::model::{FetchResult, NewsItem};
use crate::scheduler::spawn_fetch_all;

/// A source that did not respond during the last cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedSource {
    pub source_id: String,
    pub source_name: String,
    pub error: String,
}

impl From<&FetchResult> for FailedSource {
    fn from(result: &FetchResult) -> Self {
        Self {
            source_id: result.source_id.clone(),
            source_name: result.source_name.clone(),
            error: result.error.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub refreshing: bool,
    pub loaded: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    pub sources: usize,
    pub failed: usize,
    pub items: usize,
}

/// What the presentation layer needs to render the current state.
#[derive(Debug, Clone)]
pub struct CurrentView {
    pub items: Vec<NewsItem>,
    pub is_demo: bool,
    pub failed_sources: Vec<FailedSource>,
    pub progress: Progress,
    pub last_completed: Option<DateTime<Utc>>,
}

#[derive(Debug)]
struct Snapshot {
    aggregator: Aggregator,
    loaded: usize,
    last_completed: Option<DateTime<Utc>>,
}

pub struct Pipeline {
    fetcher: Arc<dyn SourceFetcher>,
    sources: Arc<[Source]>,
    concurrency: usize,
    clock: Arc<dyn Clock>,
    snapshot: RwLock<Snapshot>,
    refreshing: RwLock<bool>,
}

impl Pipeline {
    pub fn new(
        fetcher: Arc<dyn SourceFetcher>,
        sources: Vec<Source>,
        concurrency: usize,
        filter: Option<Arc<dyn ContentFilter>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let aggregator = match filter {
            Some(filter) => Aggregator::with_filter(filter),
            None => Aggregator::new(),
        };

        Self {
            fetcher,
            sources: sources.into(),
            concurrency,
            clock,
            snapshot: RwLock::new(Snapshot {
                aggregator,
                loaded: 0,
                last_completed: None,
            }),
            refreshing: RwLock::new(false),
        }
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub async fn is_refreshing(&self) -> bool {
        *self.refreshing.read().await
    }

    pub async fn progress(&self) -> Progress {
        let refreshing = self.is_refreshing().await;
        let snapshot = self.snapshot.read().await;
        Progress {
            refreshing,
            loaded: snapshot.loaded,
            total: self.sources.len(),
        }
    }

    /// Fetch every source once. Returns `None` if a refresh was already running.
    pub async fn refresh_all(&self) -> Option<RefreshSummary> {
        // Check if already refreshing
        {
            let mut refreshing = self.refreshing.write().await;
            if *refreshing {
                info!("Refresh already in progress, skipping");
                return None;
            }
            *refreshing = true;
        }

        let summary = self.do_refresh_all().await;

        // Clear refreshing flag
        {
            let mut refreshing = self.refreshing.write().await;
            *refreshing = false;
        }

        Some(summary)
    }

    async fn do_refresh_all(&self) -> RefreshSummary {
        info!("Refreshing {} sources", self.sources.len());
        self.snapshot.write().await.loaded = 0;

        let mut rx = spawn_fetch_all(self.fetcher.clone(), self.sources.clone(), self.concurrency);
        let mut summary = RefreshSummary {
            sources: 0,
            failed: 0,
            items: 0,
        };

        while let Some(result) = rx.recv().await {
            summary.sources += 1;
            summary.items += result.items.len();
            if result.is_error() {
                summary.failed += 1;
            }

            let mut snapshot = self.snapshot.write().await;
            snapshot.aggregator.record(result);
            snapshot.loaded += 1;
        }

        self.snapshot.write().await.last_completed = Some(self.clock.now());
        info!(
            "Refresh complete: {} sources, {} failed, {} items",
            summary.sources, summary.failed, summary.items
        );
        summary
    }

    pub async fn current_view(&self) -> CurrentView {
        let progress = self.progress().await;
        let now = self.clock.now();
        let snapshot = self.snapshot.read().await;
        let view = snapshot.aggregator.view(now);

        CurrentView {
            items: view.items,
            is_demo: view.is_demo,
            failed_sources: snapshot
                .aggregator
                .failed_sources()
                .into_iter()
                .map(FailedSource::from)
                .collect(),
            progress,
            last_completed: snapshot.last_completed,
        }
    }
}

pub async fn start_background_refresh(pipeline: Arc<Pipeline>, interval_minutes: u64) {
    let interval = Duration::from_secs(interval_minutes.max(1) * 60);

    // Do initial fetch
    info!("Starting initial feed fetch");
    if pipeline.refresh_all().await.is_none() {
        error!("Initial feed fetch skipped: another refresh was running");
    }

    // Then schedule periodic refreshes
    loop {
        tokio::time::sleep(interval).await;
        info!("Starting scheduled feed refresh");
        pipeline.refresh_all().await;
    }
}

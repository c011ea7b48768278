use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cache::{Clock, ResponseCache};
use crate::classifier::{classify, merge_tags};
use crate::config::{Config, Source};
use crate::extractor::extract_items;
use crate::model::{FetchResult, NewsItem, RawItem};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Anything that can turn a source into a per-source result.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    async fn fetch(&self, source: &Source) -> FetchResult;
}

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub user_agent: String,
    pub timeout: Duration,
}

impl FetchSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: Duration::from_secs(config.fetch_timeout_secs),
        }
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: "RadarArgentina/1.0 (RSS aggregator)".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Parsed items of one feed and whether they came from the cache.
#[derive(Debug, Clone)]
pub struct RawFeed {
    pub items: Arc<Vec<RawItem>>,
    pub cached: bool,
}

pub struct Fetcher {
    client: Client,
    cache: Arc<ResponseCache>,
    clock: Arc<dyn Clock>,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(settings: &FetchSettings, cache: Arc<ResponseCache>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            clock: cache.clock(),
            cache,
            timeout: settings.timeout,
        })
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Parsed items for `url`, from the cache while it is fresh, otherwise from the network.
    pub async fn fetch_raw(&self, url: &str) -> Result<RawFeed, FetchError> {
        if let Some(entry) = self.cache.get(url).await {
            debug!("Cache hit for {}", url);
            return Ok(RawFeed {
                items: entry.data,
                cached: true,
            });
        }

        info!("Fetching feed: {}", url);
        let body = self.download(url).await?;
        let items = extract_items(&body);
        let entry = self.cache.put(url, items).await;

        Ok(RawFeed {
            items: entry.data,
            cached: false,
        })
    }

    async fn download(&self, url: &str) -> Result<String, FetchError> {
        let request = async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| self.classify_error(e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            response.text().await.map_err(|e| self.classify_error(e))
        };

        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        }
    }

    fn classify_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Network(err)
        }
    }
}

#[async_trait]
impl SourceFetcher for Fetcher {
    async fn fetch(&self, source: &Source) -> FetchResult {
        match self.fetch_raw(&source.url).await {
            Ok(feed) => {
                let fetched_at = self.clock.now();
                let items = to_news_items(source, &feed.items, fetched_at);
                info!(
                    "Got {} items for source '{}'{}",
                    items.len(),
                    source.name,
                    if feed.cached { " (cached)" } else { "" }
                );
                FetchResult::success(source, items)
            }
            Err(e) => {
                warn!("Failed to fetch source '{}': {}", source.name, e);
                FetchResult::failure(source, e.to_string())
            }
        }
    }
}

/// Normalize one feed's raw items for `source`.
pub fn to_news_items(source: &Source, raw: &[RawItem], fetched_at: DateTime<Utc>) -> Vec<NewsItem> {
    raw.iter()
        .enumerate()
        .map(|(ordinal, item)| to_news_item(source, ordinal, item, fetched_at))
        .collect()
}

pub fn to_news_item(
    source: &Source,
    ordinal: usize,
    raw: &RawItem,
    fetched_at: DateTime<Utc>,
) -> NewsItem {
    let derived = classify(&format!("{} {}", raw.title, raw.summary));
    let published_at = raw
        .published_at
        .as_deref()
        .and_then(parse_feed_date)
        .unwrap_or(fetched_at);

    NewsItem {
        id: format!("{}-{}-{}", source.id, ordinal, raw.link),
        title: raw.title.clone(),
        link: raw.link.clone(),
        published_at,
        source_name: source.name.clone(),
        source_region: source.region,
        tags: merge_tags(&source.tags, &derived),
        summary: raw.summary.clone(),
        image: raw.image.clone(),
    }
}

/// Parse the date formats seen in RSS and Atom feeds.
pub fn parse_feed_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    // Some feeds use the obsolete "UT"/"Z" zone or omit it entirely
    for format in ["%a, %d %b %Y %H:%M:%S UT", "%a, %d %b %Y %H:%M:%S Z"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

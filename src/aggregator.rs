use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::demo::demo_items;
use crate::model::{FetchResult, NewsItem};

/// Predicate deciding whether an item is hidden after merging.
pub trait ContentFilter: Send + Sync {
    fn excludes(&self, item: &NewsItem) -> bool;
}

impl<F> ContentFilter for F
where
    F: Fn(&NewsItem) -> bool + Send + Sync,
{
    fn excludes(&self, item: &NewsItem) -> bool {
        self(item)
    }
}

/// Hides items whose title or summary mention any keyword (case-insensitive).
#[derive(Debug, Clone)]
pub struct KeywordExclusion {
    keywords: Vec<String>,
}

impl KeywordExclusion {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl ContentFilter for KeywordExclusion {
    fn excludes(&self, item: &NewsItem) -> bool {
        let title = item.title.to_lowercase();
        let summary = item.summary.to_lowercase();
        self.keywords
            .iter()
            .any(|kw| title.contains(kw) || summary.contains(kw))
    }
}

/// The merged list handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct AggregateView {
    pub items: Vec<NewsItem>,
    /// True when `items` is the built-in demonstration dataset.
    pub is_demo: bool,
}

/// Collects per-source results and merges them into one ordered list.
#[derive(Default)]
pub struct Aggregator {
    results: Vec<FetchResult>,
    filter: Option<Arc<dyn ContentFilter>>,
    real_items_seen: usize,
}

impl fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregator")
            .field("results", &self.results.len())
            .field("has_filter", &self.filter.is_some())
            .field("real_items_seen", &self.real_items_seen)
            .finish()
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: Arc<dyn ContentFilter>) -> Self {
        Self {
            filter: Some(filter),
            ..Self::default()
        }
    }

    /// Add a result, replacing an earlier one from the same source in place.
    pub fn record(&mut self, result: FetchResult) {
        self.real_items_seen += result.items.len();
        match self
            .results
            .iter_mut()
            .find(|r| r.source_id == result.source_id)
        {
            Some(existing) => *existing = result,
            None => self.results.push(result),
        }
    }

    pub fn results(&self) -> &[FetchResult] {
        &self.results
    }

    /// Number of real items recorded so far, across all results ever seen.
    pub fn real_items_seen(&self) -> usize {
        self.real_items_seen
    }

    pub fn failed_sources(&self) -> Vec<&FetchResult> {
        self.results.iter().filter(|r| r.is_error()).collect()
    }

    /// Deduplicated, filtered items, most recent first.
    pub fn items(&self) -> Vec<NewsItem> {
        let mut seen = HashSet::new();
        let mut merged: Vec<NewsItem> = Vec::new();

        for result in &self.results {
            for item in &result.items {
                if seen.insert(item.dedup_key().to_string()) {
                    merged.push(item.clone());
                }
            }
        }

        if let Some(filter) = &self.filter {
            merged.retain(|item| !filter.excludes(item));
        }

        sort_newest_first(&mut merged);
        merged
    }

    /// Merged items, or the demonstration dataset when there are none.
    pub fn view(&self, now: DateTime<Utc>) -> AggregateView {
        let items = self.items();
        if items.is_empty() {
            let mut demo = demo_items(now);
            sort_newest_first(&mut demo);
            AggregateView {
                items: demo,
                is_demo: true,
            }
        } else {
            AggregateView {
                items,
                is_demo: false,
            }
        }
    }
}

/// Stable: items with equal dates keep their insertion order.
fn sort_newest_first(items: &mut [NewsItem]) {
    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

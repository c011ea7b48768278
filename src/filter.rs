use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::Region;
use crate::model::NewsItem;

pub const RECENT_WINDOW_DAYS: i64 = 30;
pub const DEFAULT_PER_PAGE: usize = 24;
pub const MAX_PER_PAGE: usize = 100;

/// User-chosen predicates over the aggregated list. All active predicates must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsFilter {
    pub search: Option<String>,
    /// Matches items carrying any of these tags.
    pub tags: Vec<String>,
    pub region: Option<Region>,
    pub recent_only: bool,
}

impl NewsFilter {
    pub fn active_count(&self) -> usize {
        self.tags.len()
            + usize::from(self.region.is_some())
            + usize::from(self.search_term().is_some())
            + usize::from(self.recent_only)
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches(&self, item: &NewsItem, now: DateTime<Utc>) -> bool {
        self.matches_term(item, self.search_term().as_deref(), now)
    }

    fn matches_term(&self, item: &NewsItem, term: Option<&str>, now: DateTime<Utc>) -> bool {
        if let Some(term) = term {
            if !item.title.to_lowercase().contains(term)
                && !item.summary.to_lowercase().contains(term)
            {
                return false;
            }
        }
        if !self.tags.is_empty() && !self.tags.iter().any(|t| item.has_tag(t)) {
            return false;
        }
        if let Some(region) = self.region {
            if item.source_region != region {
                return false;
            }
        }
        if self.recent_only && item.published_at < now - Duration::days(RECENT_WINDOW_DAYS) {
            return false;
        }
        true
    }

    pub fn apply(&self, items: &[NewsItem], now: DateTime<Utc>) -> Vec<NewsItem> {
        let term = self.search_term();
        items
            .iter()
            .filter(|item| self.matches_term(item, term.as_deref(), now))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice out a 1-based page. Out-of-range pages are clamped to the last one.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.clamp(1, MAX_PER_PAGE);
    let total = items.len();
    let total_pages = total.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total);

    Page {
        items: items[start.min(total)..end].to_vec(),
        page,
        per_page,
        total,
        total_pages,
    }
}

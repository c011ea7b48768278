use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{Region, Source};

/// One feed entry as extracted from the XML, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub title: String,
    pub link: String,
    #[serde(rename = "pubDate")]
    pub published_at: Option<String>,
    pub summary: String,
    pub image: Option<String>,
}

/// A normalized, tagged item ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub link: String,
    pub published_at: DateTime<Utc>,
    pub source_name: String,
    pub source_region: Region,
    pub tags: Vec<String>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewsItem {
    /// Key used to collapse the same story syndicated by several sources.
    pub fn dedup_key(&self) -> &str {
        if self.link.is_empty() {
            &self.id
        } else {
            &self.link
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Outcome of fetching one source during a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResult {
    pub source_id: String,
    pub source_name: String,
    pub items: Vec<NewsItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FetchResult {
    pub fn success(source: &Source, items: Vec<NewsItem>) -> Self {
        Self {
            source_id: source.id.clone(),
            source_name: source.name.clone(),
            items,
            error: None,
        }
    }

    pub fn failure(source: &Source, error: impl Into<String>) -> Self {
        Self {
            source_id: source.id.clone(),
            source_name: source.name.clone(),
            items: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

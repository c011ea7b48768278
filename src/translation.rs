//! Translated text kept beside the news items, never inside them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::model::NewsItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub title: Option<String>,
    pub summary: Option<String>,
}

/// An item as rendered: the original fields plus any attached translation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedItem {
    #[serde(flatten)]
    pub item: NewsItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_summary: Option<String>,
}

impl From<NewsItem> for LocalizedItem {
    fn from(item: NewsItem) -> Self {
        Self {
            item,
            translated_title: None,
            translated_summary: None,
        }
    }
}

impl LocalizedItem {
    pub fn display_title(&self) -> &str {
        self.translated_title.as_deref().unwrap_or(&self.item.title)
    }

    pub fn display_summary(&self) -> &str {
        self.translated_summary
            .as_deref()
            .unwrap_or(&self.item.summary)
    }
}

#[derive(Debug, Default)]
pub struct TranslationTable {
    entries: RwLock<HashMap<String, Translation>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn attach(&self, item_id: &str, translation: Translation) {
        self.entries
            .write()
            .await
            .insert(item_id.to_string(), translation);
    }

    pub async fn get(&self, item_id: &str) -> Option<Translation> {
        self.entries.read().await.get(item_id).cloned()
    }

    /// Pair each item with its translation, if one was attached.
    pub async fn overlay(&self, items: Vec<NewsItem>) -> Vec<LocalizedItem> {
        let entries = self.entries.read().await;
        items
            .into_iter()
            .map(|item| {
                let translation = entries.get(&item.id);
                LocalizedItem {
                    translated_title: translation.and_then(|t| t.title.clone()),
                    translated_summary: translation.and_then(|t| t.summary.clone()),
                    item,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Region;
    use chrono::Utc;

    fn item(id: &str) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            title: "Título original".to_string(),
            link: format!("https://x.com/{}", id),
            published_at: Utc::now(),
            source_name: "Test".to_string(),
            source_region: Region::AR,
            tags: Vec::new(),
            summary: "Resumen original".to_string(),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_overlay_attaches_without_mutating() {
        let table = TranslationTable::new();
        table
            .attach(
                "a",
                Translation {
                    title: Some("Original title".to_string()),
                    summary: None,
                },
            )
            .await;

        let original = vec![item("a"), item("b")];
        let localized = table.overlay(original.clone()).await;

        assert_eq!(localized[0].item, original[0]);
        assert_eq!(localized[0].display_title(), "Original title");
        assert_eq!(localized[0].display_summary(), "Resumen original");
        assert_eq!(localized[1].translated_title, None);
        assert_eq!(localized[1].display_title(), "Título original");
    }

    #[tokio::test]
    async fn test_attach_replaces_previous_translation() {
        let table = TranslationTable::new();
        let first = Translation {
            title: Some("one".to_string()),
            summary: None,
        };
        let second = Translation {
            title: Some("two".to_string()),
            summary: Some("s".to_string()),
        };
        table.attach("a", first).await;
        table.attach("a", second.clone()).await;

        assert_eq!(table.get("a").await, Some(second));
        assert_eq!(table.get("missing").await, None);
    }

    #[test]
    fn test_serializes_flat_with_translated_fields() {
        let localized = LocalizedItem {
            item: item("a"),
            translated_title: Some("Hello".to_string()),
            translated_summary: None,
        };
        let json = serde_json::to_value(&localized).unwrap();
        assert_eq!(json["id"], "a");
        assert_eq!(json["translatedTitle"], "Hello");
        assert!(json.get("translatedSummary").is_none());
        assert_eq!(json["sourceRegion"], "AR");
    }
}

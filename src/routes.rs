use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::classifier::all_tags;
use crate::config::{Config, Region, Source};
use crate::fetcher::Fetcher;
use crate::filter::{paginate, NewsFilter, Page, DEFAULT_PER_PAGE};
use crate::pipeline::{FailedSource, Pipeline, Progress};
use crate::translation::{LocalizedItem, Translation, TranslationTable};

pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Arc<Pipeline>,
    /// Used directly by the single-feed proxy.
    pub fetcher: Arc<Fetcher>,
    pub translations: Arc<TranslationTable>,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/rss", get(rss_proxy))
        .route("/api/news", get(news))
        .route("/api/sources", get(sources))
        .route("/api/tags", get(tags))
        .route("/api/translations/:id", put(attach_translation))
        .route("/refresh", post(refresh))
        .route("/refresh/status", get(refresh_status))
        .route("/health", get(health))
        .with_state(state)
}

// Template structs
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub cards: Vec<Card>,
    pub is_demo: bool,
    pub failed_names: Vec<String>,
    pub search: String,
    pub recent_only: bool,
    pub tags_param: String,
    pub tag_options: Vec<TagOption>,
    pub region_options: Vec<RegionOption>,
    pub active_filters: usize,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub prev_href: String,
    pub next_href: String,
    pub refreshing: bool,
    pub loaded: usize,
    pub total_sources: usize,
}

pub struct Card {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub source_name: String,
    pub region: String,
    pub date: String,
    pub tags: Vec<String>,
    pub image: String,
}

impl From<&LocalizedItem> for Card {
    fn from(localized: &LocalizedItem) -> Self {
        let item = &localized.item;
        Self {
            title: localized.display_title().to_string(),
            link: item.link.clone(),
            summary: localized.display_summary().to_string(),
            source_name: item.source_name.clone(),
            region: item.source_region.to_string(),
            date: item.published_at.format("%d/%m/%Y").to_string(),
            tags: item.tags.clone(),
            image: item.image.clone().unwrap_or_default(),
        }
    }
}

/// A tag chip; following `href` toggles the tag in the current query.
pub struct TagOption {
    pub name: String,
    pub selected: bool,
    pub href: String,
}

pub struct RegionOption {
    pub name: String,
    pub selected: bool,
}

// Wrapper for HTML responses
struct HtmlTemplate<T>(T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {}", err),
            )
                .into_response(),
        }
    }
}

// Custom error type
pub enum AppError {
    /// Rejected caller input; rendered as a JSON `{error}` body.
    BadRequest(String),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            AppError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error: {}", err),
            )
                .into_response(),
        }
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        AppError::Internal(err.into())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Listing query shared by `/` and `/api/news`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NewsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Comma-separated tag list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub recent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub translated: bool,
}

impl NewsQuery {
    pub fn selected_tags(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn region_param(&self) -> Option<&str> {
        self.region.as_deref().map(str::trim).filter(|r| !r.is_empty())
    }

    pub fn to_filter(&self) -> Result<NewsFilter, AppError> {
        let region = match self.region_param() {
            Some(value) => Some(
                Region::parse(value)
                    .ok_or_else(|| AppError::BadRequest(format!("unknown region '{}'", value)))?,
            ),
            None => None,
        };

        Ok(NewsFilter {
            search: self.q.clone(),
            tags: self.selected_tags(),
            region,
            recent_only: self.recent,
        })
    }

    pub fn href(&self) -> Result<String, AppError> {
        let query = serde_urlencoded::to_string(self)?;
        if query.is_empty() {
            Ok("/".to_string())
        } else {
            Ok(format!("/?{}", query))
        }
    }

    fn with_page(&self, page: usize) -> Self {
        Self {
            page: Some(page),
            ..self.clone()
        }
    }

    fn with_tag_toggled(&self, tag: &str) -> Self {
        let mut tags = self.selected_tags();
        match tags.iter().position(|t| t == tag) {
            Some(index) => {
                tags.remove(index);
            }
            None => tags.push(tag.to_string()),
        }

        Self {
            tags: (!tags.is_empty()).then(|| tags.join(",")),
            page: None,
            ..self.clone()
        }
    }
}

/// The filtered, paginated aggregate plus cycle status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(flatten)]
    pub page: Page<LocalizedItem>,
    #[serde(rename = "demo")]
    pub is_demo: bool,
    pub failed_sources: Vec<FailedSource>,
    pub progress: Progress,
    pub active_filters: usize,
    pub last_updated: Option<DateTime<Utc>>,
}

async fn build_listing(state: &AppState, query: &NewsQuery) -> Result<Listing, AppError> {
    let filter = query.to_filter()?;
    let view = state.pipeline.current_view().await;
    let filtered = filter.apply(&view.items, state.pipeline.now());

    let Page {
        items,
        page,
        per_page,
        total,
        total_pages,
    } = paginate(
        &filtered,
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(DEFAULT_PER_PAGE),
    );

    let items = if query.translated {
        state.translations.overlay(items).await
    } else {
        items.into_iter().map(LocalizedItem::from).collect()
    };

    Ok(Listing {
        page: Page {
            items,
            page,
            per_page,
            total,
            total_pages,
        },
        is_demo: view.is_demo,
        failed_sources: view.failed_sources,
        progress: view.progress,
        active_filters: filter.active_count(),
        last_updated: view.last_completed,
    })
}

// Route handlers
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let listing = build_listing(&state, &query).await?;
    let selected_tags = query.selected_tags();
    let selected_region = query.region_param().and_then(Region::parse);

    let tag_options = all_tags()
        .into_iter()
        .map(|tag| -> Result<TagOption, AppError> {
            Ok(TagOption {
                name: tag.to_string(),
                selected: selected_tags.iter().any(|t| t == tag),
                href: query.with_tag_toggled(tag).href()?,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let region_options = state
        .config
        .regions()
        .into_iter()
        .map(|region| RegionOption {
            name: region.to_string(),
            selected: selected_region == Some(region),
        })
        .collect();

    let page = &listing.page;
    let prev_href = if page.page > 1 {
        query.with_page(page.page - 1).href()?
    } else {
        String::new()
    };
    let next_href = if page.has_more() {
        query.with_page(page.page + 1).href()?
    } else {
        String::new()
    };

    Ok(HtmlTemplate(IndexTemplate {
        cards: page.items.iter().map(Card::from).collect(),
        is_demo: listing.is_demo,
        failed_names: listing
            .failed_sources
            .iter()
            .map(|f| f.source_name.clone())
            .collect(),
        search: query.q.clone().unwrap_or_default(),
        recent_only: query.recent,
        tags_param: selected_tags.join(","),
        tag_options,
        region_options,
        active_filters: listing.active_filters,
        total: page.total,
        page: page.page,
        total_pages: page.total_pages,
        prev_href,
        next_href,
        refreshing: listing.progress.refreshing,
        loaded: listing.progress.loaded,
        total_sources: listing.progress.total,
    }))
}

pub async fn news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<Listing>, AppError> {
    Ok(Json(build_listing(&state, &query).await?))
}

#[derive(Debug, Deserialize)]
pub struct RssQuery {
    #[serde(default)]
    pub url: Option<String>,
}

/// Fetch one configured feed and return its raw items.
pub async fn rss_proxy(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RssQuery>,
) -> Result<Response, AppError> {
    let url = query
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing url parameter".to_string()))?;

    if state.config.find_source_by_url(url).is_none() {
        return Err(AppError::BadRequest(format!("'{}' is not a configured source", url)));
    }

    match state.fetcher.fetch_raw(url).await {
        Ok(feed) => Ok(Json(json!({ "items": &*feed.items, "cached": feed.cached })).into_response()),
        Err(e) => {
            warn!("Proxy fetch failed for {}: {}", url, e);
            Ok(Json(json!({ "error": e.to_string(), "items": [] })).into_response())
        }
    }
}

pub async fn sources(State(state): State<Arc<AppState>>) -> Json<Vec<Source>> {
    Json(state.config.sources.clone())
}

pub async fn tags() -> Json<Vec<&'static str>> {
    Json(all_tags())
}

pub async fn attach_translation(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
    Json(translation): Json<Translation>,
) -> StatusCode {
    state.translations.attach(&item_id, translation).await;
    StatusCode::NO_CONTENT
}

pub async fn refresh(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    // Spawn the refresh task
    let pipeline = state.pipeline.clone();
    tokio::spawn(async move {
        if pipeline.refresh_all().await.is_none() {
            info!("Manual refresh ignored, one is already running");
        }
    });

    // The listing page's form expects to land back on the listing
    let wants_html = headers
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"));
    if wants_html {
        return Redirect::to("/").into_response();
    }

    // Return refreshing state immediately
    let progress = state.pipeline.progress().await;
    (
        StatusCode::ACCEPTED,
        Json(Progress {
            refreshing: true,
            ..progress
        }),
    )
        .into_response()
}

pub async fn refresh_status(State(state): State<Arc<AppState>>) -> Json<Progress> {
    Json(state.pipeline.progress().await)
}

pub async fn health() -> impl IntoResponse {
    Html("OK")
}

use std::sync::Arc;

use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use radar_feeds::aggregator::{ContentFilter, KeywordExclusion};
use radar_feeds::cache::ResponseCache;
use radar_feeds::config::Config;
use radar_feeds::fetcher::{FetchSettings, Fetcher};
use radar_feeds::pipeline::{start_background_refresh, Pipeline};
use radar_feeds::routes::{self, AppState};
use radar_feeds::translation::TranslationTable;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "radar_feeds=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config_path = std::env::var("RADAR_CONFIG").unwrap_or_else(|_| "feeds.toml".to_string());
    let config = Arc::new(Config::load(&config_path)?);
    info!(
        "Loaded {} sources from {}",
        config.sources.len(),
        config_path
    );

    // Create fetcher with its response cache
    let cache = Arc::new(ResponseCache::with_ttl_minutes(config.cache_ttl_minutes));
    let clock = cache.clock();
    let fetcher = Arc::new(Fetcher::new(&FetchSettings::from_config(&config), cache)?);

    let exclusion = KeywordExclusion::new(&config.excluded_keywords);
    let filter: Option<Arc<dyn ContentFilter>> = if exclusion.is_empty() {
        None
    } else {
        Some(Arc::new(exclusion))
    };

    let pipeline = Arc::new(Pipeline::new(
        fetcher.clone(),
        config.sources.clone(),
        config.concurrency,
        filter,
        clock,
    ));

    // Start background refresh task
    let bg_pipeline = pipeline.clone();
    let refresh_interval = config.refresh_interval;
    tokio::spawn(async move {
        start_background_refresh(bg_pipeline, refresh_interval).await;
    });

    // Create app state
    let state = Arc::new(AppState {
        config: config.clone(),
        pipeline,
        fetcher,
        translations: Arc::new(TranslationTable::new()),
    });

    // Build router
    let app = routes::app(state)
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server starting on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

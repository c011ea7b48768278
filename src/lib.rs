//! Radar Feeds - a regulatory news aggregator
//!
//! Fetches a fixed set of RSS/Atom sources with bounded concurrency, tags the
//! entries by topic, merges them into one deduplicated, date-ordered list and
//! serves it over HTTP.

pub mod aggregator;
pub mod cache;
pub mod classifier;
pub mod config;
pub mod demo;
pub mod extractor;
pub mod fetcher;
pub mod filter;
pub mod model;
pub mod pipeline;
pub mod routes;
pub mod scheduler;
pub mod translation;

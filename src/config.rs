use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::scheduler::DEFAULT_CONCURRENCY;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Refresh interval in minutes
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,
    /// Maximum number of feeds fetched at the same time
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Items whose title or summary mention any of these are hidden from the listing
    #[serde(default)]
    pub excluded_keywords: Vec<String>,
    pub sources: Vec<Source>,
}

fn default_refresh_interval() -> u64 {
    30
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_cache_ttl_minutes() -> u64 {
    30
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "RadarArgentina/1.0 (RSS aggregator)".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Rss,
    Atom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    AR,
    UE,
    USA,
    Global,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::AR => "AR",
            Region::UE => "UE",
            Region::USA => "USA",
            Region::Global => "Global",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "AR" => Some(Region::AR),
            "UE" => Some(Region::UE),
            "USA" => Some(Region::USA),
            "Global" => Some(Region::Global),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured feed endpoint plus its static metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default = "default_kind")]
    pub kind: SourceKind,
    #[serde(default = "default_region")]
    pub region: Region,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ordering hint; not used for scheduling.
    #[serde(default)]
    pub priority: i32,
}

fn default_kind() -> SourceKind {
    SourceKind::Rss
}

fn default_region() -> Region {
    Region::Global
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for source in &self.sources {
            if !seen.insert(source.id.as_str()) {
                anyhow::bail!("duplicate source id '{}'", source.id);
            }
        }
        Ok(())
    }

    pub fn find_source_by_url(&self, url: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.url == url)
    }

    /// Distinct regions of the configured sources, sorted.
    pub fn regions(&self) -> Vec<Region> {
        let mut regions: Vec<Region> = self.sources.iter().map(|s| s.region).collect();
        regions.sort();
        regions.dedup();
        regions
    }
}

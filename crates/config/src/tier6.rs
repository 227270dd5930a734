//! `tier_6.*` configuration: gap adapter enablement, timeouts, and caches.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_hours: u64,
    pub max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_hours: 6, max_size: 512 }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_hours * 3600)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSearchConfig {
    pub enabled: bool,
    pub timeout_secs: u64,
    pub max_results: usize,
    pub max_snippet_length: usize,
    pub cache: CacheConfig,
    pub fallback_to_local: bool,
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: 3,
            max_results: 5,
            max_snippet_length: 400,
            cache: CacheConfig::default(),
            fallback_to_local: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WikipediaConfig {
    pub enabled: bool,
    pub language: String,
    pub max_results: usize,
    pub timeout_secs: u64,
    pub cache: CacheConfig,
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            language: "zh".to_string(),
            max_results: 3,
            timeout_secs: 5,
            cache: CacheConfig::default(),
        }
    }
}

/// Shared shape for the structured-API adapters (stocks, weather, company
/// registries). Each is independently enable-able and feature-gated in
/// `research-gap`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredApiConfig {
    pub enabled: bool,
    pub timeout_secs: u64,
    pub cache: CacheConfig,
}

impl Default for StructuredApiConfig {
    fn default() -> Self {
        Self { enabled: false, timeout_secs: 5, cache: CacheConfig::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentStrategy {
    Parallel,
    Sequential,
}

impl Default for EnrichmentStrategy {
    fn default() -> Self {
        EnrichmentStrategy::Parallel
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tier6Config {
    pub web_search: WebSearchConfig,
    pub wikipedia: WikipediaConfig,
    pub stock_tw: StructuredApiConfig,
    pub stock_global: StructuredApiConfig,
    pub weather_tw: StructuredApiConfig,
    pub weather_global: StructuredApiConfig,
    pub company_tw: StructuredApiConfig,
    pub company_global: StructuredApiConfig,
    pub enrichment_strategy: EnrichmentStrategy,
}

impl Default for Tier6Config {
    fn default() -> Self {
        Self {
            web_search: WebSearchConfig::default(),
            wikipedia: WikipediaConfig::default(),
            stock_tw: StructuredApiConfig::default(),
            stock_global: StructuredApiConfig::default(),
            weather_tw: StructuredApiConfig::default(),
            weather_global: StructuredApiConfig::default(),
            company_tw: StructuredApiConfig::default(),
            company_global: StructuredApiConfig::default(),
            enrichment_strategy: EnrichmentStrategy::default(),
        }
    }
}

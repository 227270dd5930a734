//! Dispatches Analyst-declared `GapResolution`s to their adapters, applying
//! caching, a timeout-with-stale-fallback wrapper, and tier-6 classification
//! uniformly across every channel.

use crate::adapter::GapAdapter;
use crate::cache::TtlCache;
use research_core::{
    AnalyticsEvent, AnalyticsSink, GapResolution, ResolutionChannel, SourceCategory, Tier, TieredSource,
};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::warn;

struct Registration {
    adapter: Box<dyn GapAdapter>,
    cache: TtlCache,
    timeout: Duration,
}

/// Parallel or sequential dispatch of a batch of gap resolutions. Sequential
/// preserves Analyst-declared order in the resulting index assignment;
/// parallel (the default) races every resolution concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStrategy {
    Parallel,
    Sequential,
}

impl From<research_config::EnrichmentStrategy> for DispatchStrategy {
    fn from(value: research_config::EnrichmentStrategy) -> Self {
        match value {
            research_config::EnrichmentStrategy::Parallel => DispatchStrategy::Parallel,
            research_config::EnrichmentStrategy::Sequential => DispatchStrategy::Sequential,
        }
    }
}

pub struct GapOutcome {
    /// Resolved sources, tier forced to 6, in Analyst-declared resolution order.
    pub sources: Vec<TieredSource>,
    /// True when every resolution produced zero sources, signalling the
    /// orchestrator to inject the "補充搜尋未發現有效結果" hint and let the
    /// Analyst proceed rather than re-request.
    pub all_empty: bool,
}

pub struct GapRegistry {
    adapters: HashMap<ResolutionChannel, Registration>,
}

impl GapRegistry {
    pub fn new() -> Self {
        Self { adapters: HashMap::new() }
    }

    pub fn register(&mut self, adapter: Box<dyn GapAdapter>, cache: TtlCache, timeout: Duration) {
        self.adapters.insert(adapter.channel(), Registration { adapter, cache, timeout });
    }

    pub async fn resolve_all(
        &self,
        resolutions: &[GapResolution],
        strategy: DispatchStrategy,
        analytics: &dyn AnalyticsSink,
    ) -> GapOutcome {
        let mut sources = Vec::new();

        match strategy {
            DispatchStrategy::Sequential => {
                for resolution in resolutions {
                    sources.extend(self.resolve_one(resolution, analytics).await);
                }
            }
            DispatchStrategy::Parallel => {
                let futures = resolutions.iter().map(|r| self.resolve_one(r, analytics));
                for batch in futures::future::join_all(futures).await {
                    sources.extend(batch);
                }
            }
        }

        let all_empty = !resolutions.is_empty() && sources.is_empty();
        GapOutcome { sources, all_empty }
    }

    async fn resolve_one(&self, resolution: &GapResolution, analytics: &dyn AnalyticsSink) -> Vec<TieredSource> {
        let Some(registration) = self.adapters.get(&resolution.resolution) else {
            warn!(channel = ?resolution.resolution, "no adapter registered for resolution channel");
            return Vec::new();
        };

        if !registration.adapter.is_available() {
            warn!(adapter = registration.adapter.name(), "adapter disabled, skipping resolution");
            return Vec::new();
        }

        let cache_key = cache_key_for(resolution);
        let started = Instant::now();

        if let Some(fresh) = registration.cache.get_fresh(&cache_key) {
            metrics::counter!("research_gap_cache_hits_total", "adapter" => registration.adapter.name().to_string(), "hit" => "true").increment(1);
            analytics
                .log(AnalyticsEvent::GapCacheLookup { adapter: registration.adapter.name().to_string(), hit: true })
                .await;
            return classify(registration.adapter.channel(), fresh);
        }
        metrics::counter!("research_gap_cache_hits_total", "adapter" => registration.adapter.name().to_string(), "hit" => "false").increment(1);
        analytics
            .log(AnalyticsEvent::GapCacheLookup { adapter: registration.adapter.name().to_string(), hit: false })
            .await;

        let call = tokio::time::timeout(registration.timeout, registration.adapter.search(resolution)).await;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        metrics::histogram!("research_gap_adapter_latency_ms", "adapter" => registration.adapter.name().to_string())
            .record(elapsed_ms as f64);
        analytics
            .log(AnalyticsEvent::GapAdapterLatency { adapter: registration.adapter.name().to_string(), duration_ms: elapsed_ms })
            .await;

        match call {
            Ok(Ok(candidates)) => {
                registration.cache.put(cache_key, candidates.clone());
                classify(registration.adapter.channel(), candidates)
            }
            Ok(Err(err)) => {
                warn!(adapter = registration.adapter.name(), error = %err, "gap adapter failed, trying stale cache");
                registration.cache.get_stale(&cache_key).map(|s| classify(registration.adapter.channel(), s)).unwrap_or_default()
            }
            Err(_) => {
                warn!(adapter = registration.adapter.name(), "gap adapter timed out, trying stale cache");
                registration.cache.get_stale(&cache_key).map(|s| classify(registration.adapter.channel(), s)).unwrap_or_default()
            }
        }
    }
}

impl Default for GapRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn cache_key_for(resolution: &GapResolution) -> String {
    if let Some(params) = &resolution.api_params {
        format!("{:?}:{}", resolution.resolution, params)
    } else {
        format!("{:?}:{}", resolution.resolution, resolution.search_query.as_deref().unwrap_or(&resolution.gap_type))
    }
}

fn category_for_channel(channel: ResolutionChannel) -> SourceCategory {
    match channel {
        ResolutionChannel::WebSearch => SourceCategory::WebReference,
        ResolutionChannel::Wikipedia => SourceCategory::Encyclopedia,
        ResolutionChannel::LlmKnowledge => SourceCategory::LlmKnowledge,
        ResolutionChannel::InternalSearch => SourceCategory::Digital,
        ResolutionChannel::StockTw
        | ResolutionChannel::StockGlobal
        | ResolutionChannel::WeatherTw
        | ResolutionChannel::WeatherGlobal
        | ResolutionChannel::CompanyTw
        | ResolutionChannel::CompanyGlobal => SourceCategory::Digital,
    }
}

fn classify(channel: ResolutionChannel, candidates: Vec<research_core::CandidateSource>) -> Vec<TieredSource> {
    let category = category_for_channel(channel);
    candidates.into_iter().map(|c| TieredSource::new(c, Tier::new(6), category)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::GapAdapter;
    use crate::error::GapError;
    use async_trait::async_trait;
    use research_core::{CandidateSource, NullAnalyticsSink, OriginType};

    struct AlwaysEmptyAdapter;

    #[async_trait]
    impl GapAdapter for AlwaysEmptyAdapter {
        fn name(&self) -> &str {
            "always_empty"
        }
        fn channel(&self) -> ResolutionChannel {
            ResolutionChannel::WebSearch
        }
        fn is_available(&self) -> bool {
            true
        }
        async fn search(&self, _resolution: &GapResolution) -> Result<Vec<CandidateSource>, GapError> {
            Ok(Vec::new())
        }
    }

    struct OneResultAdapter;

    #[async_trait]
    impl GapAdapter for OneResultAdapter {
        fn name(&self) -> &str {
            "one_result"
        }
        fn channel(&self) -> ResolutionChannel {
            ResolutionChannel::Wikipedia
        }
        fn is_available(&self) -> bool {
            true
        }
        async fn search(&self, _resolution: &GapResolution) -> Result<Vec<CandidateSource>, GapError> {
            Ok(vec![CandidateSource::new("1", "t", "b", "Wikipedia", OriginType::PublicNews)])
        }
    }

    #[tokio::test]
    async fn all_empty_is_flagged_when_every_adapter_returns_nothing() {
        let mut registry = GapRegistry::new();
        registry.register(Box::new(AlwaysEmptyAdapter), TtlCache::new(8, Duration::from_secs(60)), Duration::from_secs(5));
        let resolutions = vec![GapResolution::new("gap", ResolutionChannel::WebSearch, "reason").with_search_query("q")];
        let outcome = registry.resolve_all(&resolutions, DispatchStrategy::Parallel, &NullAnalyticsSink).await;
        assert!(outcome.all_empty);
        assert!(outcome.sources.is_empty());
    }

    #[tokio::test]
    async fn results_are_forced_to_tier_6() {
        let mut registry = GapRegistry::new();
        registry.register(Box::new(OneResultAdapter), TtlCache::new(8, Duration::from_secs(60)), Duration::from_secs(5));
        let resolutions = vec![GapResolution::new("gap", ResolutionChannel::Wikipedia, "reason").with_search_query("q")];
        let outcome = registry.resolve_all(&resolutions, DispatchStrategy::Sequential, &NullAnalyticsSink).await;
        assert!(!outcome.all_empty);
        assert_eq!(outcome.sources.len(), 1);
        assert!(outcome.sources[0].tier.is_enrichment());
        assert_eq!(outcome.sources[0].category, SourceCategory::Encyclopedia);
    }

    #[tokio::test]
    async fn unregistered_channel_resolves_to_no_sources() {
        let registry = GapRegistry::new();
        let resolutions = vec![GapResolution::new("gap", ResolutionChannel::StockTw, "reason")];
        let outcome = registry.resolve_all(&resolutions, DispatchStrategy::Parallel, &NullAnalyticsSink).await;
        assert!(outcome.sources.is_empty());
    }
}

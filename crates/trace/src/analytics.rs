//! Forwards `AnalyticsEvent`s onto `metrics` crate instruments, so a caller
//! that wires this sink in gets Prometheus-exportable counters/histograms
//! without the orchestrator or agents crates depending on `metrics` directly.

use async_trait::async_trait;
use research_core::{AnalyticsEvent, AnalyticsSink};

pub struct MetricsAnalyticsSink;

#[async_trait]
impl AnalyticsSink for MetricsAnalyticsSink {
    async fn log(&self, event: AnalyticsEvent) {
        match event {
            AnalyticsEvent::LlmCall { agent, model, duration_ms, retry_count, success } => {
                metrics::counter!(
                    "research_llm_calls_total",
                    "agent" => agent.clone(),
                    "model" => model.clone(),
                    "result" => if success { "success" } else { "failure" }
                )
                .increment(1);
                metrics::histogram!("research_llm_call_duration_ms", "agent" => agent).record(duration_ms as f64);
                metrics::counter!("research_llm_call_retries_total", "model" => model).increment(retry_count as u64);
            }
            AnalyticsEvent::GapCacheLookup { adapter, hit } => {
                metrics::counter!(
                    "research_gap_cache_hits_total",
                    "adapter" => adapter,
                    "hit" => if hit { "true" } else { "false" }
                )
                .increment(1);
            }
            AnalyticsEvent::GapAdapterLatency { adapter, duration_ms } => {
                metrics::histogram!("research_gap_adapter_latency_ms", "adapter" => adapter).record(duration_ms as f64);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn logs_without_panicking_when_no_recorder_installed() {
        let sink = MetricsAnalyticsSink;
        sink.log(AnalyticsEvent::GapCacheLookup { adapter: "web_search".to_string(), hit: true }).await;
    }
}

//! Progress and analytics event shapes shared between the orchestrator (the
//! producer) and `research-trace` (the consumer that writes/forwards them).

use serde::{Deserialize, Serialize};

/// One phase transition in a research session, meant for a client-facing
/// progress stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub message_type: ProgressMessageType,
    pub stage: String,
    pub iteration: u32,
    pub total_iterations: u32,
    /// Opaque to the core; a presentation layer's responsibility to localize.
    pub user_message: String,
    pub progress_percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl ProgressEvent {
    pub fn new(
        message_type: ProgressMessageType,
        stage: impl Into<String>,
        iteration: u32,
        total_iterations: u32,
        user_message: impl Into<String>,
        progress_percent: u8,
    ) -> Self {
        Self {
            message_type,
            stage: stage.into(),
            iteration,
            total_iterations,
            user_message: user_message.into(),
            progress_percent: progress_percent.min(100),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Named phase-transition messages, one per emission point in the
/// orchestrator's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressMessageType {
    AnalystAnalyzing,
    AnalystComplete,
    GapSearchStarted,
    CriticReviewing,
    CriticComplete,
    WriterPlanning,
    WriterComposing,
    WriterComplete,
    Cancelled,
}

/// An analytics event for LLM usage, cache hit/miss, or gap-adapter latency.
/// Emission only; persistence is out of scope for the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnalyticsEvent {
    LlmCall {
        agent: String,
        model: String,
        duration_ms: u64,
        retry_count: u32,
        success: bool,
    },
    GapCacheLookup {
        adapter: String,
        hit: bool,
    },
    GapAdapterLatency {
        adapter: String,
        duration_ms: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_percent_clamps_to_100() {
        let ev = ProgressEvent::new(
            ProgressMessageType::AnalystAnalyzing,
            "analyst",
            1,
            3,
            "分析中",
            150,
        );
        assert_eq!(ev.progress_percent, 100);
    }
}

//! An Analyst-declared information gap plus the channel chosen to fill it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionChannel {
    LlmKnowledge,
    WebSearch,
    InternalSearch,
    Wikipedia,
    StockTw,
    StockGlobal,
    WeatherTw,
    WeatherGlobal,
    CompanyTw,
    CompanyGlobal,
}

impl ResolutionChannel {
    /// Structured-API channels gated behind Cargo features in `research-gap`.
    pub fn is_structured_api(&self) -> bool {
        use ResolutionChannel::*;
        matches!(
            self,
            StockTw | StockGlobal | WeatherTw | WeatherGlobal | CompanyTw | CompanyGlobal
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapResolution {
    pub gap_type: String,
    pub resolution: ResolutionChannel,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_params: Option<serde_json::Value>,
}

impl GapResolution {
    pub fn new(gap_type: impl Into<String>, resolution: ResolutionChannel, reason: impl Into<String>) -> Self {
        Self {
            gap_type: gap_type.into(),
            resolution,
            reason: reason.into(),
            search_query: None,
            llm_answer: None,
            api_params: None,
        }
    }

    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn with_llm_answer(mut self, answer: impl Into<String>) -> Self {
        self.llm_answer = Some(answer.into());
        self
    }

    pub fn with_api_params(mut self, params: serde_json::Value) -> Self {
        self.api_params = Some(params);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_api_channels_are_flagged() {
        assert!(ResolutionChannel::StockTw.is_structured_api());
        assert!(!ResolutionChannel::WebSearch.is_structured_api());
        assert!(!ResolutionChannel::LlmKnowledge.is_structured_api());
    }
}

//! LLM provider abstraction (`AskLLM` in the external-interfaces table).

use crate::{GenerateRequest, GenerateResponse, Result};
use async_trait::async_trait;

/// A language model backend. Concrete implementations live in `research-llm`
/// (or a caller's own crate); this trait is the only seam the reasoning core
/// depends on.
#[async_trait]
pub trait LanguageModel: Send + Sync + 'static {
    /// Generate a completion. Implementations are responsible for applying
    /// `request.timeout`; `research-llm::SafeLlmCall` treats a timed-out
    /// future the same as an `Err` returned before the deadline.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;

    /// Whether the backend is currently reachable.
    async fn is_available(&self) -> bool;

    /// Model name for logging and trace records.
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_types::QualityLevel;
    use std::time::Duration;

    struct MockLlm;

    #[async_trait]
    impl LanguageModel for MockLlm {
        async fn generate(&self, _request: GenerateRequest) -> Result<GenerateResponse> {
            Ok(GenerateResponse::text("mock response"))
        }

        async fn is_available(&self) -> bool {
            true
        }

        fn model_name(&self) -> &str {
            "mock-llm"
        }
    }

    #[tokio::test]
    async fn mock_llm_round_trips() {
        let llm = MockLlm;
        assert!(llm.is_available().await);
        let req = GenerateRequest::new("sys", QualityLevel::Low, Duration::from_secs(5));
        let resp = llm.generate(req).await.unwrap();
        assert_eq!(resp.text, "mock response");
    }
}

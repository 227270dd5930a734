//! `LLM_KNOWLEDGE`: no external call. Synthesizes a pseudo-source from the
//! Analyst-supplied `llm_answer`, identified by a `urn:llm:knowledge:<topic>`
//! URN. Always tier 6; the Critic is expected to reject it for time-sensitive
//! factual claims.

use crate::adapter::GapAdapter;
use crate::error::GapError;
use async_trait::async_trait;
use research_core::{CandidateSource, GapResolution, OriginType, ResolutionChannel};

pub struct LlmKnowledgeAdapter;

fn slugify(topic: &str) -> String {
    topic
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}

#[async_trait]
impl GapAdapter for LlmKnowledgeAdapter {
    fn name(&self) -> &str {
        "llm_knowledge"
    }

    fn channel(&self) -> ResolutionChannel {
        ResolutionChannel::LlmKnowledge
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn search(&self, resolution: &GapResolution) -> Result<Vec<CandidateSource>, GapError> {
        let Some(answer) = resolution.llm_answer.as_deref() else {
            return Err(GapError::AdapterFailure {
                adapter: self.name().to_string(),
                message: "resolution declared LLM_KNOWLEDGE without an llm_answer".to_string(),
            });
        };
        let urn = format!("urn:llm:knowledge:{}", slugify(&resolution.gap_type));
        let source = CandidateSource::new(urn, resolution.gap_type.clone(), answer.to_string(), "LLM", OriginType::PublicNews);
        Ok(vec![source])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn synthesizes_a_urn_identified_pseudo_source() {
        let adapter = LlmKnowledgeAdapter;
        let resolution =
            GapResolution::new("台灣 GDP 成長率", ResolutionChannel::LlmKnowledge, "analyst has background knowledge")
                .with_llm_answer("根據既有知識，成長率約為 ...");
        let sources = adapter.search(&resolution).await.unwrap();
        assert_eq!(sources.len(), 1);
        assert!(sources[0].id.starts_with("urn:llm:knowledge:"));
    }

    #[tokio::test]
    async fn missing_llm_answer_is_an_adapter_failure() {
        let adapter = LlmKnowledgeAdapter;
        let resolution = GapResolution::new("topic", ResolutionChannel::LlmKnowledge, "reason");
        assert!(adapter.search(&resolution).await.is_err());
    }
}

//! Clarification agent: proposes disambiguation options before research
//! begins, when the query's scope, entity, or time range is ambiguous.

use crate::prompts::PromptBuilder;
use research_core::{ClarificationRequest, LanguageModel, QualityLevel, Result};
use research_llm::{safe_call, AgentSchema, CallMeta};
use std::sync::Arc;
use std::time::Duration;

pub struct ClarificationAgent {
    llm: Arc<dyn LanguageModel>,
    timeout: Duration,
    max_retries: u32,
}

impl ClarificationAgent {
    pub fn new(llm: Arc<dyn LanguageModel>, timeout: Duration, max_retries: u32) -> Self {
        Self { llm, timeout, max_retries }
    }

    pub async fn generate_options(
        &self,
        query: &str,
        ambiguity_signals: &[String],
    ) -> Result<(ClarificationRequest, CallMeta)> {
        let signals = if ambiguity_signals.is_empty() {
            "未偵測到明確時間範圍".to_string()
        } else {
            ambiguity_signals.join("; ")
        };

        let request = PromptBuilder::new(
            "你是釐清問題的助理。請針對使用者問題提出 1 到 3 個澄清問題，每題提供 2 到 5 個選項。\
             每個選項需附上 query_modifier（用於改寫查詢），如涉及時間範圍，另外附上 time_range。",
            QualityLevel::Low,
            self.timeout,
        )
        .with_user_message(format!("使用者問題：{query}"))
        .with_user_message(format!("偵測到的模糊訊號：{signals}"))
        .with_schema_hint(ClarificationRequest::json_schema())
        .build();

        let (output, meta) =
            safe_call::<ClarificationRequest>(&self.llm, request, self.max_retries)
                .await
                .map_err(research_core::Error::from)?;
        Ok((output, meta))
    }
}

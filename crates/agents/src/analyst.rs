//! Analyst agent: drafts a cited research answer, or declares gaps and asks
//! for another retrieval pass.

use crate::prompts::PromptBuilder;
use research_core::{AnalystOutput, CriticOutput, Mode, QualityLevel, Result, TimeRange};
use research_llm::{safe_call, AgentSchema, CallMeta};
use research_core::LanguageModel;
use std::sync::Arc;
use std::time::Duration;

pub struct Analyst {
    llm: Arc<dyn LanguageModel>,
    timeout: Duration,
    max_retries: u32,
}

impl Analyst {
    pub fn new(llm: Arc<dyn LanguageModel>, timeout: Duration, max_retries: u32) -> Self {
        Self { llm, timeout, max_retries }
    }

    pub async fn research(
        &self,
        query: &str,
        formatted_context: &str,
        mode: Mode,
        temporal_hint: Option<&TimeRange>,
    ) -> Result<(AnalystOutput, CallMeta)> {
        let request = PromptBuilder::new(
            "你是研究分析師。針對使用者問題，依提供的編號資料來源撰寫具引用的研究草稿，\
             每個論點都必須以 [i] 形式引用來源索引，且索引必須來自提供的資料清單。\
             若現有資料不足以回答問題，回傳 search_required 並列出新的查詢字串與待補的資訊缺口。",
            QualityLevel::High,
            self.timeout,
        )
        .with_mode_guidance(mode)
        .with_temporal_hint(temporal_hint)
        .with_context_block(formatted_context)
        .with_user_message(format!("使用者問題：{query}"))
        .with_schema_hint(AnalystOutput::json_schema())
        .build();

        let (output, meta) = safe_call::<AnalystOutput>(&self.llm, request, self.max_retries)
            .await
            .map_err(research_core::Error::from)?;
        Ok((output, meta))
    }

    pub async fn revise(
        &self,
        previous_draft: &AnalystOutput,
        critic_review: &CriticOutput,
        formatted_context: &str,
        mode: Mode,
    ) -> Result<(AnalystOutput, CallMeta)> {
        let request = PromptBuilder::new(
            "你是研究分析師，正在根據審稿意見修訂先前的草稿。請保留仍然成立的引用，\
             修正審稿者指出的問題，並且只能引用提供的資料清單中的索引。",
            QualityLevel::High,
            self.timeout,
        )
        .with_mode_guidance(mode)
        .with_context_block(formatted_context)
        .with_user_message(format!("先前草稿：\n{}", previous_draft.draft))
        .with_user_message(format!("審稿意見：\n{}", critic_review.critique))
        .with_schema_hint(AnalystOutput::json_schema())
        .build();

        let (output, meta) = safe_call::<AnalystOutput>(&self.llm, request, self.max_retries)
            .await
            .map_err(research_core::Error::from)?;
        Ok((output, meta))
    }
}

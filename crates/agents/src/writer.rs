//! Writer agent: composes the final report, constrained to the Analyst's
//! citation set. The Hallucination Guard itself runs in the orchestrator,
//! not here.

use crate::prompts::PromptBuilder;
use research_core::{CriticOutput, CriticVerdict, LanguageModel, Mode, QualityLevel, Result, WriterOutput};
use research_llm::{safe_call, AgentSchema, CallMeta};
use std::sync::Arc;
use std::time::Duration;

pub struct Writer {
    llm: Arc<dyn LanguageModel>,
    timeout: Duration,
    max_retries: u32,
}

impl Writer {
    pub fn new(llm: Arc<dyn LanguageModel>, timeout: Duration, max_retries: u32) -> Self {
        Self { llm, timeout, max_retries }
    }

    pub async fn compose(
        &self,
        draft: &str,
        review: &CriticOutput,
        formatted_context: &str,
        analyst_citations: &[i64],
        mode: Mode,
    ) -> Result<(WriterOutput, CallMeta)> {
        let suggested_confidence = match review.status {
            CriticVerdict::Pass => "High",
            CriticVerdict::Warn => "Medium",
            CriticVerdict::Reject => "Low",
        };

        let citations_csv = analyst_citations
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let request = PromptBuilder::new(
            "你是報告撰寫者。請依固定段落架構（核心發現 / 深度分析 / 邏輯鏈 / 研究限制 / 資料來源）\
             撰寫最終報告。報告必須保留草稿中出現過的每個 [i] 引用，且絕對不可以引入新的索引。\
             sources_used 必須是 analyst_citations_used 的子集。",
            QualityLevel::High,
            self.timeout,
        )
        .with_mode_guidance(mode)
        .with_context_block(formatted_context)
        .with_user_message(format!("草稿：\n{draft}"))
        .with_user_message(format!("審稿意見：\n{}", review.critique))
        .with_user_message(format!("可用引用索引（子集範圍）：[{citations_csv}]"))
        .with_user_message(format!("建議信心等級（可再調降但不可調升）：{suggested_confidence}"))
        .with_schema_hint(WriterOutput::json_schema())
        .build();

        let (output, meta) = safe_call::<WriterOutput>(&self.llm, request, self.max_retries)
            .await
            .map_err(research_core::Error::from)?;
        Ok((output, meta))
    }
}

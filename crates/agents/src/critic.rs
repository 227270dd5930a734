//! Critic agent: audits a draft for evidence sufficiency, logical validity,
//! and mode compliance.

use crate::prompts::PromptBuilder;
use research_core::{CriticOutput, LanguageModel, Mode, QualityLevel, Result};
use research_llm::{safe_call, AgentSchema, CallMeta};
use std::sync::Arc;
use std::time::Duration;

pub struct Critic {
    llm: Arc<dyn LanguageModel>,
    timeout: Duration,
    max_retries: u32,
}

impl Critic {
    pub fn new(llm: Arc<dyn LanguageModel>, timeout: Duration, max_retries: u32) -> Self {
        Self { llm, timeout, max_retries }
    }

    pub async fn review(&self, draft: &str, query: &str, mode: Mode) -> Result<(CriticOutput, CallMeta)> {
        let monitor_note = if mode == Mode::Monitor {
            "此為監測模式：草稿必須明確對照第一級與第五級來源的說法，否則視為缺陷。"
        } else {
            ""
        };

        let request = PromptBuilder::new(
            "你是審稿員。請依下列檢查項目審查草稿：(1) 每個主要論點是否至少有一個引用；\
             (2) 是否存在邏輯謬誤（以偏概全、事後歸因、假因果、選擇性引用等）；\
             (3) 來源是否符合該模式的分級規則；(4) 結論的信心程度是否超過最弱的引用證據。\
             若無違反則 status=PASS；若有可由撰寫者修補的小問題則 status=WARN；\
             若有實質性違反則 status=REJECT。",
            QualityLevel::High,
            self.timeout,
        )
        .with_mode_guidance(mode)
        .with_user_message(format!("使用者問題：{query}"))
        .with_user_message(monitor_note)
        .with_user_message(format!("待審草稿：\n{draft}"))
        .with_schema_hint(CriticOutput::json_schema())
        .build();

        let (output, meta) = safe_call::<CriticOutput>(&self.llm, request, self.max_retries)
            .await
            .map_err(research_core::Error::from)?;
        Ok((output, meta))
    }
}

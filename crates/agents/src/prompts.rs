//! Shared prompt assembly. Each agent module builds its `GenerateRequest`
//! through this builder rather than hand-formatting strings inline.

use research_core::{GenerateRequest, Mode, QualityLevel, TimeRange};
use std::time::Duration;

pub struct PromptBuilder {
    request: GenerateRequest,
}

impl PromptBuilder {
    pub fn new(system_prompt: impl Into<String>, quality: QualityLevel, timeout: Duration) -> Self {
        Self { request: GenerateRequest::new(system_prompt, quality, timeout) }
    }

    pub fn with_mode_guidance(mut self, mode: Mode) -> Self {
        let guidance = match mode {
            Mode::Strict => "嚴格模式：只能採用第一、二級來源，推論需保守，不得臆測。",
            Mode::Discovery => "探索模式：可引用第三至五級來源，但需在文字中附上警示說明。",
            Mode::Monitor => "監測模式：需明確對照第一級與第五級來源的說法。",
        };
        self.request = self.request.with_user_message(guidance);
        self
    }

    pub fn with_temporal_hint(mut self, hint: Option<&TimeRange>) -> Self {
        if let Some(range) = hint {
            self.request = self.request.with_user_message(format!(
                "時間限定：僅考慮 {} 至 {} 之間的資訊。",
                range.start, range.end
            ));
        }
        self
    }

    pub fn with_context_block(mut self, formatted_context: &str) -> Self {
        self.request = self.request.with_user_message(formatted_context);
        self
    }

    pub fn with_user_message(mut self, content: impl Into<String>) -> Self {
        self.request = self.request.with_user_message(content);
        self
    }

    pub fn with_schema_hint(mut self, schema: serde_json::Value) -> Self {
        self.request = self.request.with_schema_hint(schema);
        self
    }

    pub fn build(self) -> GenerateRequest {
        self.request
    }
}

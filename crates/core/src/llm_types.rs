//! Request/response types for the LLM provider abstraction (`AskLLM`).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Quality tier requested for a generation call. Cheaper/faster models may be
/// used for `Low`; agents that need careful reasoning (Critic, Writer) ask
/// for `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    Low,
    High,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A generation request as seen by a `LanguageModel` implementation.
///
/// `schema_hint` is advisory only: structural validation happens in
/// `research-llm`, not inside the provider client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_hint: Option<serde_json::Value>,
    pub quality: QualityLevel,
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl GenerateRequest {
    pub fn new(system_prompt: impl Into<String>, quality: QualityLevel, timeout: Duration) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
            schema_hint: None,
            quality,
            timeout,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_user_message(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::user(content));
        self
    }

    pub fn with_schema_hint(mut self, schema: serde_json::Value) -> Self {
        self.schema_hint = Some(schema);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature.clamp(0.0, 2.0));
        self
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}

/// Token accounting, when the provider reports it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Raw provider response, before JSON extraction/repair/validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

impl GenerateResponse {
    pub fn text(content: impl Into<String>) -> Self {
        Self { text: content.into(), usage: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_sets_fields() {
        let req = GenerateRequest::new("sys", QualityLevel::High, Duration::from_secs(30))
            .with_user_message("hello")
            .with_temperature(5.0);
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.temperature, Some(2.0));
        assert_eq!(req.quality, QualityLevel::High);
    }

    #[test]
    fn token_usage_sums_total() {
        assert_eq!(TokenUsage::new(100, 50).total_tokens, 150);
    }
}

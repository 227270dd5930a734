//! A minimal reference `LanguageModel` backend talking to an
//! Ollama-compatible chat endpoint. Provided for tests and examples only;
//! production provider clients are out of scope for this crate.

#![cfg(feature = "http-backend")]

use async_trait::async_trait;
use research_core::{Error, GenerateRequest, GenerateResponse, LanguageModel, Result, Role};
use serde::{Deserialize, Serialize};

pub struct HttpJsonBackend {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl HttpJsonBackend {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

#[async_trait]
impl LanguageModel for HttpJsonBackend {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let messages = request
            .messages
            .iter()
            .map(|m| ChatMessage {
                role: match m.role {
                    Role::System => "system",
                    Role::User => "user",
                    Role::Assistant => "assistant",
                }
                .to_string(),
                content: m.content.clone(),
            })
            .collect();

        let body = ChatRequest { model: self.model.clone(), messages, stream: false };

        let response = self
            .client
            .post(format!("{}/api/chat", self.endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Llm(e.to_string()))?;

        let parsed: ChatResponse = response.json().await.map_err(|e| Error::Llm(e.to_string()))?;
        Ok(GenerateResponse::text(parsed.message.content))
    }

    async fn is_available(&self) -> bool {
        self.client
            .get(format!("{}/api/tags", self.endpoint))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

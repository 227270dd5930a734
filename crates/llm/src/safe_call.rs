//! Safe LLM Call: invoke an LLM with a timeout, extract/repair/validate its
//! JSON, and retry with exponential backoff up to a bounded number of
//! attempts before failing terminally.

use crate::error::LlmError;
use crate::json_repair;
use crate::schema::{self, AgentSchema};
use research_core::{GenerateRequest, LanguageModel};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Bookkeeping about a completed call, independent of its typed result.
/// Carried into the iteration log and analytics events.
#[derive(Debug, Clone)]
pub struct CallMeta {
    pub duration_ms: u64,
    pub retry_count: u32,
    pub prompt: String,
    pub raw_response: String,
}

/// Invoke `llm` with `request`, retrying up to `max_retries` additional
/// times on timeout, transport error, or schema validation failure. Backoff
/// between attempts is `2^attempt` seconds.
pub async fn safe_call<T>(
    llm: &Arc<dyn LanguageModel>,
    request: GenerateRequest,
    max_retries: u32,
) -> Result<(T, CallMeta), LlmError>
where
    T: DeserializeOwned + AgentSchema,
{
    let schema = T::json_schema();
    let prompt = request
        .messages
        .iter()
        .map(|m| m.content.clone())
        .collect::<Vec<_>>()
        .join("\n");
    let started = Instant::now();
    let mut last_err: Option<LlmError> = None;
    let mut last_raw = String::new();

    for attempt in 0..=max_retries {
        if attempt > 0 {
            let backoff = Duration::from_secs(2u64.saturating_pow(attempt));
            tracing::warn!(attempt, ?backoff, "safe_llm_call retrying after failure");
            tokio::time::sleep(backoff).await;
        }

        let call = tokio::time::timeout(request.timeout, llm.generate(request.clone())).await;

        let response = match call {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                last_err = Some(LlmError::Transport(e.to_string()));
                continue;
            }
            Err(_) => {
                last_err = Some(LlmError::Timeout(request.timeout));
                continue;
            }
        };

        last_raw = response.text.clone();

        let Some(value) = json_repair::repair(&response.text) else {
            last_err = Some(LlmError::ValidationExhausted {
                attempts: attempt + 1,
                reason: "response was not recoverable JSON".to_string(),
            });
            continue;
        };

        if let Err(reason) = schema::validate(&schema, &value) {
            last_err = Some(LlmError::ValidationExhausted { attempts: attempt + 1, reason });
            continue;
        }

        match serde_json::from_value::<T>(value) {
            Ok(typed) => {
                let meta = CallMeta {
                    duration_ms: started.elapsed().as_millis() as u64,
                    retry_count: attempt,
                    prompt,
                    raw_response: last_raw,
                };
                metrics::counter!("research_llm_calls_total", "result" => "success").increment(1);
                return Ok((typed, meta));
            }
            Err(e) => {
                last_err = Some(LlmError::ValidationExhausted {
                    attempts: attempt + 1,
                    reason: e.to_string(),
                });
            }
        }
    }

    metrics::counter!("research_llm_calls_total", "result" => "failure").increment(1);
    Err(last_err.unwrap_or(LlmError::Transport("no attempts made".to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use research_core::{GenerateResponse, QualityLevel, Result as CoreResult};
    use serde::{Deserialize, Serialize};
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Dummy {
        status: String,
    }

    impl AgentSchema for Dummy {
        fn json_schema() -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "required": ["status"],
                "properties": { "status": { "type": "string" } }
            })
        }
    }

    struct FlakyLlm {
        responses: Vec<&'static str>,
        calls: AtomicU32,
    }

    #[async_trait]
    impl LanguageModel for FlakyLlm {
        async fn generate(&self, _request: GenerateRequest) -> CoreResult<GenerateResponse> {
            let i = self.calls.fetch_add(1, Ordering::SeqCst) as usize;
            Ok(GenerateResponse::text(self.responses[i.min(self.responses.len() - 1)]))
        }

        async fn is_available(&self) -> bool {
            true
        }

        fn model_name(&self) -> &str {
            "flaky"
        }
    }

    #[tokio::test]
    async fn succeeds_on_first_valid_response() {
        let llm: Arc<dyn LanguageModel> = Arc::new(FlakyLlm {
            responses: vec![r#"{"status": "ok"}"#],
            calls: AtomicU32::new(0),
        });
        let request = GenerateRequest::new("sys", QualityLevel::Low, Duration::from_secs(1));
        let (value, meta) = safe_call::<Dummy>(&llm, request, 2).await.unwrap();
        assert_eq!(value.status, "ok");
        assert_eq!(meta.retry_count, 0);
    }

    #[tokio::test]
    async fn retries_then_succeeds() {
        let llm: Arc<dyn LanguageModel> = Arc::new(FlakyLlm {
            responses: vec!["not json", r#"{"status": "ok"}"#],
            calls: AtomicU32::new(0),
        });
        let request = GenerateRequest::new("sys", QualityLevel::Low, Duration::from_secs(1));
        let (value, meta) = safe_call::<Dummy>(&llm, request, 2).await.unwrap();
        assert_eq!(value.status, "ok");
        assert_eq!(meta.retry_count, 1);
    }

    #[tokio::test]
    async fn fails_terminally_after_exhausting_retries() {
        let llm: Arc<dyn LanguageModel> = Arc::new(FlakyLlm {
            responses: vec!["still not json"],
            calls: AtomicU32::new(0),
        });
        let request = GenerateRequest::new("sys", QualityLevel::Low, Duration::from_secs(1));
        let result = safe_call::<Dummy>(&llm, request, 1).await;
        assert!(result.is_err());
    }
}

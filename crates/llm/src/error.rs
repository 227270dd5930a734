//! LLM call failures, before they collapse into `research_core::Error`.

use thiserror::Error;

/// The three terminal outcomes Safe LLM Call can produce after retries are
/// exhausted.
#[derive(Error, Debug, Clone)]
pub enum LlmError {
    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("validation exhausted after {attempts} attempts: {reason}")]
    ValidationExhausted { attempts: u32, reason: String },
}

impl From<LlmError> for research_core::Error {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout(d) => research_core::Error::Timeout(format!("llm call: {d:?}")),
            LlmError::Transport(msg) => research_core::Error::Llm(msg),
            LlmError::ValidationExhausted { reason, .. } => {
                research_core::Error::ValidationExhausted(reason)
            }
        }
    }
}

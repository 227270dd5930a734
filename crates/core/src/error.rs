//! Error taxonomy for the reasoning core.
//!
//! The core recovers locally whenever possible; only session-terminal
//! failures are surfaced here. Every variant carries an English code
//! suitable for logs and a short Chinese explanation suitable for
//! surfacing to an end user.

use thiserror::Error;

/// Workspace-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Session-terminal or locally-recovered error.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// LLM response failed schema/semantic validation after all retries.
    #[error("validation exhausted: {0}")]
    ValidationExhausted(String),

    /// An agent or adapter call exceeded its configured timeout budget.
    #[error("timeout: {0}")]
    Timeout(String),

    /// The Source-Tier Filter produced an empty admitted set, even after
    /// the strict→discovery fallback.
    #[error("no valid sources after filtering")]
    NoValidSources,

    /// FormattedContext exceeds MAX_TOTAL_CHARS even at MIN_SNIPPET_LENGTH.
    /// Recovered automatically by dropping lowest-ranked sources until the
    /// budget holds; this variant exists for tracing/logging of the
    /// recovered event, not for propagation.
    #[error("context overflow: projected {projected} chars > budget {budget}")]
    ContextOverflow { projected: usize, budget: usize },

    /// Writer introduced citation indices outside the Analyst's citations_used.
    /// Recovered automatically by the Hallucination Guard; this variant
    /// exists for tracing/logging of the recovered event, not for propagation.
    #[error("hallucination violation: writer cited {0:?} outside analyst citations")]
    HallucinationViolation(Vec<i64>),

    /// A gap adapter failed; always non-fatal, logged and skipped.
    #[error("gap adapter failure ({adapter}): {message}")]
    GapAdapterFailure { adapter: String, message: String },

    /// Cooperative cancellation was requested mid-session.
    #[error("cancelled")]
    CancelRequested,

    /// LLM transport/provider failure not covered by the other variants.
    #[error("llm error: {0}")]
    Llm(String),

    /// Configuration could not be loaded or failed validation.
    #[error("config error: {0}")]
    Config(String),

    /// Gap resolution / retrieval adapter error outside the above taxonomy.
    #[error("retrieval error: {0}")]
    Retrieval(String),

    /// Progress sink or analytics sink failure. Always best-effort; this
    /// variant is logged, never returned to a caller.
    #[error("sink error: {0}")]
    Sink(String),

    /// Iteration trace or session-summary write failed.
    #[error("trace io error: {0}")]
    TraceIo(String),

    /// Catch-all for serialization failures (trace records, cache entries).
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// English error code suitable for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::ValidationExhausted(_) => "VALIDATION_EXHAUSTED",
            Error::Timeout(_) => "TIMEOUT",
            Error::NoValidSources => "NO_VALID_SOURCES",
            Error::ContextOverflow { .. } => "CONTEXT_OVERFLOW",
            Error::HallucinationViolation(_) => "HALLUCINATION_VIOLATION",
            Error::GapAdapterFailure { .. } => "GAP_ADAPTER_FAILURE",
            Error::CancelRequested => "CANCEL_REQUESTED",
            Error::Llm(_) => "LLM_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
            Error::Retrieval(_) => "RETRIEVAL_ERROR",
            Error::Sink(_) => "SINK_ERROR",
            Error::TraceIo(_) => "TRACE_IO_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Short Chinese explanation suitable for a user-facing message.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::ValidationExhausted(_) => "模型回應格式不正確，已重試多次仍失敗",
            Error::Timeout(_) => "處理逾時，請稍後再試",
            Error::NoValidSources => "找不到符合條件的資料來源",
            Error::ContextOverflow { .. } => "資料內容過長，已自動截斷",
            Error::HallucinationViolation(_) => "報告引用了未經查證的來源，已自動修正",
            Error::GapAdapterFailure { .. } => "補充搜尋失敗，已略過",
            Error::CancelRequested => "研究已取消",
            Error::Llm(_) => "語言模型服務發生錯誤",
            Error::Config(_) => "設定載入失敗",
            Error::Retrieval(_) => "檢索服務發生錯誤",
            Error::Sink(_) => "進度回報失敗",
            Error::TraceIo(_) => "追蹤紀錄寫入失敗",
            Error::Serialization(_) => "資料序列化失敗",
        }
    }

    /// Whether this error class is, by policy, safe to retry at the call site.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Timeout(_) | Error::Llm(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(Error::NoValidSources.error_code(), "NO_VALID_SOURCES");
        assert_eq!(Error::CancelRequested.error_code(), "CANCEL_REQUESTED");
    }

    #[test]
    fn timeout_and_llm_are_retryable() {
        assert!(Error::Timeout("x".into()).is_retryable());
        assert!(Error::Llm("x".into()).is_retryable());
        assert!(!Error::NoValidSources.is_retryable());
    }
}

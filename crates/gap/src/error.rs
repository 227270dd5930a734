//! Gap adapter error taxonomy. Adapter failures are always non-fatal to the
//! caller: the registry logs and substitutes an empty result set.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum GapError {
    #[error("adapter {adapter} timed out after {timeout_secs}s")]
    Timeout { adapter: String, timeout_secs: u64 },

    #[error("adapter {adapter} failed: {message}")]
    AdapterFailure { adapter: String, message: String },

    #[error("adapter {adapter} is disabled")]
    Disabled { adapter: String },
}

impl From<GapError> for research_core::Error {
    fn from(err: GapError) -> Self {
        match err {
            GapError::Timeout { adapter, .. } => research_core::Error::GapAdapterFailure {
                adapter,
                message: "timed out".to_string(),
            },
            GapError::AdapterFailure { adapter, message } => {
                research_core::Error::GapAdapterFailure { adapter, message }
            }
            GapError::Disabled { adapter } => research_core::Error::GapAdapterFailure {
                adapter,
                message: "adapter disabled".to_string(),
            },
        }
    }
}

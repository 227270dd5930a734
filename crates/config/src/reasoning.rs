//! `reasoning.*` configuration keys: iteration bound, per-agent timeouts,
//! context timezone.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasoningConfig {
    pub max_iterations: u32,
    pub analyst_timeout_secs: u64,
    pub critic_timeout_secs: u64,
    pub writer_timeout_secs: u64,
    /// IANA timezone name (e.g. `Asia/Taipei`) for the context time header.
    pub timezone: String,
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            max_iterations: 3,
            analyst_timeout_secs: 60,
            critic_timeout_secs: 30,
            writer_timeout_secs: 45,
            timezone: "Asia/Taipei".to_string(),
        }
    }
}

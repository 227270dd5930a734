//! `context.*` configuration keys: the FormattedContext character budget
//! and per-item snippet bounds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    pub max_total_chars: usize,
    pub max_snippet_length: usize,
    pub min_snippet_length: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_total_chars: 20_000,
            max_snippet_length: 500,
            min_snippet_length: 80,
        }
    }
}

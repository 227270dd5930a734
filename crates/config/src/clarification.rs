//! `clarification.*` configuration: ambiguity-trigger patterns.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClarificationConfig {
    /// Substrings (or simple patterns) that mark a query as ambiguous in
    /// scope, entity, or time — triggers the Clarification Agent before
    /// research begins.
    pub patterns: Vec<String>,
}

impl Default for ClarificationConfig {
    fn default() -> Self {
        Self {
            patterns: vec!["最近".to_string(), "他".to_string(), "那個".to_string()],
        }
    }
}

//! The rendered text block handed to agents: a time header plus
//! citation-numbered source snippets, within a hard character budget.

use serde::{Deserialize, Serialize};

/// A fully rendered context block. Opaque to the agents beyond its text;
/// built deterministically by `research-context::ContextBuilder`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedContext {
    pub text: String,
    /// Citation indices represented in this render, in render order.
    pub indices: Vec<i64>,
    pub char_len: usize,
}

impl FormattedContext {
    pub fn new(text: String, indices: Vec<i64>) -> Self {
        let char_len = text.chars().count();
        Self { text, indices, char_len }
    }
}

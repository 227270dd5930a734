//! Analyst agent output: a cited draft, or a request to search for more
//! evidence.

use crate::gap::GapResolution;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalystStatus {
    DraftReady,
    SearchRequired,
}

/// Which inference style the draft's reasoning chain follows. Surfaced in
/// the draft prose, not enforced structurally beyond being present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningStyle {
    Deductive,
    Inductive,
    Abductive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalystOutput {
    pub status: AnalystStatus,
    pub draft: String,
    pub reasoning_chain: String,
    pub reasoning_style: ReasoningStyle,
    /// Positive indices into the current `SourceMap`.
    pub citations_used: Vec<i64>,
    pub missing_information: Vec<String>,
    /// Only meaningful when `status == SearchRequired`; bounded by
    /// `MAX_NEW_QUERIES` at the validation layer, not here.
    pub new_queries: Vec<String>,
    #[serde(default)]
    pub gap_resolutions: Vec<GapResolution>,
}

impl AnalystOutput {
    pub fn is_draft_ready(&self) -> bool {
        self.status == AnalystStatus::DraftReady
    }

    pub fn is_search_required(&self) -> bool {
        self.status == AnalystStatus::SearchRequired
    }
}

//! The core's output item.

use crate::mode::Mode;
use crate::source::Tier;
use crate::writer::ConfidenceLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSource {
    pub index: i64,
    /// A URL for public sources, or a `urn:` identifier for private
    /// documents and synthesized tier-6 pseudo-sources.
    pub url_or_urn: String,
    pub publisher: String,
    pub tier: Tier,
}

fn research_report_kind() -> String {
    "ResearchReport".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchReport {
    #[serde(default = "research_report_kind")]
    pub kind: String,
    pub title: String,
    pub body_markdown: String,
    pub sources: Vec<ReportSource>,
    pub mode: Mode,
    pub iterations_used: u32,
    pub confidence: ConfidenceLevel,
    pub methodology_note: String,
    pub warnings: Vec<String>,
}

impl ResearchReport {
    pub fn new(
        title: impl Into<String>,
        body_markdown: impl Into<String>,
        sources: Vec<ReportSource>,
        mode: Mode,
        iterations_used: u32,
        confidence: ConfidenceLevel,
        methodology_note: impl Into<String>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            kind: research_report_kind(),
            title: title.into(),
            body_markdown: body_markdown.into(),
            sources,
            mode,
            iterations_used,
            confidence,
            methodology_note: methodology_note.into(),
            warnings,
        }
    }
}

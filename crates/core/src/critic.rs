//! Critic agent output: an audit verdict plus the issues that drove it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CriticVerdict {
    Pass,
    Warn,
    Reject,
}

impl CriticVerdict {
    /// Whether the orchestrator should proceed to Writer without another
    /// Analyst revision.
    pub fn accepts(&self) -> bool {
        matches!(self, CriticVerdict::Pass | CriticVerdict::Warn)
    }
}

/// Whether the draft complied with its mode's source-tier rules. Kept as a
/// two-valued enum with its original Chinese labels so prompt/response
/// round-tripping does not need translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeCompliance {
    #[serde(rename = "符合")]
    Compliant,
    #[serde(rename = "違反")]
    Violation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticOutput {
    pub status: CriticVerdict,
    pub critique: String,
    pub suggestions: Vec<String>,
    pub mode_compliance: ModeCompliance,
    pub logical_gaps: Vec<String>,
    pub source_issues: Vec<String>,
}

//! Writer agent output: the final report body, constrained to the
//! Analyst's citation set.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Clamp to at most `other`; used when Critic status or the
    /// Hallucination Guard forces a lower ceiling.
    pub fn at_most(self, other: ConfidenceLevel) -> ConfidenceLevel {
        use ConfidenceLevel::*;
        let rank = |c: ConfidenceLevel| match c {
            High => 2,
            Medium => 1,
            Low => 0,
        };
        if rank(self) <= rank(other) {
            self
        } else {
            other
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriterOutput {
    pub final_report: String,
    /// Invariant (enforced by the Hallucination Guard at the orchestrator
    /// level, not here): must be a subset of the Analyst's `citations_used`.
    pub sources_used: Vec<i64>,
    pub confidence_level: ConfidenceLevel,
    pub methodology_note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_clamps_down_only() {
        assert_eq!(ConfidenceLevel::High.at_most(ConfidenceLevel::Medium), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::Low.at_most(ConfidenceLevel::High), ConfidenceLevel::Low);
    }
}

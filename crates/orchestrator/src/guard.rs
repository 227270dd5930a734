//! Hallucination Guard: the Writer's `sources_used` must be a subset of the
//! Analyst's `citations_used`. Runs between Writer and report emission,
//! always, and is idempotent — running it twice on an already-clean output
//! is a no-op.

use research_core::{ConfidenceLevel, SourceMap, WriterOutput};
use std::collections::HashSet;

/// Returns `true` if a violation was found and corrected in place.
pub fn enforce(output: &mut WriterOutput, analyst_citations: &[i64]) -> bool {
    let allowed: HashSet<i64> = analyst_citations.iter().copied().collect();
    let extra: Vec<i64> = output.sources_used.iter().copied().filter(|i| !allowed.contains(i)).collect();

    if extra.is_empty() {
        return false;
    }

    output.sources_used.retain(|i| allowed.contains(i));
    output.confidence_level = output.confidence_level.at_most(ConfidenceLevel::Low);
    true
}

/// Orchestrator-level subset check: the Analyst's `citations_used` must only
/// reference indices present in the current `SourceMap` (schema validation
/// only guarantees positive integers, not that the index was ever admitted).
/// Drops anything outside the map in place. Returns `true` if anything was
/// dropped.
pub fn clamp_citations_to_source_map(citations_used: &mut Vec<i64>, source_map: &SourceMap) -> bool {
    let before = citations_used.len();
    citations_used.retain(|i| source_map.contains(*i));
    citations_used.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use research_core::ConfidenceLevel;

    fn output(sources_used: Vec<i64>, confidence: ConfidenceLevel) -> WriterOutput {
        WriterOutput {
            final_report: "report".to_string(),
            sources_used,
            confidence_level: confidence,
            methodology_note: "note".to_string(),
        }
    }

    #[test]
    fn strips_citations_outside_analyst_set_and_forces_low_confidence() {
        let mut out = output(vec![1, 2, 99], ConfidenceLevel::High);
        let violated = enforce(&mut out, &[1, 2, 3]);
        assert!(violated);
        assert_eq!(out.sources_used, vec![1, 2]);
        assert_eq!(out.confidence_level, ConfidenceLevel::Low);
    }

    #[test]
    fn clean_output_is_left_untouched() {
        let mut out = output(vec![1, 2], ConfidenceLevel::High);
        let violated = enforce(&mut out, &[1, 2, 3]);
        assert!(!violated);
        assert_eq!(out.sources_used, vec![1, 2]);
        assert_eq!(out.confidence_level, ConfidenceLevel::High);
    }

    #[test]
    fn running_twice_is_idempotent() {
        let mut out = output(vec![1, 99], ConfidenceLevel::High);
        enforce(&mut out, &[1]);
        let violated_again = enforce(&mut out, &[1]);
        assert!(!violated_again);
        assert_eq!(out.sources_used, vec![1]);
    }

    fn sample_source_map() -> SourceMap {
        use research_core::{CandidateSource, OriginType, SourceCategory, Tier, TieredSource};
        let mut map = SourceMap::new();
        map.extend(vec![TieredSource::new(
            CandidateSource::new("1", "t", "b", "pub", OriginType::PublicNews),
            Tier::new(1),
            SourceCategory::News,
        )]);
        map
    }

    #[test]
    fn drops_citation_indices_absent_from_the_source_map() {
        let map = sample_source_map();
        let mut citations = vec![1, 99];
        let dropped = clamp_citations_to_source_map(&mut citations, &map);
        assert!(dropped);
        assert_eq!(citations, vec![1]);
    }

    #[test]
    fn leaves_citations_untouched_when_all_present() {
        let map = sample_source_map();
        let mut citations = vec![1];
        let dropped = clamp_citations_to_source_map(&mut citations, &map);
        assert!(!dropped);
        assert_eq!(citations, vec![1]);
    }
}

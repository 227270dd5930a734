//! Classifies candidate sources into tiers and applies mode-specific
//! admission rules, with an automatic strict→discovery fallback on an
//! empty admitted set.

use research_config::{ModeConfig, SourceTierTable};
use research_core::{CandidateSource, Error, Mode, Result, SourceCategory, Tier, TieredSource};

/// Result of running the filter once for a given mode.
pub struct FilterOutcome {
    pub admitted: Vec<TieredSource>,
    /// Set when the caller's requested mode differed from the mode that
    /// actually admitted these sources (the strict→discovery fallback).
    pub fell_back_to_discovery: bool,
}

fn classify(
    source: &CandidateSource,
    table: &SourceTierTable,
    mode: Mode,
) -> Option<(Tier, SourceCategory)> {
    if let Some((tier, category)) = table.lookup(&source.publisher) {
        return Some((tier, category));
    }
    if mode == Mode::Strict {
        None
    } else {
        Some((Tier::new(5), SourceCategory::Digital))
    }
}

fn admit_for_mode(
    candidates: &[CandidateSource],
    table: &SourceTierTable,
    mode_config: &ModeConfig,
    mode: Mode,
) -> Vec<TieredSource> {
    let mut admitted = Vec::new();
    for source in candidates {
        let Some((tier, category)) = classify(source, table, mode) else {
            continue;
        };

        let within_mode = match mode {
            Mode::Strict => tier.value() <= mode_config.strict_max_tier,
            Mode::Discovery | Mode::Monitor => tier.value() <= mode_config.discovery_max_tier,
        };
        if !within_mode {
            continue;
        }

        let mut tiered = TieredSource::new(source.clone(), tier, category);
        if mode == Mode::Discovery && tier.value() >= 3 {
            tiered = tiered.with_discovery_warning();
        }
        admitted.push(tiered);
    }
    admitted
}

/// Run the Source-Tier Filter for `mode`. Falls back to `discovery` once if
/// the requested mode's admission rules empty the set; fails with
/// `NoValidSources` if the fallback also empties it.
pub fn filter(
    candidates: &[CandidateSource],
    mode: Mode,
    table: &SourceTierTable,
    mode_config: &ModeConfig,
) -> Result<FilterOutcome> {
    let admitted = admit_for_mode(candidates, table, mode_config, mode);
    if !admitted.is_empty() {
        return Ok(FilterOutcome { admitted, fell_back_to_discovery: false });
    }

    if mode != Mode::Strict {
        return Err(Error::NoValidSources);
    }

    tracing::warn!("strict filtering emptied the source set, falling back to discovery");
    let fallback_admitted: Vec<TieredSource> =
        admit_for_mode(candidates, table, mode_config, Mode::Discovery)
            .into_iter()
            .map(|t| t.with_fallback_warning())
            .collect();

    if fallback_admitted.is_empty() {
        return Err(Error::NoValidSources);
    }

    Ok(FilterOutcome { admitted: fallback_admitted, fell_back_to_discovery: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use research_core::OriginType;

    fn candidate(publisher: &str) -> CandidateSource {
        CandidateSource::new("1", "title", "body", publisher, OriginType::PublicNews)
    }

    fn table() -> SourceTierTable {
        let mut t = SourceTierTable::default();
        t.insert("Reuters", 1, SourceCategory::News);
        t.insert("Some Blog", 4, SourceCategory::Digital);
        t
    }

    #[test]
    fn strict_admits_only_tier_1_2_and_drops_unknown() {
        let candidates = vec![candidate("Reuters"), candidate("Some Blog"), candidate("Unknown")];
        let outcome = filter(&candidates, Mode::Strict, &table(), &ModeConfig::default()).unwrap();
        assert_eq!(outcome.admitted.len(), 1);
        assert!(!outcome.fell_back_to_discovery);
    }

    #[test]
    fn strict_falls_back_to_discovery_when_empty() {
        let candidates = vec![candidate("Some Blog")];
        let outcome = filter(&candidates, Mode::Strict, &table(), &ModeConfig::default()).unwrap();
        assert_eq!(outcome.admitted.len(), 1);
        assert!(outcome.fell_back_to_discovery);
        assert!(outcome.admitted[0].fallback_warning);
    }

    #[test]
    fn empty_candidates_in_strict_mode_errors() {
        let result = filter(&[], Mode::Strict, &table(), &ModeConfig::default());
        assert!(matches!(result, Err(Error::NoValidSources)));
    }

    #[test]
    fn discovery_tags_tier_3_and_above_with_warning() {
        let candidates = vec![candidate("Some Blog")];
        let outcome = filter(&candidates, Mode::Discovery, &table(), &ModeConfig::default()).unwrap();
        assert!(outcome.admitted[0].discovery_warning);
    }
}

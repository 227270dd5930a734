//! `source_tiers` configuration: the publisher → (tier, category) table the
//! Source-Tier Filter classifies candidates against.

use research_core::{SourceCategory, Tier};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceTierEntry {
    pub tier: u8,
    pub category: SourceCategory,
}

/// Publisher name (case-sensitive, as it appears in `CandidateSource::publisher`)
/// to tier/category. Unknown publishers default to tier 5 unless the mode is
/// `strict`, in which case they are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceTierTable(HashMap<String, SourceTierEntry>);

impl SourceTierTable {
    pub fn lookup(&self, publisher: &str) -> Option<(Tier, SourceCategory)> {
        self.0.get(publisher).map(|e| (Tier::new(e.tier), e.category))
    }

    pub fn insert(&mut self, publisher: impl Into<String>, tier: u8, category: SourceCategory) {
        self.0.insert(publisher.into(), SourceTierEntry { tier, category });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_configured_tier() {
        let mut table = SourceTierTable::default();
        table.insert("Reuters", 1, SourceCategory::News);
        let (tier, cat) = table.lookup("Reuters").unwrap();
        assert_eq!(tier.value(), 1);
        assert_eq!(cat, SourceCategory::News);
        assert!(table.lookup("Unknown Blog").is_none());
    }
}

//! Per-session bijection between citation index and admitted source.

use crate::source::TieredSource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maps citation index `i ∈ [1..N]` to the `TieredSource` it refers to.
/// Indices are stable within a session; gap resolution only appends,
/// never renumbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMap {
    entries: BTreeMap<i64, TieredSource>,
    next_index: i64,
}

impl Default for SourceMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceMap {
    pub fn new() -> Self {
        Self { entries: BTreeMap::new(), next_index: 1 }
    }

    /// Assign indices to a batch of sources in input order, starting from
    /// the next free index. Returns the assigned indices.
    pub fn extend(&mut self, sources: impl IntoIterator<Item = TieredSource>) -> Vec<i64> {
        let mut assigned = Vec::new();
        for source in sources {
            let idx = self.next_index;
            self.entries.insert(idx, source);
            assigned.push(idx);
            self.next_index += 1;
        }
        assigned
    }

    pub fn get(&self, index: i64) -> Option<&TieredSource> {
        self.entries.get(&index)
    }

    pub fn contains(&self, index: i64) -> bool {
        self.entries.contains_key(&index)
    }

    /// True iff every index in `indices` is present in the map.
    pub fn contains_all(&self, indices: &[i64]) -> bool {
        indices.iter().all(|i| self.contains(*i))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(index, source)` pairs in index order — the order the
    /// Context Builder renders them in.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &TieredSource)> {
        self.entries.iter().map(|(i, s)| (*i, s))
    }

    pub fn max_index(&self) -> i64 {
        self.next_index - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{CandidateSource, OriginType, SourceCategory, Tier};

    fn tiered(id: &str) -> TieredSource {
        let cs = CandidateSource::new(id, "t", "b", "pub", OriginType::PublicNews);
        TieredSource::new(cs, Tier::new(1), SourceCategory::News)
    }

    #[test]
    fn extend_assigns_sequential_indices_and_never_renumbers() {
        let mut map = SourceMap::new();
        let first = map.extend(vec![tiered("a"), tiered("b")]);
        assert_eq!(first, vec![1, 2]);
        let second = map.extend(vec![tiered("c")]);
        assert_eq!(second, vec![3]);
        assert!(map.contains(1));
        assert!(map.contains(2));
        assert!(map.contains(3));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn contains_all_rejects_unknown_index() {
        let mut map = SourceMap::new();
        map.extend(vec![tiered("a")]);
        assert!(map.contains_all(&[1]));
        assert!(!map.contains_all(&[1, 2]));
    }
}

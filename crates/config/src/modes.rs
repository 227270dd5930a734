//! `mode_configs.*` admission policy, plus the mode-keyword heuristic used
//! when the caller does not pass an explicit mode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeConfig {
    pub strict_max_tier: u8,
    pub discovery_max_tier: u8,
    pub monitor_compare_tiers: (u8, u8),
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            strict_max_tier: 2,
            discovery_max_tier: 5,
            monitor_compare_tiers: (1, 5),
        }
    }
}

/// Keyword lists driving mode detection when the caller leaves `mode`
/// unset. Kept as configuration rather than hardcoded logic so the
/// heuristic can be retuned without a code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeKeywords {
    pub strict_keywords: Vec<String>,
    pub monitor_keywords: Vec<String>,
}

impl Default for ModeKeywords {
    fn default() -> Self {
        Self {
            strict_keywords: vec![
                "verify".to_string(),
                "官方".to_string(),
                "查證".to_string(),
                "confirm".to_string(),
            ],
            monitor_keywords: vec![
                "追蹤".to_string(),
                "監控".to_string(),
                "track".to_string(),
                "monitor".to_string(),
            ],
        }
    }
}

impl ModeKeywords {
    /// Returns the first matching mode by keyword, or `None` if the query
    /// matches neither list. Caller-supplied mode takes precedence over
    /// this; this is only the fallback tier before the `discovery` default.
    pub fn detect(&self, query: &str) -> Option<research_core::Mode> {
        let lower = query.to_lowercase();
        if self.strict_keywords.iter().any(|k| lower.contains(&k.to_lowercase())) {
            return Some(research_core::Mode::Strict);
        }
        if self.monitor_keywords.iter().any(|k| lower.contains(&k.to_lowercase())) {
            return Some(research_core::Mode::Monitor);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_matches_strict_keyword() {
        let kw = ModeKeywords::default();
        assert_eq!(kw.detect("請verify這則新聞"), Some(research_core::Mode::Strict));
    }

    #[test]
    fn detect_returns_none_without_match() {
        let kw = ModeKeywords::default();
        assert_eq!(kw.detect("台積電高雄廠進度"), None);
    }
}

//! Candidate and tiered source types: raw retrieval input and the
//! classified, tier-prefixed form the Source-Tier Filter produces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where a candidate source originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginType {
    PublicNews,
    PrivateDocument,
}

/// An input item from upstream retrieval. Read-only to the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSource {
    pub id: String,
    pub url: Option<String>,
    pub title: String,
    pub body_text: String,
    pub publisher: String,
    pub published_at: Option<DateTime<Utc>>,
    pub origin_type: OriginType,
    #[serde(default)]
    pub retrieval_score: Option<f32>,
}

impl CandidateSource {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body_text: impl Into<String>,
        publisher: impl Into<String>,
        origin_type: OriginType,
    ) -> Self {
        Self {
            id: id.into(),
            url: None,
            title: title.into(),
            body_text: body_text.into(),
            publisher: publisher.into(),
            published_at: None,
            origin_type,
            retrieval_score: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_published_at(mut self, ts: DateTime<Utc>) -> Self {
        self.published_at = Some(ts);
        self
    }
}

/// Coarse credibility rank. 1 = official, ..., 5 = social, 6 = enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tier(u8);

impl Tier {
    /// Construct a tier, clamping to the valid {1..=6} range so a malformed
    /// config entry degrades to the least-trusted in-range tier instead of
    /// panicking.
    pub fn new(value: u8) -> Self {
        Tier(value.clamp(1, 6))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_enrichment(self) -> bool {
        self.0 == 6
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Broad category a source falls into, carried alongside its numeric tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    Official,
    Government,
    News,
    Digital,
    Social,
    Encyclopedia,
    WebReference,
    LlmKnowledge,
}

impl std::fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SourceCategory::Official => "official",
            SourceCategory::Government => "government",
            SourceCategory::News => "news",
            SourceCategory::Digital => "digital",
            SourceCategory::Social => "social",
            SourceCategory::Encyclopedia => "encyclopedia",
            SourceCategory::WebReference => "web_reference",
            SourceCategory::LlmKnowledge => "llm_knowledge",
        };
        write!(f, "{}", s)
    }
}

/// A CandidateSource enriched with tier, category, and a tier-prefixed body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TieredSource {
    pub source: CandidateSource,
    pub tier: Tier,
    pub category: SourceCategory,
    /// `body_text` prefixed with `[Tier T | category]`.
    pub tier_prefixed_body: String,
    /// Set when admission required a strict→discovery fallback.
    #[serde(default)]
    pub fallback_warning: bool,
    /// Set in discovery mode for tier >= 3 items, carried into the prefix.
    #[serde(default)]
    pub discovery_warning: bool,
    /// Arbitrary extra metadata (e.g. gap resolution channel for tier 6).
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl TieredSource {
    pub fn new(source: CandidateSource, tier: Tier, category: SourceCategory) -> Self {
        let mut prefixed = format!("[Tier {} | {}] ", tier, category);
        prefixed.push_str(&source.body_text);
        Self {
            source,
            tier,
            category,
            tier_prefixed_body: prefixed,
            fallback_warning: false,
            discovery_warning: false,
            metadata: HashMap::new(),
        }
    }

    pub fn with_fallback_warning(mut self) -> Self {
        self.fallback_warning = true;
        self
    }

    pub fn with_discovery_warning(mut self) -> Self {
        self.discovery_warning = true;
        if !self.tier_prefixed_body.contains("⚠") {
            self.tier_prefixed_body = format!(
                "[Tier {} | {} ⚠] {}",
                self.tier, self.category, self.source.body_text
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_clamps_out_of_range() {
        assert_eq!(Tier::new(0).value(), 1);
        assert_eq!(Tier::new(9).value(), 6);
        assert_eq!(Tier::new(3).value(), 3);
    }

    #[test]
    fn tiered_source_prefixes_body() {
        let src = CandidateSource::new("1", "Title", "Body text", "Reuters", OriginType::PublicNews);
        let tiered = TieredSource::new(src, Tier::new(1), SourceCategory::News);
        assert!(tiered.tier_prefixed_body.starts_with("[Tier 1 | news]"));
        assert!(tiered.tier_prefixed_body.ends_with("Body text"));
    }

    #[test]
    fn discovery_warning_marks_prefix() {
        let src = CandidateSource::new("1", "Title", "Body", "Unknown Blog", OriginType::PublicNews);
        let tiered = TieredSource::new(src, Tier::new(4), SourceCategory::Digital).with_discovery_warning();
        assert!(tiered.tier_prefixed_body.contains('⚠'));
    }
}

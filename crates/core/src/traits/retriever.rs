//! Upstream hybrid retrieval abstraction (`Retrieve` in the external-interfaces
//! table), plus its reuse as the `INTERNAL_SEARCH` gap adapter.

use crate::source::CandidateSource;
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A retrieval backend. The reasoning core never implements this itself; it
/// is supplied by the primary retrieval subsystem (out of scope here) and,
/// for gap resolution, invoked again with a narrower query.
#[async_trait]
pub trait Retriever: Send + Sync + 'static {
    /// Retrieve candidate sources for a query.
    async fn retrieve(
        &self,
        query: &str,
        options: &RetrieveOptions,
    ) -> Result<Vec<CandidateSource>>;

    /// Retriever name for logging and trace records.
    fn name(&self) -> &str;
}

/// Retrieval options passed through to the upstream retriever.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrieveOptions {
    pub top_k: usize,
    #[serde(default)]
    pub site_filter: Vec<MetadataFilter>,
}

impl Default for RetrieveOptions {
    fn default() -> Self {
        Self { top_k: 5, site_filter: Vec::new() }
    }
}

impl RetrieveOptions {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_filter(mut self, filter: MetadataFilter) -> Self {
        self.site_filter.push(filter);
        self
    }
}

/// A metadata constraint on retrieval, e.g. restricting to a publisher or
/// document class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataFilter {
    pub field: String,
    pub op: FilterOp,
    pub value: serde_json::Value,
}

impl MetadataFilter {
    pub fn eq(field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self { field: field.into(), op: FilterOp::Equals, value: value.into() }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    Equals,
    NotEquals,
    Contains,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieve_options_builder() {
        let opts = RetrieveOptions::default()
            .with_top_k(10)
            .with_filter(MetadataFilter::eq("origin_type", "public_news"));
        assert_eq!(opts.top_k, 10);
        assert_eq!(opts.site_filter.len(), 1);
    }
}

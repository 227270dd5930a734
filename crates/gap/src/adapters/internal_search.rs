//! `INTERNAL_SEARCH`: re-invokes the upstream hybrid retriever with the
//! Analyst-supplied `search_query`, narrower than the original query.

use crate::adapter::GapAdapter;
use crate::error::GapError;
use async_trait::async_trait;
use research_core::{CandidateSource, GapResolution, ResolutionChannel, RetrieveOptions, Retriever};
use std::sync::Arc;

pub struct InternalSearchAdapter {
    retriever: Arc<dyn Retriever>,
    top_k: usize,
}

impl InternalSearchAdapter {
    pub fn new(retriever: Arc<dyn Retriever>, top_k: usize) -> Self {
        Self { retriever, top_k }
    }
}

#[async_trait]
impl GapAdapter for InternalSearchAdapter {
    fn name(&self) -> &str {
        "internal_search"
    }

    fn channel(&self) -> ResolutionChannel {
        ResolutionChannel::InternalSearch
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn search(&self, resolution: &GapResolution) -> Result<Vec<CandidateSource>, GapError> {
        let query = resolution.search_query.as_deref().unwrap_or(&resolution.gap_type);
        let options = RetrieveOptions::default().with_top_k(self.top_k);
        self.retriever
            .retrieve(query, &options)
            .await
            .map_err(|e| GapError::AdapterFailure { adapter: self.name().to_string(), message: e.to_string() })
    }
}

//! `WEB_SEARCH`: a minimal reference web search client. Real deployments
//! swap this for a provider-specific client behind the same `GapAdapter`
//! contract; this implementation hits a single configurable JSON endpoint.

use crate::adapter::GapAdapter;
use crate::error::GapError;
use async_trait::async_trait;
use research_config::WebSearchConfig;
use research_core::{CandidateSource, GapResolution, OriginType, ResolutionChannel};
use serde::Deserialize;

pub struct WebSearchAdapter {
    client: reqwest::Client,
    endpoint: String,
    config: WebSearchConfig,
}

impl WebSearchAdapter {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>, config: WebSearchConfig) -> Self {
        Self { client, endpoint: endpoint.into(), config }
    }
}

#[derive(Debug, Deserialize)]
struct WebSearchResponse {
    #[serde(default)]
    results: Vec<WebSearchResult>,
}

#[derive(Debug, Deserialize)]
struct WebSearchResult {
    url: String,
    title: String,
    snippet: String,
    #[serde(default)]
    publisher: Option<String>,
}

#[async_trait]
impl GapAdapter for WebSearchAdapter {
    fn name(&self) -> &str {
        "web_search"
    }

    fn channel(&self) -> ResolutionChannel {
        ResolutionChannel::WebSearch
    }

    fn is_available(&self) -> bool {
        self.config.enabled
    }

    async fn search(&self, resolution: &GapResolution) -> Result<Vec<CandidateSource>, GapError> {
        if !self.config.enabled {
            return Err(GapError::Disabled { adapter: self.name().to_string() });
        }
        let query = resolution.search_query.as_deref().unwrap_or(&resolution.gap_type);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("max_results", &self.config.max_results.to_string())])
            .send()
            .await
            .map_err(|e| GapError::AdapterFailure { adapter: self.name().to_string(), message: e.to_string() })?
            .json::<WebSearchResponse>()
            .await
            .map_err(|e| GapError::AdapterFailure { adapter: self.name().to_string(), message: e.to_string() })?;

        let max_len = self.config.max_snippet_length;
        let items = response
            .results
            .into_iter()
            .take(self.config.max_results)
            .map(|r| {
                let mut body = r.snippet;
                if body.chars().count() > max_len {
                    body = body.chars().take(max_len).collect();
                }
                CandidateSource::new(
                    r.url.clone(),
                    r.title,
                    body,
                    r.publisher.unwrap_or_else(|| "web".to_string()),
                    OriginType::PublicNews,
                )
                .with_url(r.url)
            })
            .collect();
        Ok(items)
    }
}

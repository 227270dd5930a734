//! `WIKIPEDIA`: encyclopedia lookups via the public MediaWiki REST summary
//! endpoint, scoped to a configurable language edition.

use crate::adapter::GapAdapter;
use crate::error::GapError;
use async_trait::async_trait;
use research_config::WikipediaConfig;
use research_core::{CandidateSource, GapResolution, OriginType, ResolutionChannel};
use serde::Deserialize;

pub struct WikipediaAdapter {
    client: reqwest::Client,
    config: WikipediaConfig,
}

impl WikipediaAdapter {
    pub fn new(client: reqwest::Client, config: WikipediaConfig) -> Self {
        Self { client, config }
    }

    fn summary_url(&self, title: &str) -> String {
        format!(
            "https://{}.wikipedia.org/api/rest_v1/page/summary/{}",
            self.config.language,
            urlencode(title)
        )
    }
}

fn urlencode(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_alphanumeric() { c.to_string() } else { format!("%{:02X}", c as u32) })
        .collect()
}

#[derive(Debug, Deserialize)]
struct WikiSummary {
    title: String,
    extract: String,
    #[serde(rename = "content_urls", default)]
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<DesktopUrl>,
}

#[derive(Debug, Deserialize)]
struct DesktopUrl {
    page: String,
}

#[async_trait]
impl GapAdapter for WikipediaAdapter {
    fn name(&self) -> &str {
        "wikipedia"
    }

    fn channel(&self) -> ResolutionChannel {
        ResolutionChannel::Wikipedia
    }

    fn is_available(&self) -> bool {
        self.config.enabled
    }

    async fn search(&self, resolution: &GapResolution) -> Result<Vec<CandidateSource>, GapError> {
        if !self.config.enabled {
            return Err(GapError::Disabled { adapter: self.name().to_string() });
        }
        let topic = resolution.search_query.as_deref().unwrap_or(&resolution.gap_type);

        let summary = self
            .client
            .get(self.summary_url(topic))
            .send()
            .await
            .map_err(|e| GapError::AdapterFailure { adapter: self.name().to_string(), message: e.to_string() })?
            .json::<WikiSummary>()
            .await
            .map_err(|e| GapError::AdapterFailure { adapter: self.name().to_string(), message: e.to_string() })?;

        let url = summary
            .content_urls
            .and_then(|c| c.desktop)
            .map(|d| d.page)
            .unwrap_or_else(|| format!("https://{}.wikipedia.org/wiki/{}", self.config.language, summary.title));

        let mut source = CandidateSource::new(
            format!("wikipedia:{}:{}", self.config.language, summary.title),
            summary.title,
            summary.extract,
            "Wikipedia",
            OriginType::PublicNews,
        )
        .with_url(url);
        source.retrieval_score = None;
        Ok(vec![source])
    }
}

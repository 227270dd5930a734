//! Structured-API gap adapters: stocks, weather, company registries. All six
//! channels share one shape (an `api_params` JSON object in, a single
//! normalized item out) and differ only in endpoint and channel, so one
//! generic adapter backs all of them. Each pair is gated behind its own
//! Cargo feature (`tier6-stock`, `tier6-weather`, `tier6-company`) since
//! they depend on third-party data providers beyond this crate's scope.

#![cfg(any(feature = "tier6-stock", feature = "tier6-weather", feature = "tier6-company"))]

use crate::adapter::GapAdapter;
use crate::error::GapError;
use async_trait::async_trait;
use research_config::StructuredApiConfig;
use research_core::{CandidateSource, GapResolution, OriginType, ResolutionChannel};
use serde_json::Value;

pub struct StructuredApiAdapter {
    name: &'static str,
    channel: ResolutionChannel,
    client: reqwest::Client,
    endpoint: String,
    config: StructuredApiConfig,
}

impl StructuredApiAdapter {
    pub fn new(
        name: &'static str,
        channel: ResolutionChannel,
        client: reqwest::Client,
        endpoint: impl Into<String>,
        config: StructuredApiConfig,
    ) -> Self {
        Self { name, channel, client, endpoint: endpoint.into(), config }
    }
}

#[async_trait]
impl GapAdapter for StructuredApiAdapter {
    fn name(&self) -> &str {
        self.name
    }

    fn channel(&self) -> ResolutionChannel {
        self.channel
    }

    fn is_available(&self) -> bool {
        self.config.enabled
    }

    async fn search(&self, resolution: &GapResolution) -> Result<Vec<CandidateSource>, GapError> {
        if !self.config.enabled {
            return Err(GapError::Disabled { adapter: self.name.to_string() });
        }
        let params = resolution.api_params.clone().unwrap_or(Value::Null);

        let response: Value = self
            .client
            .post(&self.endpoint)
            .json(&params)
            .send()
            .await
            .map_err(|e| GapError::AdapterFailure { adapter: self.name.to_string(), message: e.to_string() })?
            .json()
            .await
            .map_err(|e| GapError::AdapterFailure { adapter: self.name.to_string(), message: e.to_string() })?;

        let title = response
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(&resolution.gap_type)
            .to_string();
        let body = response
            .get("summary")
            .and_then(Value::as_str)
            .map(|s| s.to_string())
            .unwrap_or_else(|| response.to_string());
        let identifier = response
            .get("id")
            .and_then(Value::as_str)
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("{}:{}", self.name, title));

        Ok(vec![CandidateSource::new(identifier, title, body, self.name.to_string(), OriginType::PublicNews)])
    }
}

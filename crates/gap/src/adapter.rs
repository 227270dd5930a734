//! The adapter contract every gap resolver backend implements: "`search(query|params,
//! query_id?) → list[NormalizedSource]`, `is_available() → bool`" (§4.8).

use crate::error::GapError;
use async_trait::async_trait;
use research_core::{CandidateSource, GapResolution, ResolutionChannel};

#[async_trait]
pub trait GapAdapter: Send + Sync {
    /// Adapter name for logging, trace records, and analytics events.
    fn name(&self) -> &str;

    /// The resolution channel this adapter serves. The registry uses this
    /// to route a `GapResolution` to the right adapter.
    fn channel(&self) -> ResolutionChannel;

    /// Whether the adapter is currently usable (e.g. feature enabled,
    /// credentials configured). Disabled adapters are skipped, not retried.
    fn is_available(&self) -> bool;

    /// Resolve one gap into raw candidate sources. The registry applies
    /// caching, timeout handling, and tier-6 classification around this
    /// call; adapters implement only the raw lookup.
    async fn search(&self, resolution: &GapResolution) -> Result<Vec<CandidateSource>, GapError>;
}

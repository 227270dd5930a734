//! `EmitProgress` and `LogAnalytics` sink boundaries. Both are best-effort:
//! a failing sink is logged and ignored, never allowed to stop the
//! reasoning loop.

use crate::trace::{AnalyticsEvent, ProgressEvent};
use async_trait::async_trait;

/// Receives per-phase progress messages, usually forwarded to an SSE stream
/// by the caller. Implementations must not block for long; the orchestrator
/// treats every call as fire-and-forget.
#[async_trait]
pub trait ProgressSink: Send + Sync + 'static {
    async fn emit(&self, event: ProgressEvent);
}

/// Receives analytics events (LLM usage, cache hit/miss, gap-adapter
/// latency). Persistence is explicitly out of scope for the core; this is
/// an emission boundary only.
#[async_trait]
pub trait AnalyticsSink: Send + Sync + 'static {
    async fn log(&self, event: AnalyticsEvent);
}

/// A sink that discards everything. Used where no caller-supplied sink is
/// configured, so components can depend on `&dyn ProgressSink` unconditionally.
pub struct NullProgressSink;

#[async_trait]
impl ProgressSink for NullProgressSink {
    async fn emit(&self, _event: ProgressEvent) {}
}

pub struct NullAnalyticsSink;

#[async_trait]
impl AnalyticsSink for NullAnalyticsSink {
    async fn log(&self, _event: AnalyticsEvent) {}
}

//! Transient per-query state. Created on request, destroyed when the
//! session completes or errors; no shared mutable state across sessions.

use crate::clarification::TimeRange;
use crate::context::FormattedContext;
use crate::critic::CriticOutput;
use crate::analyst::AnalystOutput;
use crate::mode::Mode;
use crate::source_map::SourceMap;
use uuid::Uuid;

/// Per-session state threaded through the orchestrator's state machine.
/// Immutable-value style: the orchestrator owns one `ResearchSession` and
/// replaces fields as it transitions phases, rather than mutating shared
/// state reachable from elsewhere.
#[derive(Debug, Clone)]
pub struct ResearchSession {
    pub trace_id: Uuid,
    pub query: String,
    pub mode: Mode,
    pub temporal_hint: Option<TimeRange>,
    pub source_map: SourceMap,
    pub formatted_context: Option<FormattedContext>,
    pub iteration: u32,
    pub reject_count: u32,
    pub last_draft: Option<AnalystOutput>,
    pub last_review: Option<CriticOutput>,
    pub warnings: Vec<String>,
    pub skip_clarification: bool,
}

impl ResearchSession {
    pub fn new(query: impl Into<String>, mode: Mode) -> Self {
        Self {
            trace_id: Uuid::new_v4(),
            query: query.into(),
            mode,
            temporal_hint: None,
            source_map: SourceMap::new(),
            formatted_context: None,
            iteration: 0,
            reject_count: 0,
            last_draft: None,
            last_review: None,
            warnings: Vec::new(),
            skip_clarification: false,
        }
    }

    pub fn with_temporal_hint(mut self, range: TimeRange) -> Self {
        self.temporal_hint = Some(range);
        self
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

//! Core traits and data model for the deep research reasoning core.
//!
//! This crate has no I/O of its own: it defines the types every other crate
//! in the workspace shares (sources, sessions, agent outputs, the final
//! report) and the trait boundaries (`LanguageModel`, `Retriever`,
//! `ProgressSink`, `AnalyticsSink`, `PromptTemplateStore`) that let
//! `research-orchestrator` depend on abstractions instead of concrete
//! providers.

pub mod analyst;
pub mod clarification;
pub mod context;
pub mod critic;
pub mod error;
pub mod gap;
pub mod llm_types;
pub mod mode;
pub mod report;
pub mod session;
pub mod source;
pub mod source_map;
pub mod trace;
pub mod traits;
pub mod writer;

pub use analyst::{AnalystOutput, AnalystStatus, ReasoningStyle};
pub use clarification::{
    ClarificationAnswer, ClarificationOption, ClarificationQuestion, ClarificationRequest,
    ClarificationType, TimeRange,
};
pub use context::FormattedContext;
pub use critic::{CriticOutput, CriticVerdict, ModeCompliance};
pub use error::{Error, Result};
pub use gap::{GapResolution, ResolutionChannel};
pub use llm_types::{GenerateRequest, GenerateResponse, Message, QualityLevel, Role, TokenUsage};
pub use mode::Mode;
pub use report::{ReportSource, ResearchReport};
pub use session::ResearchSession;
pub use source::{CandidateSource, OriginType, SourceCategory, Tier, TieredSource};
pub use source_map::SourceMap;
pub use trace::{AnalyticsEvent, ProgressEvent, ProgressMessageType};
pub use traits::{
    AnalyticsSink, FilterOp, LanguageModel, MetadataFilter, NullAnalyticsSink, NullProgressSink,
    ProgressSink, PromptTemplateStore, RetrieveOptions, Retriever,
};
pub use writer::{ConfidenceLevel, WriterOutput};

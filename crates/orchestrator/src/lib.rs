//! Wires the Source-Tier Filter, Context Builder, Gap Resolver, and the
//! four reasoning agents into the Orchestrator's bounded-iteration
//! Actor-Critic control loop.

pub mod cancellation;
pub mod guard;
pub mod mode_detect;
pub mod orchestrator;

pub use cancellation::CancellationToken;
pub use orchestrator::{ResearchOrchestrator, ResearchOutcome};

//! Progress Tracer and Iteration Logger: streams per-phase progress to a
//! caller-supplied sink and persists append-only, atomically written
//! per-iteration trace records and a final session summary.

pub mod analytics;
pub mod atomic_write;
pub mod error;
pub mod iteration_log;
pub mod progress;

pub use analytics::MetricsAnalyticsSink;
pub use error::TraceError;
pub use iteration_log::{IterationLogger, IterationRecord, SessionSummary};
pub use progress::ProgressTracer;

//! Source-Tier Filter and Context Builder: turns raw candidate sources into
//! the text block the reasoning agents see.

pub mod builder;
pub mod filter;

pub use builder::{build_context, ContextBuildResult};
pub use filter::{filter, FilterOutcome};

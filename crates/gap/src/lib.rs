//! Gap Resolver: dispatches Analyst-declared information gaps to secondary
//! retrieval adapters (internal search, web search, encyclopedia, structured
//! APIs, and LLM background knowledge), each behind a uniform cache and
//! timeout wrapper, producing tier-6 sources for the next context build.

pub mod adapter;
pub mod adapters;
pub mod cache;
pub mod error;
pub mod registry;

pub use adapter::GapAdapter;
pub use cache::TtlCache;
pub use error::GapError;
pub use registry::{DispatchStrategy, GapOutcome, GapRegistry};

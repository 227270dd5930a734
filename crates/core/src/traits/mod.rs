//! Cross-cutting trait boundaries the reasoning core depends on but does not
//! implement: the LLM provider, the upstream retriever, progress/analytics
//! sinks, and prompt template storage.

mod llm;
mod prompt;
mod retriever;
mod sink;

pub use llm::LanguageModel;
pub use prompt::PromptTemplateStore;
pub use retriever::{FilterOp, MetadataFilter, RetrieveOptions, Retriever};
pub use sink::{AnalyticsSink, NullAnalyticsSink, NullProgressSink, ProgressSink};

//! The four reasoning roles, each a thin wrapper over Safe LLM Call plus a
//! prompt template: Analyst, Critic, Writer, Clarification.

pub mod analyst;
pub mod clarification;
pub mod critic;
pub mod prompts;
pub mod schemas;
pub mod writer;

pub use analyst::Analyst;
pub use clarification::ClarificationAgent;
pub use critic::Critic;
pub use prompts::PromptBuilder;
pub use writer::Writer;

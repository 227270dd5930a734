pub mod internal_search;
pub mod llm_knowledge;
pub mod structured_api;
pub mod web_search;
pub mod wikipedia;

pub use internal_search::InternalSearchAdapter;
pub use llm_knowledge::LlmKnowledgeAdapter;
pub use web_search::WebSearchAdapter;
pub use wikipedia::WikipediaAdapter;

#[cfg(any(feature = "tier6-stock", feature = "tier6-weather", feature = "tier6-company"))]
pub use structured_api::StructuredApiAdapter;

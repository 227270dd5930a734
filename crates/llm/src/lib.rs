//! Safe LLM Call: timeout, retry with exponential backoff, JSON
//! extraction/repair, and schema validation around an injected
//! `LanguageModel`.

pub mod error;
pub mod http_backend;
pub mod json_repair;
pub mod safe_call;
pub mod schema;

pub use error::LlmError;
pub use safe_call::{safe_call, CallMeta};
pub use schema::AgentSchema;

#[cfg(feature = "http-backend")]
pub use http_backend::HttpJsonBackend;

//! Layered configuration for the deep research reasoning core.
//!
//! Defaults are built in; an optional file layer and `RESEARCH_CORE_*`
//! environment variables can override them. The result is a frozen
//! [`Settings`] value passed explicitly into every component — there is no
//! global mutable configuration object and no hot reload.

pub mod clarification;
pub mod context;
pub mod error;
pub mod modes;
pub mod reasoning;
pub mod settings;
pub mod source_tiers;
pub mod tier6;

pub use clarification::ClarificationConfig;
pub use context::ContextConfig;
pub use error::ConfigError;
pub use modes::{ModeConfig, ModeKeywords};
pub use reasoning::ReasoningConfig;
pub use settings::{load_settings, Settings};
pub use source_tiers::{SourceTierEntry, SourceTierTable};
pub use tier6::{
    CacheConfig, EnrichmentStrategy, StructuredApiConfig, Tier6Config, WebSearchConfig,
    WikipediaConfig,
};

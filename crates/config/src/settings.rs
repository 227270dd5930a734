//! The frozen, read-once configuration struct and its loader.

use crate::clarification::ClarificationConfig;
use crate::context::ContextConfig;
use crate::error::ConfigError;
use crate::modes::{ModeConfig, ModeKeywords};
use crate::reasoning::ReasoningConfig;
use crate::source_tiers::SourceTierTable;
use crate::tier6::Tier6Config;
use serde::{Deserialize, Serialize};

/// All configuration recognized by the reasoning core, assembled once at
/// startup and passed explicitly into components from then on. There is no
/// hot-reload path; a changed file requires a fresh `load_settings` call and
/// a new `Settings` value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub reasoning: ReasoningConfig,
    pub context: ContextConfig,
    pub source_tiers: SourceTierTable,
    pub mode_configs: ModeConfig,
    pub mode_keywords: ModeKeywords,
    pub tier_6: Tier6Config,
    pub clarification: ClarificationConfig,
}

/// Load configuration layered as: built-in defaults → an optional file at
/// `path` (YAML or TOML, detected by extension) → `RESEARCH_CORE_*`
/// environment variable overrides (double-underscore separated, e.g.
/// `RESEARCH_CORE_REASONING__MAX_ITERATIONS=5`).
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = config::Config::builder()
        .add_source(config::Config::try_from(&Settings::default())?);

    if let Some(path) = path {
        if !std::path::Path::new(path).exists() {
            return Err(ConfigError::FileNotFound(path.to_string()));
        }
        builder = builder.add_source(config::File::with_name(path));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("RESEARCH_CORE")
            .separator("__")
            .try_parsing(true),
    );

    let settled = builder.build()?;
    let settings: Settings = settled.try_deserialize()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_load_without_a_file() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings.reasoning.max_iterations, 3);
        assert_eq!(settings.context.max_total_chars, 20_000);
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("settings.toml");
        let mut file = std::fs::File::create(&file_path).unwrap();
        writeln!(file, "[reasoning]\nmax_iterations = 5").unwrap();

        let settings = load_settings(Some(file_path.to_str().unwrap())).unwrap();
        assert_eq!(settings.reasoning.max_iterations, 5);
        assert_eq!(settings.context.max_total_chars, 20_000);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_settings(Some("/nonexistent/path.toml"));
        assert!(matches!(err, Err(ConfigError::FileNotFound(_))));
    }
}

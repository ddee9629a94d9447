pub mod context_builder_config;
pub mod defaults;
pub mod observability_config;
pub mod token_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use context_builder_config::ContextBuilderConfig;
pub use observability_config::ObservabilityConfig;
pub use token_config::TokenConfig;

use crate::errors::{LecternError, LecternResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LecternConfig {
    pub context: ContextBuilderConfig,
    pub tokens: TokenConfig,
    pub observability: ObservabilityConfig,
}

impl LecternConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(toml_str: &str) -> LecternResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| LecternError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> LecternResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            LecternError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&raw)
    }

    fn validate(&self) -> LecternResult<()> {
        if self.tokens.encoding != defaults::DEFAULT_ENCODING {
            return Err(LecternError::ConfigError(format!(
                "unsupported encoding '{}', expected '{}'",
                self.tokens.encoding,
                defaults::DEFAULT_ENCODING
            )));
        }
        if self.tokens.cache_capacity == 0 {
            return Err(LecternError::ConfigError(
                "tokens.cache_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

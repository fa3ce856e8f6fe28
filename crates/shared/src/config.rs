//! Application configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::types::FormatOptions;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "MONEYFIELD";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Codec options.
    #[serde(default)]
    pub format: FormatOptions,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "moneyfield=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones win: `config/default`, `config/{RUN_MODE}`, then
    /// `MONEYFIELD__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is inconsistent.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Self::finish(config)
    }

    /// Loads configuration from an explicit file, still honoring environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, malformed, or inconsistent.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Self::finish(config)
    }

    fn finish(config: config::Config) -> AppResult<Self> {
        let app: Self = config.try_deserialize()?;
        app.validate()?;
        tracing::debug!(
            precision = app.format.precision,
            allow_blank = app.format.allow_blank,
            "Configuration loaded"
        );
        Ok(app)
    }

    /// Validates every section.
    pub fn validate(&self) -> AppResult<()> {
        self.format.validate()
    }
}

//! # tanager-config
//!
//! Layered configuration loading for Tanager using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Command-line arguments (data root, `--debug`)
//! 2. Environment variables (`TANAGER_*` prefix, `__` as separator)
//! 3. Project-local `./tanager.toml`
//! 4. User-level `~/.config/tanager/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TANAGER_SERVER__PORT` -> `server.port`,
//! `TANAGER_DATA__DISTRIBUTION_FILE` -> `data.distribution_file`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use tanager_config::TanagerConfig;
//!
//! let config = TanagerConfig::load_with_overrides(Path::new("runs"), false).expect("config");
//! println!("serving {} on {}", config.data.root.display(), config.server.bind_addr());
//! ```

mod data;
mod error;
mod server;
mod slider;

pub use data::DataConfig;
pub use error::ConfigError;
pub use server::ServerConfig;
pub use slider::SliderConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TanagerConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub slider: SliderConfig,
}

impl TanagerConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load `.env`, files and env vars, then apply command-line arguments on top.
    ///
    /// `debug` only ever switches debug mode on; leaving the flag off keeps
    /// whatever the other sources say.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_overrides(root: &Path, debug: bool) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::extract(Self::with_overrides(Self::figment(), root, debug))
    }

    /// Layer command-line values onto an existing figment.
    #[must_use]
    pub fn with_overrides(figment: Figment, root: &Path, debug: bool) -> Figment {
        let mut figment = figment.merge(Serialized::default("data.root", root));
        if debug {
            figment = figment.merge(Serialized::default("server.debug", true));
        }
        figment
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from("tanager.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables
        figment.merge(Env::prefixed("TANAGER_").split("__"))
    }

    /// Extract and validate a config from any figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values figment cannot check by type alone.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(invalid("server.port", "must be non-zero"));
        }
        if self.slider.mark_budget == 0 {
            return Err(invalid("slider.mark_budget", "must be at least 1"));
        }
        for (field, pattern) in [
            ("data.statistics_pattern", &self.data.statistics_pattern),
            ("data.distribution_pattern", &self.data.distribution_pattern),
        ] {
            globset::Glob::new(pattern).map_err(|e| invalid(field, &e.to_string()))?;
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tanager").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

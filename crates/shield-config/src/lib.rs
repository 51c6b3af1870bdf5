//! # shield-config
//!
//! Layered configuration loading for JobShield using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SHIELD_*` prefix, `__` as separator)
//! 2. Legacy provider variables (`GROQ_API_KEY`, `AI_INTEGRATIONS_OPENAI_API_KEY`)
//! 3. Project-level `.jobshield/config.toml`
//! 4. User-level `~/.config/jobshield/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SHIELD_GROQ__API_KEY` -> `groq.api_key`,
//! `SHIELD_SERVER__BIND` -> `server.bind`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use shield_config::ShieldConfig;
//!
//! let config = ShieldConfig::load_with_dotenv().expect("config");
//! if config.groq.is_configured() {
//!     println!("Groq model: {}", config.groq.model);
//! }
//! ```

mod auth;
mod clerk;
mod database;
mod error;
mod general;
mod groq;
mod openai;
mod server;

pub use auth::AuthConfig;
pub use clerk::ClerkConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use groq::GroqConfig;
pub use openai::OpenAiConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Env prefix for all first-class settings.
pub const ENV_PREFIX: &str = "SHIELD_";

/// Pre-existing variable names mapped onto config keys, lowest env priority.
const LEGACY_ENV_KEYS: [(&str, &str); 2] = [
    ("GROQ_API_KEY", "groq.api_key"),
    ("AI_INTEGRATIONS_OPENAI_API_KEY", "openai.api_key"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShieldConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub groq: GroqConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub clerk: ClerkConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ShieldConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".jobshield/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        for (var, key) in LEGACY_ENV_KEYS {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("jobshield").join("config.toml"))
    }
}

//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `HUSTLE_BUDDY_` prefix and nested values use double underscores as separators.
//!
//! The agent description (name, instructions, expected output, behaviour flags)
//! lives in a separate JSON file, see [`AgentConfig`].
//!
//! # Example
//!
//! ```no_run
//! use hustle_buddy::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod agent;
mod ai;
mod error;
mod knowledge;
mod server;

pub use agent::{AgentConfig, AgentConfigError, AgentSettings};
pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use knowledge::{normalize_database_url, KnowledgeConfig, DEFAULT_DATABASE_URL};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has defaults, so an empty environment yields a runnable
/// local configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat completion provider configuration (OpenAI-compatible)
    #[serde(default)]
    pub ai: AiConfig,

    /// Vector knowledge base configuration (Postgres + pgvector)
    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    /// Path of the agent description file
    #[serde(default = "default_agent_config_path")]
    pub agent_config_path: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds `ai.openai_api_key` from `OPENAI_API_KEY` and
    ///    `knowledge.database_url` from `DATABASE_URL` when those are set
    /// 3. Reads environment variables with `HUSTLE_BUDDY` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `HUSTLE_BUDDY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `HUSTLE_BUDDY__KNOWLEDGE__ENABLED=false` -> `knowledge.enabled = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder().set_default(
            "knowledge.database_url",
            std::env::var("DATABASE_URL")
                .map(|url| normalize_database_url(&url))
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
        )?;
        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            builder = builder.set_default("ai.openai_api_key", api_key)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("HUSTLE_BUDDY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate the configuration sections that must be correct to start.
    ///
    /// Only the server section is checked here. A missing API key degrades
    /// evaluations and an invalid knowledge section disables the knowledge
    /// base, see [`AiConfig::validate`] and [`KnowledgeConfig::validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            ai: AiConfig::default(),
            knowledge: KnowledgeConfig::default(),
            agent_config_path: default_agent_config_path(),
        }
    }
}

fn default_agent_config_path() -> PathBuf {
    PathBuf::from("agent-config.json")
}

//! Agent description loaded from an external JSON file
//!
//! The file describes the evaluator persona: its name, description, ordered
//! instructions, expected output and a set of behaviour flags. A missing or
//! malformed file never prevents startup; [`AgentConfig::load_or_default`]
//! logs the failure once and falls back to [`AgentConfig::default`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading the agent description file
#[derive(Debug, Error)]
pub enum AgentConfigError {
    #[error("Failed to read agent config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse agent config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Static description of the evaluator agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub expected_output: String,
    #[serde(default)]
    pub agent_settings: AgentSettings,
}

/// Behaviour flags applied when building the agent's messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSettings {
    /// Append the current UTC time to the system message
    #[serde(default)]
    pub add_datetime_to_instructions: bool,

    /// Replay previous runs of the session before the new prompt
    #[serde(default)]
    pub add_history_to_messages: bool,

    /// Number of previous runs replayed when history is enabled
    #[serde(default = "default_num_history_runs")]
    pub num_history_runs: usize,

    /// Prefix the answer with the knowledge searches that produced it
    #[serde(default)]
    pub show_tool_calls: bool,

    /// Ask the model to format answers as markdown
    #[serde(default)]
    pub markdown: bool,

    /// Flags this service does not interpret
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

impl AgentConfig {
    /// Read and parse the agent description at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AgentConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| AgentConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| AgentConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`AgentConfig::load`], but any failure yields the default description.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => {
                tracing::info!(agent = %config.name, "Loaded agent configuration");
                config
            }
            Err(e) => {
                tracing::warn!("Error loading agent configuration: {}; using defaults", e);
                Self::default()
            }
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "HustleBuddy".to_string(),
            description: "AI model response evaluator".to_string(),
            instructions: vec!["Evaluate model responses".to_string()],
            expected_output: "Evaluation results".to_string(),
            agent_settings: AgentSettings::default(),
        }
    }
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            add_datetime_to_instructions: true,
            add_history_to_messages: true,
            num_history_runs: default_num_history_runs(),
            show_tool_calls: true,
            markdown: true,
            other: BTreeMap::new(),
        }
    }
}

fn default_num_history_runs() -> usize {
    3
}

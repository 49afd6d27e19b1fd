//! Data Transfer Objects for the knowledge base endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use crate::application::handlers::KnowledgeStatusReport;

/// Query string of `POST /load-knowledge`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LoadKnowledgeQuery {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub recreate: bool,
}

/// Parses `true/false/1/0/yes/no/on/off`, ignoring case.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("recreate: invalid boolean value `{}`", raw))
    })
}

/// Body of `GET /knowledge-status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum KnowledgeStatusResponse {
    Probed {
        status: &'static str,
        knowledge_available: bool,
        vector_db_ready: bool,
    },
    Message {
        status: &'static str,
        message: String,
    },
}

impl From<KnowledgeStatusReport> for KnowledgeStatusResponse {
    fn from(report: KnowledgeStatusReport) -> Self {
        match report {
            KnowledgeStatusReport::NoKnowledge => KnowledgeStatusResponse::Message {
                status: "no_knowledge",
                message: "No knowledge base available".to_string(),
            },
            KnowledgeStatusReport::Probed(status) => KnowledgeStatusResponse::Probed {
                status: status.as_str(),
                knowledge_available: true,
                vector_db_ready: status.is_ready(),
            },
            KnowledgeStatusReport::ProbeFailed(message) => KnowledgeStatusResponse::Message {
                status: "error",
                message,
            },
        }
    }
}

/// Body of a successful `POST /load-knowledge`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadKnowledgeResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl LoadKnowledgeResponse {
    pub fn success() -> Self {
        Self {
            status: "success",
            message: "Knowledge base loaded successfully",
        }
    }
}

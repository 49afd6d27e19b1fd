//! Readiness of the vector store behind a knowledge base.

use serde::Serialize;

/// Result of probing a configured knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeStatus {
    /// The vector table exists and can be searched.
    Ready,
    /// The store is reachable but nothing has been loaded yet.
    NotLoaded,
}

impl KnowledgeStatus {
    pub fn from_table_exists(exists: bool) -> Self {
        if exists {
            KnowledgeStatus::Ready
        } else {
            KnowledgeStatus::NotLoaded
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KnowledgeStatus::Ready => "ready",
            KnowledgeStatus::NotLoaded => "not_loaded",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, KnowledgeStatus::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_table_probe() {
        assert_eq!(KnowledgeStatus::from_table_exists(true), KnowledgeStatus::Ready);
        assert_eq!(KnowledgeStatus::from_table_exists(false), KnowledgeStatus::NotLoaded);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&KnowledgeStatus::NotLoaded).unwrap();
        assert_eq!(json, "\"not_loaded\"");
        assert_eq!(KnowledgeStatus::Ready.as_str(), "ready");
    }
}

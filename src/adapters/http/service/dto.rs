//! Response bodies for the service endpoints.

use std::collections::BTreeMap;

use serde::Serialize;

/// Name reported by the health check.
pub const SERVICE_NAME: &str = "Hustle Buddy API";

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    pub message: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
    pub features: ServiceFeatures,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceFeatures {
    pub knowledge_base: bool,
}

impl ServiceInfoResponse {
    pub fn new(knowledge_base: bool) -> Self {
        let endpoints = BTreeMap::from([
            ("evaluate", "POST /evaluate - Compare AI model responses"),
            ("knowledge-status", "GET /knowledge-status - Check knowledge base status"),
            ("load-knowledge", "POST /load-knowledge - Load/reload knowledge base"),
            ("health", "GET /health - Health check"),
        ]);

        Self {
            message: "Hustle Buddy API is running! Use POST /evaluate to analyze AI model responses.",
            endpoints,
            features: ServiceFeatures { knowledge_base },
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            service: SERVICE_NAME,
        }
    }
}

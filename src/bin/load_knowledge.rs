//! Loads the docs folder into the knowledge base, overwriting stored chunks.
//!
//! Uses the same configuration as the server. Exits non-zero when the
//! knowledge base is unavailable or the load fails.

use std::process::ExitCode;

use hustle_buddy::application::handlers::{LoadKnowledgeCommand, LoadKnowledgeHandler};
use hustle_buddy::bootstrap::build_knowledge_base;
use hustle_buddy::config::AppConfig;
use hustle_buddy::telemetry::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.is_production(), &config.server.log_level);

    let handler = LoadKnowledgeHandler::new(build_knowledge_base(&config));
    match handler.handle(LoadKnowledgeCommand { recreate: true }).await {
        Ok(summary) => {
            tracing::info!(
                documents = summary.documents,
                chunks = summary.chunks,
                written = summary.written,
                "Knowledge base loaded"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Knowledge base load failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! Hustle Buddy API server.

use std::sync::Arc;

use hustle_buddy::adapters::http::{api_router, ApiState};
use hustle_buddy::application::handlers::{LoadKnowledgeCommand, LoadKnowledgeHandler};
use hustle_buddy::bootstrap::{build_agent, build_knowledge_base};
use hustle_buddy::config::AppConfig;
use hustle_buddy::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::load()?;
    init_tracing(config.is_production(), &config.server.log_level);
    config.validate()?;

    let knowledge = build_knowledge_base(&config);

    if knowledge.is_some() && config.knowledge.load_on_startup {
        let handler = LoadKnowledgeHandler::new(knowledge.clone());
        if let Err(e) = handler.handle(LoadKnowledgeCommand { recreate: false }).await {
            tracing::warn!("Could not load knowledge base on startup: {}", e);
        }
    }

    let agent = build_agent(&config, knowledge.clone())?;
    let state = ApiState::new(Arc::new(agent), knowledge);
    let app = api_router(state, &config.server.cors_origins_list());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        environment = ?config.server.environment,
        "Hustle Buddy API listening on {}",
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}

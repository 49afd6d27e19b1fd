//! The `search_knowledge_base` function tool.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::knowledge::RetrievedChunk;
use crate::ports::{KnowledgeBase, KnowledgeError, ToolDefinition};

/// Name the model uses to call the tool.
pub const SEARCH_KNOWLEDGE_TOOL: &str = "search_knowledge_base";

/// Tool schema offered to the model when a knowledge base is configured.
pub fn search_knowledge_definition() -> ToolDefinition {
    ToolDefinition {
        name: SEARCH_KNOWLEDGE_TOOL.to_string(),
        description: "Use this function to search the knowledge base for information about a query."
            .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The query to search for."
                }
            },
            "required": ["query"]
        }),
    }
}

#[derive(Debug, Deserialize)]
struct SearchArguments {
    query: String,
}

/// Extracts the query from raw tool arguments.
///
/// Unparseable arguments yield `None`; the model is then told so instead of
/// failing the run.
pub fn parse_query(arguments: &str) -> Option<String> {
    serde_json::from_str::<SearchArguments>(arguments)
        .ok()
        .map(|args| args.query)
}

#[derive(Debug, Serialize)]
struct SearchHit<'a> {
    name: &'a str,
    content: &'a str,
}

/// Runs one search and renders the hits as the tool result text.
pub async fn run_search(
    knowledge: &dyn KnowledgeBase,
    query: &str,
    limit: usize,
) -> Result<String, KnowledgeError> {
    let chunks = knowledge.search(query, limit).await?;
    tracing::debug!(query, hits = chunks.len(), "knowledge search");
    Ok(render_hits(&chunks))
}

fn render_hits(chunks: &[RetrievedChunk]) -> String {
    if chunks.is_empty() {
        return "No documents found".to_string();
    }
    let hits: Vec<SearchHit<'_>> = chunks
        .iter()
        .map(|chunk| SearchHit {
            name: &chunk.name,
            content: &chunk.content,
        })
        .collect();
    serde_json::to_string(&hits).unwrap_or_else(|_| "No documents found".to_string())
}

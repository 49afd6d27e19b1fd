//! EvaluatorAgent - the long-lived delegate behind every evaluation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::config::AgentConfig;
use crate::ports::{
    AIProvider, Agent, AgentError, AgentResponse, CompletionRequest, KnowledgeBase, Message,
    ToolCall,
};

use super::history::RunHistory;
use super::knowledge_tool::{
    parse_query, run_search, search_knowledge_definition, SEARCH_KNOWLEDGE_TOOL,
};
use super::system_message::build_system_message;

/// Completions that may request tools before the run is abandoned.
pub const MAX_TOOL_ROUNDS: usize = 5;

/// Chat agent configured from an [`AgentConfig`].
///
/// One instance serves the whole process and keeps a single session: the
/// session id is fixed at construction and the history accumulates across
/// runs.
pub struct EvaluatorAgent {
    config: AgentConfig,
    provider: Arc<dyn AIProvider>,
    knowledge: Option<Arc<dyn KnowledgeBase>>,
    search_limit: usize,
    session_id: String,
    history: RunHistory,
}

impl EvaluatorAgent {
    pub fn new(
        config: AgentConfig,
        provider: Arc<dyn AIProvider>,
        knowledge: Option<Arc<dyn KnowledgeBase>>,
    ) -> Self {
        for flag in config.agent_settings.other.keys() {
            tracing::warn!("Unsupported agent setting ignored: {}", flag);
        }

        let history = RunHistory::new(config.agent_settings.num_history_runs);
        Self {
            config,
            provider,
            knowledge,
            search_limit: 5,
            session_id: Uuid::new_v4().to_string(),
            history,
        }
    }

    /// Sets the number of chunks returned per knowledge search.
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    fn initial_messages(&self, prompt: &str) -> Vec<Message> {
        let mut messages = vec![Message::system(build_system_message(&self.config, Utc::now()))];
        if self.config.agent_settings.add_history_to_messages {
            messages.extend(self.history.messages());
        }
        messages.push(Message::user(prompt));
        messages
    }

    fn request(&self, messages: &[Message]) -> CompletionRequest {
        let request = CompletionRequest::new().with_messages(messages.iter().cloned());
        match self.knowledge {
            Some(_) => request.with_tool(search_knowledge_definition()),
            None => request,
        }
    }

    /// Executes one tool call and returns the result text with its display line.
    async fn execute_tool(&self, call: &ToolCall) -> Result<(String, String), AgentError> {
        let knowledge = match (&self.knowledge, call.name.as_str()) {
            (Some(knowledge), SEARCH_KNOWLEDGE_TOOL) => knowledge,
            _ => return Err(AgentError::UnknownTool(call.name.clone())),
        };

        match parse_query(&call.arguments) {
            Some(query) => {
                let output = run_search(knowledge.as_ref(), &query, self.search_limit).await?;
                Ok((output, format!(" - Running: {SEARCH_KNOWLEDGE_TOOL}(query={query})")))
            }
            None => {
                tracing::warn!("Invalid arguments for {}: {}", call.name, call.arguments);
                Ok((
                    format!("Invalid arguments: {}", call.arguments),
                    format!(" - Running: {SEARCH_KNOWLEDGE_TOOL}()"),
                ))
            }
        }
    }
}

#[async_trait]
impl Agent for EvaluatorAgent {
    async fn run(&self, prompt: &str) -> Result<AgentResponse, AgentError> {
        let mut messages = self.initial_messages(prompt);
        let mut shown_calls = Vec::new();
        let mut rounds = 0;

        loop {
            let response = self.provider.complete(self.request(&messages)).await?;

            if !response.wants_tools() {
                tracing::debug!(
                    session_id = %self.session_id,
                    tool_rounds = rounds,
                    tokens = response.usage.total_tokens,
                    "agent run completed"
                );
                self.history.record(prompt, response.content.clone());

                let content = if self.config.agent_settings.show_tool_calls && !shown_calls.is_empty() {
                    format!("{}\n\n{}", shown_calls.join("\n"), response.content)
                } else {
                    response.content
                };
                return Ok(AgentResponse::new(content, Some(self.session_id.clone())));
            }

            if rounds == MAX_TOOL_ROUNDS {
                return Err(AgentError::ToolLimitExceeded { rounds });
            }
            rounds += 1;

            messages.push(Message::assistant_tool_calls(
                response.content,
                response.tool_calls.clone(),
            ));
            for call in &response.tool_calls {
                let (output, display) = self.execute_tool(call).await?;
                shown_calls.push(display);
                messages.push(Message::tool_result(call.id.clone(), output));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::knowledge::InMemoryKnowledgeBase;
    use crate::config::AgentSettings;
    use crate::domain::knowledge::Document;
    use crate::ports::{AIError, MessageRole};

    fn config(settings: AgentSettings) -> AgentConfig {
        AgentConfig {
            agent_settings: settings,
            ..AgentConfig::default()
        }
    }

    async fn loaded_knowledge() -> Arc<InMemoryKnowledgeBase> {
        let kb = InMemoryKnowledgeBase::new(vec![Document::new(
            "rubric",
            "Accuracy matters most when comparing answers.",
        )]);
        kb.load(true).await.unwrap();
        Arc::new(kb)
    }

    #[tokio::test]
    async fn returns_content_and_stable_session() {
        let provider = Arc::new(MockAIProvider::new().with_response("one").with_response("two"));
        let agent = EvaluatorAgent::new(AgentConfig::default(), provider, None);

        let first = agent.run("p1").await.unwrap();
        let second = agent.run("p2").await.unwrap();

        assert_eq!(first.content, "one");
        assert_eq!(second.content, "two");
        assert_eq!(first.session_id.as_deref(), Some(agent.session_id()));
        assert_eq!(first.session_id, second.session_id);
        assert!(Uuid::parse_str(agent.session_id()).is_ok());
    }

    #[tokio::test]
    async fn separate_agents_get_separate_sessions() {
        let a = EvaluatorAgent::new(AgentConfig::default(), Arc::new(MockAIProvider::new()), None);
        let b = EvaluatorAgent::new(AgentConfig::default(), Arc::new(MockAIProvider::new()), None);
        assert_ne!(a.session_id(), b.session_id());
    }

    #[tokio::test]
    async fn sends_system_message_then_prompt() {
        let provider = Arc::new(MockAIProvider::new().with_response("ok"));
        let agent = EvaluatorAgent::new(AgentConfig::default(), provider.clone(), None);

        agent.run("Compare these").await.unwrap();

        let call = &provider.get_calls()[0];
        assert_eq!(call.messages.len(), 2);
        assert_eq!(call.messages[0].role, MessageRole::System);
        assert!(call.messages[0].content.contains("Your name is HustleBuddy."));
        assert_eq!(call.messages[1], Message::user("Compare these"));
        assert!(call.tools.is_empty());
    }

    #[tokio::test]
    async fn replays_only_the_configured_number_of_runs() {
        let provider = Arc::new(MockAIProvider::new());
        let agent = EvaluatorAgent::new(
            config(AgentSettings {
                num_history_runs: 2,
                ..AgentSettings::default()
            }),
            provider.clone(),
            None,
        );

        for prompt in ["p1", "p2", "p3", "p4"] {
            agent.run(prompt).await.unwrap();
        }

        let last = provider.get_calls().pop().unwrap();
        let contents: Vec<&str> = last.messages[1..].iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["p2", "Mock response", "p3", "Mock response", "p4"]
        );
    }

    #[tokio::test]
    async fn history_disabled_sends_no_previous_runs() {
        let provider = Arc::new(MockAIProvider::new());
        let agent = EvaluatorAgent::new(
            config(AgentSettings {
                add_history_to_messages: false,
                ..AgentSettings::default()
            }),
            provider.clone(),
            None,
        );

        agent.run("p1").await.unwrap();
        agent.run("p2").await.unwrap();

        assert_eq!(provider.get_calls()[1].messages.len(), 2);
    }

    #[tokio::test]
    async fn knowledge_tool_is_offered_and_executed() {
        let provider = Arc::new(
            MockAIProvider::new()
                .with_tool_call(SEARCH_KNOWLEDGE_TOOL, r#"{"query":"accuracy"}"#)
                .with_response("Model 1 is most accurate."),
        );
        let agent = EvaluatorAgent::new(
            AgentConfig::default(),
            provider.clone(),
            Some(loaded_knowledge().await),
        );

        let response = agent.run("Compare").await.unwrap();

        assert_eq!(
            response.content,
            " - Running: search_knowledge_base(query=accuracy)\n\nModel 1 is most accurate."
        );

        let calls = provider.get_calls();
        assert_eq!(calls[0].tools[0].name, SEARCH_KNOWLEDGE_TOOL);
        let tool_message = calls[1].messages.last().unwrap();
        assert_eq!(tool_message.role, MessageRole::Tool);
        assert_eq!(tool_message.tool_call_id.as_deref(), Some("call_0"));
        assert!(tool_message.content.contains("Accuracy matters most"));
    }

    #[tokio::test]
    async fn tool_calls_hidden_when_flag_off() {
        let provider = Arc::new(
            MockAIProvider::new()
                .with_tool_call(SEARCH_KNOWLEDGE_TOOL, r#"{"query":"accuracy"}"#)
                .with_response("Answer"),
        );
        let agent = EvaluatorAgent::new(
            config(AgentSettings {
                show_tool_calls: false,
                ..AgentSettings::default()
            }),
            provider,
            Some(loaded_knowledge().await),
        );

        assert_eq!(agent.run("Compare").await.unwrap().content, "Answer");
    }

    #[tokio::test]
    async fn history_stores_answer_without_tool_lines() {
        let provider = Arc::new(
            MockAIProvider::new()
                .with_tool_call(SEARCH_KNOWLEDGE_TOOL, r#"{"query":"accuracy"}"#)
                .with_response("Answer")
                .with_response("Second"),
        );
        let agent = EvaluatorAgent::new(
            AgentConfig::default(),
            provider.clone(),
            Some(loaded_knowledge().await),
        );

        agent.run("first").await.unwrap();
        agent.run("second").await.unwrap();

        let last = provider.get_calls().pop().unwrap();
        assert_eq!(last.messages[2], Message::assistant("Answer"));
    }

    #[tokio::test]
    async fn tool_loop_is_bounded() {
        let mut provider = MockAIProvider::new();
        for _ in 0..=MAX_TOOL_ROUNDS {
            provider = provider.with_tool_call(SEARCH_KNOWLEDGE_TOOL, r#"{"query":"x"}"#);
        }
        let provider = Arc::new(provider);
        let agent = EvaluatorAgent::new(
            AgentConfig::default(),
            provider.clone(),
            Some(loaded_knowledge().await),
        );

        let err = agent.run("Compare").await.unwrap_err();

        assert_eq!(err, AgentError::ToolLimitExceeded { rounds: MAX_TOOL_ROUNDS });
        assert_eq!(provider.call_count(), MAX_TOOL_ROUNDS + 1);
    }

    #[tokio::test]
    async fn tool_call_without_knowledge_is_rejected() {
        let provider = Arc::new(
            MockAIProvider::new().with_tool_call(SEARCH_KNOWLEDGE_TOOL, r#"{"query":"x"}"#),
        );
        let agent = EvaluatorAgent::new(AgentConfig::default(), provider, None);

        let err = agent.run("Compare").await.unwrap_err();
        assert_eq!(err, AgentError::UnknownTool(SEARCH_KNOWLEDGE_TOOL.to_string()));
    }

    #[tokio::test]
    async fn knowledge_failure_fails_the_run() {
        let kb = Arc::new(InMemoryKnowledgeBase::new(Vec::new()).with_failure("db down"));
        let provider = Arc::new(
            MockAIProvider::new().with_tool_call(SEARCH_KNOWLEDGE_TOOL, r#"{"query":"x"}"#),
        );
        let agent = EvaluatorAgent::new(AgentConfig::default(), provider, Some(kb));

        let err = agent.run("Compare").await.unwrap_err();
        assert!(matches!(err, AgentError::Knowledge(_)));
    }

    #[tokio::test]
    async fn provider_error_is_propagated_and_not_recorded() {
        let provider = Arc::new(
            MockAIProvider::new()
                .with_error(MockError::Unavailable {
                    message: "boom".to_string(),
                })
                .with_response("later"),
        );
        let agent = EvaluatorAgent::new(AgentConfig::default(), provider.clone(), None);

        let err = agent.run("p1").await.unwrap_err();
        assert_eq!(err, AgentError::Provider(AIError::unavailable("boom")));

        agent.run("p2").await.unwrap();
        assert_eq!(provider.get_calls()[1].messages.len(), 2);
    }

    #[tokio::test]
    async fn empty_model_content_becomes_empty_analysis() {
        let provider = Arc::new(MockAIProvider::new().with_response(""));
        let agent = EvaluatorAgent::new(AgentConfig::default(), provider, None);

        assert_eq!(agent.run("p").await.unwrap().content, "");
    }
}

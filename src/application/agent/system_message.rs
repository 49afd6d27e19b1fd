//! System message assembly from the agent description.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::AgentConfig;

const MARKDOWN_INSTRUCTION: &str = "Use markdown to format your answers.";

/// Builds the system message sent first in every run.
///
/// `now` is only rendered when the datetime flag is set.
pub fn build_system_message(config: &AgentConfig, now: DateTime<Utc>) -> String {
    let settings = &config.agent_settings;
    let mut sections = Vec::new();

    let mut intro = Vec::new();
    if !config.description.is_empty() {
        intro.push(config.description.clone());
    }
    if !config.name.is_empty() {
        intro.push(format!("Your name is {}.", config.name));
    }
    if !intro.is_empty() {
        sections.push(intro.join("\n"));
    }

    let mut instructions: Vec<&str> = config.instructions.iter().map(String::as_str).collect();
    if settings.markdown {
        instructions.push(MARKDOWN_INSTRUCTION);
    }
    if !instructions.is_empty() {
        let bullets: Vec<String> = instructions.iter().map(|line| format!("- {line}")).collect();
        sections.push(format!("<instructions>\n{}\n</instructions>", bullets.join("\n")));
    }

    if !config.expected_output.is_empty() {
        sections.push(format!(
            "<expected_output>\n{}\n</expected_output>",
            config.expected_output
        ));
    }

    if settings.add_datetime_to_instructions {
        sections.push(format!(
            "The current time is {}.",
            now.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
    }

    sections.join("\n\n")
}

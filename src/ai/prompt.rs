//! Reusable prompts using Handlebars for templating. Handlebars adds
//! additional security controls since it can't do much out of the box
//! without registering your own helpers. This is ideal since output
//! from LLMs should be considered untrusted and Handlebars forces you
//! to add only what you need.

use std::fmt;

use anyhow::Result;
use handlebars::Handlebars;
use serde_json::json;

use crate::chat::Transcript;
use crate::portfolio::Portfolio;

#[derive(Debug)]
pub enum Prompt {
    Concierge,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// Implement the Into trait so that Prompt can be converted to an &str
impl From<Prompt> for String {
    fn from(item: Prompt) -> String {
        format!("{:?}", item)
    }
}

// Triple braces everywhere since the prompt is plain text, not HTML.
const CONCIERGE_PROMPT: &str = "You are an AI assistant for {{{name}}}. Answer questions based on this info:
Bio: {{{bio}}}
Projects: {{{projects}}}
History: {{{history}}}
user: {{{message}}}
ai:";

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(&Prompt::Concierge.to_string(), CONCIERGE_PROMPT)
        .expect("Failed to register template");
    registry
}

/// Builds the full prompt for the next assistant turn: persona framing,
/// bio and project facts, the prior transcript as role-prefixed lines,
/// the new user message, and a trailing cue for the assistant's reply.
/// Deterministic: identical inputs produce byte-identical prompts.
pub fn build_concierge_prompt(
    portfolio: &Portfolio,
    history: &Transcript,
    message: &str,
) -> Result<String> {
    let bio = portfolio.bio.join(" ");
    let projects = serde_json::to_string_pretty(&portfolio.projects)?;
    let history = history
        .iter()
        .map(|m| format!("{}: {}", m.role.prompt_tag(), m.text))
        .collect::<Vec<String>>()
        .join("\n");

    let rendered = templates().render(
        &Prompt::Concierge.to_string(),
        &json!({
            "name": portfolio.name,
            "bio": bio,
            "projects": projects,
            "history": history,
            "message": message,
        }),
    )?;
    Ok(rendered)
}

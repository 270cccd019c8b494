//! The chat widget: owns the transcript and the busy flag, forwards
//! user questions to the completion endpoint, and absorbs every failure
//! into a chat bubble so nothing propagates as an unhandled fault.

use anyhow::Result;

use super::models::{Message, Role, Transcript};
use crate::ai::prompt::build_concierge_prompt;
use crate::core::config::AppConfig;
use crate::gemini::{extract_reply, generate};
use crate::portfolio::Portfolio;

/// Appended to the transcript when no usable response was obtained.
pub const APOLOGY_REPLY: &str = "Oops! Something went wrong.";

pub struct ChatWidget {
    api_hostname: String,
    api_key: String,
    model: String,
    portfolio: Portfolio,
    transcript: Transcript,
    busy: bool,
}

impl ChatWidget {
    pub fn new(portfolio: Portfolio, api_hostname: &str, api_key: &str, model: &str) -> Self {
        let greeting = format!(
            "Hello! I am {}'s A.I. Assistant. Ask me anything about their projects, skills, or professional background.",
            portfolio.name
        );
        let transcript =
            Transcript::new_with_messages(vec![Message::new(Role::Assistant, &greeting)]);

        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            portfolio,
            transcript,
            busy: false,
        }
    }

    pub fn from_config(config: &AppConfig, portfolio: Portfolio) -> Self {
        Self::new(
            portfolio,
            &config.gemini_api_hostname,
            &config.gemini_api_key,
            &config.gemini_model,
        )
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// True while a completion request is outstanding. Acts as a
    /// mutual-exclusion gate: submissions while busy are rejected, not
    /// queued.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Runs the next turn in chat. The user entry is appended before
    /// the network call resolves so the transcript reflects the input
    /// immediately. Resolves to the assistant's reply text, which is
    /// also appended to the transcript: the extracted response, the
    /// fallback for a malformed body, or the apology when no usable
    /// response was obtained. Empty input and submissions while busy
    /// are no-ops returning `None`.
    pub async fn submit(&mut self, input: &str) -> Result<Option<String>> {
        let message = input.trim();
        if message.is_empty() || self.busy {
            return Ok(None);
        }

        // The prompt serializes the transcript as it was before this
        // submission; the new message is framed separately at the end.
        let prompt = build_concierge_prompt(&self.portfolio, &self.transcript, message)?;

        self.transcript.push(Message::new(Role::User, message));
        self.busy = true;

        let reply = match generate(&prompt, &self.api_hostname, &self.api_key, &self.model).await {
            Ok(body) => extract_reply(&body),
            Err(err) => {
                tracing::error!("Error calling the completion endpoint: {}", err);
                APOLOGY_REPLY.to_string()
            }
        };

        self.transcript.push(Message::new(Role::Assistant, &reply));
        self.busy = false;

        Ok(Some(reply))
    }
}

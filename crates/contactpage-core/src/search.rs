//! Placeholder search: asks for a term, logs it, and says search is not
//! available yet.

use crate::capability::{Notice, Notifier, Prompter};
use crate::config::Messages;

/// What a search activation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Prompt cancelled or left empty
    Cancelled,
    /// Term logged and the visitor told search is pending
    Reported { term: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchTrigger {
    prompt: String,
    pending: String,
}

impl SearchTrigger {
    pub fn new(messages: &Messages) -> Self {
        Self {
            prompt: messages.search_prompt.clone(),
            pending: messages.search_pending.clone(),
        }
    }

    /// Text to show in the prompt
    pub fn prompt_message(&self) -> &str {
        &self.prompt
    }

    /// Prompt for a term and report it.
    pub fn activate(&self, prompter: &impl Prompter, notifier: &impl Notifier) -> SearchOutcome {
        let answer = prompter.prompt_text(&self.prompt);
        self.submit(answer, notifier)
    }

    /// Report an answer collected by the host's own prompt.
    pub fn submit(&self, answer: Option<String>, notifier: &impl Notifier) -> SearchOutcome {
        match answer {
            Some(term) if !term.is_empty() => {
                tracing::info!(target: "contactpage::search", term = %term, "Buscando");
                notifier.notify(Notice::Info, &self.pending);
                SearchOutcome::Reported { term }
            }
            _ => SearchOutcome::Cancelled,
        }
    }
}

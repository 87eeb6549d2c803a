//! Orchestration of the user actions: generate a name, render a logo, react
//! to feedback and show history.
//!
//! The controller owns the long-lived service objects. Per-user state is
//! passed in as a `&mut SessionState` and only changes when a generation
//! succeeds end to end.

use std::sync::Arc;

use serde::Serialize;

use ozilly_core::history::HistoryStore;
use ozilly_core::models::{HistoryEntry, SessionState};
use ozilly_core::parser;
use ozilly_core::placeholder::placeholder_logo_url;
use ozilly_core::sentiment::{classify, Sentiment};

use crate::llm::{LogoRenderer, TextGenerator};

/// Number of entries shown by the history display.
pub const HISTORY_DISPLAY_LIMIT: usize = 10;

pub const MSG_GENERATED: &str = "Here's your startup name:";
pub const MSG_UNPARSED: &str = "Couldn't parse the AI's response. Please try again.";
pub const MSG_FAILED: &str = "Something went wrong while generating a name. Please try again.";
pub const MSG_LOGO_RENDERED: &str = "Here's your logo idea:";
pub const MSG_LOGO_PLACEHOLDER: &str = "Logo generation failed. Here's a placeholder instead.";
pub const MSG_NEED_NAME: &str = "Generate a startup name first before generating the logo.";
pub const MSG_NEED_NAME_FOR_FEEDBACK: &str = "Generate a startup name first.";
pub const MSG_POSITIVE: &str = "Glad you liked it! You can enter a new idea above.";
pub const MSG_NO_HISTORY: &str = "No history available yet.";

/// Result of a name generation attempt.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NameOutcome {
    Generated {
        name: String,
        logo_idea: String,
        message: String,
    },
    /// The reply had no usable `Startup Name:` line.
    Unparsed { message: String },
    /// The upstream call or the history write failed.
    Failed { message: String },
}

impl NameOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LogoOutcome {
    Rendered {
        name: String,
        logo_idea: String,
        image_url: String,
        message: String,
    },
    Placeholder {
        name: String,
        logo_idea: String,
        image_url: String,
        message: String,
    },
    MissingSuggestion { message: String },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FeedbackOutcome {
    /// Negative feedback: a new suggestion was requested.
    Regenerated { outcome: NameOutcome },
    Acknowledged { message: String },
    /// Neither list matched; nothing happens.
    Ignored,
    NoSuggestion { message: String },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HistoryView {
    pub entries: Vec<HistoryEntry>,
    /// Shown instead of entries when the file is missing or unreadable.
    pub notice: Option<String>,
}

pub struct Controller {
    history: HistoryStore,
    generator: Arc<dyn TextGenerator>,
    renderer: Arc<dyn LogoRenderer>,
}

impl Controller {
    pub fn new(
        history: HistoryStore,
        generator: Arc<dyn TextGenerator>,
        renderer: Arc<dyn LogoRenderer>,
    ) -> Self {
        Self {
            history,
            generator,
            renderer,
        }
    }

    pub fn history_store(&self) -> &HistoryStore {
        &self.history
    }

    /// Generate a new suggestion for `idea`, avoiding names already stored
    /// for it. On success the entry is persisted and `session` updated.
    pub async fn generate_name(&self, session: &mut SessionState, idea: &str) -> NameOutcome {
        let blacklist = self.history.names_for(idea);

        let raw = match self.generator.generate(idea, &blacklist).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Name generation failed for '{}': {}", idea, e);
                return NameOutcome::Failed {
                    message: MSG_FAILED.to_string(),
                };
            }
        };

        let suggestion = parser::parse(&raw);
        if !suggestion.is_parsed() {
            tracing::warn!("Could not parse model reply: {:?}", raw);
            return NameOutcome::Unparsed {
                message: MSG_UNPARSED.to_string(),
            };
        }

        if let Err(e) = self
            .history
            .append(idea, &suggestion.name, &suggestion.logo_idea)
        {
            tracing::error!(
                "Failed to save suggestion to {}: {}",
                self.history.path().display(),
                e
            );
            return NameOutcome::Failed {
                message: MSG_FAILED.to_string(),
            };
        }

        tracing::info!("Generated '{}' for '{}'", suggestion.name, idea);
        session.record(idea, &suggestion);

        NameOutcome::Generated {
            name: suggestion.name,
            logo_idea: suggestion.logo_idea,
            message: MSG_GENERATED.to_string(),
        }
    }

    /// Render the current logo idea, falling back to a placeholder image.
    pub async fn generate_logo(&self, session: &SessionState) -> LogoOutcome {
        if !session.has_logo_idea() {
            return LogoOutcome::MissingSuggestion {
                message: MSG_NEED_NAME.to_string(),
            };
        }

        let name = session.current_name.clone();
        let logo_idea = session.current_logo_idea.clone();

        match self.renderer.render(&logo_idea).await {
            Some(image_url) => LogoOutcome::Rendered {
                name,
                logo_idea,
                image_url,
                message: MSG_LOGO_RENDERED.to_string(),
            },
            None => LogoOutcome::Placeholder {
                image_url: placeholder_logo_url(&name),
                name,
                logo_idea,
                message: MSG_LOGO_PLACEHOLDER.to_string(),
            },
        }
    }

    /// React to free-text feedback on the current suggestion.
    pub async fn submit_feedback(
        &self,
        session: &mut SessionState,
        feedback: &str,
    ) -> FeedbackOutcome {
        if !session.has_name() {
            return FeedbackOutcome::NoSuggestion {
                message: MSG_NEED_NAME_FOR_FEEDBACK.to_string(),
            };
        }

        let sentiment = classify(feedback);
        tracing::debug!("Feedback {:?} classified {}", feedback, sentiment.as_str());

        match sentiment {
            Sentiment::Negative => {
                let idea = session.current_idea.clone();
                let outcome = self.generate_name(session, &idea).await;
                FeedbackOutcome::Regenerated { outcome }
            }
            Sentiment::Positive => FeedbackOutcome::Acknowledged {
                message: MSG_POSITIVE.to_string(),
            },
            Sentiment::Neutral => FeedbackOutcome::Ignored,
        }
    }

    /// The most recent entries, newest first.
    pub fn history(&self) -> HistoryView {
        match self.history.recent(HISTORY_DISPLAY_LIMIT) {
            Ok(entries) => HistoryView {
                entries,
                notice: None,
            },
            Err(e) => {
                tracing::debug!("History unavailable: {}", e);
                HistoryView {
                    entries: Vec::new(),
                    notice: Some(MSG_NO_HISTORY.to_string()),
                }
            }
        }
    }
}

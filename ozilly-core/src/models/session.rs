use serde::{Deserialize, Serialize};

use super::suggestion::Suggestion;

/// What a single user session currently has on screen.
///
/// Sessions are **ephemeral**. The state starts empty, is overwritten by
/// every successful generation and is dropped with the session. A failed
/// generation leaves it exactly as it was.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    /// The idea text used for the last successful generation. Negative
    /// feedback regenerates against this, not against whatever the user has
    /// typed since.
    pub current_idea: String,
    pub current_name: String,
    pub current_logo_idea: String,
}

impl SessionState {
    /// Whether a name has been generated in this session.
    pub fn has_name(&self) -> bool {
        !self.current_name.is_empty()
    }

    /// Whether there is enough to render a logo: both a name and a logo idea.
    pub fn has_logo_idea(&self) -> bool {
        self.has_name() && !self.current_logo_idea.is_empty()
    }

    /// Replace the current suggestion after a successful generation.
    pub fn record(&mut self, idea: &str, suggestion: &Suggestion) {
        self.current_idea = idea.to_string();
        self.current_name = suggestion.name.clone();
        self.current_logo_idea = suggestion.logo_idea.clone();
    }
}

//! Runtime configuration loaded from environment variables.
//!
//! `main` loads a `.env` file from the working directory into the process
//! environment first, so the keys below can live there as well. The older
//! `.env` key names (`GroqAPIKey`, `OpenAIAPIKey`, `Assistantname`) are
//! accepted when the upper-case names are unset.

use std::path::PathBuf;

use ozilly_core::history::DEFAULT_HISTORY_FILE;
use ozilly_core::prompt::DEFAULT_ASSISTANT_NAME;

use crate::llm::groq::DEFAULT_GROQ_URL;
use crate::llm::images::DEFAULT_OPENAI_URL;

/// Everything the service objects need, read once at startup.
///
/// Credentials are optional on purpose: a missing key is not reported here,
/// the request goes out without one and the upstream rejects it.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Text-generation API key (from GROQ_API_KEY or GroqAPIKey)
    pub groq_api_key: Option<String>,
    /// Image-generation API key (from OPENAI_API_KEY or OpenAIAPIKey)
    pub openai_api_key: Option<String>,
    /// Persona name used in the system prompt (from OZILLY_ASSISTANT_NAME or Assistantname)
    pub assistant_name: String,
    /// Base URL of the chat completions API (from OZILLY_GROQ_URL)
    pub groq_base_url: String,
    /// Base URL of the image generation API (from OZILLY_OPENAI_URL)
    pub openai_base_url: String,
    /// History file location (from OZILLY_HISTORY_FILE)
    pub history_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |keys: &[&str]| first_set(&lookup, keys);

        Self {
            groq_api_key: get(&["GROQ_API_KEY", "GroqAPIKey"][..]),
            openai_api_key: get(&["OPENAI_API_KEY", "OpenAIAPIKey"][..]),
            assistant_name: get(&["OZILLY_ASSISTANT_NAME", "Assistantname"][..])
                .unwrap_or_else(|| DEFAULT_ASSISTANT_NAME.to_string()),
            groq_base_url: get(&["OZILLY_GROQ_URL"][..])
                .unwrap_or_else(|| DEFAULT_GROQ_URL.to_string()),
            openai_base_url: get(&["OZILLY_OPENAI_URL"][..])
                .unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string()),
            history_path: get(&["OZILLY_HISTORY_FILE"][..])
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE)),
        }
    }
}

/// First non-blank value among `keys`, in order.
fn first_set(lookup: &impl Fn(&str) -> Option<String>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| lookup(*key).filter(|v| !v.trim().is_empty()))
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

//! Chat completions client used for name generation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use ozilly_core::prompt::{combined_prompt, system_prompt};

use super::{handle_response, ClientError, TextGenerator};

/// Default base URL of the Groq OpenAI-compatible API.
pub const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai/v1";

pub const MODEL: &str = "llama3-70b-8192";
/// High enough to get varied names on every regeneration.
pub const TEMPERATURE: f64 = 0.9;
pub const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Stateless chat client: every call sends the system prompt and a single
/// user turn, nothing from earlier calls.
#[derive(Debug, Clone)]
pub struct GroqClient {
    base_url: String,
    api_key: Option<String>,
    system_prompt: String,
    client: Client,
}

impl GroqClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, assistant_name: &str) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            system_prompt: system_prompt(assistant_name),
            client: Client::new(),
        }
    }

    /// The exact request body sent for `idea` and `blacklist`.
    pub fn build_request(&self, idea: &str, blacklist: &[String]) -> ChatRequest {
        ChatRequest {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage::new("system", self.system_prompt.clone()),
                ChatMessage::new("user", combined_prompt(idea, blacklist)),
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

#[async_trait]
impl TextGenerator for GroqClient {
    async fn generate(&self, idea: &str, blacklist: &[String]) -> Result<String, ClientError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = self.build_request(idea, blacklist);

        tracing::debug!(
            "Requesting suggestion for '{}' avoiding {} names",
            idea,
            blacklist.len()
        );

        let mut req = self.client.post(&url).json(&body);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }
        let response: ChatResponse = handle_response(req.send().await?).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ClientError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_has_system_and_single_user_turn() {
        let client = GroqClient::new(DEFAULT_GROQ_URL, None, "Ozilly AI");
        let request = client.build_request("a bakery", &[]);

        assert_eq!(request.model, MODEL);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert!(request.messages[0].content.starts_with("You are Ozilly AI,"));
        assert_eq!(request.messages[1], ChatMessage::new("user", "a bakery"));
    }

    #[test]
    fn request_serializes_sampling_settings() {
        let client = GroqClient::new(DEFAULT_GROQ_URL, None, "Ozilly AI");
        let value = serde_json::to_value(client.build_request("x", &[])).unwrap();

        assert_eq!(value["max_tokens"], 1024);
        assert_eq!(value["temperature"], 0.9);
        assert!(serde_json::to_string(&value).unwrap().contains("\"temperature\":0.9"));
    }

    #[test]
    fn blacklist_goes_into_user_turn() {
        let client = GroqClient::new(DEFAULT_GROQ_URL, None, "Ozilly AI");
        let names = vec!["Alpha".to_string(), "Beta".to_string()];
        let request = client.build_request("a bakery", &names);

        let user = &request.messages[1].content;
        assert!(user.contains("Alpha"));
        assert!(user.contains("Beta"));
        assert!(user.contains("Avoid using these names"));
    }
}

//! Clients for the two upstream model APIs.
//!
//! Both speak the OpenAI-compatible JSON dialect over HTTPS with a bearer
//! key. The controller only sees the [`TextGenerator`] and [`LogoRenderer`]
//! traits, so tests can swap in fakes.

pub mod groq;
pub mod images;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use groq::GroqClient;
pub use images::ImageClient;

/// Upstream API errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unauthorized: API key missing or invalid")]
    Unauthorized,

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("API returned no content")]
    EmptyResponse,
}

/// Produces raw model text for an idea.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Ask for a name and logo idea for `idea`, avoiding every name in
    /// `blacklist`. Returns the reply text unparsed.
    async fn generate(&self, idea: &str, blacklist: &[String]) -> Result<String, ClientError>;
}

/// Turns a logo description into an image URL.
#[async_trait]
pub trait LogoRenderer: Send + Sync {
    /// `None` means rendering failed for any reason; the caller falls back
    /// to a placeholder.
    async fn render(&self, logo_idea: &str) -> Option<String>;
}

/// Decode a successful response, converting HTTP errors to ClientError.
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => Err(ClientError::RateLimited(body)),
            _ => Err(ClientError::Api(format!("{}: {}", status, body))),
        }
    }
}

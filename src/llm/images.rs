//! Image generation client used for logo rendering.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{handle_response, ClientError, LogoRenderer};

/// Default base URL of the OpenAI API.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";

pub const MODEL: &str = "dall-e-3";
pub const SIZE: &str = "1024x1024";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub n: u32,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ImageClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl ImageClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            client: Client::new(),
        }
    }

    /// One square image for `prompt`.
    pub fn build_request(&self, prompt: &str) -> ImageRequest {
        ImageRequest {
            model: MODEL.to_string(),
            prompt: prompt.to_string(),
            size: SIZE.to_string(),
            n: 1,
        }
    }

    /// Like [`LogoRenderer::render`], but keeps the error.
    pub async fn try_render(&self, prompt: &str) -> Result<String, ClientError> {
        let url = format!("{}/images/generations", self.base_url);

        let mut req = self.client.post(&url).json(&self.build_request(prompt));
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }
        let response: ImageResponse = handle_response(req.send().await?).await?;

        response
            .data
            .into_iter()
            .next()
            .and_then(|image| image.url)
            .ok_or(ClientError::EmptyResponse)
    }
}

#[async_trait]
impl LogoRenderer for ImageClient {
    async fn render(&self, logo_idea: &str) -> Option<String> {
        match self.try_render(logo_idea).await {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Logo rendering failed: {}", e);
                None
            }
        }
    }
}

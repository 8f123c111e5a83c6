//! Generative backends for the assistant bridge.
//!
//! [`GenerativeBackend`] is the seam between the shop and the external
//! text-generation service; [`GeminiBackend`] is the production
//! implementation speaking the Generative Language HTTP API. Tests swap in
//! a scripted backend instead of touching the network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assistant::AssistantError;

const GENERATIVE_LANGUAGE_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A service that turns a text prompt into a text reply.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError>;
}

/// Backend speaking the Generative Language `generateContent` endpoint.
pub struct GeminiBackend {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: GENERATIVE_LANGUAGE_BASE.to_string(),
        }
    }

    /// Overrides the service base URL (used by tests against a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(model = %self.model, "sending generate request");
        let response: GenerateResponse = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AssistantError::Api("no candidates in response".to_string()))
    }
}

// Wire types for the generateContent call.

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

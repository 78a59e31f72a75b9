use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::GenerationClient;
use crate::domain::{GenerationRequest, TutorError};

/// Default target: Ollama running locally on its standard port.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:11434";
const GENERATE_PATH: &str = "/api/generate";
/// Small model keeps local answers fast.
pub const DEFAULT_MODEL: &str = "phi3";

/// Wall-clock bound on a single generation call. On expiry the call is
/// abandoned and treated as a failure; there is no partial-result handling.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: ApiOptions,
}

#[derive(serde::Serialize)]
struct ApiOptions {
    num_predict: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Minimal subset of the Ollama generate response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    response: Option<String>,
}

/// HTTP client for the Ollama generate API.
///
/// Implements [`GenerationClient`] so the use cases stay decoupled from
/// transport and serialization details. The backend is treated as opaque and
/// unauthenticated; no retries are attempted.
pub struct OllamaClient {
    client: reqwest::Client,
    model: String,
    /// Full endpoint URL (base + GENERATE_PATH).
    url: String,
}

impl OllamaClient {
    pub fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{GENERATE_PATH}", base.trim_end_matches('/'));
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            model: model.into(),
            url,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerationClient for OllamaClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, TutorError> {
        let api_request = ApiRequest {
            model: &self.model,
            prompt: request.prompt(),
            stream: false,
            options: ApiOptions {
                num_predict: request.num_predict(),
                temperature: request.temperature(),
            },
        };

        let response = self
            .client
            .post(&self.url)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TutorError::timeout(format!("OllamaClient: request timed out: {e}"))
                } else {
                    TutorError::backend(format!("OllamaClient: request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OllamaClient: backend returned {status}: {body}");
            return Err(TutorError::backend(format!(
                "OllamaClient: backend returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            TutorError::backend(format!("OllamaClient: failed to parse response: {e}"))
        })?;

        Ok(api_response.response.unwrap_or_default())
    }
}

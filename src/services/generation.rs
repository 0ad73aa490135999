use crate::models::PairingResult;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the text-generation service
///
/// None of these are recovered locally; the request handler surfaces them
/// as a user-visible error state.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Request body for the generate endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

/// Response body of the generate endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

/// Client for the Ollama-compatible text-generation service
///
/// Host and model are resolved once at process start from configuration.
pub struct GenerationClient {
    base_url: String,
    model: String,
    client: Client,
}

impl GenerationClient {
    pub fn new(base_url: String, model: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            client,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text for a prompt
    ///
    /// Non-streaming call; either the full response text comes back or the
    /// error propagates to the caller. No retries.
    pub async fn generate(&self, prompt: &str) -> Result<PairingResult, GenerationError> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::error!("Generation API timeout");
                } else if e.is_connect() {
                    tracing::error!("Failed to connect to generation API");
                }
                e
            })?;

        if !response.status().is_success() {
            return Err(GenerationError::Api(format!(
                "Generation request failed: {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let payload: GenerateResponse = serde_json::from_str(&body).map_err(|e| {
            GenerationError::InvalidResponse(format!("bad generation payload: {}", e))
        })?;

        tracing::debug!(
            "Generation call returned {} characters",
            payload.response.len()
        );

        Ok(PairingResult {
            response_text: payload.response,
        })
    }

    /// Whether the generation service answers at all, for the health
    /// endpoint
    pub async fn health(&self) -> bool {
        match self.client.get(&self.base_url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Generation service health probe failed: {}", e);
                false
            }
        }
    }
}

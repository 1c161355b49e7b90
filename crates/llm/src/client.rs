use bookinfo_common::{BookInfoError, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::backend::InvocationError;
use crate::types::{ErrorBody, GenerateRequest, GenerateResponse, ModelTag, TagsResponse};

/// Ollama API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    client: Client,
}

impl OllamaClient {
    /// Create new Ollama client
    ///
    /// No request timeout is set: generation may take as long as the model needs.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .build()
            .map_err(|e| BookInfoError::internal(format!("Failed to create HTTP client: {}", e)))?;

        info!("Ollama client initialized: {}", base_url);
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate text with `model`. Single attempt, no retry.
    pub async fn generate(&self, model: &str, prompt: &str) -> std::result::Result<String, InvocationError> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest::new(model, prompt);

        debug!(
            "Sending generate request to Ollama - Model: {}, Prompt length: {}",
            request.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| InvocationError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(InvocationError::ModelNotFound {
                model: model.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InvocationError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| InvocationError::InvalidResponse(e.to_string()))?;

        debug!(
            "Received response from Ollama - Model: {}, Length: {}, Done: {}",
            result.model,
            result.response.len(),
            result.done
        );

        Ok(result.response)
    }

    /// Models pulled into the local Ollama instance
    pub async fn list_models(&self) -> std::result::Result<Vec<ModelTag>, InvocationError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| InvocationError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InvocationError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| InvocationError::InvalidResponse(e.to_string()))?;

        Ok(tags.models)
    }

    /// Whether `model` has been pulled
    pub async fn has_model(&self, model: &str) -> std::result::Result<bool, InvocationError> {
        let models = self.list_models().await?;
        Ok(models.iter().any(|tag| tag.matches(model)))
    }

    /// Test connection to Ollama
    pub async fn test_connection(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Ollama connection test failed: {}", e);
                false
            }
        }
    }
}

/// Prefer Ollama's `{"error": ...}` field, else the raw body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => "no details".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

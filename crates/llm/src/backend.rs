use async_trait::async_trait;

use crate::client::OllamaClient;

/// Failure at the model-serving boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    /// Model server could not be contacted
    #[error("could not reach the model server: {0}")]
    Unreachable(String),

    /// Server is up but does not have the model
    #[error("model '{model}' is not available on the model server")]
    ModelNotFound { model: String },

    /// Any other non-success status
    #[error("model server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Reply body could not be decoded
    #[error("invalid response from the model server: {0}")]
    InvalidResponse(String),
}

/// A language model that turns a prompt into text
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Run `prompt` and return the generated text
    async fn invoke(&self, prompt: &str) -> Result<String, InvocationError>;
}

/// Ollama-hosted model addressed by a fixed name
#[derive(Debug, Clone)]
pub struct OllamaBackend {
    client: OllamaClient,
    model: String,
}

impl OllamaBackend {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl ModelBackend for OllamaBackend {
    async fn invoke(&self, prompt: &str) -> Result<String, InvocationError> {
        self.client.generate(&self.model, prompt).await
    }
}

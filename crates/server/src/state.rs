use bookinfo_common::{AppConfig, Result};
use bookinfo_llm::{BookLookup, ModelBackend, OllamaBackend, OllamaClient};
use std::sync::Arc;
use tracing::info;

/// Shared application state
///
/// Read-only after startup; everything per-submission lives in a `RequestContext`.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Submission handler
    pub lookup: BookLookup,

    /// Ollama client used by the health check
    pub ollama: OllamaClient,
}

impl AppState {
    /// State backed by the configured Ollama model
    pub fn new(config: AppConfig) -> Result<Self> {
        let ollama = OllamaClient::new(config.ollama_base_url.clone())?;
        let backend = OllamaBackend::new(ollama.clone(), config.llm_model.clone());
        let lookup = BookLookup::new(Arc::new(backend), config.llm_model.clone());
        info!("Using model '{}' at {}", lookup.model(), ollama.base_url());

        Ok(Self {
            lookup,
            ollama,
            config,
        })
    }

    /// State with a substitute model backend
    pub fn with_backend(config: AppConfig, backend: Arc<dyn ModelBackend>) -> Result<Self> {
        let ollama = OllamaClient::new(config.ollama_base_url.clone())?;
        let lookup = BookLookup::new(backend, config.llm_model.clone());
        info!("Using substitute backend for model '{}'", lookup.model());

        Ok(Self {
            lookup,
            ollama,
            config,
        })
    }
}

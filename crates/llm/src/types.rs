use serde::{Deserialize, Serialize};

/// Ollama generate request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model name (e.g., "dolphin-phi", "llama3.2")
    pub model: String,

    /// Prompt text
    pub prompt: String,

    /// Always false: the whole reply is read as one JSON object
    pub stream: bool,
}

impl GenerateRequest {
    /// Non-streaming request for `model`
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// Ollama generate response
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Model name
    #[serde(default)]
    pub model: String,

    /// Generated text
    pub response: String,

    /// Whether generation is complete
    #[serde(default)]
    pub done: bool,
}

/// Error body returned by Ollama on non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `GET /api/tags` response
#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

/// Locally available model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelTag {
    /// Tagged name, e.g. "dolphin-phi:latest"
    pub name: String,

    /// Size on disk in bytes
    #[serde(default)]
    pub size: u64,
}

impl ModelTag {
    /// Whether this tag refers to `model`; an untagged name matches `:latest`
    pub fn matches(&self, model: &str) -> bool {
        if self.name == model {
            return true;
        }
        !model.contains(':')
            && self
                .name
                .strip_suffix(":latest")
                .is_some_and(|base| base == model)
    }
}

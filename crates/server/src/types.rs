use bookinfo_llm::{BookInfo, RequestContext, ResponseLine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page form submission
#[derive(Debug, Deserialize)]
pub struct LookupForm {
    #[serde(default)]
    pub book_title: String,
}

/// JSON lookup request
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub title: String,
}

/// JSON lookup response; failures use `BookInfoError`'s error body
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResponse {
    /// Always "ok"
    pub status: String,

    pub request_id: String,

    /// Title sent to the model (trimmed)
    pub title: String,

    /// Formatted reply; empty when the model replied with nothing
    pub lines: Vec<ResponseLine>,

    pub generated_at: DateTime<Utc>,
}

impl LookupResponse {
    pub fn new(ctx: &RequestContext, info: BookInfo) -> Self {
        Self {
            status: "ok".to_string(),
            request_id: ctx.request_id.to_string(),
            title: info.title,
            lines: info.lines,
            generated_at: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" or "unavailable"
    pub status: String,
    pub ollama_reachable: bool,
    pub model: String,
    pub model_available: bool,
}

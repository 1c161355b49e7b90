use bookinfo_common::BookInfoError;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

use crate::backend::{InvocationError, ModelBackend};
use crate::formatter::{format_response, ResponseLine};
use crate::prompts::book_prompt;

/// Warning shown when the title is empty
pub const EMPTY_TITLE_WARNING: &str = "Please enter a book title.";

/// Per-submission values, passed explicitly into [`BookLookup::submit`]
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlates log lines of one submission
    pub request_id: Uuid,

    /// Title as entered by the user
    pub title: String,
}

impl RequestContext {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            title: title.into(),
        }
    }
}

/// Formatted answer for one title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookInfo {
    /// Title sent to the model (trimmed)
    pub title: String,

    /// Display lines; empty when the model replied with nothing
    pub lines: Vec<ResponseLine>,
}

/// Result of one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// Rejected before contacting the model
    Warning { message: String },

    /// Formatted model reply
    Info { title: String, lines: Vec<ResponseLine> },

    /// Model call failed; nothing else is shown
    Error { message: String },
}

impl LookupOutcome {
    pub fn is_info(&self) -> bool {
        matches!(self, Self::Info { .. })
    }
}

/// Submission handler: prompt, model call, formatting
pub struct BookLookup {
    backend: Arc<dyn ModelBackend>,
    model: String,
    // one model call in flight at a time
    gate: Mutex<()>,
}

impl BookLookup {
    /// `model` names the model in the remedial hint shown on failure
    pub fn new(backend: Arc<dyn ModelBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
            gate: Mutex::new(()),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Handle one submission for display
    pub async fn submit(&self, ctx: &RequestContext) -> LookupOutcome {
        match self.fetch(ctx).await {
            Ok(BookInfo { title, lines }) => LookupOutcome::Info { title, lines },
            Err(BookInfoError::InvalidInput(message)) => LookupOutcome::Warning { message },
            Err(e) => LookupOutcome::Error { message: e.message() },
        }
    }

    /// Handle one submission as a `Result`
    ///
    /// An empty title is `InvalidInput`; a failed model call is `Network` when
    /// the server is unreachable, else `Llm`. Both carry the `ollama pull` hint.
    pub async fn fetch(&self, ctx: &RequestContext) -> Result<BookInfo, BookInfoError> {
        let span = info_span!("lookup", request_id = %ctx.request_id);
        self.fetch_inner(ctx).instrument(span).await
    }

    async fn fetch_inner(&self, ctx: &RequestContext) -> Result<BookInfo, BookInfoError> {
        let title = ctx.title.trim();
        if title.is_empty() {
            info!("Rejected empty book title");
            return Err(BookInfoError::invalid_input(EMPTY_TITLE_WARNING));
        }

        let prompt = book_prompt(title);
        info!("Fetching book information for '{}' using {}", title, self.model);
        debug!("Prompt length: {}", prompt.len());

        let reply = {
            let _guard = self.gate.lock().await;
            self.backend.invoke(&prompt).await
        };

        match reply {
            Ok(raw) => {
                let lines = format_response(&raw);
                debug!("Reply length: {}, display lines: {}", raw.len(), lines.len());
                Ok(BookInfo {
                    title: title.to_string(),
                    lines,
                })
            }
            Err(e) => {
                error!("Book information request failed: {}", e);
                let message = self.failure_message(&e.to_string());
                Err(match e {
                    InvocationError::Unreachable(_) => BookInfoError::network(message),
                    _ => BookInfoError::llm(message),
                })
            }
        }
    }

    fn failure_message(&self, cause: &str) -> String {
        format!(
            "An error occurred: {}\n\nEnsure the {} model is pulled (run: 'ollama pull {}')",
            cause, self.model, self.model
        )
    }
}

//! Book information over a local language model
//!
//! Prompt template, Ollama client, reply formatting and the submission handler

mod backend;
mod client;
mod formatter;
mod lookup;
mod prompts;
mod types;

pub use backend::{InvocationError, ModelBackend, OllamaBackend};
pub use client::OllamaClient;
pub use formatter::{format_response, render_html, render_markdown, ResponseLine, BULLET_MARKER};
pub use lookup::{BookInfo, BookLookup, LookupOutcome, RequestContext, EMPTY_TITLE_WARNING};
pub use prompts::{book_prompt, BOOK_PROMPT, FIELD_LABELS};
pub use types::{GenerateRequest, GenerateResponse, ModelTag};

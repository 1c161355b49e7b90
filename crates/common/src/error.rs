use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

/// Book information assistant error types
#[derive(Debug, thiserror::Error)]
pub enum BookInfoError {
    /// Model server answered with a failure
    #[error("LLM error: {0}")]
    Llm(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model server could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BookInfoError {
    /// Create LLM error
    pub fn llm<S: Into<String>>(msg: S) -> Self {
        Self::Llm(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// Message without the category prefix
    pub fn message(&self) -> String {
        match self {
            Self::Llm(msg)
            | Self::Config(msg)
            | Self::Network(msg)
            | Self::InvalidInput(msg)
            | Self::Internal(msg) => msg.clone(),
            Self::Io(err) => err.to_string(),
        }
    }
}

// HTTP response conversion
impl BookInfoError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Llm(_) => 502,
            Self::Network(_) => 503,
            Self::Config(_) | Self::Internal(_) | Self::Io(_) => 500,
        }
    }
}

/// JSON body for failed API requests
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// "warning" for rejected input, else "error"
    status: &'static str,
    message: String,
}

impl ResponseError for BookInfoError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(BookInfoError::status_code(self))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status = match self {
            Self::InvalidInput(_) => "warning",
            _ => "error",
        };

        HttpResponse::build(ResponseError::status_code(self)).json(ErrorResponse {
            status,
            message: self.message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(BookInfoError::invalid_input("empty").status_code(), 400);
        assert_eq!(BookInfoError::network("down").status_code(), 503);
        assert_eq!(BookInfoError::llm("bad reply").status_code(), 502);
        assert_eq!(BookInfoError::config("port").status_code(), 500);
    }

    #[test]
    fn test_error_response_status() {
        let resp = BookInfoError::invalid_input("Please enter a book title.").error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = BookInfoError::network("connection refused").error_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let resp = BookInfoError::llm("out of memory").error_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_message_drops_prefix() {
        let err = BookInfoError::config("Server port cannot be 0");
        assert_eq!(err.to_string(), "Configuration error: Server port cannot be 0");
        assert_eq!(err.message(), "Server port cannot be 0");
    }
}

//! Shared fixtures for route tests

use async_trait::async_trait;
use bookinfo_common::AppConfig;
use bookinfo_llm::{InvocationError, ModelBackend};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::state::AppState;

/// Canned model reply, counts invocations
pub struct StubBackend {
    reply: Result<String, InvocationError>,
    calls: AtomicUsize,
}

impl StubBackend {
    pub fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Self::failing(InvocationError::Unreachable("connection refused".to_string()))
    }

    pub fn failing(err: InvocationError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(err),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelBackend for StubBackend {
    async fn invoke(&self, _prompt: &str) -> Result<String, InvocationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

/// Default config backed by `backend`
pub fn test_state(backend: Arc<StubBackend>) -> (Arc<AppState>, Arc<StubBackend>) {
    let state = AppState::with_backend(AppConfig::default(), backend.clone())
        .expect("state");
    (Arc::new(state), backend)
}

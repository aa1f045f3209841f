#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use completion_gateway::{CompletionGateway, CompletionProvider, LlmError};

/// What the stub does when called.
pub enum StubBehavior {
    Reply(&'static str),
    Timeout,
    ApiError(u16),
    /// Wait before replying, to exercise concurrent callers.
    DelayedReply(&'static str, Duration),
}

/// In-memory [`CompletionProvider`] that records every prompt it receives.
pub struct StubProvider {
    behavior: StubBehavior,
    received: Mutex<Vec<Option<String>>>,
}

impl StubProvider {
    pub fn new(behavior: StubBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn received(&self) -> Vec<Option<String>> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, prompt: Option<String>) -> Result<String, LlmError> {
        self.received.lock().unwrap().push(prompt);

        match &self.behavior {
            StubBehavior::Reply(text) => Ok(text.to_string()),
            StubBehavior::DelayedReply(text, delay) => {
                tokio::time::sleep(*delay).await;
                Ok(text.to_string())
            }
            StubBehavior::Timeout => Err(LlmError::Timeout {
                message: "stubbed timeout".to_string(),
                source: None,
            }),
            StubBehavior::ApiError(status) => Err(LlmError::Api {
                message: format!("stubbed status {status}"),
                status_code: Some(*status),
                source: None,
            }),
        }
    }
}

pub fn gateway_with(stub: &Arc<StubProvider>) -> CompletionGateway {
    CompletionGateway::new(stub.clone())
}

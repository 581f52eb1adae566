use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::TextGenerator;
use crate::error::AIError;

/// Scripted outcome for one `generate` call.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Text(String),
    Failure(String),
}

/// A recorded call to the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub model_id: String,
    pub prompt: String,
}

/// Shared control over a `MockGenerator`: queue responses, inspect calls.
#[derive(Debug, Default)]
pub struct MockHandle {
    responses: Mutex<VecDeque<MockResponse>>,
    calls: Mutex<Vec<MockCall>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockHandle {
    pub fn push(&self, response: MockResponse) {
        lock(&self.responses).push_back(response);
    }

    pub fn push_text(&self, text: impl Into<String>) {
        self.push(MockResponse::Text(text.into()));
    }

    pub fn push_failure(&self, message: impl Into<String>) {
        self.push(MockResponse::Failure(message.into()));
    }

    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn called_models(&self) -> Vec<String> {
        lock(&self.calls).iter().map(|c| c.model_id.clone()).collect()
    }
}

/// Mock client for testing. Responses are consumed in call order; an empty
/// queue answers with a failure.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    handle: Arc<MockHandle>,
}

impl MockGenerator {
    pub fn new() -> (Self, Arc<MockHandle>) {
        let handle = Arc::new(MockHandle::default());
        (Self { handle: handle.clone() }, handle)
    }

    pub fn with_responses(responses: Vec<MockResponse>) -> (Self, Arc<MockHandle>) {
        let (mock, handle) = Self::new();
        for response in responses {
            handle.push(response);
        }
        (mock, handle)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, AIError> {
        lock(&self.handle.calls).push(MockCall {
            model_id: model_id.to_string(),
            prompt: prompt.to_string(),
        });
        match lock(&self.handle.responses).pop_front() {
            Some(MockResponse::Text(text)) => Ok(text),
            Some(MockResponse::Failure(message)) => Err(AIError::Mock(message)),
            None => Err(AIError::Mock(format!("no scripted response for {model_id}"))),
        }
    }
}

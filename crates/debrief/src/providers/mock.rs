use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;

use crate::errors::QueryResult;
use crate::models::message::Message;
use crate::providers::base::{Provider, Usage};

/// A mock provider that returns pre-configured responses for testing
pub struct MockProvider {
    responses: Arc<Mutex<Vec<QueryResult<Message>>>>,
    requests: Arc<Mutex<Vec<(String, Vec<Message>)>>>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of responses
    pub fn new(responses: Vec<QueryResult<Message>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every (system, messages) pair passed to `complete`, in call order
    pub fn requests(&self) -> Vec<(String, Vec<Message>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, system: &str, messages: &[Message]) -> QueryResult<(Message, Usage)> {
        self.requests
            .lock()
            .unwrap()
            .push((system.to_string(), messages.to_vec()));

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Return empty response if no more pre-configured responses
            Ok((Message::assistant(""), Usage::default()))
        } else {
            responses.remove(0).map(|message| (message, Usage::default()))
        }
    }
}

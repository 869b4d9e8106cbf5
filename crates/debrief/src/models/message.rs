use super::role::Role;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A message to or from an LLM
pub struct Message {
    pub role: Role,
    pub created: i64,
    pub content: String,
}

impl Message {
    /// Create a new user message with the current timestamp
    pub fn user<S: Into<String>>(text: S) -> Self {
        Message {
            role: Role::User,
            created: Utc::now().timestamp(),
            content: text.into(),
        }
    }

    /// Create a new assistant message with the current timestamp
    pub fn assistant<S: Into<String>>(text: S) -> Self {
        Message {
            role: Role::Assistant,
            created: Utc::now().timestamp(),
            content: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.content
    }
}

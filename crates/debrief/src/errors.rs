use serde::{Deserialize, Serialize};
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum QueryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Backend rejected the request (status {status}): {message}")]
    BackendRejected { status: u16, message: String },
}

impl QueryError {
    /// Remove every occurrence of `secret` from the error text
    pub fn redact(self, secret: &str) -> Self {
        if secret.is_empty() {
            return self;
        }
        let scrub = |text: String| text.replace(secret, "[REDACTED]");
        match self {
            QueryError::InvalidInput(msg) => QueryError::InvalidInput(scrub(msg)),
            QueryError::BackendUnavailable(msg) => QueryError::BackendUnavailable(scrub(msg)),
            QueryError::BackendRejected { status, message } => QueryError::BackendRejected {
                status,
                message: scrub(message),
            },
        }
    }
}

pub type QueryResult<T> = Result<T, QueryError>;

use serde::Serialize;

use crate::errors::{QueryError, QueryResult};
use crate::models::message::Message;
use crate::prompt_template::{load_prompt, ANALYST_TEMPLATE};

/// Subject used in the system instruction when no candidate name is known
pub const DEFAULT_SUBJECT: &str = "the candidate";

pub const QUESTION_PREFIX: &str = "User Question: ";

#[derive(Serialize)]
struct AnalystContext<'a> {
    subject: &'a str,
}

/// The model-ready pair sent for a single turn: system instruction, then the user message
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: Message,
}

impl Prompt {
    pub fn messages(&self) -> &[Message] {
        std::slice::from_ref(&self.user)
    }
}

/// Combine the context document and the latest question into a [`Prompt`].
///
/// Fails with [`QueryError::InvalidInput`] when the question is blank; callers must not
/// dispatch in that case.
pub fn build_prompt(context: &str, question: &str, subject: Option<&str>) -> QueryResult<Prompt> {
    if question.trim().is_empty() {
        return Err(QueryError::InvalidInput(
            "question must not be empty".to_string(),
        ));
    }

    let subject = subject
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SUBJECT);
    let system = load_prompt(ANALYST_TEMPLATE, &AnalystContext { subject })
        .map_err(|e| QueryError::InvalidInput(format!("could not render system prompt: {}", e)))?;

    let user = Message::user(format!("{}\n\n{}{}", context, QUESTION_PREFIX, question));

    Ok(Prompt {
        system: system.trim_end().to_string(),
        user,
    })
}

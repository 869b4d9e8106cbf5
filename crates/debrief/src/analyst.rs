use std::sync::Arc;

use crate::context::format_context;
use crate::errors::QueryResult;
use crate::models::interview::InterviewRecord;
use crate::prompt::{build_prompt, Prompt};
use crate::providers::base::Provider;

/// Send a built prompt to the provider and return the answer text.
///
/// One request per call: no retries, no caching.
pub async fn dispatch(provider: &dyn Provider, prompt: &Prompt) -> QueryResult<String> {
    let (message, usage) = provider.complete(&prompt.system, prompt.messages()).await?;
    tracing::debug!(
        input_tokens = ?usage.input_tokens,
        output_tokens = ?usage.output_tokens,
        "completion received"
    );
    Ok(message.content)
}

/// Analyst answers questions about a single completed interview.
///
/// Each question is answered from a freshly formatted context plus that one question;
/// earlier turns of the conversation are never sent to the model.
pub struct Analyst {
    provider: Arc<dyn Provider>,
}

impl Analyst {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    pub async fn ask(&self, interview: &InterviewRecord, question: &str) -> QueryResult<String> {
        tracing::info!(
            transcript_len = interview.transcript.len(),
            has_analytics = interview.analytics.is_some(),
            has_call_analysis = interview.call_analysis.is_some(),
            "analyzing transcript"
        );

        let context = format_context(
            &interview.transcript,
            interview.analytics.as_ref(),
            interview.call_analysis.as_ref(),
        );
        let prompt = build_prompt(&context, question, interview.subject_name())?;
        let answer = dispatch(self.provider.as_ref(), &prompt).await?;

        tracing::info!("transcript analysis completed");
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::QueryError;
    use crate::models::analytics::{Analytics, Communication};
    use crate::models::message::Message;
    use crate::models::role::Role;
    use crate::providers::mock::MockProvider;

    fn interview() -> InterviewRecord {
        InterviewRecord::new("Agent: Tell me about yourself.\nUser: I build backend systems.")
            .with_analytics(Analytics {
                overall_score: Some(82.0),
                communication: Some(Communication {
                    score: Some(7.0),
                    feedback: Some("clear".to_string()),
                }),
                ..Default::default()
            })
    }

    #[tokio::test]
    async fn test_ask_end_to_end() {
        let mock = Arc::new(MockProvider::new(vec![Ok(Message::assistant(
            "Strong backend experience.",
        ))]));
        let analyst = Analyst::new(mock.clone());

        let answer = analyst
            .ask(&interview(), "What were the candidate's strengths?")
            .await
            .unwrap();
        assert_eq!(answer, "Strong backend experience.");

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        let (system, messages) = &requests[0];
        assert!(system.contains("(the candidate)"));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::User);

        let user = messages[0].text();
        assert!(user.starts_with(
            "Interview Transcript:\nAgent: Tell me about yourself.\nUser: I build backend systems."
        ));
        assert!(user.contains("Overall Hiring Score: 82%"));
        assert!(user.contains("Communication Score: 7/10"));
        assert!(user.contains("Communication Feedback: clear"));
        assert!(user.ends_with("User Question: What were the candidate's strengths?"));
    }

    #[tokio::test]
    async fn test_blank_question_never_reaches_provider() {
        let mock = Arc::new(MockProvider::new(vec![]));
        let analyst = Analyst::new(mock.clone());

        let err = analyst.ask(&interview(), "   ").await.unwrap_err();
        assert!(matches!(err, QueryError::InvalidInput(_)));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_provider_errors_propagate() {
        let mock = MockProvider::new(vec![Err(QueryError::BackendUnavailable(
            "dns error".to_string(),
        ))]);
        let analyst = Analyst::new(Arc::new(mock));

        let err = analyst.ask(&interview(), "Hire?").await.unwrap_err();
        assert_eq!(err, QueryError::BackendUnavailable("dns error".to_string()));
    }

    #[tokio::test]
    async fn test_turns_are_stateless() {
        let mock = Arc::new(MockProvider::new(vec![
            Ok(Message::assistant("one")),
            Ok(Message::assistant("two")),
        ]));
        let analyst = Analyst::new(mock.clone());
        let record = interview().with_candidate_name("Jordan");

        analyst.ask(&record, "First?").await.unwrap();
        analyst.ask(&record, "Second?").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].0.contains("(Jordan)"));
        assert!(!requests[1].1[0].text().contains("First?"));
        assert!(requests[1].1[0].text().ends_with("User Question: Second?"));
    }
}

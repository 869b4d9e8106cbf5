use anyhow::Result;
use console::style;

use crate::prompt::{InputType, Prompt};
use debrief::analyst::Analyst;
use debrief::conversation::Conversation;
use debrief::models::interview::InterviewRecord;
use debrief::models::message::Message;
use debrief::prompt::DEFAULT_SUBJECT;

/// Shown as the assistant's turn when a question could not be answered
pub const APOLOGY: &str = "I'm sorry, I couldn't process your question. Please try again.";

/// One interactive conversation about one interview.
///
/// Questions are handled one at a time: input is not read again until the current
/// answer has been appended, so the conversation keeps strict question/answer order.
pub struct Session<'a> {
    analyst: Analyst,
    interview: InterviewRecord,
    conversation: Conversation,
    prompt: Box<dyn Prompt + 'a>,
}

impl<'a> Session<'a> {
    pub fn new(analyst: Analyst, interview: InterviewRecord, prompt: Box<dyn Prompt + 'a>) -> Self {
        Session {
            analyst,
            interview,
            conversation: Conversation::new(),
            prompt,
        }
    }

    pub async fn start(&mut self) -> Result<()> {
        let subject = self
            .interview
            .subject_name()
            .unwrap_or(DEFAULT_SUBJECT)
            .to_string();
        self.prompt.ready(&subject);

        loop {
            let input = self.prompt.get_input()?;
            match input.input_type {
                InputType::Exit => break,
                InputType::AskAgain => continue,
                InputType::Message => {
                    if let Some(question) = input.content {
                        self.turn(&question).await;
                    }
                }
            }
        }

        self.prompt.close();
        Ok(())
    }

    /// Ask one question and record both sides of the exchange
    pub async fn turn(&mut self, question: &str) {
        self.conversation.append(Message::user(question));

        self.prompt.show_busy();
        let result = self.analyst.ask(&self.interview, question).await;
        self.prompt.hide_busy();

        let answer = match result {
            Ok(answer) => answer,
            Err(e) => {
                eprintln!("{}", style(format!("Error getting answer: {}", e)).red());
                APOLOGY.to_string()
            }
        };

        let message = Message::assistant(answer);
        self.prompt.render(&message);
        self.conversation.append(message);
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Input;
    use async_trait::async_trait;
    use debrief::errors::{QueryError, QueryResult};
    use debrief::models::role::Role;
    use debrief::providers::base::{Provider, Usage};
    use std::collections::VecDeque;
    use std::sync::Arc;

    /// Answers every question by echoing it back
    struct EchoProvider;

    #[async_trait]
    impl Provider for EchoProvider {
        async fn complete(
            &self,
            _system: &str,
            messages: &[Message],
        ) -> QueryResult<(Message, Usage)> {
            let question = messages
                .last()
                .and_then(|m| m.text().rsplit("User Question: ").next())
                .unwrap_or_default();
            Ok((Message::assistant(format!("echo: {}", question)), Usage::default()))
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl Provider for FailingProvider {
        async fn complete(&self, _: &str, _: &[Message]) -> QueryResult<(Message, Usage)> {
            Err(QueryError::BackendUnavailable("connection refused".to_string()))
        }
    }

    /// Replays a fixed list of inputs, then exits
    struct ScriptedPrompt {
        inputs: VecDeque<Input>,
    }

    impl ScriptedPrompt {
        fn new(inputs: Vec<Input>) -> Self {
            Self {
                inputs: inputs.into(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn render(&mut self, _message: &Message) {}
        fn get_input(&mut self) -> Result<Input> {
            Ok(self.inputs.pop_front().unwrap_or_else(Input::exit))
        }
        fn show_busy(&mut self) {}
        fn hide_busy(&mut self) {}
        fn close(&self) {}
        fn ready(&self, _subject: &str) {}
    }

    fn session(provider: Arc<dyn Provider>, inputs: Vec<Input>) -> Session<'static> {
        Session::new(
            Analyst::new(provider),
            InterviewRecord::new("Agent: Hi.\nUser: Hello."),
            Box::new(ScriptedPrompt::new(inputs)),
        )
    }

    #[tokio::test]
    async fn test_five_turns_keep_order() {
        let inputs = (1..=5).map(|i| Input::message(format!("q{}", i))).collect();
        let mut session = session(Arc::new(EchoProvider), inputs);

        session.start().await.unwrap();

        let all = session.conversation().all();
        assert_eq!(all.len(), 10);
        for (i, pair) in all.chunks(2).enumerate() {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[0].text(), format!("q{}", i + 1));
            assert_eq!(pair[1].role, Role::Assistant);
            assert_eq!(pair[1].text(), format!("echo: q{}", i + 1));
        }
    }

    #[tokio::test]
    async fn test_ask_again_adds_nothing() {
        let inputs = vec![Input::ask_again(), Input::message("hire?"), Input::exit()];
        let mut session = session(Arc::new(EchoProvider), inputs);

        session.start().await.unwrap();

        assert_eq!(session.conversation().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_turn_appends_apology() {
        let mut session = session(Arc::new(FailingProvider), vec![]);

        session.turn("hire?").await;

        let last = session.conversation().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.text(), APOLOGY);
    }
}

use serde::Deserialize;
use serde_json::{json, Value};

use super::base::Usage;
use crate::models::message::Message;

/// Convert the system instruction and messages to OpenAI's chat message specification
pub fn messages_to_openai_spec(system: &str, messages: &[Message]) -> Vec<Value> {
    let mut spec = Vec::with_capacity(messages.len() + 1);
    spec.push(json!({
        "role": "system",
        "content": system
    }));
    spec.extend(messages.iter().map(|message| {
        json!({
            "role": message.role,
            "content": message.content
        })
    }));
    spec
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<CompletionUsage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionUsage {
    pub prompt_tokens: Option<i32>,
    pub completion_tokens: Option<i32>,
    pub total_tokens: Option<i32>,
}

impl ChatCompletion {
    /// Text of the first choice, if the backend produced any
    pub fn answer(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .filter(|content| !content.is_empty())
    }

    pub fn usage(&self) -> Usage {
        match &self.usage {
            Some(usage) => Usage::new(
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens.or(match (usage.prompt_tokens, usage.completion_tokens) {
                    (Some(input), Some(output)) => Some(input + output),
                    _ => None,
                }),
            ),
            None => Usage::default(),
        }
    }
}

/// The `error.message` of an OpenAI style error body
pub fn backend_error_message(error: &Value) -> Option<String> {
    error
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_to_openai_spec() {
        let messages = vec![Message::user("What stood out?")];
        let spec = messages_to_openai_spec("Be concise.", &messages);

        assert_eq!(
            spec,
            vec![
                json!({"role": "system", "content": "Be concise."}),
                json!({"role": "user", "content": "What stood out?"}),
            ]
        );
    }

    #[test]
    fn test_answer_takes_first_choice() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "First"}},
                {"index": 1, "message": {"role": "assistant", "content": "Second"}}
            ]
        }))
        .unwrap();
        assert_eq!(completion.answer(), Some("First"));
    }

    #[test]
    fn test_answer_missing_content() {
        for body in [
            json!({"choices": []}),
            json!({"choices": [{"index": 0}]}),
            json!({"choices": [{"message": {"role": "assistant", "content": null}}]}),
            json!({"choices": [{"message": {"role": "assistant", "content": ""}}]}),
        ] {
            let completion: ChatCompletion = serde_json::from_value(body).unwrap();
            assert_eq!(completion.answer(), None);
        }
    }

    #[test]
    fn test_whitespace_content_is_an_answer() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "  "}}]
        }))
        .unwrap();
        assert_eq!(completion.answer(), Some("  "));
    }

    #[test]
    fn test_choices_are_required() {
        let result = serde_json::from_value::<ChatCompletion>(json!({"id": "chatcmpl-1"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_usage_totals_when_missing() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "choices": [],
            "usage": {"prompt_tokens": 12, "completion_tokens": 15}
        }))
        .unwrap();
        assert_eq!(completion.usage(), Usage::new(Some(12), Some(15), Some(27)));

        let completion: ChatCompletion =
            serde_json::from_value(json!({"choices": []})).unwrap();
        assert_eq!(completion.usage(), Usage::default());
    }

    #[test]
    fn test_backend_error_message() {
        let error = json!({"message": "Rate limit reached", "type": "requests"});
        assert_eq!(
            backend_error_message(&error),
            Some("Rate limit reached".to_string())
        );
        assert_eq!(backend_error_message(&json!({"code": 1})), None);
    }
}

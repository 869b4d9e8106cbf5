use serde::{Deserialize, Serialize};

/// Post-interview analytics as computed by the scoring pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    /// 0 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication: Option<Communication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_intelligence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_summaries: Option<Vec<QuestionSummary>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Communication {
    /// 0 to 10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl QuestionSummary {
    pub fn new<S: Into<String>, T: Into<String>>(question: S, summary: T) -> Self {
        Self {
            question: Some(question.into()),
            summary: Some(summary.into()),
        }
    }
}

impl Analytics {
    pub fn communication_score(&self) -> Option<f64> {
        self.communication.as_ref().and_then(|c| c.score)
    }

    pub fn communication_feedback(&self) -> Option<&str> {
        self.communication
            .as_ref()
            .and_then(|c| c.feedback.as_deref())
    }

    pub fn question_summaries(&self) -> &[QuestionSummary] {
        self.question_summaries.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_partial_analytics() {
        let analytics: Analytics = serde_json::from_value(json!({
            "overallScore": 82,
            "communication": { "score": 7, "feedback": "clear" },
            "softSkillSummary": "ignored"
        }))
        .unwrap();

        assert_eq!(analytics.overall_score, Some(82.0));
        assert_eq!(analytics.communication_score(), Some(7.0));
        assert_eq!(analytics.communication_feedback(), Some("clear"));
        assert_eq!(analytics.overall_feedback, None);
        assert!(analytics.question_summaries().is_empty());
    }

    #[test]
    fn test_deserialize_question_summaries() {
        let analytics: Analytics = serde_json::from_value(json!({
            "questionSummaries": [
                { "question": "Why this role?", "summary": "Wants ownership." },
                { "question": "Biggest failure?" }
            ]
        }))
        .unwrap();

        let summaries = analytics.question_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0], QuestionSummary::new("Why this role?", "Wants ownership."));
        assert_eq!(summaries[1].summary, None);
    }
}

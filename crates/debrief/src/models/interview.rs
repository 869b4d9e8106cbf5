use super::analytics::Analytics;
use super::call_analysis::CallAnalysis;
use serde::{Deserialize, Serialize};

/// Everything stored about one completed interview
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    #[serde(default)]
    pub transcript: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_analysis: Option<CallAnalysis>,
}

impl InterviewRecord {
    pub fn new<S: Into<String>>(transcript: S) -> Self {
        Self {
            transcript: transcript.into(),
            ..Default::default()
        }
    }

    pub fn with_candidate_name<S: Into<String>>(mut self, name: S) -> Self {
        self.candidate_name = Some(name.into());
        self
    }

    pub fn with_analytics(mut self, analytics: Analytics) -> Self {
        self.analytics = Some(analytics);
        self
    }

    pub fn with_call_analysis(mut self, call_analysis: CallAnalysis) -> Self {
        self.call_analysis = Some(call_analysis);
        self
    }

    /// The candidate name, if one is set and not blank
    pub fn subject_name(&self) -> Option<&str> {
        self.candidate_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    #[serde(other)]
    Unknown,
}

/// Call-level metadata reported by the voice agent platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_summary: Option<String>,
    /// Usually one of `Complete`, `Partial` or `Incomplete`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_completion_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_task_completion_rating: Option<String>,
}

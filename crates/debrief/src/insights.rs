//! Derived scores shown next to the conversation.
//!
//! Unlike the context document these collapse missing values to fixed scores,
//! since they feed charts rather than the model.

use serde::Serialize;

use crate::models::analytics::Analytics;
use crate::models::call_analysis::{CallAnalysis, Sentiment};
use crate::transcript::speaker_word_counts;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillScore {
    pub skill: String,
    /// 0 to 100
    pub score: f64,
}

impl SkillScore {
    fn new(skill: &str, score: f64) -> Self {
        Self {
            skill: skill.to_string(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub label: String,
    pub value: usize,
}

pub fn skill_scores(
    analytics: Option<&Analytics>,
    call_analysis: Option<&CallAnalysis>,
) -> Vec<SkillScore> {
    let overall = analytics.and_then(|a| a.overall_score).unwrap_or(0.0);
    let communication = analytics
        .and_then(Analytics::communication_score)
        .unwrap_or(0.0)
        * 10.0;

    let completion = match call_analysis.and_then(|c| c.call_completion_rating.as_deref()) {
        Some("Complete") => 100.0,
        Some("Partial") => 60.0,
        _ => 30.0,
    };
    let engagement = match call_analysis.and_then(|c| c.user_sentiment) {
        Some(Sentiment::Positive) => 90.0,
        Some(Sentiment::Neutral) => 60.0,
        _ => 30.0,
    };

    vec![
        SkillScore::new("Overall Score", overall),
        SkillScore::new("Communication", communication),
        SkillScore::new("Completion", completion),
        SkillScore::new("Engagement", engagement),
    ]
}

/// Words spoken by the interviewer and by the candidate, in that order
pub fn word_distribution(transcript: &str, candidate_name: Option<&str>) -> Vec<WordCount> {
    let counts = speaker_word_counts(transcript);
    let candidate = candidate_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Candidate");

    vec![
        WordCount {
            label: "Interviewer".to_string(),
            value: counts.interviewer,
        },
        WordCount {
            label: candidate.to_string(),
            value: counts.candidate,
        },
    ]
}

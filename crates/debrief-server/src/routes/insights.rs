use axum::{routing::post, Json, Router};
use debrief::{
    insights::{skill_scores, word_distribution, SkillScore, WordCount},
    models::interview::InterviewRecord,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InsightsResponse {
    skills: Vec<SkillScore>,
    word_counts: Vec<WordCount>,
}

async fn handler(Json(interview): Json<InterviewRecord>) -> Json<InsightsResponse> {
    tracing::info!("insights request received");

    Json(InsightsResponse {
        skills: skill_scores(
            interview.analytics.as_ref(),
            interview.call_analysis.as_ref(),
        ),
        word_counts: word_distribution(&interview.transcript, interview.subject_name()),
    })
}

pub fn routes() -> Router {
    Router::new().route("/insights", post(handler))
}

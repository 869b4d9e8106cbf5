use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use debrief::{errors::QueryError, models::interview::InterviewRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    #[serde(flatten)]
    interview: InterviewRecord,
    // A missing question is reported the same way as a blank one
    #[serde(default)]
    question: String,
}

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    answer: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    details: String,
}

/// Every failure on this route, including an unreadable body, maps to the same 500 body
#[derive(Debug, Error)]
enum AnalyzeError {
    #[error("Invalid request body: {0}")]
    Request(#[from] JsonRejection),
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to analyze transcript".to_string(),
                details: self.to_string(),
            }),
        )
            .into_response()
    }
}

async fn handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AnalyzeError> {
    tracing::info!("analyze-transcript request received");

    let Json(request) = payload.map_err(|e| {
        tracing::error!("Error reading analyze request: {}", e);
        AnalyzeError::from(e)
    })?;

    match state.analyst.ask(&request.interview, &request.question).await {
        Ok(answer) => Ok(Json(AnalyzeResponse { answer })),
        Err(e) => {
            tracing::error!("Error analyzing transcript: {}", e);
            Err(AnalyzeError::from(e))
        }
    }
}

// Configure routes for this module
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/analyze-transcript", post(handler))
        .with_state(state)
}

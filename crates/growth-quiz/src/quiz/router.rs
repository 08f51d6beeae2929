use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::task;
use tracing::warn;

use super::domain::Answer;
use super::service::{QuizService, QuizServiceError};
use super::submission::{SubmissionLog, SubmissionPayload};

const DEFAULT_RECENT_LIMIT: usize = 20;
const MAX_RECENT_LIMIT: usize = 200;

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluateRequest {
    #[serde(default)]
    pub(crate) answers: Vec<Answer>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecentQuery {
    pub(crate) limit: Option<usize>,
}

/// Router builder exposing the question bank, scoring, and submission endpoints.
pub fn quiz_router<L>(service: Arc<QuizService<L>>) -> Router
where
    L: SubmissionLog + 'static,
{
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler::<L>))
        .route("/api/v1/quiz/evaluate", post(evaluate_handler::<L>))
        .route(
            "/api/v1/quiz/submissions",
            post(submit_handler::<L>).get(recent_handler::<L>),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler<L>(State(service): State<Arc<QuizService<L>>>) -> Response
where
    L: SubmissionLog + 'static,
{
    let questions = service.questions();
    let payload = json!({
        "total": questions.len(),
        "questions": questions,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn evaluate_handler<L>(
    State(service): State<Arc<QuizService<L>>>,
    axum::Json(request): axum::Json<EvaluateRequest>,
) -> Response
where
    L: SubmissionLog + 'static,
{
    match service.evaluate(&request.answers) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(QuizServiceError::Scoring(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submit_handler<L>(
    State(service): State<Arc<QuizService<L>>>,
    axum::Json(payload): axum::Json<SubmissionPayload>,
) -> Response
where
    L: SubmissionLog + 'static,
{
    // The log does file I/O under a lock.
    let result = task::spawn_blocking(move || service.submit(payload)).await;

    match result {
        Ok(Ok(receipt)) => {
            let payload = json!({
                "success": true,
                "message": "submission recorded",
                "userId": receipt.user_id,
                "submittedAt": receipt.submitted_at,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Ok(Err(error)) => submission_failure(&error),
        Err(error) => submission_failure(&error),
    }
}

pub(crate) async fn recent_handler<L>(
    State(service): State<Arc<QuizService<L>>>,
    Query(query): Query<RecentQuery>,
) -> Response
where
    L: SubmissionLog + 'static,
{
    let limit = query
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .min(MAX_RECENT_LIMIT);
    let result = task::spawn_blocking(move || service.recent_submissions(limit)).await;

    match result {
        Ok(Ok(records)) => {
            let payload = json!({
                "total": records.len(),
                "submissions": records,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(Err(error)) => submission_failure(&error),
        Err(error) => submission_failure(&error),
    }
}

fn submission_failure(error: &dyn std::fmt::Display) -> Response {
    warn!(%error, "quiz submission log failed");
    let payload = json!({
        "success": false,
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

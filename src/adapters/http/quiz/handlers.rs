//! HTTP handlers for quiz endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{AnswerCommand, QuizOrchestrator};
use crate::domain::foundation::{QuestionId, SessionId};
use crate::domain::quiz::QuizError;

use super::dto::{AnswerRequest, AnswerResponse, ErrorResponse, StartQuizResponse};

/// GET /quiz/start - Create a new quiz session
pub async fn start_quiz(State(orchestrator): State<Arc<QuizOrchestrator>>) -> Response {
    let started = orchestrator.start().await;

    let response = StartQuizResponse {
        session_id: started.session_id.to_string(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /quiz/answer - Submit an answer and receive the next question
pub async fn answer(
    State(orchestrator): State<Arc<QuizOrchestrator>>,
    Json(req): Json<AnswerRequest>,
) -> Response {
    let session_id = match req.session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("invalid session id")),
            )
                .into_response()
        }
    };

    let question_id = match req.question_id.as_deref() {
        Some(raw) => match raw.parse::<QuestionId>() {
            Ok(id) => Some(id),
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new("invalid question id")),
                )
                    .into_response()
            }
        },
        None => None,
    };

    let cmd = AnswerCommand {
        session_id,
        question_id,
        answer: req.answer,
        current_score: req.current_score.unwrap_or(0.0),
        history: req.history,
    };

    match orchestrator.process_answer(cmd).await {
        Ok(outcome) => {
            let response: AnswerResponse = outcome.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_quiz_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_quiz_error(error: QuizError) -> Response {
    let status = match &error {
        QuizError::SessionNotFound(_) | QuizError::InvalidOrExpiredQuestion(_) => {
            StatusCode::NOT_FOUND
        }
        QuizError::SessionCompleted(_) | QuizError::QuestionLimitReached { .. } => {
            StatusCode::CONFLICT
        }
        QuizError::InvalidAnswerInput(_) => StatusCode::BAD_REQUEST,
    };

    (status, Json(ErrorResponse::new(error.to_string()))).into_response()
}

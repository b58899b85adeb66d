//! HTTP routes for quiz endpoints.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::application::QuizOrchestrator;

use super::handlers::{answer, start_quiz};

/// Creates the quiz router with all endpoints.
pub fn quiz_routes(orchestrator: Arc<QuizOrchestrator>) -> Router {
    Router::new()
        .route("/start", get(start_quiz))
        .route("/answer", post(answer))
        .with_state(orchestrator)
}

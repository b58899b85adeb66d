//! Inbound HTTP surface - router assembly, CORS and error fallbacks.

pub mod health;
pub mod quiz;

use std::sync::Arc;

use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::QuizOrchestrator;

use self::quiz::dto::ErrorResponse;

/// Assembles the full application router.
pub fn api_router(orchestrator: Arc<QuizOrchestrator>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/quiz", quiz::routes::quiz_routes(orchestrator))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("route not found")),
    )
}

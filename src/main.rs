//! Risk Quiz service entry point.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use risk_quiz::adapters::clock::SystemClock;
use risk_quiz::adapters::http::api_router;
use risk_quiz::adapters::oracle::{LlamaConfig, LlamaOracle};
use risk_quiz::adapters::store::{QuestionStore, SessionStore};
use risk_quiz::application::QuizOrchestrator;
use risk_quiz::config::AppConfig;
use risk_quiz::ports::Clock;

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let mut oracle_config = LlamaConfig::new(&config.oracle.endpoint)
        .with_model(&config.oracle.model)
        .with_temperature(config.oracle.temperature)
        .with_timeout(config.oracle.timeout())
        .with_max_retries(config.oracle.max_retries);
    if let Some(api_key) = &config.oracle.api_key {
        oracle_config = oracle_config.with_api_key(api_key);
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let sessions = Arc::new(SessionStore::new(config.quiz.session_ttl_secs, clock.clone()));
    let questions = Arc::new(QuestionStore::new(
        config.quiz.question_ttl_secs,
        clock.clone(),
    ));
    let oracle = Arc::new(LlamaOracle::new(oracle_config));
    let orchestrator = Arc::new(QuizOrchestrator::new(
        sessions,
        questions,
        oracle,
        config.quiz.max_questions,
    ));

    let app = api_router(orchestrator);
    let addr = config.server.socket_addr();

    tracing::info!(%addr, model = %config.oracle.model, "risk-quiz listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}

//! HTTP DTOs for quiz endpoints.
//!
//! These types decouple the wire format (camelCase JSON) from domain types.

use serde::{Deserialize, Serialize};

use crate::application::AnswerOutcome;
use crate::domain::quiz::{AnswerRecord, Question, RiskLevel};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /quiz/answer`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub session_id: String,
    /// Absent on the session's first turn.
    #[serde(default)]
    pub question_id: Option<String>,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub current_score: Option<f64>,
    #[serde(default)]
    pub history: Vec<AnswerRecord>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response of `GET /quiz/start`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartQuizResponse {
    pub session_id: String,
}

/// A question as presented to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub risk_level: RiskLevel,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id().to_string(),
            text: question.text().to_string(),
            options: question.options().to_vec(),
            risk_level: question.risk_level(),
        }
    }
}

/// Response of `POST /quiz/answer`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub next_question: Option<QuestionResponse>,
    pub updated_score: u8,
    pub inferred_risk_level: RiskLevel,
    pub remaining_questions: u32,
    pub quiz_completed: bool,
}

impl From<AnswerOutcome> for AnswerResponse {
    fn from(outcome: AnswerOutcome) -> Self {
        Self {
            next_question: outcome.next_question.as_ref().map(QuestionResponse::from),
            updated_score: outcome.updated_score,
            inferred_risk_level: outcome.inferred_risk_level,
            remaining_questions: outcome.remaining_questions,
            quiz_completed: outcome.quiz_completed,
        }
    }
}

/// Uniform JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

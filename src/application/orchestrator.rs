//! Quiz orchestrator - the start/answer protocol state machine.
//!
//! Sessions move Active -> Completed and never back. The orchestrator owns
//! the cross-cutting flow: session lookup, answer scoring, question
//! generation and registration. Oracle failures are absorbed at the
//! generation boundary; only precondition violations surface as errors.

use std::sync::Arc;

use crate::adapters::store::{QuestionStore, SessionStore};
use crate::domain::foundation::{QuestionId, SessionId};
use crate::domain::quiz::{
    build_prompt, parser, scoring, AnswerRecord, PromptContext, Question, QuizError, RiskLevel,
};
use crate::ports::QuestionOracle;

/// Result of starting a new quiz.
#[derive(Debug, Clone)]
pub struct StartedQuiz {
    pub session_id: SessionId,
}

/// One answer submission.
#[derive(Debug, Clone)]
pub struct AnswerCommand {
    pub session_id: SessionId,
    /// Absent only on the session's first turn.
    pub question_id: Option<QuestionId>,
    pub answer: String,
    pub current_score: f64,
    pub history: Vec<AnswerRecord>,
}

/// Outcome of one processed answer.
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    /// The next question, or `None` once the quiz completed.
    pub next_question: Option<Question>,
    pub updated_score: u8,
    pub inferred_risk_level: RiskLevel,
    pub remaining_questions: u32,
    pub quiz_completed: bool,
}

/// Composes the stores, scoring and the oracle into the quiz protocol.
pub struct QuizOrchestrator {
    sessions: Arc<SessionStore>,
    questions: Arc<QuestionStore>,
    oracle: Arc<dyn QuestionOracle>,
    max_questions: u32,
}

impl QuizOrchestrator {
    pub fn new(
        sessions: Arc<SessionStore>,
        questions: Arc<QuestionStore>,
        oracle: Arc<dyn QuestionOracle>,
        max_questions: u32,
    ) -> Self {
        Self {
            sessions,
            questions,
            oracle,
            max_questions,
        }
    }

    /// Creates a fresh session. No question is generated yet; the first
    /// question is issued by the first [`QuizOrchestrator::process_answer`]
    /// call.
    pub async fn start(&self) -> StartedQuiz {
        let session = self.sessions.create(self.max_questions).await;
        tracing::info!(session_id = %session.id(), "quiz session started");
        StartedQuiz {
            session_id: session.id(),
        }
    }

    /// Advances a session by one turn.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` / `SessionCompleted` from the session lookup
    /// - `InvalidAnswerInput` when `question_id` is absent on a non-initial turn
    /// - `InvalidOrExpiredQuestion` when the referenced question is gone
    /// - `QuestionLimitReached` if a concurrent turn spent the budget first
    pub async fn process_answer(&self, cmd: AnswerCommand) -> Result<AnswerOutcome, QuizError> {
        let session = self.sessions.get_active(cmd.session_id).await?;

        // First turn: issue the opening question, nothing to score yet.
        if session.questions_asked() == 0 && cmd.question_id.is_none() {
            let question = self.next_question(PromptContext::initial()).await;
            self.questions.remember(question.clone()).await;
            let session = self
                .sessions
                .register_question(cmd.session_id, question.id())
                .await?;

            return Ok(AnswerOutcome {
                updated_score: 0,
                inferred_risk_level: question.risk_level(),
                remaining_questions: session.remaining_questions(),
                quiz_completed: false,
                next_question: Some(question),
            });
        }

        let question_id = cmd.question_id.ok_or_else(|| {
            QuizError::InvalidAnswerInput("questionId is required after the first turn".to_string())
        })?;
        let answered = self
            .questions
            .find(question_id)
            .await
            .ok_or(QuizError::InvalidOrExpiredQuestion(question_id))?;

        let updated_score =
            scoring::compute_score(cmd.current_score, &cmd.answer, answered.risk_level());
        let inferred_risk_level = scoring::infer_risk_level(updated_score);

        // Budget spent: terminal transition, no oracle call.
        if session.at_question_limit() {
            self.sessions.mark_completed(cmd.session_id).await?;
            tracing::info!(
                session_id = %cmd.session_id,
                updated_score,
                risk_level = %inferred_risk_level,
                "quiz completed"
            );
            return Ok(AnswerOutcome {
                next_question: None,
                updated_score,
                inferred_risk_level,
                remaining_questions: 0,
                quiz_completed: true,
            });
        }

        let ctx = PromptContext::continuation(
            updated_score,
            cmd.answer.clone(),
            answered.risk_level(),
            &cmd.history,
        );
        let question = self.next_question(ctx).await;
        self.questions.remember(question.clone()).await;
        let session = self
            .sessions
            .register_question(cmd.session_id, question.id())
            .await?;

        Ok(AnswerOutcome {
            updated_score,
            inferred_risk_level,
            remaining_questions: session.remaining_questions(),
            quiz_completed: false,
            next_question: Some(question),
        })
    }

    /// Generation boundary: the result is always a valid question.
    ///
    /// Transport errors, bad statuses and undecodable bodies all collapse
    /// into the deterministic fallback; the user-facing flow never fails
    /// because the oracle did.
    async fn next_question(&self, ctx: PromptContext) -> Question {
        let fallback_risk = ctx.last_risk_level;
        let prompt = build_prompt(&ctx);

        match self.oracle.generate(&prompt).await {
            Ok(raw) => parser::parse(&raw, fallback_risk),
            Err(err) => {
                tracing::warn!(error = %err, "oracle call failed, substituting fallback question");
                Question::fallback(fallback_risk)
            }
        }
    }
}

//! Quiz lifecycle error types.
//!
//! These are the orchestrator-level precondition violations surfaced to the
//! caller. Generation-level oracle failures never reach this taxonomy; they
//! are absorbed by the fallback question at the generation boundary.

use thiserror::Error;

use crate::domain::foundation::{QuestionId, SessionId};

/// Precondition violations of the quiz state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Session id is unknown or the session's TTL has elapsed.
    #[error("session not found or expired: {0}")]
    SessionNotFound(SessionId),

    /// Session already reached its terminal state.
    #[error("session already completed: {0}")]
    SessionCompleted(SessionId),

    /// Session is at its question limit and cannot register another.
    #[error("question limit reached: {asked} of {max}")]
    QuestionLimitReached { asked: u32, max: u32 },

    /// Answer payload is missing required data for a non-initial turn.
    #[error("invalid answer input: {0}")]
    InvalidAnswerInput(String),

    /// Referenced question is unknown or its TTL has elapsed.
    #[error("question invalid or expired: {0}")]
    InvalidOrExpiredQuestion(QuestionId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        let id = SessionId::new();
        let err = QuizError::SessionNotFound(id);
        assert_eq!(err.to_string(), format!("session not found or expired: {id}"));

        let err = QuizError::QuestionLimitReached { asked: 20, max: 20 };
        assert_eq!(err.to_string(), "question limit reached: 20 of 20");
    }
}

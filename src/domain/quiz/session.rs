//! Quiz session aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, SessionId, Timestamp};

use super::QuizError;

/// One end-to-end quiz attempt, bounded by a question count and a TTL.
///
/// # Invariants
///
/// - `0 <= questions_asked <= max_questions`
/// - once `completed` is true no further questions may be registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    id: SessionId,
    created_at: Timestamp,
    updated_at: Timestamp,
    max_questions: u32,
    questions_asked: u32,
    completed: bool,
    last_question_id: Option<QuestionId>,
}

impl QuizSession {
    /// Creates a new active session with zeroed counters.
    pub fn new(id: SessionId, max_questions: u32, now: Timestamp) -> Self {
        Self {
            id,
            created_at: now,
            updated_at: now,
            max_questions,
            questions_asked: 0,
            completed: false,
            last_question_id: None,
        }
    }

    /// Returns the session id.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns the question budget for this session.
    pub fn max_questions(&self) -> u32 {
        self.max_questions
    }

    /// Returns how many questions have been issued so far.
    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    /// Returns true once the session reached its terminal state.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the id of the most recently issued question, if any.
    pub fn last_question_id(&self) -> Option<QuestionId> {
        self.last_question_id
    }

    /// Questions still available before the limit.
    pub fn remaining_questions(&self) -> u32 {
        self.max_questions.saturating_sub(self.questions_asked)
    }

    /// True when the session has issued its full question budget.
    pub fn at_question_limit(&self) -> bool {
        self.questions_asked >= self.max_questions
    }

    /// Records a newly issued question against this session.
    ///
    /// # Errors
    ///
    /// - `QuestionLimitReached` if the budget is already spent
    pub fn register_question(
        &mut self,
        question_id: QuestionId,
        now: Timestamp,
    ) -> Result<(), QuizError> {
        if self.at_question_limit() {
            return Err(QuizError::QuestionLimitReached {
                asked: self.questions_asked,
                max: self.max_questions,
            });
        }

        self.questions_asked += 1;
        self.last_question_id = Some(question_id);
        self.updated_at = now;
        Ok(())
    }

    /// Transitions the session to its terminal state.
    pub fn mark_completed(&mut self, now: Timestamp) {
        self.completed = true;
        self.updated_at = now;
    }
}

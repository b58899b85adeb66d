//! In-memory TTL-evicting registry of issued questions.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::foundation::QuestionId;
use crate::domain::quiz::Question;
use crate::ports::Clock;

use super::registry::TtlRegistry;

/// Registry of in-flight questions, keyed by question id.
///
/// Question lifetime is independent of the owning session's TTL. Answered
/// questions stay registered until they age out.
pub struct QuestionStore {
    questions: RwLock<TtlRegistry<QuestionId, Question>>,
    clock: Arc<dyn Clock>,
}

impl QuestionStore {
    /// Creates a store whose entries live for `ttl_secs`.
    pub fn new(ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            questions: RwLock::new(TtlRegistry::new(ttl_secs)),
            clock,
        }
    }

    /// Stores a question under its id.
    pub async fn remember(&self, question: Question) {
        let now = self.clock.now();
        let mut questions = self.questions.write().await;

        let swept = questions.sweep_expired(now);
        if swept > 0 {
            tracing::debug!(swept, "purged expired questions");
        }

        questions.insert(question.id(), question, now);
    }

    /// Looks up a live question; expired entries are removed on the way out.
    pub async fn find(&self, id: QuestionId) -> Option<Question> {
        let now = self.clock.now();
        let mut questions = self.questions.write().await;
        questions.get(&id, now).cloned()
    }

    /// Removes every question whose age exceeds the TTL.
    pub async fn sweep_expired(&self) -> usize {
        let now = self.clock.now();
        self.questions.write().await.sweep_expired(now)
    }

    /// Number of stored questions, expired or not.
    pub async fn len(&self) -> usize {
        self.questions.read().await.len()
    }

    /// Returns true when no questions are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::ManualClock;
    use crate::domain::quiz::RiskLevel;

    const QUESTION_TTL_SECS: u64 = 600;

    fn store() -> (Arc<ManualClock>, QuestionStore) {
        let clock = Arc::new(ManualClock::at_unix_secs(1_000_000));
        let store = QuestionStore::new(QUESTION_TTL_SECS, clock.clone());
        (clock, store)
    }

    #[tokio::test]
    async fn remembered_question_is_findable_before_ttl() {
        let (clock, store) = store();
        let question = Question::fallback(RiskLevel::Medio);
        store.remember(question.clone()).await;

        clock.advance_secs(QUESTION_TTL_SECS);
        assert_eq!(store.find(question.id()).await, Some(question));
    }

    #[tokio::test]
    async fn expired_question_is_absent_and_reclaimed() {
        let (clock, store) = store();
        let question = Question::fallback(RiskLevel::Medio);
        store.remember(question.clone()).await;

        clock.advance_secs(QUESTION_TTL_SECS + 1);
        assert_eq!(store.find(question.id()).await, None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn unknown_question_is_absent() {
        let (_clock, store) = store();
        assert_eq!(store.find(QuestionId::new()).await, None);
    }

    #[tokio::test]
    async fn remember_sweeps_expired_entries() {
        let (clock, store) = store();
        store.remember(Question::fallback(RiskLevel::Baixo)).await;

        clock.advance_secs(QUESTION_TTL_SECS + 1);
        store.remember(Question::fallback(RiskLevel::Alto)).await;

        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn answered_questions_stay_until_ttl() {
        // Lookups do not consume the entry; only expiry reclaims it.
        let (_clock, store) = store();
        let question = Question::fallback(RiskLevel::Medio);
        store.remember(question.clone()).await;

        assert!(store.find(question.id()).await.is_some());
        assert!(store.find(question.id()).await.is_some());
    }
}

//! In-memory TTL-evicting registry of quiz sessions.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::foundation::{QuestionId, SessionId};
use crate::domain::quiz::{QuizError, QuizSession};
use crate::ports::Clock;

use super::registry::TtlRegistry;

/// Registry of session state, keyed by session id.
///
/// Sessions are never explicitly deleted; they become unreachable once their
/// age exceeds the TTL and are purged lazily on lookup or by the sweep run
/// before each mutation. All read-check-act sequences happen under the write
/// lock, which serializes concurrent answers for the same session and keeps
/// `questions_asked <= max_questions` intact.
pub struct SessionStore {
    sessions: RwLock<TtlRegistry<SessionId, QuizSession>>,
    clock: Arc<dyn Clock>,
}

impl SessionStore {
    /// Creates a store whose entries live for `ttl_secs`.
    pub fn new(ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: RwLock::new(TtlRegistry::new(ttl_secs)),
            clock,
        }
    }

    /// Creates and stores a new session with zeroed counters.
    pub async fn create(&self, max_questions: u32) -> QuizSession {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;

        let swept = sessions.sweep_expired(now);
        if swept > 0 {
            tracing::debug!(swept, "purged expired sessions");
        }

        let session = QuizSession::new(SessionId::new(), max_questions, now);
        sessions.insert(session.id(), session.clone(), now);
        session
    }

    /// Returns a live, non-completed session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the id is unknown or the session expired
    /// - `SessionCompleted` if the session already terminated
    pub async fn get_active(&self, id: SessionId) -> Result<QuizSession, QuizError> {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;

        let session = sessions.get(&id, now).ok_or(QuizError::SessionNotFound(id))?;
        if session.is_completed() {
            return Err(QuizError::SessionCompleted(id));
        }
        Ok(session.clone())
    }

    /// Records a newly issued question against a session.
    ///
    /// The lookup, limit check and increment run as one step under the write
    /// lock. Returns the updated session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` / `SessionCompleted` as in [`SessionStore::get_active`]
    /// - `QuestionLimitReached` if the question budget is spent
    pub async fn register_question(
        &self,
        id: SessionId,
        question_id: QuestionId,
    ) -> Result<QuizSession, QuizError> {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;
        sessions.sweep_expired(now);

        let session = sessions
            .get_mut(&id, now)
            .ok_or(QuizError::SessionNotFound(id))?;
        if session.is_completed() {
            return Err(QuizError::SessionCompleted(id));
        }
        session.register_question(question_id, now)?;
        Ok(session.clone())
    }

    /// Transitions a session to its terminal state, returning it.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the id is unknown or the session expired
    pub async fn mark_completed(&self, id: SessionId) -> Result<QuizSession, QuizError> {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;
        sessions.sweep_expired(now);

        let session = sessions
            .get_mut(&id, now)
            .ok_or(QuizError::SessionNotFound(id))?;
        session.mark_completed(now);
        Ok(session.clone())
    }

    /// Removes every session whose age exceeds the TTL.
    pub async fn sweep_expired(&self) -> usize {
        let now = self.clock.now();
        self.sessions.write().await.sweep_expired(now)
    }

    /// Number of stored sessions, expired or not.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns true when no sessions are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::ManualClock;

    const SESSION_TTL_SECS: u64 = 1800;

    fn store() -> (Arc<ManualClock>, SessionStore) {
        let clock = Arc::new(ManualClock::at_unix_secs(1_000_000));
        let store = SessionStore::new(SESSION_TTL_SECS, clock.clone());
        (clock, store)
    }

    #[tokio::test]
    async fn created_session_is_retrievable_before_ttl() {
        let (clock, store) = store();
        let session = store.create(20).await;

        clock.advance_secs(SESSION_TTL_SECS);
        let found = store.get_active(session.id()).await.unwrap();
        assert_eq!(found.id(), session.id());
    }

    #[tokio::test]
    async fn expired_session_behaves_as_not_found() {
        let (clock, store) = store();
        let session = store.create(20).await;

        clock.advance_secs(SESSION_TTL_SECS + 1);
        let err = store.get_active(session.id()).await.unwrap_err();
        assert_eq!(err, QuizError::SessionNotFound(session.id()));
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let (_clock, store) = store();
        let id = SessionId::new();
        assert_eq!(
            store.get_active(id).await.unwrap_err(),
            QuizError::SessionNotFound(id)
        );
    }

    #[tokio::test]
    async fn completed_session_is_rejected() {
        let (_clock, store) = store();
        let session = store.create(20).await;
        store.mark_completed(session.id()).await.unwrap();

        assert_eq!(
            store.get_active(session.id()).await.unwrap_err(),
            QuizError::SessionCompleted(session.id())
        );
    }

    #[tokio::test]
    async fn register_question_updates_counters() {
        let (clock, store) = store();
        let session = store.create(20).await;
        let question_id = QuestionId::new();

        clock.advance_secs(30);
        let updated = store
            .register_question(session.id(), question_id)
            .await
            .unwrap();

        assert_eq!(updated.questions_asked(), 1);
        assert_eq!(updated.last_question_id(), Some(question_id));
        assert_eq!(updated.remaining_questions(), 19);
        assert!(updated.updated_at() > updated.created_at());
    }

    #[tokio::test]
    async fn register_question_at_limit_fails() {
        let (_clock, store) = store();
        let session = store.create(1).await;
        store
            .register_question(session.id(), QuestionId::new())
            .await
            .unwrap();

        let err = store
            .register_question(session.id(), QuestionId::new())
            .await
            .unwrap_err();
        assert_eq!(err, QuizError::QuestionLimitReached { asked: 1, max: 1 });
    }

    #[tokio::test]
    async fn mutations_sweep_expired_sessions() {
        let (clock, store) = store();
        store.create(20).await;
        assert_eq!(store.len().await, 1);

        clock.advance_secs(SESSION_TTL_SECS + 1);
        store.create(20).await;

        // Only the fresh session survived the opportunistic sweep.
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn concurrent_registrations_never_exceed_the_limit() {
        let (_clock, store) = store();
        let store = Arc::new(store);
        let session = store.create(5).await;

        let mut handles = Vec::new();
        for _ in 0..20 {
            let store = store.clone();
            let id = session.id();
            handles.push(tokio::spawn(async move {
                store.register_question(id, QuestionId::new()).await
            }));
        }

        let mut registered = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                registered += 1;
            }
        }

        assert_eq!(registered, 5);
        let session = store.get_active(session.id()).await.unwrap();
        assert_eq!(session.questions_asked(), 5);
    }
}

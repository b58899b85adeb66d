//! Mock question oracle for testing.
//!
//! Scripted replies, error injection and call tracking, so tests never reach
//! a real text-generation service.
//!
//! # Example
//!
//! ```ignore
//! let oracle = MockOracle::new()
//!     .with_response(r#"{"question":"Q?","options":["A"],"riskLevel":"alto"}"#)
//!     .with_failure(MockFailure::Unavailable);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{OracleError, QuestionOracle};

/// A scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this raw text.
    Success(String),
    /// Fail with this error.
    Failure(MockFailure),
}

/// Error shapes the mock can inject.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Simulate an unreachable oracle.
    Unavailable,
    /// Simulate a non-success HTTP status.
    BadStatus(u16),
    /// Simulate a request timeout.
    Timeout,
    /// Simulate a network failure.
    Network,
    /// Simulate an undecodable body.
    Malformed,
}

impl From<MockFailure> for OracleError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::Unavailable => OracleError::unavailable("mock oracle down"),
            MockFailure::BadStatus(status) => OracleError::BadStatus { status },
            MockFailure::Timeout => OracleError::Timeout { timeout_secs: 30 },
            MockFailure::Network => OracleError::network("mock connection reset"),
            MockFailure::Malformed => OracleError::malformed("mock garbage body"),
        }
    }
}

/// Mock oracle with scripted replies.
///
/// Replies are consumed in order; once the script runs dry every further
/// call succeeds with a fixed well-formed question payload, which keeps
/// long multi-round tests from having to script each turn.
#[derive(Debug, Clone, Default)]
pub struct MockOracle {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockOracle {
    /// Creates a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful raw-text reply.
    pub fn with_response(self, raw: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Success(raw.into()));
        self
    }

    /// Queues an injected failure.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Failure(failure));
        self
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// All prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// The most recent prompt received, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    fn default_reply() -> String {
        r#"{"question":"Como descreveria a sua tolerancia ao risco?","options":["Conservadora","Moderada","Arrojada"],"riskLevel":"medio"}"#
            .to_string()
    }
}

#[async_trait]
impl QuestionOracle for MockOracle {
    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Success(raw)) => Ok(raw),
            Some(MockReply::Failure(failure)) => Err(failure.into()),
            None => Ok(Self::default_reply()),
        }
    }
}

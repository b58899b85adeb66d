//! Question oracle port - interface to the external text generator.
//!
//! The oracle authors question wording from a context prompt. Implementations
//! own transport, timeouts and retries; callers only see the raw generated
//! text or an [`OracleError`]. Orchestration recovers from every oracle error
//! by substituting the fallback question, so these errors never reach the
//! API surface.

use async_trait::async_trait;

/// Port for the external question-authoring service.
#[async_trait]
pub trait QuestionOracle: Send + Sync {
    /// Generates free-form text for an instruction prompt.
    async fn generate(&self, prompt: &str) -> Result<String, OracleError>;
}

/// Failures at the oracle boundary.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// Oracle endpoint is unreachable or answered with a server error.
    #[error("oracle unavailable: {message}")]
    Unavailable { message: String },

    /// Oracle answered with a non-success status.
    #[error("oracle returned status {status}")]
    BadStatus { status: u16 },

    /// Request exceeded the configured timeout.
    #[error("oracle request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Network failure before any response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be decoded into a known shape.
    #[error("malformed oracle response: {0}")]
    Malformed(String),
}

impl OracleError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Returns true if retrying the call could help.
    pub fn is_retryable(&self) -> bool {
        match self {
            OracleError::Unavailable { .. }
            | OracleError::Timeout { .. }
            | OracleError::Network(_) => true,
            OracleError::BadStatus { status } => *status >= 500,
            OracleError::Malformed(_) => false,
        }
    }
}

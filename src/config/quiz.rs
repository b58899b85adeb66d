//! Quiz lifecycle configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Quiz lifecycle configuration
#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    /// Question budget per session
    #[serde(default = "default_max_questions")]
    pub max_questions: u32,

    /// Session TTL in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Question TTL in seconds
    #[serde(default = "default_question_ttl")]
    pub question_ttl_secs: u64,
}

impl QuizConfig {
    /// Validate quiz configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_questions == 0 {
            return Err(ValidationError::InvalidMaxQuestions);
        }
        if self.session_ttl_secs == 0 || self.question_ttl_secs == 0 {
            return Err(ValidationError::InvalidTtl);
        }
        Ok(())
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_questions: default_max_questions(),
            session_ttl_secs: default_session_ttl(),
            question_ttl_secs: default_question_ttl(),
        }
    }
}

fn default_max_questions() -> u32 {
    20
}

fn default_session_ttl() -> u64 {
    30 * 60
}

fn default_question_ttl() -> u64 {
    10 * 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_product_constants() {
        let config = QuizConfig::default();
        assert_eq!(config.max_questions, 20);
        assert_eq!(config.session_ttl_secs, 1800);
        assert_eq!(config.question_ttl_secs, 600);
    }

    #[test]
    fn zero_max_questions_is_rejected() {
        let config = QuizConfig {
            max_questions: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_ttls_are_rejected() {
        let config = QuizConfig {
            session_ttl_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = QuizConfig {
            question_ttl_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

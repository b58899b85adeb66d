//! Question entity issued to the client one at a time.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

use super::RiskLevel;

/// Maximum number of answer options a question may carry.
pub const MAX_OPTIONS: usize = 4;

/// One quiz question plus its answer options and authored risk level.
///
/// Immutable after creation. Authored either by the oracle (via the response
/// parser) or by the deterministic fallback generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    risk_level: RiskLevel,
}

impl Question {
    /// Creates a question with a fresh id, capping options at [`MAX_OPTIONS`].
    pub fn new(text: impl Into<String>, mut options: Vec<String>, risk_level: RiskLevel) -> Self {
        options.truncate(MAX_OPTIONS);
        Self {
            id: QuestionId::new(),
            text: text.into(),
            options,
            risk_level,
        }
    }

    /// The deterministic question substituted whenever the oracle is
    /// unreachable or its output cannot be validated.
    pub fn fallback(risk_level: RiskLevel) -> Self {
        Self::new(
            "Qual e o principal objectivo do credito que pretende solicitar?",
            vec![
                "Financiar consumo imediato".to_string(),
                "Investir em um negocio".to_string(),
                "Criar reserva para emergencias".to_string(),
            ],
            risk_level,
        )
    }

    /// Returns the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Returns the question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the answer options in presentation order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns the risk level the question was authored against.
    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }
}

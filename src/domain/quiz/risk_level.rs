//! Risk level classification attached to questions and inferred for sessions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credit-risk bucket.
///
/// Serializes to the lowercase Portuguese labels used on the wire
/// (`baixo`/`medio`/`alto`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Baixo,
    #[default]
    Medio,
    Alto,
}

impl RiskLevel {
    /// Wire label for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Baixo => "baixo",
            RiskLevel::Medio => "medio",
            RiskLevel::Alto => "alto",
        }
    }

    /// Normalizes a free-form level written by the oracle.
    ///
    /// Case-insensitive keyword match against PT/EN synonyms; unrecognized
    /// input resolves to `fallback`. "alto"/"high" win over the other
    /// keywords, mirroring how oracle output such as "high risk" is read.
    pub fn from_keywords(value: &str, fallback: RiskLevel) -> RiskLevel {
        let value = value.to_lowercase();

        if value.contains("alto") || value.contains("high") {
            return RiskLevel::Alto;
        }
        if value.contains("baixo") || value.contains("low") {
            return RiskLevel::Baixo;
        }
        if value.contains("medio") || value.contains("moderado") || value.contains("medium") {
            return RiskLevel::Medio;
        }

        fallback
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

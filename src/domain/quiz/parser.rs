//! Response parser - turns free-form oracle text into a [`Question`].
//!
//! The oracle is instructed to answer with a single JSON object but routinely
//! wraps it in prose, markdown fences or nothing at all. Parsing therefore
//! never fails: every unusable response converges on the deterministic
//! fallback question.

use serde::Deserialize;

use super::{Question, RiskLevel, MAX_OPTIONS};

/// Options substituted when the oracle sent none in a usable shape.
const DEFAULT_OPTIONS: [&str; 3] = [
    "Prefiro estabilidade",
    "Aceito alguma volatilidade",
    "Busco retornos agressivos",
];

/// Why a raw oracle response could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// No `{ ... }` object anywhere in the raw text.
    MissingJsonObject,
    /// The candidate snippet did not decode against the expected schema.
    InvalidJson(String),
    /// The decoded payload had a missing or blank `question` field.
    BlankQuestion,
}

/// Schema the oracle is contracted to produce.
#[derive(Debug, Deserialize)]
struct OracleQuestionPayload {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    options: Option<serde_json::Value>,
    #[serde(default, rename = "riskLevel")]
    risk_level: Option<String>,
}

/// Extracts a question from the raw oracle text, substituting the fallback
/// question on any failure path.
pub fn parse(raw: &str, fallback_risk: RiskLevel) -> Question {
    match try_parse(raw, fallback_risk) {
        Ok(question) => question,
        Err(failure) => {
            tracing::warn!(?failure, "unusable oracle response, substituting fallback question");
            Question::fallback(fallback_risk)
        }
    }
}

/// Fallible half of [`parse`], kept separate so failure reasons stay
/// observable.
pub fn try_parse(raw: &str, fallback_risk: RiskLevel) -> Result<Question, ParseFailure> {
    let snippet = extract_json_object(raw).ok_or(ParseFailure::MissingJsonObject)?;

    let payload: OracleQuestionPayload =
        serde_json::from_str(snippet).map_err(|e| ParseFailure::InvalidJson(e.to_string()))?;

    let text = payload
        .question
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .ok_or(ParseFailure::BlankQuestion)?;

    let options = sanitize_options(payload.options);
    let risk_level = payload
        .risk_level
        .map(|value| RiskLevel::from_keywords(&value, fallback_risk))
        .unwrap_or(fallback_risk);

    Ok(Question::new(text, options, risk_level))
}

/// Slice between the first `{` and the last `}`, if both exist in order.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if start < end {
        Some(&raw[start..=end])
    } else {
        None
    }
}

/// Normalizes whatever the oracle put under `options`.
///
/// Sequences and delimiter-separated strings are trimmed, emptied of blanks
/// and capped at [`MAX_OPTIONS`]; anything else gets the default triad.
fn sanitize_options(candidate: Option<serde_json::Value>) -> Vec<String> {
    match candidate {
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::trim)
            .filter(|option| !option.is_empty())
            .take(MAX_OPTIONS)
            .map(str::to_string)
            .collect(),
        Some(serde_json::Value::String(joined)) => joined
            .split(|c| matches!(c, ',' | ';' | '|'))
            .map(str::trim)
            .filter(|option| !option.is_empty())
            .take(MAX_OPTIONS)
            .map(str::to_string)
            .collect(),
        _ => DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

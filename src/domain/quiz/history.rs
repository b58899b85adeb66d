//! Answer history records and their prompt-facing summary.

use serde::{Deserialize, Serialize};

/// One past turn as reported back by the client.
///
/// Clients have historically sent these under a few field spellings, so each
/// field tolerates its known aliases and every field is optional; rendering
/// applies the literal fallbacks instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    #[serde(default, alias = "questionText", alias = "id")]
    pub question: Option<String>,
    #[serde(default, alias = "response")]
    pub answer: Option<String>,
    #[serde(default, alias = "partialScore")]
    pub score: Option<f64>,
    #[serde(default, alias = "inferredRiskLevel")]
    pub risk_level: Option<String>,
}

/// Sentinel used when a quiz has no prior turns.
pub const NO_HISTORY: &str = "Sem respostas anteriores.";

/// Renders the ordered turn history into the summary block embedded in
/// continuation prompts.
///
/// Each turn becomes one line,
/// `"{index}. {question} | Resposta: {answer} | Score: {score} | Risco: {risk}"`,
/// with per-field fallbacks for missing data. An empty history renders as
/// [`NO_HISTORY`].
pub fn summarize_history(history: &[AnswerRecord]) -> String {
    if history.is_empty() {
        return NO_HISTORY.to_string();
    }

    history
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let position = index + 1;
            let question = entry
                .question
                .clone()
                .unwrap_or_else(|| format!("Pergunta {position}"));
            let answer = entry.answer.as_deref().unwrap_or("Nao informado");
            let score = entry
                .score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "n/d".to_string());
            let risk = entry.risk_level.as_deref().unwrap_or("desconhecido");

            format!("{position}. {question} | Resposta: {answer} | Score: {score} | Risco: {risk}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_uses_sentinel() {
        assert_eq!(summarize_history(&[]), NO_HISTORY);
    }

    #[test]
    fn renders_one_line_per_turn() {
        let history = vec![
            AnswerRecord {
                question: Some("Qual o objectivo do credito?".to_string()),
                answer: Some("Investimento".to_string()),
                score: Some(56.0),
                risk_level: Some("medio".to_string()),
            },
            AnswerRecord {
                question: Some("Aceita volatilidade?".to_string()),
                answer: Some("Sim".to_string()),
                score: Some(71.0),
                risk_level: Some("alto".to_string()),
            },
        ];

        let summary = summarize_history(&history);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "1. Qual o objectivo do credito? | Resposta: Investimento | Score: 56 | Risco: medio"
        );
        assert_eq!(
            lines[1],
            "2. Aceita volatilidade? | Resposta: Sim | Score: 71 | Risco: alto"
        );
    }

    #[test]
    fn missing_fields_fall_back_to_literals() {
        let history = vec![AnswerRecord::default()];
        assert_eq!(
            summarize_history(&history),
            "1. Pergunta 1 | Resposta: Nao informado | Score: n/d | Risco: desconhecido"
        );
    }

    #[test]
    fn accepts_aliased_field_names() {
        let record: AnswerRecord = serde_json::from_str(
            r#"{"questionText":"Q?","response":"R","partialScore":12.5,"inferredRiskLevel":"baixo"}"#,
        )
        .unwrap();

        assert_eq!(record.question.as_deref(), Some("Q?"));
        assert_eq!(record.answer.as_deref(), Some("R"));
        assert_eq!(record.score, Some(12.5));
        assert_eq!(record.risk_level.as_deref(), Some("baixo"));
    }

    #[test]
    fn fractional_scores_keep_their_precision() {
        let history = vec![AnswerRecord {
            score: Some(12.5),
            ..Default::default()
        }];
        assert!(summarize_history(&history).contains("Score: 12.5"));
    }
}

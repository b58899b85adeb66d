//! Prompt builder - assembles the oracle instruction text.
//!
//! Pure string assembly; the oracle adapter owns the transport.

use super::{summarize_history, AnswerRecord, RiskLevel, NO_HISTORY};

/// Fixed rule preamble sent on every oracle call: one question at a time and
/// a strict JSON-only output contract.
const BASE_PROMPT: &str = "\
Voce e um consultor financeiro especializado em avaliar o risco de credito de clientes.
Gere apenas UMA pergunta por vez, focada em entendimento de objectivos financeiros, capacidade de pagamento e tolerancia ao risco.
Responda unicamente com JSON valido no formato:
{
  \"question\": \"texto claro e objectivo\",
  \"options\": [\"opcao A\", \"opcao B\", \"opcao C\"],
  \"riskLevel\": \"baixo|medio|alto\"
}
";

/// Sentinel embedded when the last answer arrived empty.
const ANSWER_NOT_INFORMED: &str = "nao informado";

/// Everything the prompt builder needs to know about the quiz so far.
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub is_initial: bool,
    pub current_score: u8,
    pub last_answer: String,
    pub last_risk_level: RiskLevel,
    pub history_summary: String,
}

impl PromptContext {
    /// Context for the very first question of a session.
    pub fn initial() -> Self {
        Self {
            is_initial: true,
            current_score: 0,
            last_answer: String::new(),
            last_risk_level: RiskLevel::Medio,
            history_summary: NO_HISTORY.to_string(),
        }
    }

    /// Context for a follow-up question.
    pub fn continuation(
        current_score: u8,
        last_answer: impl Into<String>,
        last_risk_level: RiskLevel,
        history: &[AnswerRecord],
    ) -> Self {
        Self {
            is_initial: false,
            current_score,
            last_answer: last_answer.into(),
            last_risk_level,
            history_summary: summarize_history(history),
        }
    }
}

/// Builds the full oracle instruction text for a context.
pub fn build_prompt(ctx: &PromptContext) -> String {
    if ctx.is_initial {
        return format!(
            "{BASE_PROMPT}
Contexto: cliente iniciando avaliacao de risco de credito.
Score acumulado: 0.
Historico: sem respostas anteriores.
Objetivo: formular a primeira pergunta que combine finalidade do credito e tolerancia ao risco.
"
        );
    }

    let last_answer = if ctx.last_answer.is_empty() {
        ANSWER_NOT_INFORMED
    } else {
        ctx.last_answer.as_str()
    };

    format!(
        "{BASE_PROMPT}
Contexto actualizado:
- Score actual: {score}
- Ultimo nivel de risco analisado: {risk}
- Ultima resposta fornecida: {last_answer}
- Historico resumido:
{history}

Formule a proxima pergunta mantendo o foco em risco de credito e adaptando o nivel de dificuldade conforme o perfil identificado.",
        score = ctx.current_score,
        risk = ctx.last_risk_level,
        history = ctx.history_summary,
    )
}

//! Scoring engine - deterministic score deltas and risk inference.
//!
//! No ML and no randomness: a fixed delta table keyed by the reference risk
//! level of the question being answered and keyword presence in the answer.

use super::RiskLevel;

/// Score floor.
pub const MIN_SCORE: u8 = 0;
/// Score ceiling.
pub const MAX_SCORE: u8 = 100;

/// Score at or above which a session is rated `alto`.
pub const HIGH_RISK_THRESHOLD: u8 = 70;
/// Score at or above which a session is rated `medio`.
pub const MEDIUM_RISK_THRESHOLD: u8 = 40;

/// Computes the updated score for an answer.
///
/// `reference` is the risk level of the question being answered. The delta
/// table keys on it plus PT keyword presence in the lower-cased answer:
/// acceptance wording moves `alto` questions up, safety wording moves
/// `baixo` questions up, everything on `medio` drifts mildly upward.
///
/// A non-finite `current_score` is treated as 0. The result is clamped to
/// `[MIN_SCORE, MAX_SCORE]` and rounded to the nearest integer.
pub fn compute_score(current_score: f64, answer: &str, reference: RiskLevel) -> u8 {
    let base = if current_score.is_finite() {
        current_score
    } else {
        0.0
    };
    let answer = answer.to_lowercase();

    let delta: i32 = match reference {
        RiskLevel::Alto => {
            if answer.contains("sim") || answer.contains("aceito") {
                15
            } else {
                -12
            }
        }
        RiskLevel::Medio => {
            if answer.contains("depende") || answer.contains("equilibrado") {
                8
            } else {
                6
            }
        }
        RiskLevel::Baixo => {
            if answer.contains("seguro") || answer.contains("baixo") {
                10
            } else {
                -5
            }
        }
    };

    clamp_score(base + f64::from(delta))
}

/// Infers the session risk bucket from an accumulated score.
pub fn infer_risk_level(score: u8) -> RiskLevel {
    if score >= HIGH_RISK_THRESHOLD {
        RiskLevel::Alto
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medio
    } else {
        RiskLevel::Baixo
    }
}

fn clamp_score(value: f64) -> u8 {
    if !value.is_finite() || value < f64::from(MIN_SCORE) {
        return MIN_SCORE;
    }
    if value > f64::from(MAX_SCORE) {
        return MAX_SCORE;
    }
    value.round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn acceptance_raises_score_on_high_risk_questions() {
        assert_eq!(compute_score(50.0, "sim", RiskLevel::Alto), 65);
        assert_eq!(compute_score(50.0, "Aceito o risco", RiskLevel::Alto), 65);
    }

    #[test]
    fn refusal_lowers_score_on_high_risk_questions() {
        assert_eq!(compute_score(50.0, "nunca", RiskLevel::Alto), 38);
    }

    #[test]
    fn medium_risk_questions_drift_upward() {
        assert_eq!(compute_score(50.0, "depende do cenario", RiskLevel::Medio), 58);
        assert_eq!(compute_score(50.0, "equilibrado", RiskLevel::Medio), 58);
        assert_eq!(compute_score(50.0, "qualquer coisa", RiskLevel::Medio), 56);
    }

    #[test]
    fn safety_wording_raises_score_on_low_risk_questions() {
        assert_eq!(compute_score(50.0, "prefiro o seguro", RiskLevel::Baixo), 60);
        assert_eq!(compute_score(50.0, "risco baixo", RiskLevel::Baixo), 60);
        assert_eq!(compute_score(50.0, "tanto faz", RiskLevel::Baixo), 45);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert_eq!(compute_score(50.0, "SIM", RiskLevel::Alto), 65);
    }

    #[test]
    fn score_clamps_at_bounds() {
        assert_eq!(compute_score(98.0, "sim", RiskLevel::Alto), 100);
        assert_eq!(compute_score(3.0, "nao", RiskLevel::Alto), 0);
    }

    #[test]
    fn non_finite_score_treated_as_zero() {
        assert_eq!(compute_score(f64::NAN, "sim", RiskLevel::Alto), 15);
        assert_eq!(compute_score(f64::INFINITY, "nao", RiskLevel::Alto), 0);
        assert_eq!(compute_score(f64::NEG_INFINITY, "depende", RiskLevel::Medio), 8);
    }

    #[test]
    fn fractional_scores_round_to_nearest() {
        assert_eq!(compute_score(49.6, "qualquer", RiskLevel::Medio), 56);
        assert_eq!(compute_score(49.4, "qualquer", RiskLevel::Medio), 55);
    }

    #[test]
    fn risk_boundaries() {
        assert_eq!(infer_risk_level(39), RiskLevel::Baixo);
        assert_eq!(infer_risk_level(40), RiskLevel::Medio);
        assert_eq!(infer_risk_level(69), RiskLevel::Medio);
        assert_eq!(infer_risk_level(70), RiskLevel::Alto);
        assert_eq!(infer_risk_level(0), RiskLevel::Baixo);
        assert_eq!(infer_risk_level(100), RiskLevel::Alto);
    }

    proptest! {
        #[test]
        fn compute_score_stays_in_range(
            current in proptest::num::f64::ANY,
            answer in ".*",
            reference in prop_oneof![
                Just(RiskLevel::Baixo),
                Just(RiskLevel::Medio),
                Just(RiskLevel::Alto),
            ],
        ) {
            let score = compute_score(current, &answer, reference);
            prop_assert!(score <= MAX_SCORE);
        }
    }
}

//! Application layer - use-case orchestration over the domain.

mod orchestrator;

pub use orchestrator::{AnswerCommand, AnswerOutcome, QuizOrchestrator, StartedQuiz};

use serde::Serialize;
use utoipa::ToSchema;

use crate::state::state_machine::QuizPhase;

/// Publicly visible quiz phase exposed to clients (REST/SSE).
#[derive(Debug, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisibleQuizPhase {
    /// No run in progress.
    NotStarted,
    /// A question is waiting for an answer.
    Question,
    /// The current question was answered; the next one is coming.
    Answered,
    /// The run is over; results are available.
    Completed,
}

impl From<&QuizPhase> for VisibleQuizPhase {
    fn from(value: &QuizPhase) -> Self {
        match value {
            QuizPhase::NotStarted => VisibleQuizPhase::NotStarted,
            QuizPhase::InProgress {
                answered: false, ..
            } => VisibleQuizPhase::Question,
            QuizPhase::InProgress { answered: true, .. } => VisibleQuizPhase::Answered,
            QuizPhase::Completed => VisibleQuizPhase::Completed,
        }
    }
}

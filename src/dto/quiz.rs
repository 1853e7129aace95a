use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dto::phase::VisibleQuizPhase,
    services::quiz_service::{AnswerOutcome, CurrentQuestion},
};

/// Answer selected by the player for the question on screen.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AnswerRequest {
    #[validate(length(min = 1, max = 32))]
    pub question_id: String,
    pub selected_index: usize,
}

/// Progress indicator (`current/total`).
#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct ProgressSummary {
    /// 1-based position of the question on screen.
    pub current: usize,
    pub total: usize,
    pub percentage: u32,
}

impl ProgressSummary {
    fn new(current: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((current as f64 / total as f64) * 100.0).round() as u32
        };
        Self {
            current,
            total,
            percentage,
        }
    }
}

/// Question as shown to the player (the correct option is not disclosed).
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionSummary {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
}

/// Outcome of the answer recorded for a question.
#[skip_serializing_none]
#[derive(Debug, Serialize, ToSchema)]
pub struct AnswerSummary {
    pub question_id: String,
    /// Absent when the countdown expired without an answer.
    pub selected_index: Option<usize>,
    pub is_correct: bool,
    pub correct_index: usize,
    pub correct_option: String,
    pub score: u32,
    /// What the run does once the auto-advance delay elapses.
    pub next: NextStep,
    pub auto_advance_ms: u64,
}

/// Step taken after the auto-advance delay.
#[derive(Debug, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    NextQuestion,
    Results,
}

impl From<AnswerOutcome> for AnswerSummary {
    fn from(outcome: AnswerOutcome) -> Self {
        Self {
            question_id: outcome.answer.question_id,
            selected_index: outcome.answer.selected_index,
            is_correct: outcome.answer.is_correct,
            correct_index: outcome.correct_index,
            correct_option: outcome.correct_option,
            score: outcome.score,
            next: if outcome.is_last {
                NextStep::Results
            } else {
                NextStep::NextQuestion
            },
            auto_advance_ms: outcome.auto_advance_delay.as_millis() as u64,
        }
    }
}

/// Everything the quiz surface needs to render the current question.
#[skip_serializing_none]
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionResponse {
    pub session_code: String,
    pub player_count: u32,
    pub phase: VisibleQuizPhase,
    pub progress: ProgressSummary,
    pub question: QuestionSummary,
    pub duration_seconds: u64,
    pub remaining_seconds: u64,
    pub score: u32,
    /// Present once the question has been answered (or timed out).
    pub answer: Option<AnswerSummary>,
}

impl From<CurrentQuestion> for QuestionResponse {
    fn from(current: CurrentQuestion) -> Self {
        Self {
            session_code: current.session.code,
            player_count: current.session.player_count,
            phase: (&current.phase).into(),
            progress: ProgressSummary::new(current.question_index + 1, current.total),
            question: QuestionSummary {
                id: current.question.id,
                prompt: current.question.prompt,
                options: current.question.options,
            },
            duration_seconds: current.duration.as_secs(),
            remaining_seconds: current.remaining_seconds,
            score: current.score,
            answer: current.answer.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_reports_one_based_position() {
        assert_eq!(
            ProgressSummary::new(1, 5),
            ProgressSummary {
                current: 1,
                total: 5,
                percentage: 20
            }
        );
        assert_eq!(ProgressSummary::new(5, 5).percentage, 100);
        assert_eq!(ProgressSummary::new(0, 0).percentage, 0);
    }
}

use serde::Serialize;
use serde_with::skip_serializing_none;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::phase::VisibleQuizPhase;

#[derive(Clone, Debug)]
/// Dispatched payload carried across the SSE channel.
pub struct ServerEvent {
    pub event: Option<String>,
    pub data: String,
}

impl ServerEvent {
    /// Build an event from an already formatted payload.
    pub fn new(event: impl Into<Option<String>>, data: String) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }

    /// Convenience wrapper that serialises `payload` into the SSE data field.
    pub fn json<E, T>(event: E, payload: &T) -> serde_json::Result<Self>
    where
        E: Into<Option<String>>,
        T: Serialize,
    {
        Ok(Self {
            event: event.into(),
            data: serde_json::to_string(payload)?,
        })
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize, ToSchema)]
/// Broadcast whenever the quiz phase changes.
pub struct PhaseChangedEvent {
    pub phase: VisibleQuizPhase,
    /// Present while a question is on screen.
    pub question_index: Option<usize>,
    pub question_count: usize,
    pub score: u32,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast each time the countdown crosses a whole second.
pub struct TimerTickEvent {
    pub run_id: Uuid,
    pub question_index: usize,
    pub remaining_seconds: u64,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast once when the countdown of a question reaches zero.
pub struct TimerExpiredEvent {
    pub run_id: Uuid,
    pub question_index: usize,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when an answer (or the timeout sentinel) was recorded.
pub struct AnswerRecordedEvent {
    pub run_id: Uuid,
    pub question_id: String,
    pub selected_index: Option<usize>,
    pub is_correct: bool,
    pub score: u32,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast once when the last question is left for the results.
pub struct RunCompletedEvent {
    pub run_id: Uuid,
    pub session_id: String,
    pub score: u32,
    pub total_questions: u32,
}

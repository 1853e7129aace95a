use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::{
    dto::sse::{
        AnswerRecordedEvent, PhaseChangedEvent, RunCompletedEvent, ServerEvent, TimerExpiredEvent,
        TimerTickEvent,
    },
    state::{SharedState, quiz::Answer, state_machine::QuizPhase},
};

const EVENT_PHASE_CHANGED: &str = "phase_changed";
const EVENT_TIMER_TICK: &str = "timer.tick";
const EVENT_TIMER_EXPIRED: &str = "timer.expired";
const EVENT_ANSWER_RECORDED: &str = "answer.recorded";
const EVENT_RUN_COMPLETED: &str = "run.completed";

/// Broadcast the current quiz phase.
pub async fn broadcast_phase_changed(state: &SharedState) {
    let snapshot = state.machine().read().await.snapshot();
    let score = state.quiz().read().await.score();
    let question_index = match snapshot.phase {
        QuizPhase::InProgress { question_index, .. } => Some(question_index),
        _ => None,
    };

    let payload = PhaseChangedEvent {
        phase: (&snapshot.phase).into(),
        question_index,
        question_count: snapshot.question_count,
        score,
    };
    send_public_event(state, EVENT_PHASE_CHANGED, &payload);
}

/// Broadcast the seconds left on the current question.
pub fn broadcast_timer_tick(
    state: &SharedState,
    run_id: Uuid,
    question_index: usize,
    remaining_seconds: u64,
) {
    let payload = TimerTickEvent {
        run_id,
        question_index,
        remaining_seconds,
    };
    send_public_event(state, EVENT_TIMER_TICK, &payload);
}

/// Broadcast that the countdown of a question ran out.
pub fn broadcast_timer_expired(state: &SharedState, run_id: Uuid, question_index: usize) {
    let payload = TimerExpiredEvent {
        run_id,
        question_index,
    };
    send_public_event(state, EVENT_TIMER_EXPIRED, &payload);
}

/// Broadcast a recorded answer together with the updated score.
pub fn broadcast_answer_recorded(state: &SharedState, run_id: Uuid, answer: &Answer, score: u32) {
    let payload = AnswerRecordedEvent {
        run_id,
        question_id: answer.question_id.clone(),
        selected_index: answer.selected_index,
        is_correct: answer.is_correct,
        score,
    };
    send_public_event(state, EVENT_ANSWER_RECORDED, &payload);
}

/// Broadcast the final score of a completed run.
pub fn broadcast_run_completed(
    state: &SharedState,
    run_id: Uuid,
    session_id: &str,
    score: u32,
    total_questions: u32,
) {
    let payload = RunCompletedEvent {
        run_id,
        session_id: session_id.to_string(),
        score,
        total_questions,
    };
    send_public_event(state, EVENT_RUN_COMPLETED, &payload);
}

fn send_public_event(state: &SharedState, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => state.public_sse().broadcast(event),
        Err(err) => warn!(event, error = %err, "failed to serialize public SSE payload"),
    }
}

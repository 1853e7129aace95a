use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    services::{quiz_service, sse_events},
    state::{SharedState, countdown::Countdown},
};

/// Spawn the countdown of question `question_index`, replacing any previous one.
///
/// The countdown starts from the moment the run showed the question, so a
/// restart of the polling task never grants extra time.
pub async fn start_countdown(state: &SharedState, run_id: Uuid, question_index: usize) {
    let started_at = state.quiz().read().await.question_started_at();
    let countdown = Countdown::new(started_at, state.config().question_duration());
    let poll_interval = state.config().timer_poll_interval();

    let task_state = state.clone();
    let handle = tokio::spawn(async move {
        run_countdown(task_state, run_id, question_index, countdown, poll_interval).await;
    });

    state.timers().lock().await.replace_countdown(handle);
    debug!(%run_id, question_index, "countdown started");
}

async fn run_countdown(
    state: SharedState,
    run_id: Uuid,
    question_index: usize,
    mut countdown: Countdown,
    poll_interval: Duration,
) {
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_remaining = None;

    while !countdown.has_expired() {
        ticker.tick().await;
        let tick = countdown.poll(Instant::now());

        if last_remaining != Some(tick.remaining) {
            last_remaining = Some(tick.remaining);
            sse_events::broadcast_timer_tick(&state, run_id, question_index, tick.remaining);
        }

        if tick.expired_now {
            sse_events::broadcast_timer_expired(&state, run_id, question_index);
            if let Err(err) = quiz_service::expire_question(&state, run_id, question_index).await {
                warn!(%run_id, question_index, error = %err, "failed to record timeout");
            }
        }
    }
}

/// Schedule the move past question `question_index` once the auto-advance delay
/// elapses, superseding any pending one.
pub async fn schedule_auto_advance(state: &SharedState, run_id: Uuid, question_index: usize) {
    let delay = state.config().auto_advance_delay();

    let task_state = state.clone();
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Err(err) = quiz_service::advance_or_complete(task_state, run_id, question_index).await
        {
            warn!(%run_id, question_index, error = %err, "auto-advance failed");
        }
    });

    state.timers().lock().await.replace_auto_advance(handle);
    debug!(%run_id, question_index, delay_ms = delay.as_millis() as u64, "auto-advance scheduled");
}

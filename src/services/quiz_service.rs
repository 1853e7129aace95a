use std::time::Duration;

use futures::{FutureExt, future::BoxFuture};
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    data::{questions::Question, sessions::GameSession},
    error::ServiceError,
    services::{results_service, sse_events, timer_service},
    state::{
        SharedState,
        countdown::Countdown,
        quiz::Answer,
        state_machine::{QuizEvent, QuizPhase},
    },
};

/// Answer recorded for a question, with what the player needs to see next.
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    pub answer: Answer,
    pub correct_index: usize,
    pub correct_option: String,
    pub score: u32,
    /// Whether the answered question was the last one of the run.
    pub is_last: bool,
    pub auto_advance_delay: Duration,
}

/// Question on screen for the active session.
#[derive(Debug, Clone)]
pub struct CurrentQuestion {
    pub session: GameSession,
    pub phase: QuizPhase,
    pub question_index: usize,
    pub total: usize,
    pub question: Question,
    pub duration: Duration,
    pub remaining_seconds: u64,
    pub score: u32,
    pub answer: Option<AnswerOutcome>,
}

/// What the quiz surface should show.
#[derive(Debug, Clone)]
pub enum QuizView {
    /// No run is in progress; go back to the entry surface.
    NotStarted,
    /// A question is on screen.
    Question(Box<CurrentQuestion>),
    /// Every question was answered; go to the results.
    Completed,
}

/// Start a fresh run for `session`, discarding any previous one.
pub async fn start_run(state: &SharedState, session: GameSession) -> Result<Uuid, ServiceError> {
    let _gate = state.transition_gate().lock().await;
    state.timers().lock().await.cancel_all();

    state.machine().write().await.apply(QuizEvent::Start)?;
    let run_id = {
        let mut run = state.quiz().write().await;
        run.start(session.code.clone());
        run.id()
    };
    info!(%run_id, code = %session.code, players = session.player_count, "quiz run started");
    *state.session().write().await = Some(session);

    timer_service::start_countdown(state, run_id, 0).await;
    sse_events::broadcast_phase_changed(state).await;
    Ok(run_id)
}

/// Describe the question currently on screen.
pub async fn current_view(state: &SharedState) -> Result<QuizView, ServiceError> {
    let phase = state.machine().read().await.phase();
    let (question_index, answered) = match phase {
        QuizPhase::NotStarted => return Ok(QuizView::NotStarted),
        QuizPhase::Completed => return Ok(QuizView::Completed),
        QuizPhase::InProgress {
            question_index,
            answered,
        } => (question_index, answered),
    };

    let Some(session) = state.session().read().await.clone() else {
        return Ok(QuizView::NotStarted);
    };
    let question = question_at(state, question_index)?.clone();
    let duration = state.config().question_duration();
    let (total, is_last) = {
        let machine = state.machine().read().await;
        (machine.question_count(), machine.is_last_question(question_index))
    };

    let run = state.quiz().read().await;
    let remaining_seconds =
        Countdown::new(run.question_started_at(), duration).remaining_at(Instant::now());
    let answer = run
        .last_answer()
        .filter(|_| answered)
        .map(|answer| AnswerOutcome {
            answer: answer.clone(),
            correct_index: question.correct_index,
            correct_option: question.correct_option().to_string(),
            score: run.score(),
            is_last,
            auto_advance_delay: state.config().auto_advance_delay(),
        });

    Ok(QuizView::Question(Box::new(CurrentQuestion {
        session,
        phase,
        question_index,
        total,
        question,
        duration,
        remaining_seconds,
        score: run.score(),
        answer,
    })))
}

/// Record the option the player picked for `question_id`.
///
/// Only the question on screen can be answered, and only once.
pub async fn submit_answer(
    state: &SharedState,
    question_id: &str,
    selected_index: usize,
) -> Result<AnswerOutcome, ServiceError> {
    let _gate = state.transition_gate().lock().await;

    let QuizPhase::InProgress {
        question_index,
        answered,
    } = state.machine().read().await.phase()
    else {
        return Err(ServiceError::InvalidState(
            "no question is waiting for an answer".into(),
        ));
    };

    let Some(submitted) = state.questions().by_id(question_id) else {
        return Err(ServiceError::InvalidInput(format!(
            "unknown question `{question_id}`"
        )));
    };
    let question = question_at(state, question_index)?;
    if submitted.id != question.id {
        return Err(ServiceError::InvalidInput(format!(
            "question `{question_id}` is not the current question"
        )));
    }
    if answered {
        return Err(ServiceError::InvalidState(format!(
            "question `{question_id}` was already answered"
        )));
    }
    if selected_index >= question.options.len() {
        return Err(ServiceError::InvalidInput(format!(
            "option {selected_index} does not exist for question `{question_id}`"
        )));
    }

    state.timers().lock().await.cancel_countdown();
    record_answer(state, question_index, Some(selected_index)).await
}

/// Record the "no answer" sentinel when the countdown of `question_index` ran out.
///
/// Does nothing if the run was replaced, the question changed or an answer was
/// already recorded.
pub async fn expire_question(
    state: &SharedState,
    run_id: Uuid,
    question_index: usize,
) -> Result<(), ServiceError> {
    let _gate = state.transition_gate().lock().await;

    if state.quiz().read().await.id() != run_id {
        debug!(%run_id, "ignoring timeout of a replaced run");
        return Ok(());
    }

    let expected = QuizPhase::InProgress {
        question_index,
        answered: false,
    };
    if state.machine().read().await.phase() != expected {
        debug!(%run_id, question_index, "ignoring timeout of an answered question");
        return Ok(());
    }

    info!(%run_id, question_index, "question timed out without an answer");
    record_answer(state, question_index, None).await.map(|_| ())
}

/// Leave answered question `question_index`: advance to the next one, or
/// complete the run after the last one.
///
/// Stale requests (another run, another question, nothing answered) are ignored.
pub fn advance_or_complete(
    state: SharedState,
    run_id: Uuid,
    question_index: usize,
) -> BoxFuture<'static, Result<(), ServiceError>> {
    async move {
        let _gate = state.transition_gate().lock().await;

        if state.quiz().read().await.id() != run_id {
            debug!(%run_id, "ignoring auto-advance of a replaced run");
            return Ok(());
        }
        let expected = QuizPhase::InProgress {
            question_index,
            answered: true,
        };
        if state.machine().read().await.phase() != expected {
            debug!(%run_id, question_index, "ignoring stale auto-advance");
            return Ok(());
        }

        state.timers().lock().await.release_auto_advance();

        let is_last = state.machine().read().await.is_last_question(question_index);
        if is_last {
            return complete_run(&state, run_id).await;
        }

        state.machine().write().await.apply(QuizEvent::Advance)?;
        state.quiz().write().await.advance();
        info!(%run_id, question_index = question_index + 1, "moved to next question");

        timer_service::start_countdown(&state, run_id, question_index + 1).await;
        sse_events::broadcast_phase_changed(&state).await;
        Ok(())
    }
    .boxed()
}

/// Drop the current run and session.
pub async fn reset_run(state: &SharedState) -> Result<(), ServiceError> {
    let _gate = state.transition_gate().lock().await;
    state.timers().lock().await.cancel_all();

    state.machine().write().await.apply(QuizEvent::Reset)?;
    state.quiz().write().await.reset();
    state.session().write().await.take();
    info!("quiz run reset");

    sse_events::broadcast_phase_changed(state).await;
    Ok(())
}

// Caller holds the transition gate.
async fn record_answer(
    state: &SharedState,
    question_index: usize,
    selected_index: Option<usize>,
) -> Result<AnswerOutcome, ServiceError> {
    let question = question_at(state, question_index)?;

    let is_last = {
        let mut machine = state.machine().write().await;
        machine.apply(QuizEvent::AnswerRecorded)?;
        machine.is_last_question(question_index)
    };
    let (run_id, answer, score, elapsed_secs) = {
        let mut run = state.quiz().write().await;
        let answer = run.submit_answer(&question.id, selected_index, question.correct_index);
        (run.id(), answer, run.score(), run.time_elapsed())
    };
    info!(
        %run_id,
        elapsed_secs,
        question_id = %answer.question_id,
        selected = ?answer.selected_index,
        correct = answer.is_correct,
        score,
        "answer recorded"
    );

    sse_events::broadcast_answer_recorded(state, run_id, &answer, score);
    sse_events::broadcast_phase_changed(state).await;
    timer_service::schedule_auto_advance(state, run_id, question_index).await;

    Ok(AnswerOutcome {
        answer,
        correct_index: question.correct_index,
        correct_option: question.correct_option().to_string(),
        score,
        is_last,
        auto_advance_delay: state.config().auto_advance_delay(),
    })
}

// Caller holds the transition gate.
async fn complete_run(state: &SharedState, run_id: Uuid) -> Result<(), ServiceError> {
    state.machine().write().await.apply(QuizEvent::Complete)?;
    state.timers().lock().await.cancel_countdown();

    let (session_id, score, total_questions) = {
        let run = state.quiz().read().await;
        (
            run.session_id().unwrap_or("unknown").to_string(),
            run.score(),
            run.answers().len() as u32,
        )
    };
    info!(%run_id, session = %session_id, score, total_questions, "quiz run completed");

    results_service::record_score(state, &session_id, score, total_questions);
    sse_events::broadcast_run_completed(state, run_id, &session_id, score, total_questions);
    sse_events::broadcast_phase_changed(state).await;
    Ok(())
}

fn question_at(state: &SharedState, index: usize) -> Result<&Question, ServiceError> {
    state
        .questions()
        .get(index)
        .ok_or_else(|| ServiceError::NotFound(format!("question #{index} does not exist")))
}

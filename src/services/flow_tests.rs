use std::time::Duration;

use tokio::time::sleep;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    dto::feedback::FeedbackRequest,
    error::ServiceError,
    services::{
        feedback_service,
        quiz_service::{self, QuizView},
        results_service, session_service,
    },
    state::{AppState, SharedState, state_machine::QuizPhase},
};

const AUTO_ADVANCE: Duration = Duration::from_millis(2_100);

fn new_state() -> SharedState {
    AppState::in_memory(AppConfig::default())
}

async fn phase(state: &SharedState) -> QuizPhase {
    state.machine().read().await.phase()
}

async fn answer_current(state: &SharedState, correct: bool) {
    let QuizPhase::InProgress { question_index, .. } = phase(state).await else {
        panic!("no question on screen");
    };
    let question = state.questions().get(question_index).expect("question").clone();
    let selected = if correct {
        question.correct_index
    } else {
        (question.correct_index + 1) % question.options.len()
    };
    quiz_service::submit_answer(state, &question.id, selected)
        .await
        .expect("answer accepted");
}

#[tokio::test(start_paused = true)]
async fn join_rejects_empty_and_unknown_codes() {
    let state = new_state();

    let err = session_service::join_session(&state, "   ").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(m) if m == "please enter a session code"));

    let err = session_service::join_session(&state, "XYZ999").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(m) if m == "invalid session code"));

    assert_eq!(phase(&state).await, QuizPhase::NotStarted);
    assert!(state.session().read().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn join_starts_a_run_on_the_first_question() {
    let state = new_state();

    let session = session_service::join_session(&state, " abc123 ").await.unwrap();

    assert_eq!(session.code, "ABC123");
    assert_eq!(session.id, "session-abc123");
    assert!((5..15).contains(&session.player_count));
    assert_eq!(
        phase(&state).await,
        QuizPhase::InProgress {
            question_index: 0,
            answered: false
        }
    );
    assert_eq!(state.quiz().read().await.session_id(), Some("ABC123"));
    assert!(state.timers().lock().await.countdown_active());
}

#[tokio::test(start_paused = true)]
async fn quiz_routes_only_resolve_the_joined_session() {
    let state = new_state();
    assert!(session_service::resolve_session(&state, "abc123").await.is_none());

    session_service::join_session(&state, "ABC123").await.unwrap();

    assert!(session_service::resolve_session(&state, "abc123").await.is_some());
    assert!(session_service::resolve_session(&state, "DEF456").await.is_none());
    assert!(session_service::resolve_session(&state, "nope").await.is_none());
}

#[tokio::test(start_paused = true)]
async fn current_view_follows_the_run() {
    let state = new_state();
    assert!(matches!(
        quiz_service::current_view(&state).await.unwrap(),
        QuizView::NotStarted
    ));

    session_service::join_session(&state, "DEF456").await.unwrap();
    sleep(Duration::from_millis(10_050)).await;

    let QuizView::Question(view) = quiz_service::current_view(&state).await.unwrap() else {
        panic!("expected a question");
    };
    assert_eq!(view.question_index, 0);
    assert_eq!(view.total, 5);
    assert_eq!(view.remaining_seconds, 20);
    assert!(view.answer.is_none());

    answer_current(&state, true).await;
    let QuizView::Question(view) = quiz_service::current_view(&state).await.unwrap() else {
        panic!("expected a question");
    };
    let answer = view.answer.expect("answer shown");
    assert!(answer.answer.is_correct);
    assert_eq!(answer.score, 1);
    assert!(!answer.is_last);
}

#[tokio::test(start_paused = true)]
async fn submissions_are_checked_against_the_current_question() {
    let state = new_state();

    let err = quiz_service::submit_answer(&state, "q1", 0).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidState(_)));

    session_service::join_session(&state, "ABC123").await.unwrap();

    let err = quiz_service::submit_answer(&state, "q2", 0).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(m) if m.contains("not the current question")));

    let err = quiz_service::submit_answer(&state, "q99", 0).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(m) if m == "unknown question `q99`"));

    let err = quiz_service::submit_answer(&state, "q1", 4).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));

    quiz_service::submit_answer(&state, "q1", 0).await.unwrap();
    let err = quiz_service::submit_answer(&state, "q1", 1).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidState(_)));

    let run = state.quiz().read().await;
    assert_eq!(run.answers().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn explicit_answer_stops_the_countdown_and_schedules_the_next_question() {
    let state = new_state();
    session_service::join_session(&state, "ABC123").await.unwrap();

    answer_current(&state, true).await;
    {
        let timers = state.timers().lock().await;
        assert!(!timers.countdown_active());
        assert!(timers.auto_advance_pending());
    }

    sleep(AUTO_ADVANCE).await;

    assert_eq!(
        phase(&state).await,
        QuizPhase::InProgress {
            question_index: 1,
            answered: false
        }
    );
    let run = state.quiz().read().await;
    assert_eq!(run.current_question(), 1);
    assert_eq!(run.answers().len(), 1);
    assert!(!run.is_answering());
}

#[tokio::test(start_paused = true)]
async fn timeout_records_an_empty_answer_once() {
    let state = new_state();
    session_service::join_session(&state, "GHI789").await.unwrap();

    sleep(Duration::from_millis(30_200)).await;

    {
        let run = state.quiz().read().await;
        assert_eq!(run.answers().len(), 1);
        let answer = &run.answers()[0];
        assert_eq!(answer.question_id, "q1");
        assert_eq!(answer.selected_index, None);
        assert!(!answer.is_correct);
        assert_eq!(run.score(), 0);
    }
    assert_eq!(
        phase(&state).await,
        QuizPhase::InProgress {
            question_index: 0,
            answered: true
        }
    );

    let err = quiz_service::submit_answer(&state, "q1", 1).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidState(_)));

    sleep(AUTO_ADVANCE).await;

    assert_eq!(
        phase(&state).await,
        QuizPhase::InProgress {
            question_index: 1,
            answered: false
        }
    );
    assert_eq!(state.quiz().read().await.answers().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn restarting_supersedes_the_pending_auto_advance() {
    let state = new_state();
    session_service::join_session(&state, "ABC123").await.unwrap();
    let first_run = state.quiz().read().await.id();

    answer_current(&state, true).await;
    sleep(Duration::from_millis(1_000)).await;
    session_service::join_session(&state, "JKL012").await.unwrap();
    sleep(Duration::from_millis(1_500)).await;

    let run = state.quiz().read().await;
    assert_ne!(run.id(), first_run);
    assert_eq!(run.session_id(), Some("JKL012"));
    assert!(run.answers().is_empty());
    drop(run);
    assert_eq!(
        phase(&state).await,
        QuizPhase::InProgress {
            question_index: 0,
            answered: false
        }
    );
}

#[tokio::test(start_paused = true)]
async fn stale_auto_advance_requests_are_ignored() {
    let state = new_state();
    session_service::join_session(&state, "ABC123").await.unwrap();
    let run_id = state.quiz().read().await.id();

    // Nothing answered yet.
    quiz_service::advance_or_complete(state.clone(), run_id, 0)
        .await
        .unwrap();
    // Unknown run.
    answer_current(&state, false).await;
    quiz_service::advance_or_complete(state.clone(), Uuid::new_v4(), 0)
        .await
        .unwrap();

    assert_eq!(
        phase(&state).await,
        QuizPhase::InProgress {
            question_index: 0,
            answered: true
        }
    );
}

#[tokio::test(start_paused = true)]
async fn last_question_completes_the_run_exactly_once() {
    let state = new_state();
    session_service::join_session(&state, "ABC123").await.unwrap();
    let run_id = state.quiz().read().await.id();

    for _ in 0..5 {
        answer_current(&state, false).await;
        sleep(AUTO_ADVANCE).await;
    }

    assert_eq!(phase(&state).await, QuizPhase::Completed);
    assert_eq!(state.score_history().games_played(), 1);

    quiz_service::advance_or_complete(state.clone(), run_id, 4)
        .await
        .unwrap();
    sleep(Duration::from_secs(60)).await;

    assert_eq!(phase(&state).await, QuizPhase::Completed);
    assert_eq!(state.score_history().games_played(), 1);
    let timers = state.timers().lock().await;
    assert!(!timers.countdown_active());
    assert!(!timers.auto_advance_pending());
    drop(timers);
    assert!(matches!(
        quiz_service::current_view(&state).await.unwrap(),
        QuizView::Completed
    ));
}

#[tokio::test(start_paused = true)]
async fn perfect_run_is_scored_ranked_and_followed_by_feedback() {
    let state = new_state();
    session_service::join_session(&state, "abc123").await.unwrap();

    for _ in 0..5 {
        answer_current(&state, true).await;
        sleep(AUTO_ADVANCE).await;
    }
    assert_eq!(phase(&state).await, QuizPhase::Completed);

    let results = results_service::get_results(&state).await.expect("results");
    assert_eq!(results.session_id, "ABC123");
    assert_eq!(results.score, 5);
    assert_eq!(results.total_questions, 5);
    assert_eq!(results.percentage, 100);
    let expected = {
        let leaderboard = state.leaderboard().read().await;
        results_service::rank_with_user(leaderboard.players(), 5)
    };
    assert_eq!(results.rank, expected.user_rank);
    assert_eq!(results.rankings.len(), 10);
    assert_eq!(results.podium.len(), 3);
    assert_eq!(
        results
            .rankings
            .iter()
            .filter(|row| row.is_current_user)
            .count(),
        1
    );

    let scores = state.score_history().read();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].session_id, "ABC123");
    assert_eq!(scores[0].score, 5);
    assert_eq!(scores[0].total_questions, 5);

    feedback_service::submit_feedback(
        &state,
        FeedbackRequest {
            rating: Some(3),
            comment: Some("Great!".into()),
        },
    )
    .await
    .unwrap();

    let feedback = state.feedback_history().read();
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].session_id, "ABC123");
    assert_eq!(feedback[0].rating, 3);
    assert_eq!(feedback[0].comment.as_deref(), Some("Great!"));

    assert_eq!(phase(&state).await, QuizPhase::NotStarted);
    assert!(results_service::get_results(&state).await.is_none());
}

#[tokio::test(start_paused = true)]
async fn countdown_ticks_are_broadcast_each_second() {
    let state = new_state();
    let mut events = state.public_sse().subscribe();

    session_service::join_session(&state, "ABC123").await.unwrap();
    sleep(Duration::from_millis(1_050)).await;

    let mut names = Vec::new();
    let mut ticks = Vec::new();
    while let Ok(event) = events.try_recv() {
        let name = event.event.clone().unwrap_or_default();
        if name == "timer.tick" {
            let payload: serde_json::Value = serde_json::from_str(&event.data).unwrap();
            ticks.push(payload["remaining_seconds"].as_u64().unwrap());
        }
        names.push(name);
    }

    assert!(names.iter().any(|name| name == "phase_changed"));
    assert_eq!(ticks, [30, 29]);
}

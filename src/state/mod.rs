pub mod countdown;
pub mod leaderboard;
pub mod quiz;
mod sse;
pub mod state_machine;

use std::sync::Arc;

use tokio::{
    sync::{Mutex, RwLock},
    task::JoinHandle,
};
use tracing::warn;

use crate::{
    config::AppConfig,
    dao::{
        history::{FEEDBACK_HISTORY_KEY, FeedbackHistory, HistoryStore, SCORE_HISTORY_KEY, ScoreHistory},
        local_store::{LocalStore, MemoryStore},
    },
    data::{
        players::{MOCK_PLAYER_COUNT, generate_mock_players},
        questions::QuestionBank,
        sessions::GameSession,
    },
    state::{leaderboard::LeaderboardState, quiz::QuizRun, state_machine::QuizStateMachine},
};

pub use self::sse::SseHub;

/// Shared handle to the application state, cloned into every handler and task.
pub type SharedState = Arc<AppState>;

/// Handles of the two cancelable timer tasks attached to the current question.
#[derive(Default)]
pub struct RunTimers {
    countdown: Option<JoinHandle<()>>,
    auto_advance: Option<JoinHandle<()>>,
}

impl RunTimers {
    /// Install a new countdown task, aborting the previous one.
    pub fn replace_countdown(&mut self, handle: JoinHandle<()>) {
        if let Some(previous) = self.countdown.replace(handle) {
            previous.abort();
        }
    }

    /// Install a new auto-advance task, aborting the previous one.
    pub fn replace_auto_advance(&mut self, handle: JoinHandle<()>) {
        if let Some(previous) = self.auto_advance.replace(handle) {
            previous.abort();
        }
    }

    /// Stop polling the countdown.
    pub fn cancel_countdown(&mut self) {
        if let Some(handle) = self.countdown.take() {
            handle.abort();
        }
    }

    /// Drop the auto-advance handle without aborting it.
    ///
    /// Used by the auto-advance task itself once it has taken effect.
    pub fn release_auto_advance(&mut self) {
        self.auto_advance.take();
    }

    /// Abort every pending timer.
    pub fn cancel_all(&mut self) {
        self.cancel_countdown();
        if let Some(handle) = self.auto_advance.take() {
            handle.abort();
        }
    }

    /// Whether a countdown task is installed and still running.
    pub fn countdown_active(&self) -> bool {
        self.countdown
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Whether an auto-advance task is installed and still running.
    pub fn auto_advance_pending(&self) -> bool {
        self.auto_advance
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

/// Central application state: quiz run, leaderboard, local histories and event hub.
///
/// Every container is owned here and handed to handlers through axum's `State`.
pub struct AppState {
    config: AppConfig,
    questions: QuestionBank,
    quiz: RwLock<QuizRun>,
    machine: RwLock<QuizStateMachine>,
    session: RwLock<Option<GameSession>>,
    leaderboard: RwLock<LeaderboardState>,
    store: Arc<dyn LocalStore>,
    feedback_history: FeedbackHistory,
    score_history: ScoreHistory,
    sse: SseHub,
    timers: Mutex<RunTimers>,
    transition_gate: Mutex<()>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig, store: Arc<dyn LocalStore>) -> SharedState {
        Self::with_questions(config, store, QuestionBank::well_being())
    }

    /// Build a state backed by an in-memory store.
    pub fn in_memory(config: AppConfig) -> SharedState {
        let store = Arc::new(MemoryStore::new(config.storage_quota_bytes()));
        Self::new(config, store)
    }

    /// Build a state with a custom question bank.
    pub fn with_questions(
        config: AppConfig,
        store: Arc<dyn LocalStore>,
        questions: QuestionBank,
    ) -> SharedState {
        let cap = config.history_cap();
        if questions.is_empty() {
            warn!("question bank is empty; runs cannot be started");
        }
        Arc::new(Self {
            machine: RwLock::new(QuizStateMachine::new(questions.len())),
            questions,
            quiz: RwLock::new(QuizRun::new()),
            session: RwLock::new(None),
            leaderboard: RwLock::new(LeaderboardState::new(generate_mock_players(
                MOCK_PLAYER_COUNT,
            ))),
            feedback_history: HistoryStore::new(store.clone(), FEEDBACK_HISTORY_KEY, cap),
            score_history: HistoryStore::new(store.clone(), SCORE_HISTORY_KEY, cap),
            store,
            sse: SseHub::new(64),
            timers: Mutex::new(RunTimers::default()),
            transition_gate: Mutex::new(()),
            config,
        })
    }

    /// Runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Fixed question bank.
    pub fn questions(&self) -> &QuestionBank {
        &self.questions
    }

    /// Current run data.
    pub fn quiz(&self) -> &RwLock<QuizRun> {
        &self.quiz
    }

    /// Phase tracking for the current run.
    pub fn machine(&self) -> &RwLock<QuizStateMachine> {
        &self.machine
    }

    /// Session joined through the entry surface.
    pub fn session(&self) -> &RwLock<Option<GameSession>> {
        &self.session
    }

    /// Leaderboard view state.
    pub fn leaderboard(&self) -> &RwLock<LeaderboardState> {
        &self.leaderboard
    }

    /// Underlying local store.
    pub fn store(&self) -> &Arc<dyn LocalStore> {
        &self.store
    }

    /// Feedback history.
    pub fn feedback_history(&self) -> &FeedbackHistory {
        &self.feedback_history
    }

    /// Score history.
    pub fn score_history(&self) -> &ScoreHistory {
        &self.score_history
    }

    /// Broadcast hub used for the public SSE stream.
    pub fn public_sse(&self) -> &SseHub {
        &self.sse
    }

    /// Cancelable timers of the current question.
    pub fn timers(&self) -> &Mutex<RunTimers> {
        &self.timers
    }

    /// Lock serializing every compound mutation of the run.
    pub fn transition_gate(&self) -> &Mutex<()> {
        &self.transition_gate
    }
}

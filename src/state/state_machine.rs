use thiserror::Error;

/// Phases a quiz run goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// No run has been started (or the last one was reset).
    NotStarted,
    /// A question is on screen.
    InProgress {
        /// Position of the question in the bank.
        question_index: usize,
        /// Whether an answer (or the timeout sentinel) was recorded for it.
        answered: bool,
    },
    /// Every question has been answered; results are available.
    Completed,
}

/// Events that can be applied to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    /// Start a new run from the first question.
    Start,
    /// An answer (explicit or timeout) was recorded for the current question.
    AnswerRecorded,
    /// Move to the next question after an answer.
    Advance,
    /// Leave the last answered question for the results.
    Complete,
    /// Drop the run and go back to the entry surface.
    Reset,
}

/// Error returned when attempting to apply an invalid transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid transition: {event:?} cannot be applied while in {from:?}")]
pub struct InvalidTransition {
    /// The phase the state machine was in when the invalid event was received.
    pub from: QuizPhase,
    /// The event that cannot be applied from this phase.
    pub event: QuizEvent,
}

/// Snapshot of the current state machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Current phase.
    pub phase: QuizPhase,
    /// Incremented on every applied transition.
    pub version: usize,
    /// Number of questions in a run.
    pub question_count: usize,
}

/// State machine sequencing a run over a fixed number of questions.
#[derive(Debug, Clone)]
pub struct QuizStateMachine {
    phase: QuizPhase,
    version: usize,
    question_count: usize,
}

impl QuizStateMachine {
    /// Create a machine for runs of `question_count` questions, initially not started.
    pub fn new(question_count: usize) -> Self {
        Self {
            phase: QuizPhase::NotStarted,
            version: 0,
            question_count,
        }
    }

    /// Inspect the current phase.
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Number of questions in a run.
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Whether `question_index` is the final question of the run.
    pub fn is_last_question(&self, question_index: usize) -> bool {
        question_index + 1 >= self.question_count
    }

    /// Create a snapshot of the current state machine state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            version: self.version,
            question_count: self.question_count,
        }
    }

    /// Apply `event`, returning the new phase.
    pub fn apply(&mut self, event: QuizEvent) -> Result<QuizPhase, InvalidTransition> {
        let next = self.compute_transition(event)?;
        self.phase = next;
        self.version += 1;
        Ok(next)
    }

    /// Compute a transition from an event if the transition is valid.
    fn compute_transition(&self, event: QuizEvent) -> Result<QuizPhase, InvalidTransition> {
        let invalid = || InvalidTransition {
            from: self.phase,
            event,
        };

        let next = match (self.phase, event) {
            (_, QuizEvent::Start) if self.question_count > 0 => QuizPhase::InProgress {
                question_index: 0,
                answered: false,
            },
            (
                QuizPhase::InProgress {
                    question_index,
                    answered: false,
                },
                QuizEvent::AnswerRecorded,
            ) => QuizPhase::InProgress {
                question_index,
                answered: true,
            },
            (
                QuizPhase::InProgress {
                    question_index,
                    answered: true,
                },
                QuizEvent::Advance,
            ) if !self.is_last_question(question_index) => QuizPhase::InProgress {
                question_index: question_index + 1,
                answered: false,
            },
            (
                QuizPhase::InProgress {
                    question_index,
                    answered: true,
                },
                QuizEvent::Complete,
            ) if self.is_last_question(question_index) => QuizPhase::Completed,
            (_, QuizEvent::Reset) => QuizPhase::NotStarted,
            _ => return Err(invalid()),
        };

        Ok(next)
    }
}

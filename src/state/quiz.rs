use std::time::SystemTime;

use tokio::time::Instant;
use uuid::Uuid;

/// One recorded answer of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// Question the answer belongs to.
    pub question_id: String,
    /// Selected option, or `None` when the countdown expired without an answer.
    pub selected_index: Option<usize>,
    /// Exactly `selected_index == Some(correct_index)`.
    pub is_correct: bool,
    /// When the answer was recorded.
    pub timestamp: SystemTime,
}

/// Mutable state of the current run: position, score and answer log.
///
/// The container applies no guards; sequencing is enforced by the caller
/// through the quiz state machine.
#[derive(Debug, Clone)]
pub struct QuizRun {
    id: Uuid,
    session_id: Option<String>,
    current_question: usize,
    score: u32,
    answers: Vec<Answer>,
    is_answering: bool,
    started_at: Option<SystemTime>,
    question_started_at: Instant,
}

impl Default for QuizRun {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            session_id: None,
            current_question: 0,
            score: 0,
            answers: Vec::new(),
            is_answering: false,
            started_at: None,
            question_started_at: Instant::now(),
        }
    }
}

impl QuizRun {
    /// Create an empty, unstarted run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset everything and start a new run for `session_id`.
    pub fn start(&mut self, session_id: String) {
        *self = Self {
            id: Uuid::new_v4(),
            session_id: Some(session_id),
            started_at: Some(SystemTime::now()),
            ..Self::default()
        };
    }

    /// Append an answer for `question_id`, scoring it against `correct_index`.
    pub fn submit_answer(
        &mut self,
        question_id: &str,
        selected_index: Option<usize>,
        correct_index: usize,
    ) -> Answer {
        let is_correct = selected_index == Some(correct_index);
        let answer = Answer {
            question_id: question_id.to_string(),
            selected_index,
            is_correct,
            timestamp: SystemTime::now(),
        };

        self.answers.push(answer.clone());
        if is_correct {
            self.score += 1;
        }
        self.is_answering = true;
        answer
    }

    /// Move to the next question and restart its timer.
    pub fn advance(&mut self) {
        self.current_question += 1;
        self.is_answering = false;
        self.question_started_at = Instant::now();
    }

    /// Forget the run entirely.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whole seconds since the current question was shown.
    pub fn time_elapsed(&self) -> u64 {
        self.question_started_at.elapsed().as_secs()
    }

    /// Identifier of the run, nil before the first start.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Session code the run was started with.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Index of the question currently shown.
    pub fn current_question(&self) -> usize {
        self.current_question
    }

    /// Number of correct answers so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Answer log in submission order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Answer recorded for the current question, if any.
    pub fn last_answer(&self) -> Option<&Answer> {
        self.answers.last().filter(|_| self.is_answering)
    }

    /// Whether the current question has been answered.
    pub fn is_answering(&self) -> bool {
        self.is_answering
    }

    /// When the run was started.
    pub fn started_at(&self) -> Option<SystemTime> {
        self.started_at
    }

    /// When the current question was shown.
    pub fn question_started_at(&self) -> Instant {
        self.question_started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_resets_previous_run() {
        let mut run = QuizRun::new();
        run.start("ABC123".into());
        let first_id = run.id();
        run.submit_answer("q1", Some(1), 1);
        run.advance();

        run.start("DEF456".into());
        assert_ne!(run.id(), first_id);
        assert_eq!(run.session_id(), Some("DEF456"));
        assert_eq!(run.current_question(), 0);
        assert_eq!(run.score(), 0);
        assert!(run.answers().is_empty());
        assert!(!run.is_answering());
        assert!(run.started_at().is_some());
    }

    #[test]
    fn score_counts_only_correct_answers() {
        let mut run = QuizRun::new();
        run.start("ABC123".into());

        let submissions = [
            ("q1", Some(1), 1),
            ("q2", Some(3), 0),
            ("q3", None, 1),
            ("q4", Some(2), 2),
            ("q5", None, 0),
        ];
        for (id, selected, correct) in submissions {
            run.submit_answer(id, selected, correct);
            run.advance();
        }

        let correct = run
            .answers()
            .iter()
            .filter(|answer| answer.is_correct)
            .count();
        assert_eq!(run.score() as usize, correct);
        assert_eq!(run.score(), 2);
    }

    #[test]
    fn no_answer_sentinel_is_never_correct() {
        let mut run = QuizRun::new();
        run.start("ABC123".into());
        for correct_index in 0..4 {
            let answer = run.submit_answer("q1", None, correct_index);
            assert!(!answer.is_correct);
        }
        assert_eq!(run.score(), 0);
    }

    #[test]
    fn last_answer_is_cleared_by_advance() {
        let mut run = QuizRun::new();
        run.start("ABC123".into());
        run.submit_answer("q1", Some(0), 1);
        assert_eq!(run.last_answer().unwrap().selected_index, Some(0));

        run.advance();
        assert!(run.last_answer().is_none());
        assert_eq!(run.current_question(), 1);
    }

    #[test]
    fn reset_clears_session() {
        let mut run = QuizRun::new();
        run.start("ABC123".into());
        run.reset();
        assert!(run.session_id().is_none());
        assert!(run.id().is_nil());
    }
}

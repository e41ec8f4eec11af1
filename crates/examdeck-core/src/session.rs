//! Practice-session engine.
//!
//! Drives a single user through an ordered sequence of questions, records
//! selections, and computes a scored result at finish. Out-of-range
//! navigation is silently absorbed rather than rejected; that behavior is
//! part of the contract and is preserved deliberately.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::model::{Exam, OptionKey, Question};

/// Lifecycle state of a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Completed,
}

/// A question the user got wrong (or left unanswered), for review display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncorrectAnswer {
    /// Zero-based position in the exam.
    pub index: usize,
    /// The question itself.
    pub question: Question,
    /// What the user selected, if anything.
    pub selected: Option<OptionKey>,
    /// The correct option, if the question has one.
    pub correct: Option<OptionKey>,
}

/// Scored result of a finished session.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    /// Questions answered correctly.
    pub correct_count: usize,
    /// Total questions in the exam.
    pub total_questions: usize,
    /// Rounded (half-up) percentage of correct answers.
    pub percentage: u32,
    /// Wall-clock time between session start and finish.
    pub elapsed: Duration,
    /// Questions to review, in exam order.
    pub incorrect: Vec<IncorrectAnswer>,
}

/// A single timed attempt at an exam.
///
/// Created when the user begins practicing, mutated by selection and
/// navigation, and discarded on navigation away. Session state does not
/// survive process exit; only the finished [`ScoreReport`] is persisted
/// (as an attempt report) by callers that want history.
#[derive(Debug)]
pub struct PracticeSession {
    exam_id: String,
    exam_name: String,
    questions: Vec<Question>,
    current_index: usize,
    selected: HashMap<usize, OptionKey>,
    started_at: Instant,
    state: SessionState,
    result: Option<ScoreReport>,
}

impl PracticeSession {
    /// Start a session over an exam's questions.
    ///
    /// Empty exams are rejected here; every later operation can then assume
    /// a non-zero question count.
    pub fn new(exam: &Exam) -> Result<Self, SessionError> {
        if exam.questions.is_empty() {
            return Err(SessionError::EmptyExam);
        }
        Ok(Self {
            exam_id: exam.id.clone(),
            exam_name: exam.name.clone(),
            questions: exam.questions.clone(),
            current_index: 0,
            selected: HashMap::new(),
            started_at: Instant::now(),
            state: SessionState::InProgress,
            result: None,
        })
    }

    pub fn exam_id(&self) -> &str {
        &self.exam_id
    }

    pub fn exam_name(&self) -> &str {
        &self.exam_name
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Zero-based position of the question currently shown.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// The answer recorded for the question at `index`, if any.
    pub fn selected_answer(&self, index: usize) -> Option<OptionKey> {
        self.selected.get(&index).copied()
    }

    /// The answer recorded for the current question, if any.
    pub fn selected_for_current(&self) -> Option<OptionKey> {
        self.selected_answer(self.current_index)
    }

    /// How many questions have a recorded answer.
    pub fn answered_count(&self) -> usize {
        self.selected.len()
    }

    /// Record (or overwrite) the answer for the current question.
    ///
    /// Does not advance position. No-op once the session is completed.
    pub fn select_answer(&mut self, key: OptionKey) {
        if self.state == SessionState::InProgress {
            self.selected.insert(self.current_index, key);
        }
    }

    /// Move to the next question. No-op at the last question or once
    /// completed.
    pub fn next(&mut self) {
        if self.state == SessionState::InProgress && self.current_index + 1 < self.questions.len()
        {
            self.current_index += 1;
        }
    }

    /// Move to the previous question. No-op at the first question or once
    /// completed.
    pub fn previous(&mut self) {
        if self.state == SessionState::InProgress && self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Wall-clock time since the session started (or restarted).
    ///
    /// Monotonic; display ticks poll this, but scoring uses the instant of
    /// the `finish` call, not the last tick.
    pub fn elapsed(&self) -> Duration {
        match &self.result {
            Some(report) => report.elapsed,
            None => self.started_at.elapsed(),
        }
    }

    /// Finalize the session and compute the score.
    ///
    /// Valid from any position, not just the last question. Freezes the
    /// answer map; repeated calls return the already-computed report.
    pub fn finish(&mut self) -> ScoreReport {
        if let Some(report) = &self.result {
            return report.clone();
        }

        let elapsed = self.started_at.elapsed();
        let total = self.questions.len();

        let is_correct = |index: usize, question: &Question| -> bool {
            // An unanswered question never counts as correct, even when the
            // question has no answer key either.
            matches!(
                (self.selected.get(&index), question.correct),
                (Some(&s), Some(c)) if s == c
            )
        };

        let correct_count = self
            .questions
            .iter()
            .enumerate()
            .filter(|(i, q)| is_correct(*i, q))
            .count();

        let incorrect: Vec<IncorrectAnswer> = self
            .questions
            .iter()
            .enumerate()
            .filter(|(i, q)| !is_correct(*i, q))
            .map(|(index, question)| IncorrectAnswer {
                index,
                question: question.clone(),
                selected: self.selected.get(&index).copied(),
                correct: question.correct,
            })
            .collect();

        let percentage = ((correct_count * 100) as f64 / total as f64).round() as u32;

        let report = ScoreReport {
            correct_count,
            total_questions: total,
            percentage,
            elapsed,
            incorrect,
        };

        self.state = SessionState::Completed;
        self.result = Some(report.clone());
        report
    }

    /// The computed score, if the session has been finished.
    pub fn score(&self) -> Option<&ScoreReport> {
        self.result.as_ref()
    }

    /// Reinitialize to the initial state with an empty answer map and a
    /// restarted clock.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.selected.clear();
        self.started_at = Instant::now();
        self.state = SessionState::InProgress;
        self.result = None;
    }
}

/// Format a duration as `m:ss` for display.
pub fn format_mm_ss(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{}:{:02}", total / 60, total % 60)
}

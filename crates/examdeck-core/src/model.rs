//! Core data model types for examdeck.
//!
//! These are the fundamental types that the entire examdeck system uses to
//! represent exams, questions, flashcards, and users.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the four fixed option letters of a multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    /// All option keys in display order.
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKey::A => write!(f, "A"),
            OptionKey::B => write!(f, "B"),
            OptionKey::C => write!(f, "C"),
            OptionKey::D => write!(f, "D"),
        }
    }
}

impl FromStr for OptionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(OptionKey::A),
            "B" | "b" => Ok(OptionKey::B),
            "C" | "c" => Ok(OptionKey::C),
            "D" | "d" => Ok(OptionKey::D),
            other => Err(format!("not an option letter: '{other}'")),
        }
    }
}

/// A single multiple-choice exam item.
///
/// The lenient Aiken parser may leave `options` incomplete or `correct`
/// unset; `text` is always non-empty for parsed questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, stable for the lifetime of the exam. Assigned
    /// sequentially from 1 at parse/creation time.
    pub id: u32,
    /// The question prompt.
    pub text: String,
    /// Option texts keyed by letter. Missing letters are permitted.
    #[serde(default)]
    pub options: BTreeMap<OptionKey, String>,
    /// The correct option letter, if the source named one.
    #[serde(default)]
    pub correct: Option<OptionKey>,
}

impl Question {
    /// Text of the correct option, if both the answer marker and that
    /// option's text are present.
    pub fn correct_option_text(&self) -> Option<&str> {
        self.correct
            .and_then(|key| self.options.get(&key))
            .map(String::as_str)
    }
}

/// Difficulty label attached to an exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// An ordered sequence of questions plus metadata.
///
/// Immutable once loaded into a practice session; edits happen outside
/// session scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    /// Unique exam identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Subject category (e.g. "History").
    #[serde(default)]
    pub category: String,
    /// Difficulty label.
    pub difficulty: Difficulty,
    /// When the exam was created.
    pub created_at: DateTime<Utc>,
    /// The questions, in source order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Exam {
    /// Create a new exam with a fresh id and the current timestamp.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category: category.into(),
            difficulty,
            created_at: Utc::now(),
            questions,
        }
    }

    /// Derive one flashcard per question whose correct option is resolvable.
    ///
    /// The card's answer is the text of the correct option; questions with
    /// no answer marker (or a marker pointing at a missing option) are
    /// skipped since they have no answer side to show.
    pub fn to_flashcards(&self) -> Vec<Flashcard> {
        self.questions
            .iter()
            .filter_map(|q| {
                q.correct_option_text().map(|answer| Flashcard {
                    id: q.id,
                    question: q.text.clone(),
                    answer: answer.to_string(),
                    category: self.category.clone(),
                })
            })
            .collect()
    }
}

/// A two-sided self-quizzing card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Card identifier (the source question's id when derived).
    pub id: u32,
    /// Front side.
    pub question: String,
    /// Back side.
    pub answer: String,
    /// Subject category.
    #[serde(default)]
    pub category: String,
}

/// An authenticated user as reported by an auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Avatar image URL, if any.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

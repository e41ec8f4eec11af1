//! Trait definitions for the core's boundary collaborators.
//!
//! Storage, question generation, and authentication are external to the
//! parsing and scoring cores. The traits live here so the engines and the
//! CLI can depend on seams rather than concrete backends; implementations
//! are in `examdeck-store` and `examdeck-providers`.

use async_trait::async_trait;

use crate::error::{AuthError, GenerateError};
use crate::model::{Difficulty, Exam, Question, User};
use crate::report::AttemptReport;

// ---------------------------------------------------------------------------
// Exam storage
// ---------------------------------------------------------------------------

/// Opaque `id → Exam` persistence plus attempt history.
pub trait ExamStore: Send + Sync {
    /// Persist an exam, overwriting any previous version with the same id.
    fn save_exam(&self, exam: &Exam) -> anyhow::Result<()>;

    /// Retrieve an exam by id.
    fn load_exam(&self, id: &str) -> anyhow::Result<Exam>;

    /// All stored exams, sorted by creation time (newest first).
    fn list_exams(&self) -> anyhow::Result<Vec<Exam>>;

    /// Remove an exam and its attempt history.
    fn delete_exam(&self, id: &str) -> anyhow::Result<()>;

    /// Persist a finished attempt.
    fn save_attempt(&self, attempt: &AttemptReport) -> anyhow::Result<()>;

    /// Attempts for one exam, sorted oldest first.
    fn list_attempts(&self, exam_id: &str) -> anyhow::Result<Vec<AttemptReport>>;
}

// ---------------------------------------------------------------------------
// Question generation
// ---------------------------------------------------------------------------

/// Smallest number of questions a generator may be asked for.
pub const MIN_QUESTIONS: usize = 5;
/// Largest number of questions a generator may be asked for.
pub const MAX_QUESTIONS: usize = 50;
/// Largest accepted source document, in bytes.
pub const MAX_SOURCE_BYTES: usize = 10 * 1024 * 1024;

/// Request to generate exam questions from document text.
#[derive(Debug, Clone)]
pub struct GenerateExamRequest {
    /// Full text of the source document, already read into memory.
    pub source_text: String,
    /// How many questions to produce. Clamped to
    /// [`MIN_QUESTIONS`]..=[`MAX_QUESTIONS`] by implementations.
    pub question_count: usize,
    /// Requested difficulty.
    pub difficulty: Difficulty,
}

/// Trait for backends that turn document text into exam questions.
///
/// The only implementation shipped is a mock with simulated latency; real
/// document parsing and AI generation are explicitly out of scope.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Human-readable backend name (e.g. "mock").
    fn name(&self) -> &str;

    /// Produce questions for the request.
    async fn generate(&self, request: &GenerateExamRequest)
        -> Result<Vec<Question>, GenerateError>;
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// Trait for backends that verify credentials and produce a [`User`].
///
/// The scoring and drill engines are indifferent to identity; callers only
/// need a boolean "is a user present" signal, which
/// `examdeck_providers::auth::SessionContext` derives from this.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Human-readable backend name (e.g. "mock").
    fn name(&self) -> &str;

    /// Authenticate with email and password.
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Register a new account and sign it in.
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError>;
}

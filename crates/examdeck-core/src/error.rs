//! Domain error types.
//!
//! The Aiken parser and the study engines deliberately have no error
//! channel (malformed input degrades, invalid transitions no-op). These
//! types cover the boundaries that do fail: session construction, mock
//! generation, and authentication.

use thiserror::Error;

/// Errors from practice-session construction.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Scoring against zero questions is undefined; the guard lives at
    /// session construction.
    #[error("cannot practice an exam with no questions")]
    EmptyExam,
}

/// Errors from question generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The source document contained no usable text.
    #[error("source document is empty")]
    EmptySource,

    /// The source document exceeds the accepted size.
    #[error("source document is {size} bytes, max is {max}")]
    SourceTooLarge { size: usize, max: usize },
}

/// Errors from authentication providers.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credentials were rejected.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// An action required an authenticated user and none is present.
    #[error("not authenticated")]
    NotAuthenticated,
}

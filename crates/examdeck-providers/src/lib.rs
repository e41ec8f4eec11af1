//! examdeck-providers — Mock generation, mock authentication, and config.
//!
//! Implements the `QuestionGenerator` and `AuthProvider` traits from
//! `examdeck-core` with mock backends (fixed simulated delays, hard-coded
//! shapes), matching the product's current scope: real document ingestion,
//! AI generation, and authentication are explicitly out of scope.

pub mod auth;
pub mod config;
pub mod generator;

pub use auth::{AuthState, MockAuth, SessionContext};
pub use config::{load_config, load_config_from, ExamdeckConfig};
pub use generator::MockGenerator;

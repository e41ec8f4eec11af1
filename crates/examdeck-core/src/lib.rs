//! examdeck-core — Data model, Aiken parser, and study engines.
//!
//! This crate defines the fundamental types, the Aiken text-format parser,
//! the practice-session scoring engine, and the flashcard drill engine that
//! the rest of the examdeck system builds on.

pub mod aiken;
pub mod drill;
pub mod error;
pub mod model;
pub mod report;
pub mod session;
pub mod traits;

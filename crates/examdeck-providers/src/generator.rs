//! Mock question generator.
//!
//! Stands in for the AI generation backend the product does not have:
//! sleeps for a configurable latency, then produces deterministic placeholder
//! questions derived from terms in the source text.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use examdeck_core::error::GenerateError;
use examdeck_core::model::{OptionKey, Question};
use examdeck_core::traits::{
    GenerateExamRequest, QuestionGenerator, MAX_QUESTIONS, MAX_SOURCE_BYTES, MIN_QUESTIONS,
};

/// A mock generator for exercising the generation flow without an AI backend.
pub struct MockGenerator {
    /// Simulated processing delay.
    latency: Duration,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last request received.
    last_request: Mutex<Option<GenerateExamRequest>>,
}

impl MockGenerator {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// A mock with no simulated delay, for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Get the number of calls made to this generator.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last request made to this generator.
    pub fn last_request(&self) -> Option<GenerateExamRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(
        &self,
        request: &GenerateExamRequest,
    ) -> Result<Vec<Question>, GenerateError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if request.source_text.trim().is_empty() {
            return Err(GenerateError::EmptySource);
        }
        if request.source_text.len() > MAX_SOURCE_BYTES {
            return Err(GenerateError::SourceTooLarge {
                size: request.source_text.len(),
                max: MAX_SOURCE_BYTES,
            });
        }

        let count = request.question_count.clamp(MIN_QUESTIONS, MAX_QUESTIONS);
        tracing::debug!(
            "generating {count} mock questions from {} source bytes",
            request.source_text.len()
        );

        tokio::time::sleep(self.latency).await;

        // Pick recurring terms from the source so the placeholder questions
        // at least mention the uploaded material.
        let terms: Vec<&str> = request
            .source_text
            .split_whitespace()
            .filter(|w| w.len() >= 6)
            .collect();

        let questions = (0..count)
            .map(|i| {
                let term = terms
                    .get(i % terms.len().max(1))
                    .copied()
                    .unwrap_or("the source material");
                let correct = OptionKey::ALL[i % OptionKey::ALL.len()];

                let mut options = BTreeMap::new();
                for (slot, key) in OptionKey::ALL.into_iter().enumerate() {
                    let text = if key == correct {
                        format!("The statement about \"{term}\" that the text supports")
                    } else {
                        format!("Distractor {} about \"{term}\"", slot + 1)
                    };
                    options.insert(key, text);
                }

                Question {
                    id: i as u32 + 1,
                    text: format!(
                        "Which statement about \"{term}\" matches the source ({} difficulty)?",
                        request.difficulty
                    ),
                    options,
                    correct: Some(correct),
                }
            })
            .collect();

        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use examdeck_core::model::Difficulty;

    fn request(source: &str, count: usize) -> GenerateExamRequest {
        GenerateExamRequest {
            source_text: source.to_string(),
            question_count: count,
            difficulty: Difficulty::Medium,
        }
    }

    #[tokio::test]
    async fn generates_requested_count() {
        let generator = MockGenerator::instant();
        let questions = generator
            .generate(&request("The Spanish Civil War started in 1936.", 10))
            .await
            .unwrap();

        assert_eq!(questions.len(), 10);
        assert_eq!(generator.call_count(), 1);
        // Every question has a full option set and an answer key.
        assert!(questions
            .iter()
            .all(|q| q.options.len() == 4 && q.correct.is_some()));
        // Ids are sequential from 1.
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[9].id, 10);
    }

    #[tokio::test]
    async fn count_is_clamped_to_accepted_range() {
        let generator = MockGenerator::instant();
        let source = "Photosynthesis converts sunlight into chemical energy.";

        let too_few = generator.generate(&request(source, 1)).await.unwrap();
        assert_eq!(too_few.len(), MIN_QUESTIONS);

        let too_many = generator.generate(&request(source, 500)).await.unwrap();
        assert_eq!(too_many.len(), MAX_QUESTIONS);
    }

    #[tokio::test]
    async fn empty_source_rejected() {
        let generator = MockGenerator::instant();
        let err = generator.generate(&request("   \n\t", 10)).await.unwrap_err();
        assert!(matches!(err, GenerateError::EmptySource));
    }

    #[tokio::test]
    async fn oversized_source_rejected() {
        let generator = MockGenerator::instant();
        let big = "a".repeat(MAX_SOURCE_BYTES + 1);
        let err = generator.generate(&request(&big, 10)).await.unwrap_err();
        assert!(matches!(err, GenerateError::SourceTooLarge { .. }));
    }

    #[tokio::test]
    async fn records_last_request() {
        let generator = MockGenerator::instant();
        generator
            .generate(&request("Some lecture notes about thermodynamics.", 7))
            .await
            .unwrap();

        let last = generator.last_request().unwrap();
        assert_eq!(last.question_count, 7);
        assert!(last.source_text.contains("thermodynamics"));
    }
}

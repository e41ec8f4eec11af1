//! The `examdeck generate` command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use examdeck_core::model::{Difficulty, Exam};
use examdeck_core::traits::{ExamStore, GenerateExamRequest, QuestionGenerator};
use examdeck_providers::MockGenerator;
use examdeck_store::JsonStore;

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    source: PathBuf,
    count: Option<usize>,
    difficulty: Option<Difficulty>,
    name: Option<String>,
    category: String,
    data_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = examdeck_providers::load_config_from(config_path.as_deref())?;

    let source_text = std::fs::read_to_string(&source)
        .with_context(|| format!("failed to read source document: {}", source.display()))?;

    let request = GenerateExamRequest {
        source_text,
        question_count: count.unwrap_or(config.default_question_count),
        difficulty: difficulty.unwrap_or(config.default_difficulty),
    };

    let generator = MockGenerator::new(Duration::from_millis(config.mock_latency_ms));
    println!(
        "Generating {} questions with the \"{}\" backend...",
        request.question_count,
        generator.name()
    );
    let questions = generator.generate(&request).await?;

    let name = name.unwrap_or_else(|| {
        source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Generated Exam".to_string())
    });

    let exam = Exam::new(name, category, request.difficulty, questions);
    let store = match data_dir {
        Some(dir) => JsonStore::open(dir)?,
        None => JsonStore::open(config.resolved_data_dir())?,
    };
    store.save_exam(&exam)?;

    println!(
        "Generated \"{}\" ({} questions) as {}",
        exam.name,
        exam.questions.len(),
        exam.id
    );

    Ok(())
}

//! The `examdeck import` command.

use std::path::PathBuf;

use anyhow::Result;

use examdeck_core::aiken;
use examdeck_core::model::{Difficulty, Exam};
use examdeck_core::traits::ExamStore;

pub fn execute(
    file: PathBuf,
    name: Option<String>,
    category: String,
    difficulty: Difficulty,
    data_dir: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let questions = aiken::parse_aiken_file(&file)?;
    anyhow::ensure!(
        !questions.is_empty(),
        "no questions found in {}",
        file.display()
    );

    let warnings = aiken::validate_questions(&questions);
    for w in &warnings {
        println!("  [Q{}] WARNING: {}", w.question_id, w.message);
    }

    println!("Preview:");
    for q in questions.iter().take(3) {
        println!("  {}. {}", q.id, q.text);
    }
    if questions.len() > 3 {
        println!("  ... and {} more", questions.len() - 3);
    }

    let name = name.unwrap_or_else(|| {
        file.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled Exam".to_string())
    });

    let exam = Exam::new(name, category, difficulty, questions);
    let store = super::open_store(data_dir.as_deref(), config.as_deref())?;
    store.save_exam(&exam)?;

    println!(
        "Imported \"{}\" ({} questions) as {}",
        exam.name,
        exam.questions.len(),
        exam.id
    );

    Ok(())
}

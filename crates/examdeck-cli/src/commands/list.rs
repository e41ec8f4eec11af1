//! The `examdeck list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use examdeck_core::model::Exam;
use examdeck_core::report;
use examdeck_core::traits::ExamStore;

pub fn execute(
    search: Option<String>,
    data_dir: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let store = super::open_store(data_dir.as_deref(), config.as_deref())?;
    let exams = store.list_exams()?;

    let filtered: Vec<&Exam> = match &search {
        Some(q) => examdeck_store::search(&exams, q),
        None => exams.iter().collect(),
    };

    if filtered.is_empty() {
        println!("No exams found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Id",
        "Name",
        "Category",
        "Difficulty",
        "Questions",
        "Attempts",
        "Best",
    ]);

    for exam in filtered {
        let attempts = store.list_attempts(&exam.id)?;
        let (attempt_count, best) = match report::summarize(&attempts) {
            Some(summary) => (
                summary.attempts.to_string(),
                format!("{}%", summary.best_percentage),
            ),
            None => ("0".to_string(), "-".to_string()),
        };

        table.add_row(vec![
            Cell::new(&exam.id),
            Cell::new(&exam.name),
            Cell::new(&exam.category),
            Cell::new(exam.difficulty),
            Cell::new(exam.questions.len()),
            Cell::new(attempt_count),
            Cell::new(best),
        ]);
    }

    println!("{table}");
    Ok(())
}

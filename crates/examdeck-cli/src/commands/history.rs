//! The `examdeck history` command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use comfy_table::{Cell, Table};

use examdeck_core::report;
use examdeck_core::session::format_mm_ss;
use examdeck_core::traits::ExamStore;

pub fn execute(exam_ref: String, data_dir: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let store = super::open_store(data_dir.as_deref(), config.as_deref())?;
    let exam = super::resolve_exam(&store, &exam_ref)?;

    let attempts = store.list_attempts(&exam.id)?;
    let Some(summary) = report::summarize(&attempts) else {
        println!("No attempts recorded for \"{}\".", exam.name);
        return Ok(());
    };

    let mut table = Table::new();
    table.set_header(vec!["When", "Score", "Correct", "Time", "Result"]);
    for attempt in &attempts {
        table.add_row(vec![
            Cell::new(attempt.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(format!("{}%", attempt.percentage)),
            Cell::new(format!(
                "{}/{}",
                attempt.correct_count, attempt.total_questions
            )),
            Cell::new(format_mm_ss(Duration::from_secs(attempt.elapsed_secs))),
            Cell::new(if attempt.passed() {
                "passed"
            } else {
                "not passed"
            }),
        ]);
    }
    println!("{table}");

    println!(
        "\n{} attempt(s), best {}%, average {:.1}%",
        summary.attempts, summary.best_percentage, summary.average_percentage
    );
    if let Some(delta) = summary.latest_delta {
        println!("Latest change: {delta:+}%");
    }

    Ok(())
}

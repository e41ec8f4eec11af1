//! The `examdeck practice` command.
//!
//! Runs an interactive question loop over stdin. Input is line-based so the
//! command works both at a terminal and with piped scripts.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use examdeck_core::report::{AttemptReport, PASS_THRESHOLD};
use examdeck_core::session::{format_mm_ss, PracticeSession, ScoreReport};
use examdeck_core::traits::ExamStore;

pub fn execute(exam_ref: String, data_dir: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let store = super::open_store(data_dir.as_deref(), config.as_deref())?;
    let exam = super::resolve_exam(&store, &exam_ref)?;
    let mut session = PracticeSession::new(&exam)?;

    println!(
        "Practicing \"{}\" ({} questions)",
        session.exam_name(),
        session.question_count()
    );
    println!("Commands: a-d select, n next, p previous, f finish\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_question(&session);
        print!("> ");
        io::stdout().flush()?;

        // EOF finishes the session with whatever has been answered.
        let Some(line) = lines.next() else { break };
        let input = line?;
        match input.trim().to_lowercase().as_str() {
            "" => {}
            "n" => session.next(),
            "p" => session.previous(),
            "f" => break,
            cmd => match cmd.parse() {
                Ok(key) => session.select_answer(key),
                Err(_) => println!("Unrecognized input: {cmd}"),
            },
        }
    }

    let score = session.finish();
    print_score(&score);

    let attempt = AttemptReport::from_score(session.exam_id(), session.exam_name(), &score);
    store.save_attempt(&attempt)?;
    println!("Attempt saved ({}).", attempt.id);

    Ok(())
}

fn print_question(session: &PracticeSession) {
    let question = session.current_question();
    println!(
        "[{}/{}] {}",
        session.current_index() + 1,
        session.question_count(),
        question.text
    );
    for (key, text) in &question.options {
        let marker = if session.selected_for_current() == Some(*key) {
            "*"
        } else {
            " "
        };
        println!(" {marker} {key}) {text}");
    }
}

fn print_score(score: &ScoreReport) {
    let mut table = Table::new();
    table.set_header(vec!["Score", "Correct", "Time", "Result"]);
    table.add_row(vec![
        Cell::new(format!("{}%", score.percentage)),
        Cell::new(format!("{}/{}", score.correct_count, score.total_questions)),
        Cell::new(format_mm_ss(score.elapsed)),
        Cell::new(if score.percentage >= PASS_THRESHOLD {
            "passed"
        } else {
            "not passed"
        }),
    ]);
    println!("\n{table}");

    if !score.incorrect.is_empty() {
        println!("\nQuestions to review:");
        for entry in &score.incorrect {
            let yours = entry
                .selected
                .map(|key| key.to_string())
                .unwrap_or_else(|| "unanswered".to_string());
            let correct = entry
                .correct
                .map(|key| key.to_string())
                .unwrap_or_else(|| "?".to_string());
            println!(
                "  {}. {} (you: {yours}, correct: {correct})",
                entry.index + 1,
                entry.question.text
            );
        }
    }
}

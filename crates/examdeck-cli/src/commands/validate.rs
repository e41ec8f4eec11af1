//! The `examdeck validate` command.

use std::path::PathBuf;

use anyhow::Result;

use examdeck_core::aiken;

pub fn execute(file: PathBuf) -> Result<()> {
    let questions = aiken::parse_aiken_file(&file)?;
    println!("{}: {} question(s)", file.display(), questions.len());

    let warnings = aiken::validate_questions(&questions);
    for w in &warnings {
        println!("  [Q{}] WARNING: {}", w.question_id, w.message);
    }

    if warnings.is_empty() {
        println!("No warnings.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

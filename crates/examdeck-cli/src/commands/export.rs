//! The `examdeck export` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use examdeck_core::aiken;

pub fn execute(
    exam_ref: String,
    output: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let store = super::open_store(data_dir.as_deref(), config.as_deref())?;
    let exam = super::resolve_exam(&store, &exam_ref)?;

    let text = aiken::to_aiken(&exam.questions);
    match output {
        Some(path) => {
            std::fs::write(&path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "Exported {} question(s) to {}",
                exam.questions.len(),
                path.display()
            );
        }
        None => print!("{text}"),
    }

    Ok(())
}

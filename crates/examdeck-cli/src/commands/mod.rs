//! Subcommand implementations.

pub mod drill;
pub mod export;
pub mod generate;
pub mod history;
pub mod import;
pub mod init;
pub mod list;
pub mod login;
pub mod practice;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use examdeck_core::model::Exam;
use examdeck_core::traits::ExamStore;
use examdeck_providers::load_config_from;
use examdeck_store::JsonStore;

/// Open the JSON store at the configured data directory.
///
/// An explicit `--data-dir` wins over the config file.
pub(crate) fn open_store(data_dir: Option<&Path>, config: Option<&Path>) -> Result<JsonStore> {
    let root: PathBuf = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => load_config_from(config)?.resolved_data_dir(),
    };
    tracing::debug!("opening store at {}", root.display());
    JsonStore::open(root)
}

/// Resolve an exam by id, falling back to a case-insensitive name match.
pub(crate) fn resolve_exam(store: &JsonStore, needle: &str) -> Result<Exam> {
    if let Ok(exam) = store.load_exam(needle) {
        return Ok(exam);
    }
    let lowered = needle.to_lowercase();
    store
        .list_exams()?
        .into_iter()
        .find(|exam| exam.name.to_lowercase() == lowered)
        .ok_or_else(|| anyhow::anyhow!("no exam matching '{needle}' (try `examdeck list`)"))
}

//! examdeck-store — JSON-file exam and attempt storage.
//!
//! Implements the `ExamStore` trait over a data directory:
//! `exams/<id>.json` for exam records and `attempts/<exam_id>/<attempt_id>.json`
//! for finished practice attempts. The core treats storage as an opaque
//! `id → Exam` lookup; this is the only backend shipped.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use examdeck_core::model::Exam;
use examdeck_core::report::AttemptReport;
use examdeck_core::traits::ExamStore;

/// File-backed exam store rooted at a data directory.
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Open (creating if needed) a store at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(root.join("exams"))
            .with_context(|| format!("failed to create data dir: {}", root.display()))?;
        std::fs::create_dir_all(root.join("attempts"))?;
        Ok(Self { root })
    }

    fn exam_path(&self, id: &str) -> PathBuf {
        self.root.join("exams").join(format!("{id}.json"))
    }

    fn attempts_dir(&self, exam_id: &str) -> PathBuf {
        self.root.join("attempts").join(exam_id)
    }

    /// Load every `.json` exam file in a directory, skipping unreadable
    /// entries with a warning.
    fn load_exam_dir(dir: &Path) -> Result<Vec<Exam>> {
        let mut exams = Vec::new();
        for entry in std::fs::read_dir(dir)
            .with_context(|| format!("failed to read directory: {}", dir.display()))?
        {
            let path = entry?.path();
            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }
            match Self::read_exam(&path) {
                Ok(exam) => exams.push(exam),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
        Ok(exams)
    }

    fn read_exam(path: &Path) -> Result<Exam> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read exam from {}", path.display()))?;
        serde_json::from_str(&content).context("failed to parse exam JSON")
    }
}

impl ExamStore for JsonStore {
    fn save_exam(&self, exam: &Exam) -> Result<()> {
        let json = serde_json::to_string_pretty(exam).context("failed to serialize exam")?;
        let path = self.exam_path(&exam.id);
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write exam to {}", path.display()))?;
        Ok(())
    }

    fn load_exam(&self, id: &str) -> Result<Exam> {
        let path = self.exam_path(id);
        if !path.exists() {
            anyhow::bail!("exam not found: {id}");
        }
        Self::read_exam(&path)
    }

    fn list_exams(&self) -> Result<Vec<Exam>> {
        let mut exams = Self::load_exam_dir(&self.root.join("exams"))?;
        exams.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(exams)
    }

    fn delete_exam(&self, id: &str) -> Result<()> {
        let path = self.exam_path(id);
        if !path.exists() {
            anyhow::bail!("exam not found: {id}");
        }
        std::fs::remove_file(&path)
            .with_context(|| format!("failed to delete exam {}", path.display()))?;

        let attempts = self.attempts_dir(id);
        if attempts.exists() {
            std::fs::remove_dir_all(&attempts)
                .with_context(|| format!("failed to delete attempts for {id}"))?;
        }
        Ok(())
    }

    fn save_attempt(&self, attempt: &AttemptReport) -> Result<()> {
        let path = self
            .attempts_dir(&attempt.exam_id)
            .join(format!("{}.json", attempt.id));
        attempt.save_json(&path)
    }

    fn list_attempts(&self, exam_id: &str) -> Result<Vec<AttemptReport>> {
        let dir = self.attempts_dir(exam_id);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut attempts = Vec::new();
        for entry in std::fs::read_dir(&dir)
            .with_context(|| format!("failed to read directory: {}", dir.display()))?
        {
            let path = entry?.path();
            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }
            match AttemptReport::load_json(&path) {
                Ok(attempt) => attempts.push(attempt),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
        attempts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(attempts)
    }
}

/// Case-insensitive filter of exams by name or category.
pub fn search<'a>(exams: &'a [Exam], query: &str) -> Vec<&'a Exam> {
    let needle = query.to_lowercase();
    exams
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&needle)
                || e.category.to_lowercase().contains(&needle)
        })
        .collect()
}

//! Attempt reports with JSON persistence and history summaries.
//!
//! A finished practice session can be captured as an [`AttemptReport`] and
//! written to disk so exam listings can show attempt counts, best scores,
//! and score trends. Live session state itself is never persisted.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::{IncorrectAnswer, ScoreReport};

/// Percentage at or above which an attempt counts as passed.
pub const PASS_THRESHOLD: u32 = 70;

/// The durable record of one finished practice session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptReport {
    /// Unique attempt identifier.
    pub id: Uuid,
    /// Id of the exam that was practiced.
    pub exam_id: String,
    /// Exam name at the time of the attempt.
    pub exam_name: String,
    /// When the attempt finished.
    pub created_at: DateTime<Utc>,
    /// Questions answered correctly.
    pub correct_count: usize,
    /// Total questions in the exam.
    pub total_questions: usize,
    /// Rounded percentage score.
    pub percentage: u32,
    /// Wall-clock seconds between start and finish.
    pub elapsed_secs: u64,
    /// The incorrect-answer review list, in exam order.
    pub incorrect: Vec<IncorrectAnswer>,
}

impl AttemptReport {
    /// Capture a finished session's score as a durable report.
    pub fn from_score(exam_id: &str, exam_name: &str, score: &ScoreReport) -> Self {
        Self {
            id: Uuid::new_v4(),
            exam_id: exam_id.to_string(),
            exam_name: exam_name.to_string(),
            created_at: Utc::now(),
            correct_count: score.correct_count,
            total_questions: score.total_questions,
            percentage: score.percentage,
            elapsed_secs: score.elapsed.as_secs(),
            incorrect: score.incorrect.clone(),
        }
    }

    /// Whether this attempt meets the pass threshold.
    pub fn passed(&self) -> bool {
        self.percentage >= PASS_THRESHOLD
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize attempt")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write attempt to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read attempt from {}", path.display()))?;
        let report: AttemptReport =
            serde_json::from_str(&content).context("failed to parse attempt JSON")?;
        Ok(report)
    }

    /// Render the attempt as a markdown review sheet.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("# {} — review\n\n", self.exam_name));
        md.push_str(&format!(
            "**Score:** {}% ({}/{}) — {} | **Time:** {}s | {}\n\n",
            self.percentage,
            self.correct_count,
            self.total_questions,
            if self.passed() { "passed" } else { "not passed" },
            self.elapsed_secs,
            self.created_at.format("%Y-%m-%d %H:%M UTC"),
        ));

        if self.incorrect.is_empty() {
            md.push_str("All answers correct.\n");
            return md;
        }

        md.push_str("## Questions to review\n\n");
        md.push_str("| # | Question | Your answer | Correct answer |\n");
        md.push_str("|---|----------|-------------|----------------|\n");
        for entry in &self.incorrect {
            let yours = match entry.selected {
                Some(key) => match entry.question.options.get(&key) {
                    Some(text) => format!("{key}) {text}"),
                    None => key.to_string(),
                },
                None => "unanswered".to_string(),
            };
            let correct = match entry.correct {
                Some(key) => match entry.question.options.get(&key) {
                    Some(text) => format!("{key}) {text}"),
                    None => key.to_string(),
                },
                None => "unknown".to_string(),
            };
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                entry.index + 1,
                entry.question.text,
                yours,
                correct
            ));
        }

        md
    }
}

/// Aggregate view over an exam's attempt history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Number of attempts.
    pub attempts: usize,
    /// Highest percentage achieved.
    pub best_percentage: u32,
    /// Mean percentage across attempts.
    pub average_percentage: f64,
    /// Latest score minus the score before it, when there are at least two
    /// attempts.
    pub latest_delta: Option<i64>,
}

/// Summarize attempt reports, assumed sorted oldest-first.
///
/// Returns `None` for an empty history.
pub fn summarize(attempts: &[AttemptReport]) -> Option<HistorySummary> {
    if attempts.is_empty() {
        return None;
    }

    let best = attempts.iter().map(|a| a.percentage).max().unwrap_or(0);
    let average =
        attempts.iter().map(|a| a.percentage as f64).sum::<f64>() / attempts.len() as f64;
    let latest_delta = match attempts {
        [.., previous, latest] => Some(latest.percentage as i64 - previous.percentage as i64),
        _ => None,
    };

    Some(HistorySummary {
        attempts: attempts.len(),
        best_percentage: best,
        average_percentage: average,
        latest_delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OptionKey, Question};
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn score_with_one_miss() -> ScoreReport {
        let mut options = BTreeMap::new();
        options.insert(OptionKey::A, "1935".to_string());
        options.insert(OptionKey::B, "1936".to_string());
        ScoreReport {
            correct_count: 4,
            total_questions: 5,
            percentage: 80,
            elapsed: Duration::from_secs(95),
            incorrect: vec![IncorrectAnswer {
                index: 2,
                question: Question {
                    id: 3,
                    text: "¿En qué año comenzó la Guerra Civil Española?".into(),
                    options,
                    correct: Some(OptionKey::B),
                },
                selected: Some(OptionKey::A),
                correct: Some(OptionKey::B),
            }],
        }
    }

    fn attempt(percentage: u32) -> AttemptReport {
        AttemptReport {
            id: Uuid::nil(),
            exam_id: "exam-1".into(),
            exam_name: "History".into(),
            created_at: Utc::now(),
            correct_count: percentage as usize,
            total_questions: 100,
            percentage,
            elapsed_secs: 60,
            incorrect: vec![],
        }
    }

    #[test]
    fn from_score_captures_fields() {
        let report = AttemptReport::from_score("exam-1", "History", &score_with_one_miss());
        assert_eq!(report.exam_id, "exam-1");
        assert_eq!(report.percentage, 80);
        assert_eq!(report.elapsed_secs, 95);
        assert_eq!(report.incorrect.len(), 1);
        assert!(report.passed());
    }

    #[test]
    fn pass_threshold_boundary() {
        assert!(attempt(70).passed());
        assert!(!attempt(69).passed());
    }

    #[test]
    fn json_roundtrip() {
        let report = AttemptReport::from_score("exam-1", "History", &score_with_one_miss());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attempts").join("a.json");

        report.save_json(&path).unwrap();
        let loaded = AttemptReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.percentage, 80);
        assert_eq!(loaded.incorrect[0].selected, Some(OptionKey::A));
    }

    #[test]
    fn markdown_review_sheet() {
        let report = AttemptReport::from_score("exam-1", "History", &score_with_one_miss());
        let md = report.to_markdown();
        assert!(md.contains("80%"));
        assert!(md.contains("Guerra Civil"));
        assert!(md.contains("A) 1935"));
        assert!(md.contains("B) 1936"));
    }

    #[test]
    fn markdown_perfect_score() {
        let mut score = score_with_one_miss();
        score.incorrect.clear();
        score.correct_count = 5;
        score.percentage = 100;
        let report = AttemptReport::from_score("exam-1", "History", &score);
        assert!(report.to_markdown().contains("All answers correct"));
    }

    #[test]
    fn summarize_history() {
        let summary = summarize(&[attempt(60), attempt(80), attempt(75)]).unwrap();
        assert_eq!(summary.attempts, 3);
        assert_eq!(summary.best_percentage, 80);
        assert!((summary.average_percentage - 71.666).abs() < 0.01);
        assert_eq!(summary.latest_delta, Some(-5));
    }

    #[test]
    fn summarize_empty_and_single() {
        assert!(summarize(&[]).is_none());
        let single = summarize(&[attempt(50)]).unwrap();
        assert_eq!(single.attempts, 1);
        assert_eq!(single.latest_delta, None);
    }
}

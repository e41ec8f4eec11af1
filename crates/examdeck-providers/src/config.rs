//! Application configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use examdeck_core::model::Difficulty;

/// Top-level examdeck configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamdeckConfig {
    /// Directory holding stored exams and attempt history. Supports
    /// `${VAR}` environment-variable references.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Simulated latency of the mock generator and auth backends.
    #[serde(default = "default_latency_ms")]
    pub mock_latency_ms: u64,
    /// Default question count for generation.
    #[serde(default = "default_question_count")]
    pub default_question_count: usize,
    /// Default difficulty for imported and generated exams.
    #[serde(default = "default_difficulty")]
    pub default_difficulty: Difficulty,
}

fn default_data_dir() -> String {
    "./examdeck-data".to_string()
}
fn default_latency_ms() -> u64 {
    500
}
fn default_question_count() -> usize {
    20
}
fn default_difficulty() -> Difficulty {
    Difficulty::Medium
}

impl Default for ExamdeckConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            mock_latency_ms: default_latency_ms(),
            default_question_count: default_question_count(),
            default_difficulty: default_difficulty(),
        }
    }
}

impl ExamdeckConfig {
    /// The data directory with env references resolved.
    pub fn resolved_data_dir(&self) -> PathBuf {
        PathBuf::from(resolve_env_vars(&self.data_dir))
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `examdeck.toml` in the current directory
/// 2. `~/.config/examdeck/config.toml`
///
/// Environment variable override: `EXAMDECK_DATA_DIR`.
pub fn load_config() -> Result<ExamdeckConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ExamdeckConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("examdeck.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ExamdeckConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ExamdeckConfig::default(),
    };

    if let Ok(dir) = std::env::var("EXAMDECK_DATA_DIR") {
        config.data_dir = dir;
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("examdeck"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_EXAMDECK_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_EXAMDECK_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_EXAMDECK_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        std::env::remove_var("_EXAMDECK_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = ExamdeckConfig::default();
        assert_eq!(config.data_dir, "./examdeck-data");
        assert_eq!(config.mock_latency_ms, 500);
        assert_eq!(config.default_question_count, 20);
        assert_eq!(config.default_difficulty, Difficulty::Medium);
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
data_dir = "/tmp/examdeck"
default_difficulty = "hard"
"#;
        let config: ExamdeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data_dir, "/tmp/examdeck");
        assert_eq!(config.default_difficulty, Difficulty::Hard);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.default_question_count, 20);
    }

    #[test]
    fn explicit_missing_path_fails() {
        let result = load_config_from(Some(Path::new("/definitely/not/here.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("examdeck.toml");
        std::fs::write(&path, "mock_latency_ms = 0\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.mock_latency_ms, 0);
    }
}

//! Core types and structures for wordlist-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, WordlistForgeError};
use crate::validation_error;

/// Optional personal details used to derive candidates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalRecord {
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Date of birth, DD/MM/YYYY or DD-MM-YYYY
    pub dob: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub place: Option<String>,
}

impl PersonalRecord {
    /// True when no field carries a non-empty value
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.phone,
            &self.dob,
            &self.father_name,
            &self.mother_name,
            &self.place,
        ]
        .iter()
        .all(|f| f.as_deref().map_or(true, str::is_empty))
    }
}

/// Generation step, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    PersonalInfo,
    Pattern,
    Charset,
    SeedFile,
    SpecialChars,
    Leetspeak,
    PrefixSuffix,
    LengthFilter,
    CountLimit,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::PersonalInfo => write!(f, "personal info"),
            Step::Pattern => write!(f, "pattern"),
            Step::Charset => write!(f, "charset"),
            Step::SeedFile => write!(f, "seed file"),
            Step::SpecialChars => write!(f, "special chars"),
            Step::Leetspeak => write!(f, "leetspeak"),
            Step::PrefixSuffix => write!(f, "prefix/suffix"),
            Step::LengthFilter => write!(f, "length filter"),
            Step::CountLimit => write!(f, "count limit"),
        }
    }
}

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub personal: PersonalRecord,
    /// Mask such as `?l?l?d?d`
    pub pattern: Option<String>,
    /// Alphabet expanded over `min_len..=max_len`
    pub charset: Option<String>,
    /// File with one base word per line
    pub seed_file: Option<PathBuf>,
    /// Each character is appended as a suffix in its own pass
    pub special_chars: Option<String>,
    pub leetspeak: bool,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub min_len: usize,
    pub max_len: usize,
    /// Caps pattern/charset expansion and the final word count
    pub max_words: Option<u64>,
    pub output: Option<PathBuf>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            personal: PersonalRecord::default(),
            pattern: None,
            charset: None,
            seed_file: None,
            special_chars: None,
            leetspeak: false,
            prefix: None,
            suffix: None,
            min_len: 4,
            max_len: 12,
            max_words: None,
            output: None,
        }
    }
}

impl GenerationConfig {
    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            WordlistForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| crate::config_error!("{}: {}", path.display(), e))
    }

    /// Save config to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            WordlistForgeError::internal(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| {
            WordlistForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })
    }

    /// Check the numeric bounds the generators rely on
    pub fn validate(&self) -> Result<()> {
        if self.min_len == 0 {
            return Err(validation_error!("Minimum length must be at least 1"));
        }
        if self.max_len < self.min_len {
            return Err(validation_error!(
                "Maximum length must be >= minimum length ({})",
                self.min_len
            ));
        }
        if self.max_words == Some(0) {
            return Err(validation_error!("Word count must be at least 1"));
        }
        if let Some(output) = &self.output {
            if output.as_os_str().is_empty() {
                return Err(validation_error!("Output filename cannot be empty"));
            }
        }
        Ok(())
    }

    /// True when at least one step would add words
    pub fn has_source(&self) -> bool {
        !self.personal.is_empty()
            || self.pattern.as_deref().is_some_and(|p| !p.is_empty())
            || self.charset.as_deref().is_some_and(|c| !c.is_empty())
            || self.seed_file.is_some()
    }
}

/// Outcome of a single step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub step: Step,
    /// Words produced by an expander, duplicates included
    pub generated: Option<u64>,
    pub added: usize,
    pub removed: usize,
    /// Set when the step failed and was skipped
    pub error: Option<String>,
}

impl StepReport {
    pub fn added(step: Step, added: usize) -> Self {
        Self {
            step,
            generated: None,
            added,
            removed: 0,
            error: None,
        }
    }

    pub fn removed(step: Step, removed: usize) -> Self {
        Self {
            step,
            generated: None,
            added: 0,
            removed,
            error: None,
        }
    }

    pub fn failed(step: Step, error: impl Into<String>) -> Self {
        Self {
            step,
            generated: None,
            added: 0,
            removed: 0,
            error: Some(error.into()),
        }
    }
}

/// Summary of a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub steps: Vec<StepReport>,
    pub final_count: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl GenerationReport {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            steps: Vec::new(),
            final_count: 0,
            started_at: now,
            finished_at: now,
        }
    }

    pub fn push(&mut self, step: StepReport) {
        self.steps.push(step);
    }

    pub fn finish(&mut self, final_count: usize) {
        self.final_count = final_count;
        self.finished_at = Utc::now();
    }

    pub fn step(&self, step: Step) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.step == step)
    }

    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    /// Save report to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            WordlistForgeError::internal(format!("Failed to serialize report: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| {
            WordlistForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })
    }
}

impl Default for GenerationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.min_len, 4);
        assert_eq!(config.max_len, 12);
        assert!(!config.has_source());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = GenerationConfig {
            min_len: 8,
            max_len: 4,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.max_len = 8;
        config.max_words = Some(0);
        assert!(config.validate().is_err());

        config.max_words = Some(1);
        config.min_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GenerationConfig =
            serde_json::from_str(r#"{"pattern": "?d?d", "personal": {"name": "Alex"}}"#).unwrap();
        assert_eq!(config.pattern.as_deref(), Some("?d?d"));
        assert_eq!(config.personal.name.as_deref(), Some("Alex"));
        assert_eq!(config.min_len, 4);
        assert!(config.has_source());
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = GenerationConfig {
            leetspeak: true,
            max_words: Some(500),
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(GenerationConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = GenerationConfig::load(&path).unwrap_err();
        assert!(matches!(err, WordlistForgeError::Config { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_personal_record_empty() {
        assert!(PersonalRecord::default().is_empty());
        let record = PersonalRecord {
            place: Some(String::new()),
            ..Default::default()
        };
        assert!(record.is_empty());
        let record = PersonalRecord {
            phone: Some("123".to_string()),
            ..Default::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn test_step_serializes_snake_case() {
        let json = serde_json::to_string(&Step::PersonalInfo).unwrap();
        assert_eq!(json, "\"personal_info\"");
    }
}

// src/config/mod.rs
//
// Validation rules
//
// PRINCIPLES:
// - Defaults reproduce the upload form exactly (srt/vtt, 200kB)
// - A rules file may narrow them, never silently break them
// - Explicit paths must load; the default path is optional

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::SubtitleFormat;
use crate::error::{AppError, AppResult};

/// Largest accepted subtitle, in rounded kilobytes
pub const DEFAULT_MAX_SIZE_KB: u64 = 200;

/// Rules applied by the selection validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Formats the file input accepts
    pub accepted_formats: Vec<SubtitleFormat>,

    /// Inclusive upper bound on the rounded size
    pub max_size_kb: u64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            accepted_formats: SubtitleFormat::ALL.to_vec(),
            max_size_kb: DEFAULT_MAX_SIZE_KB,
        }
    }
}

impl ValidationRules {
    pub fn accepts(&self, format: SubtitleFormat) -> bool {
        self.accepted_formats.contains(&format)
    }

    /// Load rules from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let rules: ValidationRules = serde_json::from_str(&raw)?;
        rules.validate()?;

        info!(
            "Loaded validation rules from {} ({} formats, {}kB limit)",
            path.display(),
            rules.accepted_formats.len(),
            rules.max_size_kb
        );
        Ok(rules)
    }

    /// Pick the rules for this run.
    ///
    /// An explicit path has to load. Without one, the per-user rules file is
    /// used when present, otherwise the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> AppResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("No rules file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.accepted_formats.is_empty() {
            return Err(AppError::Config(
                "accepted_formats cannot be empty".to_string(),
            ));
        }
        if self.max_size_kb == 0 {
            return Err(AppError::Config(
                "max_size_kb must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-user rules file.
///
/// Path structure: {CONFIG_DIR}/subform/rules.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("subform").join("rules.json"))
}

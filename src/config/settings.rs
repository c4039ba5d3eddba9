//! User settings for the onboarding tool
//!
//! Persists the operator's defaults between runs: the school site code, the
//! directory exports are written to, and whether the audit log is kept.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::OnboardingPaths;
use crate::error::OnboardError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default school site code (INEP) used when none is given for an export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_code: Option<String>,

    /// Directory exports are saved to; the working directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Whether session changes are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            site_code: None,
            output_dir: None,
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &OnboardingPaths) -> Result<Self, OnboardError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not saved until the caller changes something
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| OnboardError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| OnboardError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OnboardingPaths) -> Result<(), OnboardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| OnboardError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| OnboardError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// The configured site code, ignoring a blank value
    pub fn default_site_code(&self) -> Option<&str> {
        self.site_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

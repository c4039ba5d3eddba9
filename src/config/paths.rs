//! Path management for the onboarding tool
//!
//! ## Path Resolution Order
//!
//! 1. `ONBOARDING_CLI_HOME` environment variable (if set)
//! 2. The platform config directory for `onboarding-cli`
//!    (`~/.config/onboarding-cli` on Linux, `%APPDATA%\onboarding-cli\config` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::OnboardError;

/// Environment variable that overrides the base directory
pub const HOME_ENV: &str = "ONBOARDING_CLI_HOME";

/// Manages the paths used by the onboarding tool
#[derive(Debug, Clone)]
pub struct OnboardingPaths {
    base_dir: PathBuf,
}

impl OnboardingPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, OnboardError> {
        Self::resolve(std::env::var_os(HOME_ENV).map(PathBuf::from))
    }

    /// Resolve with an explicit override in place of the environment
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self, OnboardError> {
        let base_dir = match override_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => ProjectDirs::from("", "", "onboarding-cli")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    OnboardError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create OnboardingPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), OnboardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| OnboardError::Io(format!("Failed to create base directory: {}", e)))
    }
}

//! Configuration module
//!
//! This module provides configuration management including:
//! - Path resolution for the settings file and audit log
//! - User settings persistence (default site code, export directory)

pub mod paths;
pub mod settings;

pub use paths::OnboardingPaths;
pub use settings::Settings;

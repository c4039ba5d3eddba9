//! Reports module
//!
//! Provides the session summary: record counts and onboarding progress.

pub mod summary;

pub use summary::{SessionSummary, PROGRESS_STEPS};

//! Custom error types for the onboarding tool
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for onboarding operations
#[derive(Error, Debug)]
pub enum OnboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A form was submitted with required fields left blank
    #[error("Please fill in all required fields ({form}): {}", .fields.join(", "))]
    MissingFields {
        form: &'static str,
        fields: Vec<&'static str>,
    },

    /// Export attempted without a site code
    #[error("Please provide the school site code (INEP) before exporting")]
    MissingSiteCode,

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("An error occurred while generating the spreadsheet: {0}")]
    Export(String),

    /// Shell command could not be parsed
    #[error("{0}")]
    Command(String),
}

impl OnboardError {
    /// Create a "not found" error for students
    pub fn student_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Student",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for guardians
    pub fn guardian_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Guardian",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for staff members
    pub fn staff_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Staff member",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for links
    pub fn link_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Link",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a missing-fields error
    pub fn is_missing_fields(&self) -> bool {
        matches!(self, Self::MissingFields { .. })
    }
}

impl From<std::io::Error> for OnboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OnboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for OnboardError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for onboarding operations
pub type OnboardResult<T> = Result<T, OnboardError>;

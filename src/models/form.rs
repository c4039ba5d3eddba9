//! Required-field checks shared by the entry forms

use crate::error::{OnboardError, OnboardResult};

/// Collects the names of required fields that were left blank
#[derive(Debug, Default)]
pub(crate) struct RequiredFields {
    form: &'static str,
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub(crate) fn new(form: &'static str) -> Self {
        Self {
            form,
            missing: Vec::new(),
        }
    }

    /// Record `field` as missing when `value` is empty or whitespace
    pub(crate) fn require(mut self, field: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.missing.push(field);
        }
        self
    }

    pub(crate) fn finish(self) -> OnboardResult<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(OnboardError::MissingFields {
                form: self.form,
                fields: self.missing,
            })
        }
    }
}

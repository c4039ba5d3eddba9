//! Per-export identifiers: batch id, process id, date and site code

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::layout::{FILE_PREFIX, PROCESS_PREFIX};
use crate::error::{OnboardError, OnboardResult};

/// Values shared by every row of one export call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportContext {
    batch_id: Uuid,
    date: NaiveDate,
    site_code: String,
}

impl ExportContext {
    /// Start a new export for `site_code` dated today (UTC)
    ///
    /// A blank site code is rejected before any data is touched.
    pub fn new(site_code: &str) -> OnboardResult<Self> {
        Self::on_date(site_code, Utc::now().date_naive())
    }

    /// Start a new export with an explicit date
    pub fn on_date(site_code: &str, date: NaiveDate) -> OnboardResult<Self> {
        let site_code = site_code.trim();
        if site_code.is_empty() {
            return Err(OnboardError::MissingSiteCode);
        }

        Ok(Self {
            batch_id: Uuid::new_v4(),
            date,
            site_code: site_code.to_string(),
        })
    }

    pub fn batch_id(&self) -> Uuid {
        self.batch_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn site_code(&self) -> &str {
        &self.site_code
    }

    /// `IMPORTACAO-<YYYY-MM-DD>-<site>`
    pub fn process_id(&self) -> String {
        format!(
            "{}-{}-{}",
            PROCESS_PREFIX,
            self.date.format("%Y-%m-%d"),
            self.site_code
        )
    }

    /// `onboarding_preenchido_<YYYY-MM-DD>.csv`
    pub fn file_name(&self) -> String {
        format!("{}{}.csv", FILE_PREFIX, self.date.format("%Y-%m-%d"))
    }
}

//! Student roster import
//!
//! Reads a headered CSV of students (`name,registration,grade`, in any order,
//! extra columns ignored) and submits each row as a student form. Rows the
//! form rejects are skipped and reported by line; the others are added in
//! file order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::error::{OnboardError, OnboardResult};
use crate::models::{NewStudent, Student};
use crate::services::RosterService;

/// Columns every roster file must have
pub const REQUIRED_HEADERS: [&str; 3] = ["name", "registration", "grade"];

/// A row that was not imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the file
    pub line: u64,
    pub reason: String,
}

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Students added, in file order
    pub imported: Vec<Student>,
    pub skipped: Vec<SkippedRow>,
}

/// Service for CSV import
pub struct ImportService<'r, 'a> {
    roster: &'r mut RosterService<'a>,
}

impl<'r, 'a> ImportService<'r, 'a> {
    /// Create a new import service adding through `roster`
    pub fn new(roster: &'r mut RosterService<'a>) -> Self {
        Self { roster }
    }

    /// Import students from a CSV file
    pub fn import_file(&mut self, path: &Path) -> OnboardResult<ImportResult> {
        let file = File::open(path).map_err(|e| {
            OnboardError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "importing student roster");
        self.import_from_reader(file)
    }

    /// Import students from any CSV reader
    pub fn import_from_reader<R: Read>(&mut self, reader: R) -> OnboardResult<ImportResult> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = normalize_headers(reader.headers()?);
        check_headers(&headers)?;

        let mut result = ImportResult::default();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let form: NewStudent = record.deserialize(Some(&headers)).map_err(|e| {
                OnboardError::Import(format!("Failed to read line {}: {}", line, e))
            })?;

            match self.roster.add_student(form) {
                Ok(student) => result.imported.push(student),
                Err(err @ OnboardError::MissingFields { .. }) => {
                    warn!(line, %err, "skipping roster row");
                    result.skipped.push(SkippedRow {
                        line,
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            imported = result.imported.len(),
            skipped = result.skipped.len(),
            "student roster imported"
        );
        Ok(result)
    }
}

fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|h| h.trim_start_matches('\u{FEFF}').to_lowercase())
        .collect()
}

fn check_headers(headers: &StringRecord) -> OnboardResult<()> {
    let missing: Vec<_> = REQUIRED_HEADERS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == **required))
        .copied()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(OnboardError::Import(format!(
            "Missing column(s): {} (expected header: {})",
            missing.join(", "),
            REQUIRED_HEADERS.join(",")
        )))
    }
}

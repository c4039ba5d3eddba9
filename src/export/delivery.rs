//! Delivery of the exported spreadsheet
//!
//! The document is prefixed with a UTF-8 byte-order mark so spreadsheet tools
//! detect the encoding, then either written into a directory under its dated
//! file name or streamed to a writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::context::ExportContext;
use super::csv::render_csv;
use super::layout::{BOM, CONTENT_TYPE};
use crate::error::{OnboardError, OnboardResult};
use crate::session::Session;

/// A rendered export, ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Render `session` into a file payload
    pub fn render(session: &Session, ctx: &ExportContext) -> OnboardResult<Self> {
        let mut text = String::from(BOM);
        text.push_str(&render_csv(session, ctx)?);

        Ok(Self {
            file_name: ctx.file_name(),
            content_type: CONTENT_TYPE,
            bytes: text.into_bytes(),
        })
    }

    /// Save into `dir`, replacing any earlier export of the same day
    ///
    /// The bytes go to a temporary file that is renamed into place, so a
    /// failure never leaves a partial file under the final name.
    pub fn save_to_dir(&self, dir: &Path) -> OnboardResult<PathBuf> {
        let path = dir.join(&self.file_name);
        write_atomic(&path, &self.bytes)?;
        info!(path = %path.display(), bytes = self.bytes.len(), "export saved");
        Ok(path)
    }

    /// Stream the bytes to `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> OnboardResult<()> {
        writer
            .write_all(&self.bytes)
            .and_then(|_| writer.flush())
            .map_err(|e| OnboardError::Export(e.to_string()))
    }
}

/// Write bytes to a file atomically (write to temp, then rename)
fn write_atomic(path: &Path, bytes: &[u8]) -> OnboardResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            OnboardError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = path.with_extension("csv.tmp");

    let result = (|| -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        writer.write_all(bytes)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        fs::rename(&temp_path, path)
    })();

    result.map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        OnboardError::Export(format!("Failed to write {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::csv::header_line;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn ctx() -> ExportContext {
        ExportContext::on_date("35012345", NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()).unwrap()
    }

    #[test]
    fn test_render_prepends_bom() {
        let file = ExportFile::render(&Session::new(), &ctx()).unwrap();
        assert_eq!(file.file_name, "onboarding_preenchido_2025-02-03.csv");
        assert_eq!(file.content_type, "text/csv;charset=utf-8;");
        assert_eq!(&file.bytes[..3], &[0xEF, 0xBB, 0xBF]);
        assert_eq!(&file.bytes[3..], header_line().as_bytes());
    }

    #[test]
    fn test_save_to_dir() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("exports");
        let file = ExportFile::render(&Session::new(), &ctx()).unwrap();

        let path = file.save_to_dir(&out_dir).unwrap();

        assert_eq!(path, out_dir.join("onboarding_preenchido_2025-02-03.csv"));
        assert_eq!(fs::read(&path).unwrap(), file.bytes);
        assert!(!out_dir.join("onboarding_preenchido_2025-02-03.csv.tmp").exists());
    }

    #[test]
    fn test_save_failure_is_export_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();

        let file = ExportFile::render(&Session::new(), &ctx()).unwrap();
        let err = file.save_to_dir(&blocker).unwrap_err();
        assert!(matches!(err, OnboardError::Export(_)));
    }

    #[test]
    fn test_write_to() {
        let file = ExportFile::render(&Session::new(), &ctx()).unwrap();
        let mut out = Vec::new();
        file.write_to(&mut out).unwrap();
        assert_eq!(out, file.bytes);
    }
}

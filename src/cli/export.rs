//! Export command
//!
//! Renders the session into the importer's CSV and saves it under its dated
//! file name, or streams it to stdout.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::OnboardResult;
use crate::export::{ExportContext, ExportFile};
use crate::session::Session;

/// Export options
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// School site code (INEP); overrides the session and configured code
    #[arg(long)]
    pub site: Option<String>,

    /// Directory to save the file in
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the CSV to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Handle the export command
///
/// `fallback_site` is used when `--site` is not given; `default_dir` when
/// `--output` is not given, falling back to the working directory.
pub fn handle_export<W: Write>(
    session: &Session,
    args: ExportArgs,
    fallback_site: Option<&str>,
    default_dir: Option<&Path>,
    out: &mut W,
) -> OnboardResult<()> {
    let site = args.site.as_deref().or(fallback_site).unwrap_or_default();
    let ctx = ExportContext::new(site)?;
    let file = ExportFile::render(session, &ctx)?;

    if args.stdout {
        return file.write_to(out);
    }

    let dir = args
        .output
        .as_deref()
        .or(default_dir)
        .unwrap_or_else(|| Path::new("."));
    let path = file.save_to_dir(dir)?;

    let rows = session.guardians().len() + session.students().len() + session.staff().len();
    writeln!(out, "Exported {} row(s) to {}", rows, path.display())?;
    writeln!(out, "  Process: {}", ctx.process_id())?;
    writeln!(out, "  Batch:   {}", ctx.batch_id())?;
    Ok(())
}

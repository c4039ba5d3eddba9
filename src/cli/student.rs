//! Student commands

use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;

use crate::display::format_student_list;
use crate::error::OnboardResult;
use crate::models::{NewStudent, StudentId};
use crate::services::{ImportService, RosterService};

/// Student subcommands
#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// Register a student
    Add {
        /// Full name
        #[arg(short, long, default_value = "")]
        name: String,
        /// Enrollment number
        #[arg(short, long, default_value = "")]
        registration: String,
        /// Grade or class (e.g. "5º Ano A")
        #[arg(short, long, default_value = "")]
        grade: String,
    },
    /// List registered students
    List,
    /// Remove a student and its links
    #[command(alias = "rm")]
    Remove {
        /// Student ID (e.g. stu-1 or 1)
        id: StudentId,
    },
    /// Import students from a CSV file with columns name,registration,grade
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },
}

/// Handle a student command
pub fn handle_student_command<W: Write>(
    roster: &mut RosterService<'_>,
    cmd: StudentCommands,
    out: &mut W,
) -> OnboardResult<()> {
    match cmd {
        StudentCommands::Add {
            name,
            registration,
            grade,
        } => {
            let student = roster.add_student(NewStudent {
                name,
                registration,
                grade,
            })?;
            writeln!(
                out,
                "Added student {}: {} ({})",
                student.id, student.name, student.registration
            )?;
        }

        StudentCommands::List => {
            writeln!(out, "{}", format_student_list(roster.session().students()))?;
        }

        StudentCommands::Remove { id } => {
            let (student, cascaded) = roster.remove_student(id)?;
            writeln!(
                out,
                "Removed student {}: {} ({} link(s) removed)",
                student.id,
                student.name,
                cascaded.len()
            )?;
        }

        StudentCommands::Import { file } => {
            let result = ImportService::new(roster).import_file(&file)?;
            writeln!(
                out,
                "Imported {} student(s) from {}",
                result.imported.len(),
                file.display()
            )?;
            for skipped in &result.skipped {
                writeln!(out, "  line {} skipped: {}", skipped.line, skipped.reason)?;
            }
        }
    }

    Ok(())
}

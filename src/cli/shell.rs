//! The session shell
//!
//! Reads commands line by line, parses each with clap and applies it to one
//! in-memory session. A failing command is reported and the shell moves on
//! to the next line; only `exit` or the end of input ends the session.

use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::debug;

use super::export::{handle_export, ExportArgs};
use super::guardian::{handle_guardian_command, GuardianCommands};
use super::link::{handle_link_command, LinkCommands};
use super::staff::{handle_staff_command, StaffCommands};
use super::student::{handle_student_command, StudentCommands};
use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::error::{OnboardError, OnboardResult};
use crate::reports::SessionSummary;
use crate::services::RosterService;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "onboard",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_value_name = "COMMAND",
    help_template = "Commands:\n{subcommands}"
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// Commands accepted by the shell
#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Add, list, remove or import students
    #[command(subcommand)]
    Student(StudentCommands),

    /// Add, list or remove guardians
    #[command(subcommand)]
    Guardian(GuardianCommands),

    /// Add, list, show or remove staff
    #[command(subcommand)]
    Staff(StaffCommands),

    /// Link guardians or staff to students
    #[command(subcommand)]
    Link(LinkCommands),

    /// Show the site code, or set it for this session ("" clears it)
    Site {
        /// School site code (INEP)
        code: Option<String>,
    },

    /// Show record counts and onboarding progress
    Summary,

    /// Export the onboarding spreadsheet
    Export(ExportArgs),

    /// Show the most recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// Leave the shell, discarding the session
    #[command(alias = "quit")]
    Exit,
}

/// What the shell does after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Totals for one run of the shell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands executed, excluding blank lines and comments
    pub commands: usize,
    pub failures: usize,
}

/// Split a command line into words
///
/// Whitespace separates words. Double quotes group a word and honour
/// backslash escapes; single quotes group a word literally.
pub fn split_words(line: &str) -> OnboardResult<Vec<String>> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => word.push(escaped),
                            None => return Err(unterminated('"')),
                        },
                        Some(other) => word.push(other),
                        None => return Err(unterminated('"')),
                    }
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(other) => word.push(other),
                        None => return Err(unterminated('\'')),
                    }
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            other => {
                in_word = true;
                word.push(other);
            }
        }
    }

    if in_word {
        words.push(word);
    }
    Ok(words)
}

fn unterminated(quote: char) -> OnboardError {
    OnboardError::Command(format!("Unterminated {} quote", quote))
}

/// An interactive or scripted onboarding session
pub struct Shell {
    session: Session,
    session_site: Option<String>,
    cli_site: Option<String>,
    settings: Settings,
    audit: Option<AuditLogger>,
}

impl Shell {
    /// Create a shell with an empty session
    ///
    /// `cli_site` comes from `--site` or `ONBOARDING_SITE_CODE`.
    pub fn new(settings: Settings, cli_site: Option<String>, audit: Option<AuditLogger>) -> Self {
        Self {
            session: Session::new(),
            session_site: None,
            cli_site,
            settings,
            audit,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The site code an export without `--site` would use
    ///
    /// Session code first, then the command-line code, then the configured
    /// default. Blank values are skipped.
    pub fn site_code(&self) -> Option<&str> {
        [self.session_site.as_deref(), self.cli_site.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|code| !code.is_empty())
            .or_else(|| self.settings.default_site_code())
    }

    fn roster(&mut self) -> RosterService<'_> {
        RosterService::new(&mut self.session).with_audit(self.audit.as_ref())
    }

    /// Parse and run one line
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> OnboardResult<Flow> {
        let words = split_words(line)?;
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                write!(out, "{}", err)?;
                return Ok(Flow::Continue);
            }
            Err(err) => {
                return Err(OnboardError::Command(err.render().to_string().trim_end().to_string()))
            }
        };

        debug!(command = ?parsed.command, "executing shell command");
        self.execute(parsed.command, out)
    }

    fn execute<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> OnboardResult<Flow> {
        match command {
            ShellCommand::Student(cmd) => handle_student_command(&mut self.roster(), cmd, out)?,
            ShellCommand::Guardian(cmd) => handle_guardian_command(&mut self.roster(), cmd, out)?,
            ShellCommand::Staff(cmd) => handle_staff_command(&mut self.roster(), cmd, out)?,
            ShellCommand::Link(cmd) => handle_link_command(&mut self.roster(), cmd, out)?,
            ShellCommand::Site { code: Some(code) } => {
                let code = code.trim().to_string();
                if code.is_empty() {
                    self.session_site = None;
                    writeln!(out, "Session site code cleared")?;
                } else {
                    writeln!(out, "Site code set to {}", code)?;
                    self.session_site = Some(code);
                }
            }
            ShellCommand::Site { code: None } => match self.site_code() {
                Some(code) => writeln!(out, "Site code: {}", code)?,
                None => writeln!(out, "No site code set")?,
            },
            ShellCommand::Summary => {
                write!(out, "{}", SessionSummary::generate(&self.session).format_terminal())?;
            }
            ShellCommand::Export(args) => {
                handle_export(
                    &self.session,
                    args,
                    self.site_code(),
                    self.settings.output_dir.as_deref(),
                    out,
                )?;
            }
            ShellCommand::Audit { count } => match &self.audit {
                Some(logger) => {
                    let entries = logger.read_recent(count)?;
                    if entries.is_empty() {
                        writeln!(out, "No audit entries yet.")?;
                    }
                    for entry in entries {
                        writeln!(out, "{}", entry.format_human_readable())?;
                    }
                }
                None => writeln!(out, "Audit log is disabled.")?,
            },
            ShellCommand::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// Run commands from `input` until `exit` or end of input
    ///
    /// Output goes to `out`; errors are reported on `err` with their line
    /// number. A line that is not valid UTF-8 counts as a failed command.
    /// With `prompt` set, a prompt is written before each line.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        err: &mut E,
        prompt: bool,
    ) -> OnboardResult<RunSummary> {
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            if prompt {
                write!(out, "onboard> ")?;
                out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let result = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        continue;
                    }
                    self.execute_line(trimmed, out)
                }
                Err(e) => Err(OnboardError::Command(format!("Line is not valid UTF-8: {}", e))),
            };

            summary.commands += 1;
            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => {
                    summary.failures += 1;
                    debug!(line = line_number, error = %e, "command failed");
                    if prompt {
                        writeln!(err, "Error: {}", e)?;
                    } else {
                        writeln!(err, "line {}: {}", line_number, e)?;
                    }
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn shell() -> Shell {
        Shell::new(Settings::default(), None, None)
    }

    fn run(shell: &mut Shell, script: &str) -> (RunSummary, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = shell
            .run(script.as_bytes(), &mut out, &mut err, false)
            .unwrap();
        (
            summary,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words(r#"student add --name "Ana Souza" -r 2024001"#).unwrap(),
            ["student", "add", "--name", "Ana Souza", "-r", "2024001"]
        );
        assert_eq!(
            split_words(r#"  a 'b "c"'  "d \"e\"" "" "#).unwrap(),
            ["a", "b \"c\"", "d \"e\"", ""]
        );
        assert_eq!(split_words("x'y z'w").unwrap(), ["xy zw"]);
        assert!(split_words("   ").unwrap().is_empty());
    }

    #[test]
    fn test_split_words_unterminated() {
        assert!(matches!(
            split_words("student add --name \"Ana"),
            Err(OnboardError::Command(_))
        ));
        assert!(split_words("'open").is_err());
    }

    #[test]
    fn test_script_builds_session() {
        let mut shell = shell();
        let (summary, out, err) = run(
            &mut shell,
            "# roster\n\
             student add --name Ana --registration 2024001 --grade 5A\n\
             \n\
             guardian add --name Maria --cpf 11111111111 --phone 11987654321 --email m@x.com\n\
             link guardian --person grd-2 --student stu-1 --relationship mae\n",
        );

        assert_eq!(summary, RunSummary { commands: 3, failures: 0 });
        assert!(err.is_empty());
        assert!(out.contains("Added student stu-1: Ana (2024001)"));
        assert!(out.contains("Linked Maria -> Ana as Mãe (lnk-3)"));
        assert_eq!(shell.session().links().len(), 1);
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let mut shell = shell();
        let (summary, _, err) = run(
            &mut shell,
            "student add --name Ana\n\
             bogus\n\
             student remove 9\n\
             student add -n Ana -r 2024001 -g 5A\n",
        );

        assert_eq!(summary.commands, 4);
        assert_eq!(summary.failures, 3);
        assert!(err.contains("line 1: Please fill in all required fields (student): registration, grade"));
        assert!(err.contains("line 2: "));
        assert!(err.contains("line 3: Student not found: stu-9"));
        assert_eq!(shell.session().students().len(), 1);
        assert_eq!(shell.session().students()[0].id.value(), 1);
    }

    #[test]
    fn test_exit_stops_reading() {
        let mut shell = shell();
        let (summary, _, _) = run(
            &mut shell,
            "student add -n Ana -r 1 -g 5A\nquit\nstudent add -n Bia -r 2 -g 5A\n",
        );

        assert_eq!(summary.commands, 2);
        assert_eq!(shell.session().students().len(), 1);
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let mut shell = shell();
        let (summary, out, _) = run(&mut shell, "help\nstudent --help\n");

        assert_eq!(summary.failures, 0);
        assert!(out.contains("student"));
        assert!(out.contains("export"));
    }

    #[test]
    fn test_site_precedence() {
        let settings = Settings {
            site_code: Some("11111111".into()),
            ..Default::default()
        };
        let mut shell = Shell::new(settings, Some(" ".into()), None);
        assert_eq!(shell.site_code(), Some("11111111"));

        shell.cli_site = Some("22222222".into());
        assert_eq!(shell.site_code(), Some("22222222"));

        let (_, out, _) = run(&mut shell, "site 33333333\nsite\n");
        assert!(out.contains("Site code: 33333333"));

        run(&mut shell, "site ''\n");
        assert_eq!(shell.site_code(), Some("22222222"));
    }

    #[test]
    fn test_export_from_shell() {
        let temp_dir = TempDir::new().unwrap();
        let mut shell = shell();
        let script = format!(
            "student add -n Ana -r 2024001 -g 5A\n\
             export\n\
             site 35012345\n\
             export --output '{}'\n",
            temp_dir.path().display()
        );

        let (summary, out, err) = run(&mut shell, &script);

        assert_eq!(summary.failures, 1);
        assert!(err.contains("line 2: Please provide the school site code (INEP) before exporting"));
        assert!(out.contains("Exported 1 row(s)"));
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_summary_command() {
        let mut shell = shell();
        let (_, out, _) = run(&mut shell, "student add -n Ana -r 1 -g 5A\nsummary\n");
        assert!(out.contains("25%"));
    }

    #[test]
    fn test_audit_written_when_attached() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut shell = Shell::new(Settings::default(), None, Some(logger));

        run(&mut shell, "student add -n Ana -r 1 -g 5A\nstudent remove stu-1\n");

        let entries = AuditLogger::new(temp_dir.path().join("audit.log"))
            .read_all()
            .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let mut shell = shell();
        let mut script = b"student add -n Ana -r 1 -g 5A\n".to_vec();
        script.extend_from_slice(b"student add -n Jo\xe3o -r 2 -g 5A\n");
        script.extend_from_slice(b"student add -n Bia -r 3 -g 5A\n");
        let mut out = Vec::new();
        let mut err = Vec::new();

        let summary = shell.run(&script[..], &mut out, &mut err, false).unwrap();

        assert_eq!(summary, RunSummary { commands: 3, failures: 1 });
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("line 2: Line is not valid UTF-8"));
        let names: Vec<_> = shell.session().students().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Bia"]);
    }

    #[test]
    fn test_audit_command_lists_recent_entries() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut shell = Shell::new(Settings::default(), None, Some(logger));

        let (_, out, _) = run(&mut shell, "audit\n");
        assert!(out.contains("No audit entries yet."));

        let (summary, out, _) = run(
            &mut shell,
            "student add -n Ana -r 1 -g 5A\n\
             student add -n Bia -r 2 -g 5A\n\
             audit -n 1\n",
        );
        assert_eq!(summary.failures, 0);
        assert!(out.contains("CREATE Student stu-2 (Bia)"));
        assert!(!out.contains("stu-1 (Ana)"));
    }

    #[test]
    fn test_audit_command_without_logger() {
        let mut shell = shell();
        let (_, out, _) = run(&mut shell, "audit\n");
        assert!(out.contains("Audit log is disabled."));
    }
}

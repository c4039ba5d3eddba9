use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use onboarding::audit::AuditLogger;
use onboarding::cli::{handle_config_command, ConfigCommands, Shell};
use onboarding::config::{OnboardingPaths, Settings};
use onboarding::logging::{init_logging, Verbosity};

#[derive(Parser)]
#[command(
    name = "onboard",
    author = "Kaylee Beyene",
    version,
    about = "Terminal data entry for school enrollment onboarding",
    long_about = "Key in students, guardians and staff, link them together, and export \
                  the onboarding spreadsheet for the school-management system's importer. \
                  The roster lives only for the session; nothing is saved between runs."
)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// School site code (INEP) for exports
    #[arg(long, env = "ONBOARDING_SITE_CODE", global = true)]
    site: Option<String>,

    /// Do not write to the audit log for this run
    #[arg(long, global = true)]
    no_audit: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Shell,

    /// Run a session from a script file, one command per line
    Run {
        /// Script path
        script: PathBuf,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    let paths = OnboardingPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "configuration loaded");

    let audit = if settings.audit_enabled && !cli.no_audit {
        paths.ensure_directories()?;
        Some(AuditLogger::new(paths.audit_log()))
    } else {
        None
    };

    let stdout = io::stdout();
    let stderr = io::stderr();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                println!("Onboarding session. Type 'help' for commands, 'exit' to leave.");
                println!("The session is not saved; export before you exit.");
            }

            let mut shell = Shell::new(settings, cli.site, audit);
            shell.run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock(), interactive)?;
            if interactive {
                println!();
            }
        }
        Commands::Run { script } => {
            let file = File::open(&script)
                .with_context(|| format!("Failed to open script {}", script.display()))?;

            let mut shell = Shell::new(settings, cli.site, audit);
            let summary = shell.run(
                BufReader::new(file),
                &mut stdout.lock(),
                &mut stderr.lock(),
                false,
            )?;
            if summary.failures > 0 {
                bail!(
                    "{} of {} command(s) failed in {}",
                    summary.failures,
                    summary.commands,
                    script.display()
                );
            }
        }
        Commands::Config { action } => {
            handle_config_command(
                &paths,
                &mut settings,
                action.unwrap_or(ConfigCommands::Show),
                &mut stdout.lock(),
            )?;
        }
    }

    Ok(())
}

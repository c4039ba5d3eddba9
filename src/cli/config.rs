//! Configuration commands

use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::{OnboardingPaths, Settings};
use crate::error::OnboardResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and settings
    Show,
    /// Set the default site code (INEP); omit to clear it
    SetSite {
        code: Option<String>,
    },
    /// Set the directory exports are saved to; omit to use the working directory
    SetOutputDir {
        dir: Option<PathBuf>,
    },
    /// Record session changes in the audit log
    EnableAudit,
    /// Stop recording session changes in the audit log
    DisableAudit,
}

/// Handle a config command, saving the settings when they change
pub fn handle_config_command<W: Write>(
    paths: &OnboardingPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
    out: &mut W,
) -> OnboardResult<()> {
    match cmd {
        ConfigCommands::Show => {
            writeln!(out, "Onboarding Configuration")?;
            writeln!(out, "========================")?;
            writeln!(out, "Config directory: {}", paths.base_dir().display())?;
            writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
            writeln!(out, "Audit log:        {}", paths.audit_log().display())?;
            writeln!(out)?;
            writeln!(out, "Settings:")?;
            writeln!(
                out,
                "  Site code:        {}",
                settings.default_site_code().unwrap_or("(not set)")
            )?;
            writeln!(
                out,
                "  Output directory: {}",
                settings
                    .output_dir
                    .as_ref()
                    .map(|d| d.display().to_string())
                    .unwrap_or_else(|| "(working directory)".to_string())
            )?;
            writeln!(
                out,
                "  Audit log:        {}",
                if settings.audit_enabled { "enabled" } else { "disabled" }
            )?;
            return Ok(());
        }
        ConfigCommands::SetSite { code } => {
            settings.site_code = code
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty());
        }
        ConfigCommands::SetOutputDir { dir } => {
            settings.output_dir = dir;
        }
        ConfigCommands::EnableAudit => settings.audit_enabled = true,
        ConfigCommands::DisableAudit => settings.audit_enabled = false,
    }

    settings.save(paths)?;
    writeln!(out, "Settings saved to {}", paths.settings_file().display())?;
    Ok(())
}

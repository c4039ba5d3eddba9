//! Guardian commands

use std::io::Write;

use clap::Subcommand;

use crate::display::format_guardian_list;
use crate::error::OnboardResult;
use crate::models::{GuardianId, NewGuardian};
use crate::services::RosterService;

/// Guardian subcommands
#[derive(Subcommand, Debug)]
pub enum GuardianCommands {
    /// Register a guardian
    Add {
        /// Full name
        #[arg(short, long, default_value = "")]
        name: String,
        /// National id (CPF), digits or already formatted
        #[arg(short, long, default_value = "")]
        cpf: String,
        /// WhatsApp number with area code
        #[arg(short, long, alias = "whatsapp", default_value = "")]
        phone: String,
        /// Contact email
        #[arg(short, long, default_value = "")]
        email: String,
    },
    /// List registered guardians
    List,
    /// Remove a guardian and its links
    #[command(alias = "rm")]
    Remove {
        /// Guardian ID (e.g. grd-2 or 2)
        id: GuardianId,
    },
}

/// Handle a guardian command
pub fn handle_guardian_command<W: Write>(
    roster: &mut RosterService<'_>,
    cmd: GuardianCommands,
    out: &mut W,
) -> OnboardResult<()> {
    match cmd {
        GuardianCommands::Add {
            name,
            cpf,
            phone,
            email,
        } => {
            let guardian = roster.add_guardian(NewGuardian {
                name,
                national_id: cpf,
                phone,
                email,
            })?;
            writeln!(out, "Added guardian {}: {}", guardian.id, guardian.name)?;
            writeln!(out, "  CPF:      {}", guardian.national_id)?;
            writeln!(out, "  WhatsApp: {}", guardian.phone)?;
        }

        GuardianCommands::List => {
            writeln!(out, "{}", format_guardian_list(roster.session().guardians()))?;
        }

        GuardianCommands::Remove { id } => {
            let (guardian, cascaded) = roster.remove_guardian(id)?;
            writeln!(
                out,
                "Removed guardian {}: {} ({} link(s) removed)",
                guardian.id,
                guardian.name,
                cascaded.len()
            )?;
        }
    }

    Ok(())
}

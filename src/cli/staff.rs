//! Staff commands

use std::io::Write;

use clap::Subcommand;

use crate::display::{format_staff_details, format_staff_list};
use crate::error::{OnboardError, OnboardResult};
use crate::models::{NewStaff, StaffId};
use crate::services::RosterService;

/// Staff subcommands
#[derive(Subcommand, Debug)]
pub enum StaffCommands {
    /// Register a staff member
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
        /// Employee registration number
        #[arg(short, long, default_value = "")]
        registration: String,
        /// Role: professor, coordenador, diretor, secretario, auxiliar,
        /// servicos_gerais, porteiro or outro
        #[arg(long, default_value = "")]
        role: String,
        /// Free-text description of duties
        #[arg(short, long, default_value = "")]
        duty: String,
        /// Allow the staff member to use the school app
        #[arg(long)]
        app_authorized: bool,
        /// The staff member has a child enrolled at this school
        #[arg(long, alias = "child-enrolled")]
        has_child: bool,
    },
    /// List registered staff
    List,
    /// Show one staff member's details
    Show {
        /// Staff ID (e.g. stf-3 or 3)
        id: StaffId,
    },
    /// Remove a staff member and its links
    #[command(alias = "rm")]
    Remove {
        /// Staff ID (e.g. stf-3 or 3)
        id: StaffId,
    },
}

/// Handle a staff command
pub fn handle_staff_command<W: Write>(
    roster: &mut RosterService<'_>,
    cmd: StaffCommands,
    out: &mut W,
) -> OnboardResult<()> {
    match cmd {
        StaffCommands::Add {
            name,
            cpf,
            phone,
            email,
            registration,
            role,
            duty,
            app_authorized,
            has_child,
        } => {
            let staff = roster.add_staff(NewStaff {
                name,
                national_id: cpf,
                phone,
                email,
                registration,
                role,
                duty,
                app_authorized,
                has_child_enrolled: has_child,
            })?;
            writeln!(
                out,
                "Added staff member {}: {} ({})",
                staff.id, staff.name, staff.role
            )?;
        }

        StaffCommands::List => {
            writeln!(out, "{}", format_staff_list(roster.session().staff()))?;
        }

        StaffCommands::Show { id } => {
            let staff = roster
                .session()
                .staff_member(id)
                .ok_or_else(|| OnboardError::staff_not_found(id.to_string()))?;
            write!(out, "{}", format_staff_details(staff))?;
        }

        StaffCommands::Remove { id } => {
            let (staff, cascaded) = roster.remove_staff(id)?;
            writeln!(
                out,
                "Removed staff member {}: {} ({} link(s) removed)",
                staff.id,
                staff.name,
                cascaded.len()
            )?;
        }
    }

    Ok(())
}

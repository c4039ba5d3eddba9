//! Link commands

use std::io::Write;

use clap::{Args, Subcommand};

use crate::display::format_link_list;
use crate::error::OnboardResult;
use crate::models::{LinkId, LinkKind, NewLink};
use crate::services::RosterService;

/// Fields shared by both link kinds
#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Guardian or staff ID, depending on the link kind
    #[arg(short, long, default_value = "")]
    pub person: String,
    /// Student ID
    #[arg(short, long, default_value = "")]
    pub student: String,
    /// Relationship: pai, mae, avo_m, avo_h, tio, irmao, responsavel_legal or outro
    #[arg(short, long, alias = "rel", default_value = "")]
    pub relationship: String,
}

/// Link subcommands
#[derive(Subcommand, Debug)]
pub enum LinkCommands {
    /// Link a guardian to a student
    Guardian(LinkArgs),
    /// Link a staff member with a child enrolled to a student
    Staff(LinkArgs),
    /// List links
    List,
    /// Remove a link
    #[command(alias = "rm")]
    Remove {
        /// Link ID (e.g. lnk-4 or 4)
        id: LinkId,
    },
}

fn add_link<W: Write>(
    roster: &mut RosterService<'_>,
    kind: LinkKind,
    args: LinkArgs,
    out: &mut W,
) -> OnboardResult<()> {
    let link = roster.add_link(NewLink::new(
        kind,
        args.person,
        args.student,
        args.relationship,
    ))?;

    let session = roster.session();
    let person = session.linked_person(&link).map(|p| p.name()).unwrap_or("?");
    let student = session
        .linked_student(&link)
        .map(|s| s.name.as_str())
        .unwrap_or("?");
    writeln!(
        out,
        "Linked {} -> {} as {} ({})",
        person,
        student,
        link.relationship.label(),
        link.id
    )?;
    Ok(())
}

/// Handle a link command
pub fn handle_link_command<W: Write>(
    roster: &mut RosterService<'_>,
    cmd: LinkCommands,
    out: &mut W,
) -> OnboardResult<()> {
    match cmd {
        LinkCommands::Guardian(args) => add_link(roster, LinkKind::Guardian, args, out)?,
        LinkCommands::Staff(args) => add_link(roster, LinkKind::Staff, args, out)?,
        LinkCommands::List => {
            writeln!(out, "{}", format_link_list(roster.session()))?;
        }
        LinkCommands::Remove { id } => {
            let link = roster.remove_link(id)?;
            writeln!(out, "Removed link {}", link.id)?;
        }
    }

    Ok(())
}

//! Link display formatting

use tabled::Tabled;

use super::roster::render;
use crate::session::Session;

/// Shown in place of a name when a reference no longer resolves
const DANGLING: &str = "?";

#[derive(Tabled)]
struct LinkRow<'a> {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Person")]
    person: &'a str,
    #[tabled(rename = "Student")]
    student: &'a str,
    #[tabled(rename = "Relationship")]
    relationship: &'a str,
}

/// Format the session's links, naming both ends
pub fn format_link_list(session: &Session) -> String {
    if session.links().is_empty() {
        return "No links registered yet.".to_string();
    }

    render(
        session
            .links()
            .iter()
            .map(|link| LinkRow {
                id: link.id.to_string(),
                kind: link.kind.tag(),
                person: session
                    .linked_person(link)
                    .map(|p| p.name())
                    .unwrap_or(DANGLING),
                student: session
                    .linked_student(link)
                    .map(|s| s.name.as_str())
                    .unwrap_or(DANGLING),
                relationship: link.relationship.label(),
            })
            .collect(),
    )
}

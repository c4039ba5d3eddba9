//! Cascade rules for record removal
//!
//! Removing a student, guardian or staff member also removes the links that
//! point at it. The rules live in one table keyed by record kind so that the
//! store can apply them in the same transition as the removal itself.

use crate::models::{EntityKind, Link, LinkKind};

/// Links orphaned when a record of `owner` kind is removed
#[derive(Debug, Clone, Copy)]
pub struct CascadeRule {
    pub owner: EntityKind,
    /// Returns true when `link` must go along with the record whose id is
    /// the second argument
    pub orphans: fn(&Link, u64) -> bool,
}

// References resolve the same way lookups and the export resolve them, so
// `grd-2`, `2` and `02` all name guardian 2.
fn references_student(link: &Link, id: u64) -> bool {
    link.student_id().map(|s| s.value()) == Some(id)
}

fn references_guardian(link: &Link, id: u64) -> bool {
    link.guardian_id().map(|g| g.value()) == Some(id)
}

fn references_staff(link: &Link, id: u64) -> bool {
    link.staff_id().map(|s| s.value()) == Some(id)
}

/// Removing a link cascades to nothing, so it has no entry here
pub static CASCADE_RULES: &[CascadeRule] = &[
    CascadeRule {
        owner: EntityKind::Student,
        orphans: references_student,
    },
    CascadeRule {
        owner: EntityKind::Guardian,
        orphans: references_guardian,
    },
    CascadeRule {
        owner: EntityKind::Staff,
        orphans: references_staff,
    },
];

/// Split `links` into those that survive removing the record and those that
/// are cascaded with it, preserving order in both
pub fn cascade_links(links: &[Link], owner: EntityKind, id: u64) -> (Vec<Link>, Vec<Link>) {
    let rules: Vec<&CascadeRule> = CASCADE_RULES.iter().filter(|r| r.owner == owner).collect();

    links
        .iter()
        .cloned()
        .partition(|link| !rules.iter().any(|rule| (rule.orphans)(link, id)))
}

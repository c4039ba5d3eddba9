//! Roster service
//!
//! Applies session operations on behalf of the operator. Each method runs one
//! state transition, records it in the audit log when one is attached, and
//! only then swaps the new state in, so a failed audit write leaves the
//! session untouched.

use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{OnboardError, OnboardResult};
use crate::models::{
    EntityKind, Guardian, GuardianId, Link, LinkId, LinkKind, NewGuardian, NewLink, NewStaff,
    NewStudent, Staff, StaffId, Student, StudentId,
};
use crate::session::Session;

/// Service for adding and removing roster records
pub struct RosterService<'a> {
    session: &'a mut Session,
    audit: Option<&'a AuditLogger>,
}

impl<'a> RosterService<'a> {
    /// Create a new roster service over `session`
    pub fn new(session: &'a mut Session) -> Self {
        Self {
            session,
            audit: None,
        }
    }

    /// Record every change in `logger`
    pub fn with_audit(mut self, logger: Option<&'a AuditLogger>) -> Self {
        self.audit = logger;
        self
    }

    /// The current session state
    pub fn session(&self) -> &Session {
        self.session
    }

    fn audit(&self, entries: &[AuditEntry]) -> OnboardResult<()> {
        match self.audit {
            Some(logger) => logger.log_batch(entries),
            None => Ok(()),
        }
    }

    fn cascade_entries(cascaded: &[Link], owner: String) -> Vec<AuditEntry> {
        cascaded
            .iter()
            .map(|link| {
                AuditEntry::delete(EntityKind::Link, link.id.to_string(), None, link)
                    .with_details(format!("cascaded from removal of {}", owner))
            })
            .collect()
    }

    /// Add a student
    pub fn add_student(&mut self, form: NewStudent) -> OnboardResult<Student> {
        let (next, id) = self.session.add_student(form)?;
        let student = next
            .student(id)
            .cloned()
            .ok_or_else(|| OnboardError::student_not_found(id.to_string()))?;

        self.audit(&[AuditEntry::create(
            EntityKind::Student,
            id.to_string(),
            Some(student.name.clone()),
            &student,
        )])?;
        *self.session = next;

        info!(id = %id, registration = %student.registration, "student added");
        Ok(student)
    }

    /// Add a guardian
    pub fn add_guardian(&mut self, form: NewGuardian) -> OnboardResult<Guardian> {
        let (next, id) = self.session.add_guardian(form)?;
        let guardian = next
            .guardian(id)
            .cloned()
            .ok_or_else(|| OnboardError::guardian_not_found(id.to_string()))?;

        self.audit(&[AuditEntry::create(
            EntityKind::Guardian,
            id.to_string(),
            Some(guardian.name.clone()),
            &guardian,
        )])?;
        *self.session = next;

        info!(id = %id, "guardian added");
        Ok(guardian)
    }

    /// Add a staff member
    pub fn add_staff(&mut self, form: NewStaff) -> OnboardResult<Staff> {
        let (next, id) = self.session.add_staff(form)?;
        let staff = next
            .staff_member(id)
            .cloned()
            .ok_or_else(|| OnboardError::staff_not_found(id.to_string()))?;

        self.audit(&[AuditEntry::create(
            EntityKind::Staff,
            id.to_string(),
            Some(staff.name.clone()),
            &staff,
        )])?;
        *self.session = next;

        info!(id = %id, role = staff.role.tag(), "staff member added");
        Ok(staff)
    }

    /// Add a link after checking that both ends exist
    ///
    /// The person must exist with the link's kind and, for a staff link, have
    /// a child enrolled. References are stored in their bare decimal form.
    /// Blank fields are left for the form check to report.
    pub fn add_link(&mut self, form: NewLink) -> OnboardResult<Link> {
        let form = NewLink {
            person_ref: self.resolve_person(form.kind, &form.person_ref)?,
            student_ref: self.resolve_student(&form.student_ref)?,
            ..form
        };

        let (next, id) = self.session.add_link(form)?;
        let link = next
            .link(id)
            .cloned()
            .ok_or_else(|| OnboardError::link_not_found(id.to_string()))?;

        if !link.relationship.is_recognized() {
            warn!(relationship = link.relationship.tag(), "unrecognized relationship kept as entered");
        }

        self.audit(&[AuditEntry::create(
            EntityKind::Link,
            id.to_string(),
            None,
            &link,
        )])?;
        *self.session = next;

        info!(id = %id, kind = link.kind.tag(), "link added");
        Ok(link)
    }

    fn resolve_person(&self, kind: LinkKind, raw: &str) -> OnboardResult<String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(String::new());
        }

        match kind {
            LinkKind::Guardian => {
                let id = raw
                    .parse::<GuardianId>()
                    .map_err(|_| OnboardError::guardian_not_found(raw))?;
                self.session
                    .guardian(id)
                    .ok_or_else(|| OnboardError::guardian_not_found(raw))?;
                Ok(id.to_reference())
            }
            LinkKind::Staff => {
                let id = raw
                    .parse::<StaffId>()
                    .map_err(|_| OnboardError::staff_not_found(raw))?;
                let staff = self
                    .session
                    .staff_member(id)
                    .ok_or_else(|| OnboardError::staff_not_found(raw))?;
                if !staff.has_child_enrolled {
                    return Err(OnboardError::Validation(format!(
                        "{} ({}) has no child enrolled; only staff with a child enrolled can be linked",
                        staff.name, id
                    )));
                }
                Ok(id.to_reference())
            }
        }
    }

    fn resolve_student(&self, raw: &str) -> OnboardResult<String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(String::new());
        }

        let id = raw
            .parse::<StudentId>()
            .map_err(|_| OnboardError::student_not_found(raw))?;
        self.session
            .student(id)
            .ok_or_else(|| OnboardError::student_not_found(raw))?;
        Ok(id.to_reference())
    }

    /// Remove a student and its links
    pub fn remove_student(&mut self, id: StudentId) -> OnboardResult<(Student, Vec<Link>)> {
        let student = self
            .session
            .student(id)
            .cloned()
            .ok_or_else(|| OnboardError::student_not_found(id.to_string()))?;
        let (next, cascaded) = self.session.remove_student(id)?;

        let mut entries = vec![AuditEntry::delete(
            EntityKind::Student,
            id.to_string(),
            Some(student.name.clone()),
            &student,
        )];
        entries.extend(Self::cascade_entries(&cascaded, id.to_string()));
        self.audit(&entries)?;
        *self.session = next;

        info!(id = %id, cascaded = cascaded.len(), "student removed");
        Ok((student, cascaded))
    }

    /// Remove a guardian and its guardian links
    pub fn remove_guardian(&mut self, id: GuardianId) -> OnboardResult<(Guardian, Vec<Link>)> {
        let guardian = self
            .session
            .guardian(id)
            .cloned()
            .ok_or_else(|| OnboardError::guardian_not_found(id.to_string()))?;
        let (next, cascaded) = self.session.remove_guardian(id)?;

        let mut entries = vec![AuditEntry::delete(
            EntityKind::Guardian,
            id.to_string(),
            Some(guardian.name.clone()),
            &guardian,
        )];
        entries.extend(Self::cascade_entries(&cascaded, id.to_string()));
        self.audit(&entries)?;
        *self.session = next;

        info!(id = %id, cascaded = cascaded.len(), "guardian removed");
        Ok((guardian, cascaded))
    }

    /// Remove a staff member and its staff links
    pub fn remove_staff(&mut self, id: StaffId) -> OnboardResult<(Staff, Vec<Link>)> {
        let staff = self
            .session
            .staff_member(id)
            .cloned()
            .ok_or_else(|| OnboardError::staff_not_found(id.to_string()))?;
        let (next, cascaded) = self.session.remove_staff(id)?;

        let mut entries = vec![AuditEntry::delete(
            EntityKind::Staff,
            id.to_string(),
            Some(staff.name.clone()),
            &staff,
        )];
        entries.extend(Self::cascade_entries(&cascaded, id.to_string()));
        self.audit(&entries)?;
        *self.session = next;

        info!(id = %id, cascaded = cascaded.len(), "staff member removed");
        Ok((staff, cascaded))
    }

    /// Remove a single link
    pub fn remove_link(&mut self, id: LinkId) -> OnboardResult<Link> {
        let link = self
            .session
            .link(id)
            .cloned()
            .ok_or_else(|| OnboardError::link_not_found(id.to_string()))?;
        let next = self.session.remove_link(id)?;

        self.audit(&[AuditEntry::delete(
            EntityKind::Link,
            id.to_string(),
            None,
            &link,
        )])?;
        *self.session = next;

        info!(id = %id, "link removed");
        Ok(link)
    }
}

//! The session store
//!
//! Holds the four record collections for one operator session. Every named
//! operation takes `&self` and returns the next state, leaving the receiver
//! untouched, so a failed operation can never leave a half-applied change.

use serde::Serialize;

use super::cascade::cascade_links;
use crate::error::{OnboardError, OnboardResult};
use crate::models::{
    EntityKind, Guardian, GuardianId, Link, LinkId, LinkKind, NewGuardian, NewLink, NewStaff,
    NewStudent, Staff, StaffId, Student, StudentId,
};

/// The person a link points at, once resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkedPerson<'a> {
    Guardian(&'a Guardian),
    Staff(&'a Staff),
}

impl<'a> LinkedPerson<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Self::Guardian(g) => &g.name,
            Self::Staff(s) => &s.name,
        }
    }

    pub fn national_id(&self) -> &'a str {
        match self {
            Self::Guardian(g) => &g.national_id,
            Self::Staff(s) => &s.national_id,
        }
    }
}

/// In-memory state for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    students: Vec<Student>,
    guardians: Vec<Guardian>,
    staff: Vec<Staff>,
    links: Vec<Link>,
    /// Next id to hand out; shared by every record kind
    next_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            guardians: Vec::new(),
            staff: Vec::new(),
            links: Vec::new(),
            next_id: 1,
        }
    }
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn guardians(&self) -> &[Guardian] {
        &self.guardians
    }

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn guardian(&self, id: GuardianId) -> Option<&Guardian> {
        self.guardians.iter().find(|g| g.id == id)
    }

    pub fn staff_member(&self, id: StaffId) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == id)
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    /// Resolve a link's person reference against the collection its kind names
    pub fn linked_person(&self, link: &Link) -> Option<LinkedPerson<'_>> {
        match link.kind {
            LinkKind::Guardian => link
                .guardian_id()
                .and_then(|id| self.guardian(id))
                .map(LinkedPerson::Guardian),
            LinkKind::Staff => link
                .staff_id()
                .and_then(|id| self.staff_member(id))
                .map(LinkedPerson::Staff),
        }
    }

    /// Resolve a link's student reference
    pub fn linked_student(&self, link: &Link) -> Option<&Student> {
        link.student_id().and_then(|id| self.student(id))
    }

    /// Links of `kind` whose person reference resolves to `person`, in order
    pub fn links_from(&self, kind: LinkKind, person: u64) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| {
            let resolved = match kind {
                LinkKind::Guardian => l.guardian_id().map(|id| id.value()),
                LinkKind::Staff => l.staff_id().map(|id| id.value()),
            };
            resolved == Some(person)
        })
    }

    /// Links of either kind whose student reference resolves to `student`
    pub fn links_to(&self, student: StudentId) -> impl Iterator<Item = &Link> {
        self.links
            .iter()
            .filter(move |l| l.student_id() == Some(student))
    }

    fn advance(&self) -> Self {
        Self {
            next_id: self.next_id + 1,
            ..self.clone()
        }
    }

    /// Add a student from a submitted form
    pub fn add_student(&self, form: NewStudent) -> OnboardResult<(Self, StudentId)> {
        let student = form.into_student(StudentId::new(self.next_id))?;
        let id = student.id;
        let mut next = self.advance();
        next.students.push(student);
        Ok((next, id))
    }

    /// Add a guardian from a submitted form
    pub fn add_guardian(&self, form: NewGuardian) -> OnboardResult<(Self, GuardianId)> {
        let guardian = form.into_guardian(GuardianId::new(self.next_id))?;
        let id = guardian.id;
        let mut next = self.advance();
        next.guardians.push(guardian);
        Ok((next, id))
    }

    /// Add a staff member from a submitted form
    pub fn add_staff(&self, form: NewStaff) -> OnboardResult<(Self, StaffId)> {
        let staff = form.into_staff(StaffId::new(self.next_id))?;
        let id = staff.id;
        let mut next = self.advance();
        next.staff.push(staff);
        Ok((next, id))
    }

    /// Add a link from a submitted form
    ///
    /// References are not checked here; a link to a missing record is kept
    /// and treated as dangling by the export.
    pub fn add_link(&self, form: NewLink) -> OnboardResult<(Self, LinkId)> {
        let link = form.into_link(LinkId::new(self.next_id))?;
        let id = link.id;
        let mut next = self.advance();
        next.links.push(link);
        Ok((next, id))
    }

    /// Remove a student and every link pointing at it
    pub fn remove_student(&self, id: StudentId) -> OnboardResult<(Self, Vec<Link>)> {
        if self.student(id).is_none() {
            return Err(OnboardError::student_not_found(id.to_string()));
        }
        let (links, cascaded) = cascade_links(&self.links, EntityKind::Student, id.value());
        let next = Self {
            students: self.students.iter().filter(|s| s.id != id).cloned().collect(),
            links,
            ..self.clone()
        };
        Ok((next, cascaded))
    }

    /// Remove a guardian and its guardian links
    pub fn remove_guardian(&self, id: GuardianId) -> OnboardResult<(Self, Vec<Link>)> {
        if self.guardian(id).is_none() {
            return Err(OnboardError::guardian_not_found(id.to_string()));
        }
        let (links, cascaded) =
            cascade_links(&self.links, EntityKind::Guardian, id.value());
        let next = Self {
            guardians: self.guardians.iter().filter(|g| g.id != id).cloned().collect(),
            links,
            ..self.clone()
        };
        Ok((next, cascaded))
    }

    /// Remove a staff member and its staff links
    pub fn remove_staff(&self, id: StaffId) -> OnboardResult<(Self, Vec<Link>)> {
        if self.staff_member(id).is_none() {
            return Err(OnboardError::staff_not_found(id.to_string()));
        }
        let (links, cascaded) = cascade_links(&self.links, EntityKind::Staff, id.value());
        let next = Self {
            staff: self.staff.iter().filter(|s| s.id != id).cloned().collect(),
            links,
            ..self.clone()
        };
        Ok((next, cascaded))
    }

    /// Remove a single link
    pub fn remove_link(&self, id: LinkId) -> OnboardResult<Self> {
        if self.link(id).is_none() {
            return Err(OnboardError::link_not_found(id.to_string()));
        }
        Ok(Self {
            links: self.links.iter().filter(|l| l.id != id).cloned().collect(),
            ..self.clone()
        })
    }
}

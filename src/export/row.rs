//! Export rows
//!
//! Each exported row comes from one guardian, student or staff member. The
//! three row kinds are gathered as a tagged union and then flattened into one
//! fixed-width record that matches the importer's column layout.

use serde::Serialize;

use super::context::ExportContext;
use super::layout::{
    CATEGORY_GUARDIAN, CATEGORY_STAFF, CATEGORY_STUDENT, COLUMN_COUNT, DATA_ORIGIN,
};
use crate::error::OnboardResult;
use crate::models::{Guardian, LinkKind, Staff, Student};
use crate::session::Session;

/// Entry of a guardian's or staff member's student list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedStudent<'a> {
    #[serde(rename = "matricula")]
    pub registration: &'a str,
}

/// Entry of a student's guardian list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedGuardian<'a> {
    #[serde(rename = "cpf")]
    pub national_id: &'a str,
    #[serde(rename = "parentesco")]
    pub relationship: &'a str,
}

/// One row of the export, before flattening
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportRow<'a> {
    Guardian {
        guardian: &'a Guardian,
        students: Vec<LinkedStudent<'a>>,
    },
    Student {
        student: &'a Student,
        guardians: Vec<LinkedGuardian<'a>>,
    },
    Staff {
        staff: &'a Staff,
        students: Vec<LinkedStudent<'a>>,
    },
}

/// Students reachable from one guardian or staff member, in link order
fn linked_students(session: &Session, kind: LinkKind, person: u64) -> Vec<LinkedStudent<'_>> {
    session
        .links_from(kind, person)
        .filter_map(|link| session.linked_student(link))
        .map(|student| LinkedStudent {
            registration: &student.registration,
        })
        .collect()
}

/// Gather the rows for `session`: all guardians, then all students, then all
/// staff, each group in collection order
///
/// Links whose person or student no longer resolves are skipped.
pub fn collect_rows(session: &Session) -> Vec<ExportRow<'_>> {
    let guardians = session.guardians().iter().map(move |guardian| ExportRow::Guardian {
        guardian,
        students: linked_students(session, LinkKind::Guardian, guardian.id.value()),
    });

    let students = session.students().iter().map(move |student| ExportRow::Student {
        student,
        guardians: session
            .links_to(student.id)
            .filter_map(|link| {
                session.linked_person(link).map(|person| LinkedGuardian {
                    national_id: person.national_id(),
                    relationship: link.relationship.label(),
                })
            })
            .collect(),
    });

    let staff = session.staff().iter().map(move |staff| ExportRow::Staff {
        staff,
        students: linked_students(session, LinkKind::Staff, staff.id.value()),
    });

    guardians.chain(students).chain(staff).collect()
}

/// A row flattened to the importer's column layout
///
/// Columns that do not apply to the row's kind stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRecord {
    pub batch_id: String,
    pub process_id: String,
    pub category: String,
    pub student_name: String,
    pub student_registration: String,
    pub grade: String,
    pub student_guardians: String,
    pub guardian_name: String,
    pub guardian_national_id: String,
    pub guardian_phone: String,
    pub guardian_email: String,
    pub guardian_students: String,
    pub staff_name: String,
    pub staff_national_id: String,
    pub staff_phone: String,
    pub staff_email: String,
    pub staff_registration: String,
    pub staff_role: String,
    pub staff_duty: String,
    pub staff_app_authorized: String,
    pub staff_is_guardian: String,
    pub staff_students: String,
    pub data_origin: String,
}

impl FlatRecord {
    /// Cell values in column order
    pub fn cells(&self) -> [&str; COLUMN_COUNT] {
        [
            &self.batch_id,
            &self.process_id,
            &self.category,
            &self.student_name,
            &self.student_registration,
            &self.grade,
            &self.student_guardians,
            &self.guardian_name,
            &self.guardian_national_id,
            &self.guardian_phone,
            &self.guardian_email,
            &self.guardian_students,
            &self.staff_name,
            &self.staff_national_id,
            &self.staff_phone,
            &self.staff_email,
            &self.staff_registration,
            &self.staff_role,
            &self.staff_duty,
            &self.staff_app_authorized,
            &self.staff_is_guardian,
            &self.staff_students,
            &self.data_origin,
        ]
    }
}

/// Compact JSON for a non-empty list, empty string otherwise
fn json_array<T: Serialize>(items: &[T]) -> OnboardResult<String> {
    if items.is_empty() {
        return Ok(String::new());
    }
    Ok(serde_json::to_string(items)?)
}

impl ExportRow<'_> {
    /// Flatten into the fixed-width record, stamping the shared export values
    pub fn flatten(&self, ctx: &ExportContext) -> OnboardResult<FlatRecord> {
        let base = FlatRecord {
            batch_id: ctx.batch_id().to_string(),
            process_id: ctx.process_id(),
            data_origin: DATA_ORIGIN.to_string(),
            ..Default::default()
        };

        let record = match self {
            Self::Guardian { guardian, students } => FlatRecord {
                category: CATEGORY_GUARDIAN.to_string(),
                guardian_name: guardian.name.clone(),
                guardian_national_id: guardian.national_id.clone(),
                guardian_phone: guardian.phone.clone(),
                guardian_email: guardian.email.clone(),
                guardian_students: json_array(students)?,
                ..base
            },
            Self::Student { student, guardians } => FlatRecord {
                category: CATEGORY_STUDENT.to_string(),
                student_name: student.name.clone(),
                student_registration: student.registration.clone(),
                grade: student.grade.clone(),
                student_guardians: json_array(guardians)?,
                ..base
            },
            Self::Staff { staff, students } => FlatRecord {
                category: CATEGORY_STAFF.to_string(),
                staff_name: staff.name.clone(),
                staff_national_id: staff.national_id.clone(),
                staff_phone: staff.phone.clone(),
                staff_email: staff.email.clone(),
                staff_registration: staff.registration.clone(),
                staff_role: staff.role.tag().to_string(),
                staff_duty: staff.duty.clone(),
                staff_app_authorized: staff.app_authorized_label().to_string(),
                staff_is_guardian: if staff.has_child_enrolled { "TRUE" } else { "FALSE" }
                    .to_string(),
                staff_students: json_array(students)?,
                ..base
            },
        };

        Ok(record)
    }
}

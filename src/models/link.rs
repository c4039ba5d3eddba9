//! Link model
//!
//! A link ties one guardian (or staff member with a child enrolled) to one
//! student. Person and student references are kept as loosely-typed strings:
//! a reference that no longer resolves is tolerated and simply skipped when
//! exporting.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::form::RequiredFields;
use super::ids::{GuardianId, LinkId, StaffId, StudentId};
use crate::error::OnboardResult;

/// Which kind of person a link refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    /// The person reference is a guardian id
    #[serde(rename = "responsavel")]
    Guardian,
    /// The person reference is a staff id
    #[serde(rename = "funcionario")]
    Staff,
}

impl LinkKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Guardian => "responsavel",
            Self::Staff => "funcionario",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guardian => write!(f, "Guardian"),
            Self::Staff => write!(f, "Staff"),
        }
    }
}

/// Relationship between the linked person and the student
///
/// Tags outside the known set are preserved verbatim in `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Relationship {
    Father,
    Mother,
    Grandmother,
    Grandfather,
    UncleAunt,
    Sibling,
    LegalGuardian,
    Other,
    Unrecognized(String),
}

impl Relationship {
    /// Parse a relationship tag; never fails
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "pai" => Self::Father,
            "mae" => Self::Mother,
            "avo_m" => Self::Grandmother,
            "avo_h" => Self::Grandfather,
            "tio" => Self::UncleAunt,
            "irmao" => Self::Sibling,
            "responsavel_legal" => Self::LegalGuardian,
            "outro" => Self::Other,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::Father => "pai",
            Self::Mother => "mae",
            Self::Grandmother => "avo_m",
            Self::Grandfather => "avo_h",
            Self::UncleAunt => "tio",
            Self::Sibling => "irmao",
            Self::LegalGuardian => "responsavel_legal",
            Self::Other => "outro",
            Self::Unrecognized(tag) => tag,
        }
    }

    /// Capitalized label written into the student's guardian list
    pub fn label(&self) -> &str {
        match self {
            Self::Father => "Pai",
            Self::Mother => "Mãe",
            Self::Grandmother => "Avó",
            Self::Grandfather => "Avô",
            Self::UncleAunt => "Tio(a)",
            Self::Sibling => "Irmão(ã)",
            Self::LegalGuardian => "Responsável Legal",
            Self::Other => "Outro",
            Self::Unrecognized(tag) => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for Relationship {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<Relationship> for String {
    fn from(relationship: Relationship) -> Self {
        relationship.tag().to_string()
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A relationship record between a person and a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Unique identifier within the session
    pub id: LinkId,

    pub kind: LinkKind,

    /// Guardian or staff id, depending on `kind`
    pub person_ref: String,

    /// Student id
    pub student_ref: String,

    pub relationship: Relationship,
}

impl Link {
    /// The referenced guardian, if this is a guardian link with a well-formed id
    pub fn guardian_id(&self) -> Option<GuardianId> {
        match self.kind {
            LinkKind::Guardian => self.person_ref.parse().ok(),
            LinkKind::Staff => None,
        }
    }

    /// The referenced staff member, if this is a staff link with a well-formed id
    pub fn staff_id(&self) -> Option<StaffId> {
        match self.kind {
            LinkKind::Staff => self.person_ref.parse().ok(),
            LinkKind::Guardian => None,
        }
    }

    /// The referenced student, if the reference is a well-formed id
    pub fn student_id(&self) -> Option<StudentId> {
        self.student_ref.parse().ok()
    }
}

/// Link entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub kind: LinkKind,
    pub person_ref: String,
    pub student_ref: String,
    pub relationship: String,
}

impl NewLink {
    pub fn new(
        kind: LinkKind,
        person_ref: impl Into<String>,
        student_ref: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            person_ref: person_ref.into(),
            student_ref: student_ref.into(),
            relationship: relationship.into(),
        }
    }

    /// Check required fields and build the record
    ///
    /// References are stored as given (trimmed); they are not resolved here.
    pub fn into_link(self, id: LinkId) -> OnboardResult<Link> {
        RequiredFields::new("link")
            .require("person", &self.person_ref)
            .require("student", &self.student_ref)
            .require("relationship", &self.relationship)
            .finish()?;

        Ok(Link {
            id,
            kind: self.kind,
            person_ref: self.person_ref.trim().to_string(),
            student_ref: self.student_ref.trim().to_string(),
            relationship: Relationship::from_tag(self.relationship.trim()),
        })
    }
}

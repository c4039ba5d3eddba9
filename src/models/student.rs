//! Student model

use serde::{Deserialize, Serialize};

use super::form::RequiredFields;
use super::ids::StudentId;
use crate::error::OnboardResult;

/// Category tag carried by every student record
pub const STUDENT_CATEGORY: &str = "ESTUDANTE";

/// An enrolled student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier within the session
    pub id: StudentId,

    /// Full name
    pub name: String,

    /// Enrollment number
    pub registration: String,

    /// Grade or class label (e.g. "5º Ano A")
    pub grade: String,
}

impl Student {
    /// Fixed category tag
    pub fn category(&self) -> &'static str {
        STUDENT_CATEGORY
    }
}

/// Student entry form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewStudent {
    pub name: String,
    pub registration: String,
    pub grade: String,
}

impl NewStudent {
    pub fn new(
        name: impl Into<String>,
        registration: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            registration: registration.into(),
            grade: grade.into(),
        }
    }

    /// Check required fields and build the record
    pub fn into_student(self, id: StudentId) -> OnboardResult<Student> {
        RequiredFields::new("student")
            .require("name", &self.name)
            .require("registration", &self.registration)
            .require("grade", &self.grade)
            .finish()?;

        Ok(Student {
            id,
            name: self.name.trim().to_string(),
            registration: self.registration.trim().to_string(),
            grade: self.grade.trim().to_string(),
        })
    }
}

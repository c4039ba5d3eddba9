//! Core data models for the onboarding tool
//!
//! This module contains the records an operator keys in (students, guardians,
//! staff and the links between them), their entry forms, and the input masks
//! applied to national ids and phone numbers.

mod form;
pub mod guardian;
pub mod ids;
pub mod kind;
pub mod link;
pub mod mask;
pub mod staff;
pub mod student;

pub use guardian::{Guardian, NewGuardian};
pub use ids::{GuardianId, LinkId, StaffId, StudentId};
pub use kind::EntityKind;
pub use link::{Link, LinkKind, NewLink, Relationship};
pub use mask::{format_national_id, format_phone};
pub use staff::{NewStaff, Staff, StaffRole};
pub use student::{NewStudent, Student, STUDENT_CATEGORY};

//! Display formatting for terminal output
//!
//! Formats the session's record sets as tables.

pub mod link;
pub mod roster;

pub use link::format_link_list;
pub use roster::{format_guardian_list, format_staff_details, format_staff_list, format_student_list};

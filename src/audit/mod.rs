//! Audit logging
//!
//! Every record added to or removed from the session, including links removed
//! by a cascade, is appended to a line-delimited JSON log:
//!
//! - `AuditEntry`: one operation on one record, with a snapshot of the record.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use onboarding::audit::{AuditEntry, AuditLogger};
//! use onboarding::models::EntityKind;
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(
//!     EntityKind::Student,
//!     student.id.to_string(),
//!     Some(student.name.clone()),
//!     &student,
//! );
//! logger.log_batch(&[entry])?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;

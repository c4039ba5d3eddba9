//! Service layer
//!
//! The service layer applies session operations for the operator, checking
//! link references, writing audit entries, and importing student rosters.

pub mod import;
pub mod roster;

pub use import::{ImportResult, ImportService, SkippedRow};
pub use roster::RosterService;

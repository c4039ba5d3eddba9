//! Session state
//!
//! A session owns every record entered during one run of the tool. Nothing is
//! written to disk; the session is discarded when the process exits.

pub mod cascade;
pub mod store;

pub use cascade::{cascade_links, CascadeRule, CASCADE_RULES};
pub use store::{LinkedPerson, Session};

//! onboarding - Terminal data entry for school enrollment onboarding
//!
//! Operators key in students, guardians and staff, link people to students,
//! and export one denormalized CSV for the school-management system's
//! importer. The roster lives in memory for one session and is never
//! persisted; only user settings and the audit log are kept on disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Record types, typed ids, entry forms and input masks
//! - `session`: The session store and its cascade rules
//! - `services`: Roster operations with audit logging, student CSV import
//! - `export`: The onboarding CSV export
//! - `reports`: Session summary and progress
//! - `display`: Terminal tables
//! - `audit`: Audit logging system
//! - `config`: Configuration and path management
//! - `logging`: `tracing` subscriber setup
//! - `cli`: Command definitions and the session shell
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use onboarding::export::{render_csv, ExportContext};
//! use onboarding::models::NewStudent;
//! use onboarding::session::Session;
//!
//! let (session, _) = Session::new().add_student(NewStudent::new("Ana", "2024001", "5A"))?;
//! let csv = render_csv(&session, &ExportContext::new("35012345")?)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;

pub use error::{OnboardError, OnboardResult};

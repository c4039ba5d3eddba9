//! CLI command handlers
//!
//! This module contains the clap command definitions and their handlers,
//! bridging argument parsing with the service layer, plus the session shell
//! that feeds them one line at a time.

pub mod config;
pub mod export;
pub mod guardian;
pub mod link;
pub mod shell;
pub mod staff;
pub mod student;

pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export, ExportArgs};
pub use guardian::{handle_guardian_command, GuardianCommands};
pub use link::{handle_link_command, LinkArgs, LinkCommands};
pub use shell::{split_words, Flow, RunSummary, Shell};
pub use staff::{handle_staff_command, StaffCommands};
pub use student::{handle_student_command, StudentCommands};

//! Export module
//!
//! Flattens the session into the importer's wide CSV layout:
//! - `layout`: column names and fixed literal values
//! - `context`: batch id, process id, date and site code for one export
//! - `row`: per-entity rows and their flattened form
//! - `csv`: cell escaping and document rendering
//! - `delivery`: BOM, file naming and atomic saving

pub mod context;
pub mod csv;
pub mod delivery;
pub mod layout;
pub mod row;

pub use context::ExportContext;
pub use self::csv::{escape_cell, header_line, render_csv};
pub use delivery::ExportFile;
pub use layout::{COLUMNS, COLUMN_COUNT, JSON_COLUMNS};
pub use row::{collect_rows, ExportRow, FlatRecord};

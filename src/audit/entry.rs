//! Audit entry data structures
//!
//! Defines the operation types and the entry format written to the audit log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::EntityKind;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Record was added to the session
    Create,
    /// Record was removed from the session
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Kind of record affected
    pub entity_kind: EntityKind,

    /// Display id of the affected record (e.g. `stu-3`)
    pub entity_id: String,

    /// Human-readable description of the record (e.g. a student's name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation of the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,

    /// Why the operation happened when it was not requested directly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create<T: Serialize>(
        entity_kind: EntityKind,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        record: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_kind,
            entity_id: entity_id.into(),
            entity_name,
            record: serde_json::to_value(record).ok(),
            details: None,
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete<T: Serialize>(
        entity_kind: EntityKind,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        record: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_kind,
            entity_id: entity_id.into(),
            entity_name,
            record: serde_json::to_value(record).ok(),
            details: None,
        }
    }

    /// Attach a note, such as the removal that cascaded into this one
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_kind,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(details) = &self.details {
            output.push_str(&format!("\n  {}", details));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"name": "Ana", "registration": "2024001"});
        let entry = AuditEntry::create(
            EntityKind::Student,
            "stu-1",
            Some("Ana".to_string()),
            &data,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_kind, EntityKind::Student);
        assert_eq!(entry.entity_id, "stu-1");
        assert_eq!(entry.record, Some(data));
        assert!(entry.details.is_none());
    }

    #[test]
    fn test_delete_entry_with_details() {
        let entry = AuditEntry::delete(EntityKind::Link, "lnk-4", None, &json!({"id": 4}))
            .with_details("cascaded from removal of stu-1");

        assert_eq!(entry.operation, Operation::Delete);
        assert_eq!(
            entry.details.as_deref(),
            Some("cascaded from removal of stu-1")
        );
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(EntityKind::Guardian, "grd-2", None, &json!({"name": "Maria"}));
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"operation\":\"create\""));
        assert!(json.contains("\"entity_kind\":\"guardian\""));
        assert!(!json.contains("entity_name"));

        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entity_id, "grd-2");
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::delete(
            EntityKind::Staff,
            "stf-3",
            Some("Carlos".to_string()),
            &json!({}),
        )
        .with_details("requested by operator");

        let output = entry.format_human_readable();
        assert!(output.contains("DELETE Staff stf-3 (Carlos)"));
        assert!(output.contains("\n  requested by operator"));
    }
}

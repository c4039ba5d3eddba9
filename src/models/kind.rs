//! Record kinds, used to key cascade rules and audit entries

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four kinds of record held by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Student,
    Guardian,
    Staff,
    Link,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Student => write!(f, "Student"),
            EntityKind::Guardian => write!(f, "Guardian"),
            EntityKind::Staff => write!(f, "Staff"),
            EntityKind::Link => write!(f, "Link"),
        }
    }
}

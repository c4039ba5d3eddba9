//! Strongly-typed ID wrappers for all record types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! record types at compile time. Ids are session-local integers; the display
//! form carries a short prefix that is optional when parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw id value
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            /// Get the underlying integer
            pub fn value(&self) -> u64 {
                self.0
            }

            /// The bare decimal form stored in link references
            pub fn to_reference(&self) -> String {
                self.0.to_string()
            }

            /// Parse an ID, accepting either `12` or the prefixed form
            pub fn parse(s: &str) -> Result<Self, ParseIntError> {
                s.parse()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(StudentId, "stu-");
define_id!(GuardianId, "grd-");
define_id!(StaffId, "stf-");
define_id!(LinkId, "lnk-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = StudentId::new(42);
        assert_eq!(id.to_string(), "stu-42");
        assert_eq!(id.to_reference(), "42");
    }

    #[test]
    fn test_id_parse_accepts_prefix() {
        assert_eq!(GuardianId::parse("grd-7").unwrap(), GuardianId::new(7));
        assert_eq!(GuardianId::parse(" 7 ").unwrap(), GuardianId::new(7));
        assert!(GuardianId::parse("stu-7").is_err());
        assert!(GuardianId::parse("").is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = LinkId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let deserialized: LinkId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

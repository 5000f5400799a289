/// A loanable item and the lifecycle variant it is currently in.
///
/// Records are snapshots. A transition never edits a record in place; it consumes the old
/// snapshot and builds the successor variant from the same [`LoanableResource`].
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Shelf identifier of a physical item. Unique per item; uniqueness is enforced by the
/// registry that catalogs items, not by the records themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallNumber(String);

impl CallNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CallNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CallNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for CallNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Integer date encoding carried with a record, e.g. `12202013`.
pub type DueDate = i64;

/// Fields shared by every lifecycle variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanableResource {
    pub call_number: CallNumber,
    pub due_date: DueDate,
}

/// A resource record: exactly one of the two lifecycle variants.
///
/// Serialized with an internal `state` tag:
///
/// ```json
/// {"state":"Available","call_number":"123","due_date":12202013}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum ResourceRecord {
    Available(LoanableResource),
    CheckedOut(LoanableResource),
}

/// The variant of a [`ResourceRecord`] without its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
    Available,
    CheckedOut,
}

impl Display for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => f.write_str("Available"),
            Self::CheckedOut => f.write_str("CheckedOut"),
        }
    }
}

impl ResourceRecord {
    /// A freshly catalogued item.
    pub fn available(call_number: impl Into<CallNumber>, due_date: DueDate) -> Self {
        Self::Available(LoanableResource {
            call_number: call_number.into(),
            due_date,
        })
    }

    pub fn checked_out(call_number: impl Into<CallNumber>, due_date: DueDate) -> Self {
        Self::CheckedOut(LoanableResource {
            call_number: call_number.into(),
            due_date,
        })
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match self {
            Self::Available(_) => Lifecycle::Available,
            Self::CheckedOut(_) => Lifecycle::CheckedOut,
        }
    }

    pub fn resource(&self) -> &LoanableResource {
        match self {
            Self::Available(resource) | Self::CheckedOut(resource) => resource,
        }
    }

    pub fn into_resource(self) -> LoanableResource {
        match self {
            Self::Available(resource) | Self::CheckedOut(resource) => resource,
        }
    }

    pub fn call_number(&self) -> &CallNumber {
        &self.resource().call_number
    }

    pub fn due_date(&self) -> DueDate {
        self.resource().due_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_read_through_either_variant() {
        let out = ResourceRecord::checked_out("QA76.73", 20240101);
        assert_eq!(out.lifecycle(), Lifecycle::CheckedOut);
        assert_eq!(out.call_number().as_str(), "QA76.73");
        assert_eq!(out.due_date(), 20240101);
        assert_eq!(
            out.into_resource(),
            LoanableResource {
                call_number: CallNumber::from("QA76.73"),
                due_date: 20240101,
            }
        );
    }

    #[test]
    fn test_record_json_uses_state_tag() {
        let record = ResourceRecord::available("123", 12202013);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"state": "Available", "call_number": "123", "due_date": 12202013})
        );

        let parsed: ResourceRecord =
            serde_json::from_str(r#"{"state":"CheckedOut","call_number":"9","due_date":0}"#)
                .unwrap();
        assert_eq!(parsed, ResourceRecord::checked_out("9", 0));
    }

    #[test]
    fn test_unknown_lifecycle_tag_is_rejected() {
        let parsed = serde_json::from_str::<ResourceRecord>(
            r#"{"state":"Lost","call_number":"9","due_date":0}"#,
        );
        assert!(parsed.is_err());
    }
}

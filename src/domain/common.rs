//! Shared identity types and traits for workspace records.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned by the record store. Records start out pending and
/// receive a persisted id when first ingested; keyed aggregation only ever
/// sees persisted ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Persisted(String),
    #[default]
    Pending,
}

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId::Persisted(id.into())
    }

    pub fn generate() -> Self {
        RecordId::Persisted(Uuid::new_v4().to_string())
    }

    pub fn persisted(&self) -> Option<&str> {
        match self {
            RecordId::Persisted(id) => Some(id),
            RecordId::Pending => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RecordId::Pending)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.persisted() == Some(candidate)
    }

    /// Returns the persisted id, generating one first when still pending.
    pub fn ensure_assigned(&mut self) -> String {
        if let RecordId::Persisted(id) = self {
            return id.clone();
        }
        let id = Uuid::new_v4().to_string();
        *self = RecordId::Persisted(id.clone());
        id
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Persisted(id) => f.write_str(id),
            RecordId::Pending => f.write_str("(pending)"),
        }
    }
}

/// Exposes the store-assigned identifier of a record.
pub trait Identifiable {
    fn record_id(&self) -> &RecordId;
}

/// Provides read-only access to a record's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_assigned_is_stable_once_persisted() {
        let mut id = RecordId::Pending;
        let first = id.ensure_assigned();
        let second = id.ensure_assigned();
        assert_eq!(first, second);
        assert!(id.matches(&first));
    }

    #[test]
    fn pending_round_trips_as_null() {
        let json = serde_json::to_string(&RecordId::Pending).unwrap();
        assert_eq!(json, "null");
        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert!(back.is_pending());
    }

    #[test]
    fn persisted_round_trips_as_string() {
        let id = RecordId::new("abc123");
        let json = serde_json::to_string(&id).unwrap();
        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

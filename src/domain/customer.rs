use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

use super::common::{Identifiable, NamedEntity, RecordId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
}

/// A customer account against which projects and receipts are recorded.
/// Balances are derived by the aggregation engine, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: RecordId::Pending,
            name: name.into(),
            tax_number: None,
            contact: None,
            address: None,
            tags: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("customer name is required".into()));
        }
        Ok(())
    }
}

impl Identifiable for Customer {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

impl NamedEntity for Customer {
    fn name(&self) -> &str {
        &self.name
    }
}

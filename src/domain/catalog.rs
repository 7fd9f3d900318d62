use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

use super::common::{Identifiable, NamedEntity, RecordId};

/// Measurement unit for catalog items and stock rows.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum Unit {
    #[default]
    Piece,
    Meter,
    Kilogram,
    Roll,
    Set,
    Other,
}

/// A material catalog entry. Items are referenced by stock rows, never owned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(default)]
    pub id: RecordId,
    pub code: String,
    pub name: String,
    pub unit: Unit,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_unit_cost_net: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_cost_net: Option<Decimal>,
}

impl CatalogItem {
    pub fn new(code: impl Into<String>, name: impl Into<String>, unit: Unit) -> Self {
        Self {
            id: RecordId::Pending,
            code: code.into(),
            name: name.into(),
            unit,
            categories: Vec::new(),
            description: None,
            last_unit_cost_net: None,
            average_cost_net: None,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.code.trim().is_empty() {
            return Err(DomainError::Validation(
                "catalog item code is required".into(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation(
                "catalog item name is required".into(),
            ));
        }
        if self
            .last_unit_cost_net
            .is_some_and(|cost| cost < Decimal::ZERO)
            || self
                .average_cost_net
                .is_some_and(|cost| cost < Decimal::ZERO)
        {
            return Err(DomainError::Validation(
                "catalog item costs must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

impl Identifiable for CatalogItem {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

impl NamedEntity for CatalogItem {
    fn name(&self) -> &str {
        &self.name
    }
}

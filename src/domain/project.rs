use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::tax;

use super::common::{Identifiable, NamedEntity, RecordId};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectStatus {
    #[default]
    Quote,
    Active,
    OnHold,
    Completed,
    Cancelled,
}

/// A customer project carrying the agreed contract value. The tax breakdown
/// (`agreed_tax`, `agreed_gross`) is always derived from `agreed_net` and
/// `tax_rate` via the tax calculator; callers never set it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: RecordId,
    pub customer_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    pub start: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub status: ProjectStatus,
    pub agreed_net: Decimal,
    pub tax_rate: Decimal,
    pub agreed_tax: Decimal,
    pub agreed_gross: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    /// Standard VAT rate applied when none is supplied.
    pub fn default_tax_rate() -> Decimal {
        Decimal::new(20, 2)
    }

    pub fn new(
        customer_id: impl Into<String>,
        name: impl Into<String>,
        start: NaiveDate,
        agreed_net: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        let breakdown = tax::breakdown(agreed_net, tax_rate);
        Self {
            id: RecordId::Pending,
            customer_id: customer_id.into(),
            name: name.into(),
            city: None,
            site: None,
            start,
            end: None,
            status: ProjectStatus::default(),
            agreed_net: breakdown.net,
            tax_rate,
            agreed_tax: breakdown.tax,
            agreed_gross: breakdown.gross,
            notes: None,
            tags: Vec::new(),
        }
    }

    /// Re-derives the agreement breakdown. Any previously stored tax or gross
    /// value is discarded.
    pub fn set_agreement(&mut self, agreed_net: Decimal, tax_rate: Decimal) {
        let breakdown = tax::breakdown(agreed_net, tax_rate);
        self.agreed_net = breakdown.net;
        self.tax_rate = tax_rate;
        self.agreed_tax = breakdown.tax;
        self.agreed_gross = breakdown.gross;
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.customer_id.trim().is_empty() {
            return Err(DomainError::Validation(
                "project requires a customer".into(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("project name is required".into()));
        }
        if self.agreed_net < Decimal::ZERO {
            return Err(DomainError::Validation(
                "agreed net amount must be non-negative".into(),
            ));
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(DomainError::Validation(
                "tax rate must be a fraction between 0 and 1".into(),
            ));
        }
        if self.agreed_gross != self.agreed_net + self.agreed_tax {
            return Err(DomainError::Validation(
                "agreement breakdown is inconsistent".into(),
            ));
        }
        Ok(())
    }
}

impl Identifiable for Project {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

impl NamedEntity for Project {
    fn name(&self) -> &str {
        &self.name
    }
}

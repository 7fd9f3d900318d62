use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

use super::common::{Identifiable, RecordId};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReceiptMethod {
    #[default]
    BankTransfer,
    Cash,
    Card,
    Cheque,
    Other,
}

/// Informational attribution of a receipt across projects. Allocations never
/// feed balance computation, which is always customer-level gross.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    pub project_id: String,
    pub amount_gross: Decimal,
}

/// A gross collection recorded against a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    pub id: RecordId,
    pub customer_id: String,
    pub date: NaiveDate,
    pub amount_gross: Decimal,
    #[serde(default)]
    pub method: ReceiptMethod,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allocations: Vec<Allocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Receipt {
    pub fn new(
        customer_id: impl Into<String>,
        date: NaiveDate,
        amount_gross: Decimal,
        method: ReceiptMethod,
    ) -> Self {
        Self {
            id: RecordId::Pending,
            customer_id: customer_id.into(),
            date,
            amount_gross,
            method,
            allocations: Vec::new(),
            notes: None,
        }
    }

    pub fn allocated_gross(&self) -> Decimal {
        self.allocations
            .iter()
            .fold(Decimal::ZERO, |sum, allocation| {
                sum + allocation.amount_gross
            })
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.customer_id.trim().is_empty() {
            return Err(DomainError::Validation(
                "receipt requires a customer".into(),
            ));
        }
        if self.amount_gross < Decimal::ZERO {
            return Err(DomainError::Validation(
                "receipt amount must be non-negative".into(),
            ));
        }
        for allocation in &self.allocations {
            if allocation.project_id.trim().is_empty() {
                return Err(DomainError::Validation(
                    "receipt allocation requires a project".into(),
                ));
            }
            if allocation.amount_gross < Decimal::ZERO {
                return Err(DomainError::Validation(
                    "receipt allocation must be non-negative".into(),
                ));
            }
        }
        Ok(())
    }
}

impl Identifiable for Receipt {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

use super::common::{Identifiable, RecordId};

/// A project expense. `tax_in_cost` marks non-deductible VAT: when set, the
/// tax amount is counted into project cost alongside the net amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub id: RecordId,
    pub project_id: String,
    pub date: NaiveDate,
    pub category: String,
    pub amount_net: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_gross: Option<Decimal>,
    #[serde(default)]
    pub tax_in_cost: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Expense {
    pub fn new(
        project_id: impl Into<String>,
        date: NaiveDate,
        category: impl Into<String>,
        amount_net: Decimal,
    ) -> Self {
        Self {
            id: RecordId::Pending,
            project_id: project_id.into(),
            date,
            category: category.into(),
            amount_net,
            tax_rate: None,
            tax_amount: None,
            amount_gross: None,
            tax_in_cost: false,
            invoice_no: None,
            notes: None,
        }
    }

    /// Net amount this expense contributes to project cost.
    pub fn cost_net(&self) -> Decimal {
        let tax = if self.tax_in_cost {
            self.tax_amount.unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };
        self.amount_net + tax
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.project_id.trim().is_empty() {
            return Err(DomainError::Validation(
                "expense requires a project".into(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::Validation(
                "expense category is required".into(),
            ));
        }
        if self.amount_net < Decimal::ZERO {
            return Err(DomainError::Validation(
                "expense amount must be non-negative".into(),
            ));
        }
        if self.tax_amount.is_some_and(|tax| tax < Decimal::ZERO) {
            return Err(DomainError::Validation(
                "expense tax amount must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

impl Identifiable for Expense {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

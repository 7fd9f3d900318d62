use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

use super::common::{Identifiable, RecordId};

/// A labor entry billed net against a project. Labor carries no tax dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Labor {
    #[serde(default)]
    pub id: RecordId,
    pub project_id: String,
    pub date: NaiveDate,
    pub worker: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Decimal>,
    pub amount_net: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Labor {
    pub fn new(
        project_id: impl Into<String>,
        date: NaiveDate,
        worker: impl Into<String>,
        amount_net: Decimal,
    ) -> Self {
        Self {
            id: RecordId::Pending,
            project_id: project_id.into(),
            date,
            worker: worker.into(),
            hours: None,
            days: None,
            amount_net,
            notes: None,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.project_id.trim().is_empty() {
            return Err(DomainError::Validation("labor requires a project".into()));
        }
        if self.worker.trim().is_empty() {
            return Err(DomainError::Validation("labor worker is required".into()));
        }
        if self.amount_net < Decimal::ZERO {
            return Err(DomainError::Validation(
                "labor amount must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

impl Identifiable for Labor {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

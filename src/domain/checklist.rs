use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

use super::common::{Identifiable, RecordId};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChecklistStatus {
    #[default]
    Open,
    Closed,
}

/// A per-project task item. Checklists live on the project detail view and
/// never feed any aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    #[serde(default)]
    pub id: RecordId,
    pub project_id: String,
    pub title: String,
    #[serde(default)]
    pub status: ChecklistStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl ChecklistItem {
    pub fn new(project_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: RecordId::Pending,
            project_id: project_id.into(),
            title: title.into(),
            status: ChecklistStatus::Open,
            date: None,
            note: None,
            assignee: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == ChecklistStatus::Open
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.project_id.trim().is_empty() {
            return Err(DomainError::Validation(
                "checklist item requires a project".into(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation(
                "checklist item title is required".into(),
            ));
        }
        Ok(())
    }
}

impl Identifiable for ChecklistItem {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_items_start_open() {
        let item = ChecklistItem::new("p1", "Order scaffolding");
        assert!(item.is_open());
        item.validate().unwrap();
    }

    #[test]
    fn validate_rejects_blank_title() {
        let item = ChecklistItem::new("p1", "  ");
        assert!(item.validate().is_err());
    }
}

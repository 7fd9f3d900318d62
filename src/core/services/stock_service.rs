//! Ingestion for inventory ledger documents. Invalid documents (no rows,
//! negative quantities or costs, unknown references) are rejected here so the
//! aggregators only ever see schema-valid input.

use crate::domain::{StockDocument, Workspace};

use super::{ServiceError, ServiceResult};

pub struct StockService;

impl StockService {
    pub fn add(workspace: &mut Workspace, document: StockDocument) -> ServiceResult<String> {
        document.validate()?;
        Self::ensure_references(workspace, &document)?;
        Ok(workspace.add_stock_document(document))
    }

    pub fn edit(workspace: &mut Workspace, id: &str, changes: StockDocument) -> ServiceResult<()> {
        changes.validate()?;
        Self::ensure_references(workspace, &changes)?;
        let document = workspace
            .stock_document_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Stock document not found".into()))?;
        document.date = changes.date;
        document.movement = changes.movement;
        document.location = changes.location;
        document.owner_customer_id = changes.owner_customer_id;
        document.project_id = changes.project_id;
        document.rows = changes.rows;
        document.notes = changes.notes;
        workspace.touch();
        Ok(())
    }

    pub fn remove(workspace: &mut Workspace, id: &str) -> ServiceResult<()> {
        let before = workspace.stock_documents.len();
        workspace
            .stock_documents
            .retain(|document| !document.id.matches(id));
        if workspace.stock_documents.len() == before {
            return Err(ServiceError::Invalid("Stock document not found".into()));
        }
        workspace.touch();
        Ok(())
    }

    pub fn list(workspace: &Workspace) -> Vec<&StockDocument> {
        workspace.stock_documents.iter().collect()
    }

    fn ensure_references(workspace: &Workspace, document: &StockDocument) -> ServiceResult<()> {
        if workspace.customer(&document.owner_customer_id).is_none() {
            return Err(ServiceError::Invalid(
                "Owner customer does not exist".into(),
            ));
        }
        if let Some(project_id) = document.project_id.as_deref() {
            if workspace.project(project_id).is_none() {
                return Err(ServiceError::Invalid(
                    "Linked project does not exist".into(),
                ));
            }
        }
        for row in &document.rows {
            if workspace.catalog_item(&row.catalog_item_id).is_none() {
                tracing::warn!(
                    catalog_item_id = %row.catalog_item_id,
                    "stock row references a catalog item not in this workspace"
                );
            }
        }
        Ok(())
    }
}

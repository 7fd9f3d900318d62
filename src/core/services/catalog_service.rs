use crate::domain::{CatalogItem, Workspace};

use super::{ServiceError, ServiceResult};

pub struct CatalogService;

impl CatalogService {
    pub fn add(workspace: &mut Workspace, item: CatalogItem) -> ServiceResult<String> {
        item.validate()?;
        Self::validate_code(workspace, item.id.persisted(), &item.code)?;
        Ok(workspace.add_catalog_item(item))
    }

    pub fn edit(workspace: &mut Workspace, id: &str, changes: CatalogItem) -> ServiceResult<()> {
        changes.validate()?;
        Self::validate_code(workspace, Some(id), &changes.code)?;
        let item = workspace
            .catalog_item_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Catalog item not found".into()))?;
        item.code = changes.code;
        item.name = changes.name;
        item.unit = changes.unit;
        item.categories = changes.categories;
        item.description = changes.description;
        item.last_unit_cost_net = changes.last_unit_cost_net;
        item.average_cost_net = changes.average_cost_net;
        workspace.touch();
        Ok(())
    }

    pub fn remove(workspace: &mut Workspace, id: &str) -> ServiceResult<()> {
        if workspace.stock_documents.iter().any(|document| {
            document
                .rows
                .iter()
                .any(|row| row.catalog_item_id == id)
        }) {
            return Err(ServiceError::Invalid(
                "Catalog item is referenced by stock documents".into(),
            ));
        }
        let before = workspace.catalog.len();
        workspace.catalog.retain(|item| !item.id.matches(id));
        if workspace.catalog.len() == before {
            return Err(ServiceError::Invalid("Catalog item not found".into()));
        }
        workspace.touch();
        Ok(())
    }

    pub fn list(workspace: &Workspace) -> Vec<&CatalogItem> {
        workspace.catalog.iter().collect()
    }

    fn validate_code(
        workspace: &Workspace,
        exclude: Option<&str>,
        candidate: &str,
    ) -> ServiceResult<()> {
        let normalized = candidate.trim().to_lowercase();
        let duplicate = workspace.catalog.iter().any(|item| {
            let code = item.code.trim().to_lowercase();
            code == normalized && exclude.map_or(true, |id| !item.id.matches(id))
        });
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Catalog code `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Unit;

    #[test]
    fn duplicate_codes_are_rejected() {
        let mut workspace = Workspace::new("Test");
        CatalogService::add(&mut workspace, CatalogItem::new("CBL-01", "Cable", Unit::Meter))
            .unwrap();
        let err =
            CatalogService::add(&mut workspace, CatalogItem::new("cbl-01", "Other", Unit::Piece))
                .expect_err("duplicate code must be rejected");
        assert!(matches!(err, ServiceError::Invalid(_)));
    }
}

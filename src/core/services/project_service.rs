//! Business logic helpers for managing projects. The agreement breakdown is
//! re-derived on every write so the stored tax and gross can never drift
//! from `agreed_net * tax_rate`.

use crate::domain::{Project, Workspace};

use super::{ServiceError, ServiceResult};

pub struct ProjectService;

impl ProjectService {
    /// Adds a new project and returns its identifier.
    pub fn add(workspace: &mut Workspace, mut project: Project) -> ServiceResult<String> {
        Self::ensure_customer_exists(workspace, &project.customer_id)?;
        project.set_agreement(project.agreed_net, project.tax_rate);
        project.validate()?;
        Ok(workspace.add_project(project))
    }

    /// Applies `changes` to the project identified by `id`. Whatever tax or
    /// gross values the caller supplied are discarded and recomputed.
    pub fn edit(workspace: &mut Workspace, id: &str, changes: Project) -> ServiceResult<()> {
        Self::ensure_customer_exists(workspace, &changes.customer_id)?;
        let mut updated = changes;
        updated.set_agreement(updated.agreed_net, updated.tax_rate);
        updated.validate()?;
        let project = workspace
            .project_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Project not found".into()))?;
        project.customer_id = updated.customer_id;
        project.name = updated.name;
        project.city = updated.city;
        project.site = updated.site;
        project.start = updated.start;
        project.end = updated.end;
        project.status = updated.status;
        project.agreed_net = updated.agreed_net;
        project.tax_rate = updated.tax_rate;
        project.agreed_tax = updated.agreed_tax;
        project.agreed_gross = updated.agreed_gross;
        project.notes = updated.notes;
        project.tags = updated.tags;
        workspace.touch();
        Ok(())
    }

    pub fn remove(workspace: &mut Workspace, id: &str) -> ServiceResult<()> {
        if workspace
            .expenses
            .iter()
            .any(|expense| expense.project_id == id)
            || workspace.labors.iter().any(|labor| labor.project_id == id)
            || workspace
                .stock_documents
                .iter()
                .any(|document| document.project_id.as_deref() == Some(id))
        {
            return Err(ServiceError::Invalid(
                "Project has linked cost records".into(),
            ));
        }
        if workspace.checklists.iter().any(|item| item.project_id == id) {
            return Err(ServiceError::Invalid(
                "Project has linked checklist items".into(),
            ));
        }
        let before = workspace.projects.len();
        workspace.projects.retain(|project| !project.id.matches(id));
        if workspace.projects.len() == before {
            return Err(ServiceError::Invalid("Project not found".into()));
        }
        workspace.touch();
        Ok(())
    }

    pub fn list(workspace: &Workspace) -> Vec<&Project> {
        workspace.projects.iter().collect()
    }

    fn ensure_customer_exists(workspace: &Workspace, customer_id: &str) -> ServiceResult<()> {
        if workspace.customer(customer_id).is_some() {
            Ok(())
        } else {
            Err(ServiceError::Invalid(
                "Linked customer does not exist".into(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Customer;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn workspace_with_customer() -> (Workspace, String) {
        let mut workspace = Workspace::new("Test");
        let id = workspace.add_customer(Customer::new("Hilltop"));
        (workspace, id)
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    #[test]
    fn add_recomputes_tampered_breakdown() {
        let (mut workspace, customer_id) = workspace_with_customer();
        let mut project = Project::new(customer_id, "Job", start(), dec!(1000), dec!(0.20));
        project.agreed_gross = dec!(1);
        project.agreed_tax = dec!(1);
        let id = ProjectService::add(&mut workspace, project).unwrap();
        let stored = workspace.project(&id).unwrap();
        assert_eq!(stored.agreed_tax, dec!(200.00));
        assert_eq!(stored.agreed_gross, dec!(1200.00));
    }

    #[test]
    fn edit_recomputes_agreement() {
        let (mut workspace, customer_id) = workspace_with_customer();
        let project = Project::new(customer_id.clone(), "Job", start(), dec!(1000), dec!(0.20));
        let id = ProjectService::add(&mut workspace, project).unwrap();

        let mut changes = workspace.project(&id).unwrap().clone();
        changes.agreed_net = dec!(2000);
        changes.tax_rate = dec!(0.10);
        ProjectService::edit(&mut workspace, &id, changes).unwrap();

        let stored = workspace.project(&id).unwrap();
        assert_eq!(stored.agreed_tax, dec!(200.0));
        assert_eq!(stored.agreed_gross, dec!(2200.0));
    }

    #[test]
    fn remove_rejects_projects_referenced_by_stock_documents() {
        use crate::domain::{Movement, StockDocument, StockLocation, StockRow, Unit};

        let (mut workspace, customer_id) = workspace_with_customer();
        let project = Project::new(customer_id.clone(), "Job", start(), dec!(100), dec!(0.20));
        let id = ProjectService::add(&mut workspace, project).unwrap();
        let row = StockRow::new("item-1", dec!(1), Unit::Piece);
        workspace.add_stock_document(
            StockDocument::new(
                start(),
                Movement::Outbound,
                StockLocation::Site,
                customer_id,
                vec![row],
            )
            .for_project(id.clone()),
        );
        let err = ProjectService::remove(&mut workspace, &id)
            .expect_err("project with ledger documents must not be removable");
        assert!(matches!(err, ServiceError::Invalid(_)));
    }

    #[test]
    fn remove_rejects_projects_with_checklist_items() {
        use crate::domain::ChecklistItem;

        let (mut workspace, customer_id) = workspace_with_customer();
        let project = Project::new(customer_id, "Job", start(), dec!(100), dec!(0.20));
        let id = ProjectService::add(&mut workspace, project).unwrap();
        workspace.add_checklist_item(ChecklistItem::new(id.clone(), "Order scaffolding"));
        assert!(ProjectService::remove(&mut workspace, &id).is_err());
    }

    #[test]
    fn add_rejects_unknown_customer() {
        let mut workspace = Workspace::new("Test");
        let project = Project::new("ghost", "Job", start(), dec!(100), dec!(0.20));
        assert!(ProjectService::add(&mut workspace, project).is_err());
    }
}

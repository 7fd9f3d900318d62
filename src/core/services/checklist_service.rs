use crate::domain::{ChecklistItem, Workspace};

use super::{ServiceError, ServiceResult};

pub struct ChecklistService;

impl ChecklistService {
    pub fn add(workspace: &mut Workspace, item: ChecklistItem) -> ServiceResult<String> {
        item.validate()?;
        Self::ensure_project_exists(workspace, &item.project_id)?;
        Ok(workspace.add_checklist_item(item))
    }

    pub fn edit(workspace: &mut Workspace, id: &str, changes: ChecklistItem) -> ServiceResult<()> {
        changes.validate()?;
        Self::ensure_project_exists(workspace, &changes.project_id)?;
        let item = workspace
            .checklist_item_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Checklist item not found".into()))?;
        item.project_id = changes.project_id;
        item.title = changes.title;
        item.status = changes.status;
        item.date = changes.date;
        item.note = changes.note;
        item.assignee = changes.assignee;
        workspace.touch();
        Ok(())
    }

    pub fn remove(workspace: &mut Workspace, id: &str) -> ServiceResult<()> {
        let before = workspace.checklists.len();
        workspace.checklists.retain(|item| !item.id.matches(id));
        if workspace.checklists.len() == before {
            return Err(ServiceError::Invalid("Checklist item not found".into()));
        }
        workspace.touch();
        Ok(())
    }

    pub fn list(workspace: &Workspace) -> Vec<&ChecklistItem> {
        workspace.checklists.iter().collect()
    }

    /// Checklist items for one project, open items first.
    pub fn for_project<'a>(workspace: &'a Workspace, project_id: &str) -> Vec<&'a ChecklistItem> {
        let mut items: Vec<&ChecklistItem> = workspace
            .checklists
            .iter()
            .filter(|item| item.project_id == project_id)
            .collect();
        items.sort_by_key(|item| !item.is_open());
        items
    }

    fn ensure_project_exists(workspace: &Workspace, project_id: &str) -> ServiceResult<()> {
        if workspace.project(project_id).is_some() {
            Ok(())
        } else {
            Err(ServiceError::Invalid(
                "Linked project does not exist".into(),
            ))
        }
    }
}

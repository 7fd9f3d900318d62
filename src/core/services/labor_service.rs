use crate::domain::{Labor, Workspace};

use super::{ServiceError, ServiceResult};

pub struct LaborService;

impl LaborService {
    pub fn add(workspace: &mut Workspace, labor: Labor) -> ServiceResult<String> {
        labor.validate()?;
        Self::ensure_project_exists(workspace, &labor.project_id)?;
        Ok(workspace.add_labor(labor))
    }

    pub fn edit(workspace: &mut Workspace, id: &str, changes: Labor) -> ServiceResult<()> {
        changes.validate()?;
        Self::ensure_project_exists(workspace, &changes.project_id)?;
        let labor = workspace
            .labor_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Labor entry not found".into()))?;
        labor.project_id = changes.project_id;
        labor.date = changes.date;
        labor.worker = changes.worker;
        labor.hours = changes.hours;
        labor.days = changes.days;
        labor.amount_net = changes.amount_net;
        labor.notes = changes.notes;
        workspace.touch();
        Ok(())
    }

    pub fn remove(workspace: &mut Workspace, id: &str) -> ServiceResult<()> {
        let before = workspace.labors.len();
        workspace.labors.retain(|labor| !labor.id.matches(id));
        if workspace.labors.len() == before {
            return Err(ServiceError::Invalid("Labor entry not found".into()));
        }
        workspace.touch();
        Ok(())
    }

    pub fn list(workspace: &Workspace) -> Vec<&Labor> {
        workspace.labors.iter().collect()
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

use crate::domain::{Expense, Workspace};

use super::{ServiceError, ServiceResult};

pub struct ExpenseService;

impl ExpenseService {
    pub fn add(workspace: &mut Workspace, expense: Expense) -> ServiceResult<String> {
        expense.validate()?;
        Self::ensure_project_exists(workspace, &expense.project_id)?;
        Ok(workspace.add_expense(expense))
    }

    pub fn edit(workspace: &mut Workspace, id: &str, changes: Expense) -> ServiceResult<()> {
        changes.validate()?;
        Self::ensure_project_exists(workspace, &changes.project_id)?;
        let expense = workspace
            .expense_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Expense not found".into()))?;
        expense.project_id = changes.project_id;
        expense.date = changes.date;
        expense.category = changes.category;
        expense.amount_net = changes.amount_net;
        expense.tax_rate = changes.tax_rate;
        expense.tax_amount = changes.tax_amount;
        expense.amount_gross = changes.amount_gross;
        expense.tax_in_cost = changes.tax_in_cost;
        expense.invoice_no = changes.invoice_no;
        expense.notes = changes.notes;
        workspace.touch();
        Ok(())
    }

    pub fn remove(workspace: &mut Workspace, id: &str) -> ServiceResult<()> {
        let before = workspace.expenses.len();
        workspace.expenses.retain(|expense| !expense.id.matches(id));
        if workspace.expenses.len() == before {
            return Err(ServiceError::Invalid("Expense not found".into()));
        }
        workspace.touch();
        Ok(())
    }

    pub fn list(workspace: &Workspace) -> Vec<&Expense> {
        workspace.expenses.iter().collect()
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

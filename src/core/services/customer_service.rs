use crate::domain::{Customer, Workspace};

use super::{ServiceError, ServiceResult};

pub struct CustomerService;

impl CustomerService {
    pub fn add(workspace: &mut Workspace, customer: Customer) -> ServiceResult<String> {
        customer.validate()?;
        Self::validate_name(workspace, customer.id.persisted(), &customer.name)?;
        Ok(workspace.add_customer(customer))
    }

    pub fn edit(workspace: &mut Workspace, id: &str, changes: Customer) -> ServiceResult<()> {
        changes.validate()?;
        Self::validate_name(workspace, Some(id), &changes.name)?;
        let customer = workspace
            .customer_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Customer not found".into()))?;
        customer.name = changes.name;
        customer.tax_number = changes.tax_number;
        customer.contact = changes.contact;
        customer.address = changes.address;
        customer.tags = changes.tags;
        workspace.touch();
        Ok(())
    }

    pub fn remove(workspace: &mut Workspace, id: &str) -> ServiceResult<()> {
        if workspace
            .projects
            .iter()
            .any(|project| project.customer_id == id)
        {
            return Err(ServiceError::Invalid(
                "Customer has linked projects".into(),
            ));
        }
        if workspace
            .receipts
            .iter()
            .any(|receipt| receipt.customer_id == id)
        {
            return Err(ServiceError::Invalid(
                "Customer has linked receipts".into(),
            ));
        }
        if workspace
            .stock_documents
            .iter()
            .any(|document| document.owner_customer_id == id)
        {
            return Err(ServiceError::Invalid(
                "Customer owns stock documents".into(),
            ));
        }
        let before = workspace.customers.len();
        workspace.customers.retain(|customer| !customer.id.matches(id));
        if workspace.customers.len() == before {
            return Err(ServiceError::Invalid("Customer not found".into()));
        }
        workspace.touch();
        Ok(())
    }

    pub fn list(workspace: &Workspace) -> Vec<&Customer> {
        workspace.customers.iter().collect()
    }

    fn validate_name(
        workspace: &Workspace,
        exclude: Option<&str>,
        candidate: &str,
    ) -> ServiceResult<()> {
        let normalized = candidate.trim().to_lowercase();
        let duplicate = workspace.customers.iter().any(|customer| {
            let name = customer.name.trim().to_lowercase();
            name == normalized && exclude.map_or(true, |id| !customer.id.matches(id))
        });
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Customer `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}

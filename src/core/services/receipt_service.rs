use crate::domain::{Receipt, Workspace};

use super::{ServiceError, ServiceResult};

pub struct ReceiptService;

impl ReceiptService {
    pub fn add(workspace: &mut Workspace, receipt: Receipt) -> ServiceResult<String> {
        receipt.validate()?;
        Self::ensure_customer_exists(workspace, &receipt.customer_id)?;
        Ok(workspace.add_receipt(receipt))
    }

    pub fn edit(workspace: &mut Workspace, id: &str, changes: Receipt) -> ServiceResult<()> {
        changes.validate()?;
        Self::ensure_customer_exists(workspace, &changes.customer_id)?;
        let receipt = workspace
            .receipt_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Receipt not found".into()))?;
        receipt.customer_id = changes.customer_id;
        receipt.date = changes.date;
        receipt.amount_gross = changes.amount_gross;
        receipt.method = changes.method;
        receipt.allocations = changes.allocations;
        receipt.notes = changes.notes;
        workspace.touch();
        Ok(())
    }

    pub fn remove(workspace: &mut Workspace, id: &str) -> ServiceResult<()> {
        let before = workspace.receipts.len();
        workspace.receipts.retain(|receipt| !receipt.id.matches(id));
        if workspace.receipts.len() == before {
            return Err(ServiceError::Invalid("Receipt not found".into()));
        }
        workspace.touch();
        Ok(())
    }

    pub fn list(workspace: &Workspace) -> Vec<&Receipt> {
        workspace.receipts.iter().collect()
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
    use crate::domain::{Customer, ReceiptMethod};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn add_rejects_negative_amount() {
        let mut workspace = Workspace::new("Test");
        let customer_id = workspace.add_customer(Customer::new("Hilltop"));
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let receipt = Receipt::new(customer_id, date, dec!(-10), ReceiptMethod::Cash);
        assert!(ReceiptService::add(&mut workspace, receipt).is_err());
    }

    #[test]
    fn add_rejects_unknown_customer() {
        let mut workspace = Workspace::new("Test");
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let receipt = Receipt::new("ghost", date, dec!(10), ReceiptMethod::Cash);
        assert!(ReceiptService::add(&mut workspace, receipt).is_err());
    }
}

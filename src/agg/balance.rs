use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Customer, Project, Receipt};

/// Derived gross balance facts for one customer. Positive balance means the
/// customer still owes money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerBalance {
    pub customer_id: String,
    pub name: String,
    pub agreed_gross_total: Decimal,
    pub collected_gross_total: Decimal,
    pub balance_gross: Decimal,
}

/// Computes per-customer gross balances: agreed value across projects versus
/// collected receipts. Every persisted customer appears exactly once, in
/// input order, zero-filled when inactive. Projects and receipts referencing
/// an unknown customer are excluded from all totals.
pub fn customer_balances(
    customers: &[Customer],
    projects: &[Project],
    receipts: &[Receipt],
) -> Vec<CustomerBalance> {
    let known: HashSet<&str> = customers
        .iter()
        .filter_map(|customer| customer.id.persisted())
        .collect();

    let mut agreed: HashMap<&str, Decimal> = HashMap::new();
    for project in projects {
        if known.contains(project.customer_id.as_str()) {
            *agreed.entry(project.customer_id.as_str()).or_default() += project.agreed_gross;
        } else {
            tracing::debug!(
                customer_id = %project.customer_id,
                project = %project.id,
                "project references unknown customer; excluded from balances"
            );
        }
    }

    let mut collected: HashMap<&str, Decimal> = HashMap::new();
    for receipt in receipts {
        if known.contains(receipt.customer_id.as_str()) {
            *collected.entry(receipt.customer_id.as_str()).or_default() += receipt.amount_gross;
        } else {
            tracing::debug!(
                customer_id = %receipt.customer_id,
                receipt = %receipt.id,
                "receipt references unknown customer; excluded from balances"
            );
        }
    }

    customers
        .iter()
        .filter_map(|customer| {
            let Some(id) = customer.id.persisted() else {
                tracing::debug!(name = %customer.name, "skipping unpersisted customer");
                return None;
            };
            let agreed_gross_total = agreed.get(id).copied().unwrap_or(Decimal::ZERO);
            let collected_gross_total = collected.get(id).copied().unwrap_or(Decimal::ZERO);
            Some(CustomerBalance {
                customer_id: id.to_string(),
                name: customer.name.clone(),
                agreed_gross_total,
                collected_gross_total,
                balance_gross: agreed_gross_total - collected_gross_total,
            })
        })
        .collect()
}

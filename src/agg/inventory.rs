use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{StockDocument, StockLocation};
use crate::errors::DomainError;

/// Partition key for stock balances. Documents without a project key into a
/// warehouse-only bucket distinct from every project bucket.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StockKey {
    pub owner_customer_id: String,
    pub project_id: Option<String>,
    pub location: StockLocation,
}

/// Stock-on-hand quantity of one catalog item within one partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockBalance {
    pub key: StockKey,
    pub catalog_item_id: String,
    pub quantity: Decimal,
}

/// Computes stock-on-hand balances per partition per catalog item. Signs:
/// Inbound +, Outbound -, Return +, Transfer neutral. A document's movement
/// and location apply uniformly to every row. Zero-row documents are
/// rejected; they violate the ingestion invariant and must not silently
/// zero-sum.
pub fn stock_balances(documents: &[StockDocument]) -> Result<Vec<StockBalance>, DomainError> {
    let mut totals: BTreeMap<(StockKey, String), Decimal> = BTreeMap::new();

    for document in documents {
        if document.rows.is_empty() {
            return Err(DomainError::Validation(format!(
                "stock document {} has no rows",
                document.id
            )));
        }
        let sign = document.movement.on_hand_sign();
        let key = StockKey {
            owner_customer_id: document.owner_customer_id.clone(),
            project_id: document.project_id.clone(),
            location: document.location,
        };
        for row in &document.rows {
            let entry = totals
                .entry((key.clone(), row.catalog_item_id.clone()))
                .or_insert(Decimal::ZERO);
            *entry += sign * row.quantity;
        }
    }

    Ok(totals
        .into_iter()
        .map(|((key, catalog_item_id), quantity)| StockBalance {
            key,
            catalog_item_id,
            quantity,
        })
        .collect())
}

/// Net value of inventory consumed by a project: outbound issues minus
/// returns, valued at recorded line totals (or unit cost times quantity).
/// May go negative when returns exceed issues, which correctly reduces the
/// project's cost. Zero-row documents are rejected under the same ingestion
/// invariant as `stock_balances`.
pub fn project_consumption_net(
    documents: &[StockDocument],
    project_id: &str,
) -> Result<Decimal, DomainError> {
    let mut total = Decimal::ZERO;
    for document in documents {
        if document.rows.is_empty() {
            return Err(DomainError::Validation(format!(
                "stock document {} has no rows",
                document.id
            )));
        }
        if document.project_id.as_deref() != Some(project_id) {
            continue;
        }
        if let Some(sign) = document.movement.consumption_sign() {
            total += sign * document.value_total_net();
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Movement, StockRow, Unit};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    fn doc(
        movement: Movement,
        owner: &str,
        project: Option<&str>,
        location: StockLocation,
        quantity: Decimal,
    ) -> StockDocument {
        let row = StockRow::new("item-1", quantity, Unit::Piece).with_unit_cost(dec!(5));
        let mut document = StockDocument::new(date(), movement, location, owner, vec![row]);
        document.project_id = project.map(str::to_string);
        document
    }

    #[test]
    fn signing_follows_on_hand_perspective() {
        let documents = vec![
            doc(Movement::Inbound, "o1", Some("p1"), StockLocation::Warehouse, dec!(10)),
            doc(Movement::Outbound, "o1", Some("p1"), StockLocation::Warehouse, dec!(4)),
            doc(Movement::Return, "o1", Some("p1"), StockLocation::Warehouse, dec!(1)),
        ];
        let balances = stock_balances(&documents).unwrap();
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].quantity, dec!(7));
    }

    #[test]
    fn consumption_mirrors_the_stock_perspective() {
        let documents = vec![
            doc(Movement::Inbound, "o1", Some("p1"), StockLocation::Warehouse, dec!(10)),
            doc(Movement::Outbound, "o1", Some("p1"), StockLocation::Warehouse, dec!(4)),
            doc(Movement::Return, "o1", Some("p1"), StockLocation::Warehouse, dec!(1)),
        ];
        // Outbound 4 * 5 minus Return 1 * 5.
        assert_eq!(project_consumption_net(&documents, "p1").unwrap(), dec!(15));
        assert_eq!(
            project_consumption_net(&documents, "p2").unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn consumption_can_go_negative() {
        let documents = vec![doc(
            Movement::Return,
            "o1",
            Some("p1"),
            StockLocation::Site,
            dec!(3),
        )];
        assert_eq!(project_consumption_net(&documents, "p1").unwrap(), dec!(-15));
    }

    #[test]
    fn partitions_are_isolated() {
        let documents = vec![
            doc(Movement::Inbound, "ownerA", Some("projectX"), StockLocation::Warehouse, dec!(10)),
            doc(Movement::Inbound, "ownerA", Some("projectY"), StockLocation::Warehouse, dec!(2)),
            doc(Movement::Inbound, "ownerB", Some("projectX"), StockLocation::Warehouse, dec!(3)),
            doc(Movement::Inbound, "ownerA", Some("projectX"), StockLocation::Site, dec!(4)),
        ];
        let balances = stock_balances(&documents).unwrap();
        assert_eq!(balances.len(), 4);
        let find = |owner: &str, project: Option<&str>, location: StockLocation| {
            balances
                .iter()
                .find(|balance| {
                    balance.key.owner_customer_id == owner
                        && balance.key.project_id.as_deref() == project
                        && balance.key.location == location
                })
                .map(|balance| balance.quantity)
        };
        assert_eq!(
            find("ownerA", Some("projectX"), StockLocation::Warehouse),
            Some(dec!(10))
        );
        assert_eq!(
            find("ownerA", Some("projectY"), StockLocation::Warehouse),
            Some(dec!(2))
        );
        assert_eq!(
            find("ownerB", Some("projectX"), StockLocation::Warehouse),
            Some(dec!(3))
        );
        assert_eq!(find("ownerA", Some("projectX"), StockLocation::Site), Some(dec!(4)));
    }

    #[test]
    fn warehouse_bucket_is_distinct_from_project_buckets() {
        let documents = vec![
            doc(Movement::Inbound, "o1", None, StockLocation::Warehouse, dec!(6)),
            doc(Movement::Inbound, "o1", Some("p1"), StockLocation::Warehouse, dec!(1)),
        ];
        let balances = stock_balances(&documents).unwrap();
        assert_eq!(balances.len(), 2);
    }

    #[test]
    fn transfers_do_not_move_the_balance() {
        let documents = vec![
            doc(Movement::Inbound, "o1", Some("p1"), StockLocation::Warehouse, dec!(5)),
            doc(Movement::Transfer, "o1", Some("p1"), StockLocation::Warehouse, dec!(5)),
        ];
        let balances = stock_balances(&documents).unwrap();
        assert_eq!(balances[0].quantity, dec!(5));
    }

    #[test]
    fn multi_row_documents_use_the_document_sign_for_every_row() {
        let rows = vec![
            StockRow::new("item-1", dec!(2), Unit::Piece),
            StockRow::new("item-2", dec!(3), Unit::Meter),
        ];
        let document = StockDocument::new(
            date(),
            Movement::Outbound,
            StockLocation::Site,
            "o1",
            rows,
        );
        let balances = stock_balances(std::slice::from_ref(&document)).unwrap();
        assert_eq!(balances.len(), 2);
        assert!(balances.iter().all(|balance| balance.quantity < Decimal::ZERO));
    }

    #[test]
    fn zero_row_documents_are_rejected() {
        let document = StockDocument::new(
            date(),
            Movement::Inbound,
            StockLocation::Warehouse,
            "o1",
            Vec::new(),
        );
        let err = stock_balances(std::slice::from_ref(&document)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn consumption_rejects_zero_row_documents_too() {
        let mut document = StockDocument::new(
            date(),
            Movement::Outbound,
            StockLocation::Site,
            "o1",
            Vec::new(),
        );
        document.project_id = Some("p1".into());
        let err =
            project_consumption_net(std::slice::from_ref(&document), "p1").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn balances_are_idempotent_and_ordered() {
        let documents = vec![
            doc(Movement::Inbound, "zeta", Some("p9"), StockLocation::Site, dec!(1)),
            doc(Movement::Inbound, "alpha", None, StockLocation::Warehouse, dec!(2)),
        ];
        let first = stock_balances(&documents).unwrap();
        let second = stock_balances(&documents).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].key.owner_customer_id, "alpha");
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

use super::catalog::Unit;
use super::common::{Identifiable, RecordId};

/// Movement type of an inventory ledger document. This is a closed set:
/// unknown values are rejected at deserialization, never zero-signed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Movement {
    Inbound,
    Outbound,
    Return,
    Transfer,
}

impl Movement {
    /// Sign applied to quantities when computing stock-on-hand balances.
    /// A return puts stock back on hand. Transfers are net-neutral; a
    /// transfer between locations is recorded as a matched pair of documents.
    pub fn on_hand_sign(self) -> Decimal {
        match self {
            Movement::Inbound | Movement::Return => Decimal::ONE,
            Movement::Outbound => -Decimal::ONE,
            Movement::Transfer => Decimal::ZERO,
        }
    }

    /// Sign applied to line values when computing a project's net cost of
    /// goods consumed. The cost perspective mirrors stock-on-hand: an
    /// outbound issue adds cost, a return refunds it. Other movements do not
    /// participate.
    pub fn consumption_sign(self) -> Option<Decimal> {
        match self {
            Movement::Outbound => Some(Decimal::ONE),
            Movement::Return => Some(-Decimal::ONE),
            Movement::Inbound | Movement::Transfer => None,
        }
    }
}

/// Storage location of a movement.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum StockLocation {
    #[default]
    Warehouse,
    Site,
}

/// One line of a stock document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRow {
    pub catalog_item_id: String,
    pub quantity: Decimal,
    pub unit: Unit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost_net: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_total_net: Option<Decimal>,
}

impl StockRow {
    pub fn new(catalog_item_id: impl Into<String>, quantity: Decimal, unit: Unit) -> Self {
        Self {
            catalog_item_id: catalog_item_id.into(),
            quantity,
            unit,
            unit_cost_net: None,
            line_total_net: None,
        }
    }

    pub fn with_unit_cost(mut self, unit_cost_net: Decimal) -> Self {
        self.unit_cost_net = Some(unit_cost_net);
        self
    }

    /// Net value of the line: the explicit total when present, otherwise
    /// derived from the unit cost (zero when neither is recorded).
    pub fn line_value_net(&self) -> Decimal {
        self.line_total_net
            .unwrap_or_else(|| self.unit_cost_net.unwrap_or(Decimal::ZERO) * self.quantity)
    }
}

/// A recorded inventory movement event. A document applies its movement type
/// and location uniformly to every row; rows never override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockDocument {
    #[serde(default)]
    pub id: RecordId,
    pub date: NaiveDate,
    pub movement: Movement,
    pub location: StockLocation,
    pub owner_customer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub rows: Vec<StockRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StockDocument {
    pub fn new(
        date: NaiveDate,
        movement: Movement,
        location: StockLocation,
        owner_customer_id: impl Into<String>,
        rows: Vec<StockRow>,
    ) -> Self {
        Self {
            id: RecordId::Pending,
            date,
            movement,
            location,
            owner_customer_id: owner_customer_id.into(),
            project_id: None,
            rows,
            notes: None,
        }
    }

    pub fn for_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn quantity_total(&self) -> Decimal {
        self.rows
            .iter()
            .fold(Decimal::ZERO, |sum, row| sum + row.quantity)
    }

    pub fn value_total_net(&self) -> Decimal {
        self.rows
            .iter()
            .fold(Decimal::ZERO, |sum, row| sum + row.line_value_net())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.owner_customer_id.trim().is_empty() {
            return Err(DomainError::Validation(
                "stock document requires an owner customer".into(),
            ));
        }
        if self.rows.is_empty() {
            return Err(DomainError::Validation(format!(
                "stock document {} has no rows",
                self.id
            )));
        }
        for row in &self.rows {
            if row.catalog_item_id.trim().is_empty() {
                return Err(DomainError::Validation(
                    "stock row requires a catalog item".into(),
                ));
            }
            if row.quantity < Decimal::ZERO {
                return Err(DomainError::Validation(
                    "stock row quantity must be non-negative".into(),
                ));
            }
            if row.unit_cost_net.is_some_and(|cost| cost < Decimal::ZERO)
                || row.line_total_net.is_some_and(|total| total < Decimal::ZERO)
            {
                return Err(DomainError::Validation(
                    "stock row costs must be non-negative".into(),
                ));
            }
        }
        Ok(())
    }
}

impl Identifiable for StockDocument {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn doc_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 7).unwrap()
    }

    #[test]
    fn line_value_prefers_explicit_total() {
        let mut row = StockRow::new("item-1", dec!(4), Unit::Piece).with_unit_cost(dec!(5));
        assert_eq!(row.line_value_net(), dec!(20));
        row.line_total_net = Some(dec!(18));
        assert_eq!(row.line_value_net(), dec!(18));
    }

    #[test]
    fn line_value_defaults_to_zero_without_costs() {
        let row = StockRow::new("item-1", dec!(4), Unit::Piece);
        assert_eq!(row.line_value_net(), Decimal::ZERO);
    }

    #[test]
    fn validate_rejects_empty_rows() {
        let doc = StockDocument::new(
            doc_date(),
            Movement::Inbound,
            StockLocation::Warehouse,
            "cust-1",
            Vec::new(),
        );
        assert!(doc.validate().is_err());
    }

    #[test]
    fn unknown_movement_is_rejected_at_deserialization() {
        let err = serde_json::from_str::<Movement>("\"Misplaced\"");
        assert!(err.is_err());
    }

    #[test]
    fn transfer_is_net_neutral_in_both_perspectives() {
        assert_eq!(Movement::Transfer.on_hand_sign(), Decimal::ZERO);
        assert!(Movement::Transfer.consumption_sign().is_none());
    }
}

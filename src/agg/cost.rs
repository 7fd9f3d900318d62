use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Expense, Labor, Project};

/// Net cost components of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub expense_net: Decimal,
    pub labor_net: Decimal,
    pub stock_net: Decimal,
    pub cost_net: Decimal,
}

/// Net cost and profit of a project against its agreed net value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectProfit {
    pub cost: CostBreakdown,
    pub profit_net: Decimal,
}

/// Sums net project cost from already-filtered expense and labor collections
/// plus the precomputed net stock consumption. Callers filter by project;
/// this function is project-agnostic. Empty collections contribute zero, and
/// a negative consumption (net returns) correctly reduces cost.
pub fn cost_breakdown(
    expenses: &[Expense],
    labors: &[Labor],
    stock_consumption_net: Decimal,
) -> CostBreakdown {
    let expense_net = expenses
        .iter()
        .fold(Decimal::ZERO, |sum, expense| sum + expense.cost_net());
    let labor_net = labors
        .iter()
        .fold(Decimal::ZERO, |sum, labor| sum + labor.amount_net);
    CostBreakdown {
        expense_net,
        labor_net,
        stock_net: stock_consumption_net,
        cost_net: expense_net + labor_net + stock_consumption_net,
    }
}

/// Computes cost and net profit for a project from its filtered records.
pub fn project_profit(
    project: &Project,
    expenses: &[Expense],
    labors: &[Labor],
    stock_consumption_net: Decimal,
) -> ProjectProfit {
    let cost = cost_breakdown(expenses, labors, stock_consumption_net);
    ProjectProfit {
        cost,
        profit_net: project.agreed_net - cost.cost_net,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn expense(amount_net: Decimal) -> Expense {
        Expense::new("p1", date(), "Material", amount_net)
    }

    fn labor(amount_net: Decimal) -> Labor {
        Labor::new("p1", date(), "Crew A", amount_net)
    }

    #[test]
    fn empty_inputs_cost_nothing() {
        let breakdown = cost_breakdown(&[], &[], Decimal::ZERO);
        assert_eq!(breakdown.cost_net, Decimal::ZERO);
    }

    #[test]
    fn cost_adds_expenses_labor_and_stock() {
        let expenses = vec![expense(dec!(100))];
        let labors = vec![labor(dec!(50))];
        let breakdown = cost_breakdown(&expenses, &labors, dec!(-20));
        assert_eq!(breakdown.expense_net, dec!(100));
        assert_eq!(breakdown.labor_net, dec!(50));
        assert_eq!(breakdown.stock_net, dec!(-20));
        assert_eq!(breakdown.cost_net, dec!(130));
    }

    #[test]
    fn profit_is_agreed_net_minus_cost() {
        let project = Project::new("c1", "Job", date(), dec!(1000), dec!(0.20));
        let expenses = vec![expense(dec!(100))];
        let labors = vec![labor(dec!(50))];
        let profit = project_profit(&project, &expenses, &labors, dec!(-20));
        assert_eq!(profit.cost.cost_net, dec!(130));
        assert_eq!(profit.profit_net, dec!(870));
    }

    #[test]
    fn non_deductible_tax_enters_cost() {
        let mut taxed = expense(dec!(100));
        taxed.tax_amount = Some(dec!(18));
        taxed.tax_in_cost = true;
        let mut deductible = expense(dec!(200));
        deductible.tax_amount = Some(dec!(36));
        let breakdown = cost_breakdown(&[taxed, deductible], &[], Decimal::ZERO);
        assert_eq!(breakdown.expense_net, dec!(318));
    }

    #[test]
    fn cost_is_idempotent() {
        let expenses = vec![expense(dec!(75.25))];
        let labors = vec![labor(dec!(24.75))];
        let first = cost_breakdown(&expenses, &labors, dec!(10));
        let second = cost_breakdown(&expenses, &labors, dec!(10));
        assert_eq!(first, second);
        assert_eq!(first.cost_net, dec!(110.00));
    }
}

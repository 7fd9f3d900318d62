//! Read-only reporting over workspace snapshots. This is the seam between
//! the record store and the pure aggregation engine: every call re-runs the
//! aggregators on the full current record set.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::agg::{self, CustomerBalance, ProjectProfit, StockBalance};
use crate::domain::{ProjectStatus, Workspace};

use super::{ServiceError, ServiceResult};

const DASHBOARD_WINDOW_DAYS: i64 = 30;
const DASHBOARD_MONTHS: u32 = 12;
const DASHBOARD_TOP_N: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct ProjectMetric {
    pub project_id: String,
    pub name: String,
    pub cost_net: Decimal,
    pub profit_net: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyFlow {
    pub year: i32,
    pub month: u32,
    pub receipts_gross: Decimal,
    pub expenses_net: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub count: usize,
}

/// Headline metrics for the landing screen.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub receipts_gross_last_30_days: Decimal,
    pub expenses_net_last_30_days: Decimal,
    pub total_profit_net: Decimal,
    pub top_profit: Vec<ProjectMetric>,
    pub top_cost: Vec<ProjectMetric>,
    pub monthly: Vec<MonthlyFlow>,
    pub status_counts: Vec<StatusCount>,
}

pub struct ReportService;

impl ReportService {
    pub fn customer_balances(workspace: &Workspace) -> Vec<CustomerBalance> {
        agg::customer_balances(
            &workspace.customers,
            &workspace.projects,
            &workspace.receipts,
        )
    }

    pub fn stock_balances(workspace: &Workspace) -> ServiceResult<Vec<StockBalance>> {
        agg::stock_balances(&workspace.stock_documents).map_err(ServiceError::from)
    }

    /// Cost and profit for one project. Owns the filtering contract of the
    /// cost aggregator: expenses and labor are narrowed to the project here,
    /// and stock consumption is derived from the ledger.
    pub fn project_profit(workspace: &Workspace, project_id: &str) -> ServiceResult<ProjectProfit> {
        let project = workspace
            .project(project_id)
            .ok_or_else(|| ServiceError::Invalid("Project not found".into()))?;
        let expenses: Vec<_> = workspace
            .expenses
            .iter()
            .filter(|expense| expense.project_id == project_id)
            .cloned()
            .collect();
        let labors: Vec<_> = workspace
            .labors
            .iter()
            .filter(|labor| labor.project_id == project_id)
            .cloned()
            .collect();
        let consumption =
            agg::project_consumption_net(&workspace.stock_documents, project_id)?;
        Ok(agg::project_profit(project, &expenses, &labors, consumption))
    }

    pub fn dashboard(workspace: &Workspace, today: NaiveDate) -> Dashboard {
        let window_start = today - Duration::days(DASHBOARD_WINDOW_DAYS);
        let receipts_gross_last_30_days = workspace
            .receipts
            .iter()
            .filter(|receipt| receipt.date > window_start)
            .fold(Decimal::ZERO, |sum, receipt| sum + receipt.amount_gross);
        let expenses_net_last_30_days = workspace
            .expenses
            .iter()
            .filter(|expense| expense.date > window_start)
            .fold(Decimal::ZERO, |sum, expense| sum + expense.amount_net);

        let mut metrics = Vec::new();
        let mut total_profit_net = Decimal::ZERO;
        for project in &workspace.projects {
            let Some(id) = project.id.persisted() else {
                continue;
            };
            // Skips projects whose profit cannot be derived, e.g. when the
            // stock ledger holds an invalid document.
            if let Ok(profit) = Self::project_profit(workspace, id) {
                total_profit_net += profit.profit_net;
                metrics.push(ProjectMetric {
                    project_id: id.to_string(),
                    name: project.name.clone(),
                    cost_net: profit.cost.cost_net,
                    profit_net: profit.profit_net,
                });
            }
        }

        let mut top_profit = metrics.clone();
        top_profit.sort_by(|a, b| b.profit_net.cmp(&a.profit_net));
        top_profit.truncate(DASHBOARD_TOP_N);
        let mut top_cost = metrics;
        top_cost.sort_by(|a, b| b.cost_net.cmp(&a.cost_net));
        top_cost.truncate(DASHBOARD_TOP_N);

        let monthly = (0..DASHBOARD_MONTHS)
            .rev()
            .map(|back| {
                let (year, month) = months_back(today, back);
                let receipts_gross = workspace
                    .receipts
                    .iter()
                    .filter(|receipt| {
                        receipt.date.year() == year && receipt.date.month() == month
                    })
                    .fold(Decimal::ZERO, |sum, receipt| sum + receipt.amount_gross);
                let expenses_net = workspace
                    .expenses
                    .iter()
                    .filter(|expense| {
                        expense.date.year() == year && expense.date.month() == month
                    })
                    .fold(Decimal::ZERO, |sum, expense| sum + expense.amount_net);
                MonthlyFlow {
                    year,
                    month,
                    receipts_gross,
                    expenses_net,
                }
            })
            .collect();

        let status_counts = [
            ProjectStatus::Quote,
            ProjectStatus::Active,
            ProjectStatus::OnHold,
            ProjectStatus::Completed,
            ProjectStatus::Cancelled,
        ]
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: workspace
                .projects
                .iter()
                .filter(|project| project.status == status)
                .count(),
        })
        .collect();

        Dashboard {
            receipts_gross_last_30_days,
            expenses_net_last_30_days,
            total_profit_net,
            top_profit,
            top_cost,
            monthly,
            status_counts,
        }
    }
}

fn months_back(today: NaiveDate, back: u32) -> (i32, u32) {
    let total = today.year() * 12 + today.month0() as i32 - back as i32;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Customer, Expense, Labor, Movement, Project, Receipt, ReceiptMethod, StockDocument,
        StockLocation, StockRow, Unit,
    };
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn seeded_workspace() -> (Workspace, String) {
        let mut workspace = Workspace::new("Test");
        let customer_id = workspace.add_customer(Customer::new("Hilltop"));
        let project_id = workspace.add_project(Project::new(
            customer_id.clone(),
            "Roof",
            date(2025, 1, 10),
            dec!(1000),
            dec!(0.20),
        ));
        workspace.add_expense(Expense::new(
            project_id.clone(),
            date(2025, 2, 1),
            "Material",
            dec!(100),
        ));
        workspace.add_labor(Labor::new(
            project_id.clone(),
            date(2025, 2, 2),
            "Crew A",
            dec!(50),
        ));
        let row = StockRow::new("item-1", dec!(4), Unit::Piece).with_unit_cost(dec!(5));
        workspace.add_stock_document(
            StockDocument::new(
                date(2025, 2, 3),
                Movement::Outbound,
                StockLocation::Site,
                customer_id.clone(),
                vec![row],
            )
            .for_project(project_id.clone()),
        );
        workspace.add_receipt(Receipt::new(
            customer_id,
            date(2025, 2, 10),
            dec!(600),
            ReceiptMethod::BankTransfer,
        ));
        (workspace, project_id)
    }

    #[test]
    fn project_profit_wires_all_three_cost_sources() {
        let (workspace, project_id) = seeded_workspace();
        let profit = ReportService::project_profit(&workspace, &project_id).unwrap();
        assert_eq!(profit.cost.expense_net, dec!(100));
        assert_eq!(profit.cost.labor_net, dec!(50));
        assert_eq!(profit.cost.stock_net, dec!(20));
        assert_eq!(profit.profit_net, dec!(830));
    }

    #[test]
    fn project_profit_fails_for_unknown_project() {
        let (workspace, _) = seeded_workspace();
        assert!(ReportService::project_profit(&workspace, "ghost").is_err());
    }

    #[test]
    fn dashboard_filters_the_recent_window() {
        let (workspace, _) = seeded_workspace();
        let dashboard = ReportService::dashboard(&workspace, date(2025, 2, 15));
        assert_eq!(dashboard.receipts_gross_last_30_days, dec!(600));
        assert_eq!(dashboard.expenses_net_last_30_days, dec!(100));
        // Outside the window nothing is counted.
        let later = ReportService::dashboard(&workspace, date(2025, 6, 15));
        assert_eq!(later.receipts_gross_last_30_days, Decimal::ZERO);
    }

    #[test]
    fn dashboard_totals_profit_across_projects() {
        let (workspace, _) = seeded_workspace();
        let dashboard = ReportService::dashboard(&workspace, date(2025, 2, 15));
        assert_eq!(dashboard.total_profit_net, dec!(830));
        assert_eq!(dashboard.top_profit.len(), 1);
        assert_eq!(dashboard.monthly.len(), 12);
        let february = dashboard
            .monthly
            .iter()
            .find(|flow| flow.year == 2025 && flow.month == 2)
            .unwrap();
        assert_eq!(february.receipts_gross, dec!(600));
    }

    #[test]
    fn months_back_crosses_year_boundaries() {
        assert_eq!(months_back(date(2025, 2, 15), 0), (2025, 2));
        assert_eq!(months_back(date(2025, 2, 15), 3), (2024, 11));
        assert_eq!(months_back(date(2025, 1, 1), 13), (2023, 12));
    }
}

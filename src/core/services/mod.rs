pub mod catalog_service;
pub mod checklist_service;
pub mod customer_service;
pub mod expense_service;
pub mod labor_service;
pub mod project_service;
pub mod receipt_service;
pub mod report_service;
pub mod stock_service;

pub use catalog_service::CatalogService;
pub use checklist_service::ChecklistService;
pub use customer_service::CustomerService;
pub use expense_service::ExpenseService;
pub use labor_service::LaborService;
pub use project_service::ProjectService;
pub use receipt_service::ReceiptService;
pub use report_service::{Dashboard, MonthlyFlow, ProjectMetric, ReportService, StatusCount};
pub use stock_service::StockService;

use crate::errors::DomainError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("{0}")]
    Invalid(String),
}

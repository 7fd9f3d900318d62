//! Workspace record models and shared identity types.

pub mod catalog;
pub mod checklist;
pub mod common;
pub mod customer;
pub mod expense;
pub mod labor;
pub mod project;
pub mod receipt;
pub mod stock;
pub mod workspace;

pub use catalog::{CatalogItem, Unit};
pub use checklist::{ChecklistItem, ChecklistStatus};
pub use common::{Identifiable, NamedEntity, RecordId};
pub use customer::{Contact, Customer};
pub use expense::Expense;
pub use labor::Labor;
pub use project::{Project, ProjectStatus};
pub use receipt::{Allocation, Receipt, ReceiptMethod};
pub use stock::{Movement, StockDocument, StockLocation, StockRow};
pub use workspace::Workspace;

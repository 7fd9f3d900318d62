use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    catalog::CatalogItem, checklist::ChecklistItem, customer::Customer, expense::Expense,
    labor::Labor, project::Project, receipt::Receipt, stock::StockDocument,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The persistence unit: every record collection of one business workspace.
/// Aggregators never touch this type directly; they receive plain slices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub name: String,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub receipts: Vec<Receipt>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub labors: Vec<Labor>,
    #[serde(default)]
    pub catalog: Vec<CatalogItem>,
    #[serde(default)]
    pub stock_documents: Vec<StockDocument>,
    #[serde(default)]
    pub checklists: Vec<ChecklistItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Workspace::schema_version_default")]
    pub schema_version: u8,
}

impl Workspace {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            customers: Vec::new(),
            projects: Vec::new(),
            receipts: Vec::new(),
            expenses: Vec::new(),
            labors: Vec::new(),
            catalog: Vec::new(),
            stock_documents: Vec::new(),
            checklists: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_customer(&mut self, mut customer: Customer) -> String {
        let id = customer.id.ensure_assigned();
        self.customers.push(customer);
        self.touch();
        id
    }

    pub fn add_project(&mut self, mut project: Project) -> String {
        let id = project.id.ensure_assigned();
        self.projects.push(project);
        self.touch();
        id
    }

    pub fn add_receipt(&mut self, mut receipt: Receipt) -> String {
        let id = receipt.id.ensure_assigned();
        self.receipts.push(receipt);
        self.touch();
        id
    }

    pub fn add_expense(&mut self, mut expense: Expense) -> String {
        let id = expense.id.ensure_assigned();
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn add_labor(&mut self, mut labor: Labor) -> String {
        let id = labor.id.ensure_assigned();
        self.labors.push(labor);
        self.touch();
        id
    }

    pub fn add_catalog_item(&mut self, mut item: CatalogItem) -> String {
        let id = item.id.ensure_assigned();
        self.catalog.push(item);
        self.touch();
        id
    }

    pub fn add_stock_document(&mut self, mut document: StockDocument) -> String {
        let id = document.id.ensure_assigned();
        self.stock_documents.push(document);
        self.touch();
        id
    }

    pub fn add_checklist_item(&mut self, mut item: ChecklistItem) -> String {
        let id = item.id.ensure_assigned();
        self.checklists.push(item);
        self.touch();
        id
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id.matches(id))
    }

    pub fn customer_mut(&mut self, id: &str) -> Option<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|customer| customer.id.matches(id))
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id.matches(id))
    }

    pub fn project_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.projects
            .iter_mut()
            .find(|project| project.id.matches(id))
    }

    pub fn receipt(&self, id: &str) -> Option<&Receipt> {
        self.receipts.iter().find(|receipt| receipt.id.matches(id))
    }

    pub fn receipt_mut(&mut self, id: &str) -> Option<&mut Receipt> {
        self.receipts
            .iter_mut()
            .find(|receipt| receipt.id.matches(id))
    }

    pub fn expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id.matches(id))
    }

    pub fn expense_mut(&mut self, id: &str) -> Option<&mut Expense> {
        self.expenses
            .iter_mut()
            .find(|expense| expense.id.matches(id))
    }

    pub fn labor(&self, id: &str) -> Option<&Labor> {
        self.labors.iter().find(|labor| labor.id.matches(id))
    }

    pub fn labor_mut(&mut self, id: &str) -> Option<&mut Labor> {
        self.labors.iter_mut().find(|labor| labor.id.matches(id))
    }

    pub fn catalog_item(&self, id: &str) -> Option<&CatalogItem> {
        self.catalog.iter().find(|item| item.id.matches(id))
    }

    pub fn catalog_item_mut(&mut self, id: &str) -> Option<&mut CatalogItem> {
        self.catalog.iter_mut().find(|item| item.id.matches(id))
    }

    pub fn stock_document(&self, id: &str) -> Option<&StockDocument> {
        self.stock_documents
            .iter()
            .find(|document| document.id.matches(id))
    }

    pub fn stock_document_mut(&mut self, id: &str) -> Option<&mut StockDocument> {
        self.stock_documents
            .iter_mut()
            .find(|document| document.id.matches(id))
    }

    pub fn checklist_item(&self, id: &str) -> Option<&ChecklistItem> {
        self.checklists.iter().find(|item| item.id.matches(id))
    }

    pub fn checklist_item_mut(&mut self, id: &str) -> Option<&mut ChecklistItem> {
        self.checklists.iter_mut().find(|item| item.id.matches(id))
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
